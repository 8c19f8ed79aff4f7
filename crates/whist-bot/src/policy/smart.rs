use super::log_play_decision;
use crate::bot::{PlayMemory, SmartPlanner};
use rand::RngCore;
use tracing::{Level, event};
use whist_core::game::{Player, TableView};
use whist_core::model::card::Card;
use whist_core::model::hand::Hand;
use whist_core::model::options::PlayerType;
use whist_core::model::seat::Seat;
use whist_core::model::trick::Trick;

/// Adapter that runs [`SmartPlanner`] against its own [`PlayMemory`].
#[derive(Debug, Default)]
pub struct SmartPlayer {
    memory: PlayMemory,
}

impl SmartPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn memory(&self) -> &PlayMemory {
        &self.memory
    }
}

impl Player for SmartPlayer {
    fn kind(&self) -> PlayerType {
        PlayerType::Smart
    }

    fn receive_hand(&mut self, _seat: Seat, _hand: &Hand) {
        self.memory.clear();
    }

    fn choose_card(&mut self, view: &TableView<'_>, _rng: &mut dyn RngCore) -> Card {
        let decision = SmartPlanner::choose(view.hand, view.trick, view.trump, &self.memory)
            .expect("hand is not empty on this seat's turn");

        if tracing::enabled!(Level::TRACE) {
            event!(
                target: "whist_bot::smart",
                Level::TRACE,
                seat = view.seat.index(),
                phase = ?decision.phase,
                leading = decision.leading,
                seen = self.memory.total_seen(),
            );
        }
        log_play_decision(view, PlayerType::Smart, decision.card, decision.reason);
        decision.card
    }

    fn on_trick_end(&mut self, trick: &Trick) {
        self.memory.record_trick(trick);
    }
}
