use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::options::PlayerType;
use crate::model::score::ScoreBoard;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use crate::model::trick::Trick;
use rand::RngCore;

/// Read-only table state handed to a player when it is its turn.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub trick: &'a Trick,
    pub trump: Suit,
    pub scores: &'a ScoreBoard,
}

impl TableView<'_> {
    pub fn is_leading(&self) -> bool {
        self.trick.lead_card().is_none()
    }

    pub fn own_score(&self) -> u32 {
        self.scores.score(self.seat)
    }
}

/// Decision-making capability of one seat.
///
/// The orchestrator owns the hand and the score; a player only ever sees
/// them through [`TableView`].
pub trait Player: Send {
    fn kind(&self) -> PlayerType;

    /// A new hand was dealt to `seat`.
    fn receive_hand(&mut self, _seat: Seat, _hand: &Hand) {}

    /// Must return a card from `view.hand`.
    fn choose_card(&mut self, view: &TableView<'_>, rng: &mut dyn RngCore) -> Card;

    /// Called with the completed trick after its winner has been scored.
    fn on_trick_end(&mut self, _trick: &Trick) {}
}
