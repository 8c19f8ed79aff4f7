use super::log_play_decision;
use parking_lot::Mutex;
use rand::RngCore;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use thiserror::Error;
use tracing::{Level, event};
use whist_core::game::{Player, TableView};
use whist_core::model::card::Card;
use whist_core::model::hand::Hand;
use whist_core::model::options::PlayerType;
use whist_core::model::seat::Seat;
use whist_core::rules::legal_cards;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no card selection is pending for this player")]
    NotPending,
    #[error("the player is gone; the game has ended")]
    Disconnected,
}

/// Handle used by an input front end to answer a human seat's turn.
#[derive(Debug, Clone)]
pub struct HumanInput {
    pending: Arc<Mutex<bool>>,
    tx: SyncSender<Card>,
}

impl HumanInput {
    /// Delivers one selection. Accepted only while the player is waiting.
    pub fn submit(&self, card: Card) -> Result<(), SelectionError> {
        let mut pending = self.pending.lock();
        if !*pending {
            return Err(SelectionError::NotPending);
        }
        match self.tx.try_send(card) {
            Ok(()) => {
                *pending = false;
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(SelectionError::NotPending),
            Err(TrySendError::Disconnected(_)) => Err(SelectionError::Disconnected),
        }
    }

    pub fn is_pending(&self) -> bool {
        *self.pending.lock()
    }
}

/// Waits for a [`HumanInput`] selection on every turn.
#[derive(Debug)]
pub struct HumanPlayer {
    pending: Arc<Mutex<bool>>,
    rx: Receiver<Card>,
}

/// Creates a human player and the input handle that drives it.
pub fn human_channel() -> (HumanPlayer, HumanInput) {
    let (tx, rx) = mpsc::sync_channel(1);
    let pending = Arc::new(Mutex::new(false));
    (
        HumanPlayer {
            pending: Arc::clone(&pending),
            rx,
        },
        HumanInput { pending, tx },
    )
}

impl HumanPlayer {
    fn open(&self) {
        *self.pending.lock() = true;
    }

    fn close(&self) {
        *self.pending.lock() = false;
    }
}

impl Player for HumanPlayer {
    fn kind(&self) -> PlayerType {
        PlayerType::Human
    }

    fn receive_hand(&mut self, _seat: Seat, _hand: &Hand) {
        self.close();
    }

    fn choose_card(&mut self, view: &TableView<'_>, _rng: &mut dyn RngCore) -> Card {
        loop {
            self.open();
            match self.rx.recv() {
                Ok(card) if view.hand.contains(card) => {
                    log_play_decision(view, PlayerType::Human, card, "selected");
                    return card;
                }
                Ok(card) => {
                    event!(
                        target: "whist_bot::human",
                        Level::WARN,
                        seat = view.seat.index(),
                        card = %card,
                        "selection is not in hand; waiting for another"
                    );
                }
                Err(_) => {
                    self.close();
                    let card = legal_cards(view.hand, view.trick)
                        .first()
                        .copied()
                        .expect("hand is not empty on this seat's turn");
                    event!(
                        target: "whist_bot::human",
                        Level::ERROR,
                        seat = view.seat.index(),
                        card = %card,
                        "input closed; playing the first legal card"
                    );
                    return card;
                }
            }
        }
    }
}
