use crate::model::card::Card;
use crate::model::seat::{SEAT_COUNT, Seat};
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One seat's position in a trick, empty until that seat plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub seat: Seat,
    pub card: Option<Card>,
}

/// Four slots in turn order; slot 0 belongs to the leader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    slots: [Slot; SEAT_COUNT],
}

#[derive(Debug, Clone, Copy)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("trick already complete")]
    TrickComplete,
    #[error("expected seat {expected} to play next but got seat {actual}")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("seat {0} has already played this trick")]
    AlreadyPlayed(Seat),
}

impl Trick {
    /// Creates an empty trick whose slots follow `order`; `order[0]` leads.
    pub fn new(order: [Seat; SEAT_COUNT]) -> Self {
        Self {
            slots: order.map(|seat| Slot { seat, card: None }),
        }
    }

    pub fn leader(&self) -> Seat {
        self.slots[0].seat
    }

    pub fn slots(&self) -> &[Slot; SEAT_COUNT] {
        &self.slots
    }

    pub fn order(&self) -> [Seat; SEAT_COUNT] {
        self.slots.map(|slot| slot.seat)
    }

    /// Filled slots in the order they were played.
    pub fn plays(&self) -> impl Iterator<Item = Play> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.card.map(|card| Play { seat: slot.seat, card }))
    }

    pub fn played_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.card.is_some()).count()
    }

    pub fn lead_card(&self) -> Option<Card> {
        self.slots[0].card
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead_card().map(|card| card.suit)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.card.is_some())
    }

    pub fn card_of(&self, seat: Seat) -> Option<Card> {
        self.slots
            .iter()
            .find(|slot| slot.seat == seat)
            .and_then(|slot| slot.card)
    }

    /// Seat whose slot is the first still empty.
    pub fn expected_seat(&self) -> Option<Seat> {
        self.slots
            .iter()
            .find(|slot| slot.card.is_none())
            .map(|slot| slot.seat)
    }

    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), TrickError> {
        let Some(expected) = self.expected_seat() else {
            return Err(TrickError::TrickComplete);
        };

        if self.card_of(seat).is_some() {
            return Err(TrickError::AlreadyPlayed(seat));
        }

        if expected != seat {
            return Err(TrickError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.seat == seat) {
            slot.card = Some(card);
        }
        Ok(())
    }

    /// Winning play under `trump`, or `None` while the trick is incomplete.
    pub fn winner(&self, trump: Suit) -> Option<Play> {
        if !self.is_complete() {
            return None;
        }
        crate::rules::trick_winner(self, trump)
    }
}
