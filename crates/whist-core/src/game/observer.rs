use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// Fire-and-forget notifications emitted by the orchestrator, in play order.
pub trait GameObserver {
    fn on_game_reset(&mut self) {}

    fn on_hand_dealt(&mut self, _seat: Seat, _hand: &Hand) {}

    fn on_trump_chosen(&mut self, _trump: Suit) {}

    fn on_new_trick(&mut self) {}

    fn on_player_turn(&mut self, _seat: Seat) {}

    fn on_card_played(&mut self, _seat: Seat, _card: Card) {}

    fn on_trick_won(&mut self, _seat: Seat, _score: u32) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_game_reset(&mut self) {
        (**self).on_game_reset();
    }

    fn on_hand_dealt(&mut self, seat: Seat, hand: &Hand) {
        (**self).on_hand_dealt(seat, hand);
    }

    fn on_trump_chosen(&mut self, trump: Suit) {
        (**self).on_trump_chosen(trump);
    }

    fn on_new_trick(&mut self) {
        (**self).on_new_trick();
    }

    fn on_player_turn(&mut self, seat: Seat) {
        (**self).on_player_turn(seat);
    }

    fn on_card_played(&mut self, seat: Seat, card: Card) {
        (**self).on_card_played(seat, card);
    }

    fn on_trick_won(&mut self, seat: Seat, score: u32) {
        (**self).on_trick_won(seat, score);
    }
}

/// Forwards to the inner observer when present.
impl<O: GameObserver> GameObserver for Option<O> {
    fn on_game_reset(&mut self) {
        if let Some(inner) = self {
            inner.on_game_reset();
        }
    }

    fn on_hand_dealt(&mut self, seat: Seat, hand: &Hand) {
        if let Some(inner) = self {
            inner.on_hand_dealt(seat, hand);
        }
    }

    fn on_trump_chosen(&mut self, trump: Suit) {
        if let Some(inner) = self {
            inner.on_trump_chosen(trump);
        }
    }

    fn on_new_trick(&mut self) {
        if let Some(inner) = self {
            inner.on_new_trick();
        }
    }

    fn on_player_turn(&mut self, seat: Seat) {
        if let Some(inner) = self {
            inner.on_player_turn(seat);
        }
    }

    fn on_card_played(&mut self, seat: Seat, card: Card) {
        if let Some(inner) = self {
            inner.on_card_played(seat, card);
        }
    }

    fn on_trick_won(&mut self, seat: Seat, score: u32) {
        if let Some(inner) = self {
            inner.on_trick_won(seat, score);
        }
    }
}

/// Fans every notification out to both observers, left first.
impl<A: GameObserver, B: GameObserver> GameObserver for (A, B) {
    fn on_game_reset(&mut self) {
        self.0.on_game_reset();
        self.1.on_game_reset();
    }

    fn on_hand_dealt(&mut self, seat: Seat, hand: &Hand) {
        self.0.on_hand_dealt(seat, hand);
        self.1.on_hand_dealt(seat, hand);
    }

    fn on_trump_chosen(&mut self, trump: Suit) {
        self.0.on_trump_chosen(trump);
        self.1.on_trump_chosen(trump);
    }

    fn on_new_trick(&mut self) {
        self.0.on_new_trick();
        self.1.on_new_trick();
    }

    fn on_player_turn(&mut self, seat: Seat) {
        self.0.on_player_turn(seat);
        self.1.on_player_turn(seat);
    }

    fn on_card_played(&mut self, seat: Seat, card: Card) {
        self.0.on_card_played(seat, card);
        self.1.on_card_played(seat, card);
    }

    fn on_trick_won(&mut self, seat: Seat, score: u32) {
        self.0.on_trick_won(seat, score);
        self.1.on_trick_won(seat, score);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    GameReset,
    HandDealt { seat: Seat, cards: Vec<Card> },
    TrumpChosen { trump: Suit },
    NewTrick,
    PlayerTurn { seat: Seat },
    CardPlayed { seat: Seat, card: Card },
    TrickWon { seat: Seat, score: u32 },
}

/// Observer that records every notification as a [`GameEvent`].
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }

    pub fn cards_played(&self) -> impl Iterator<Item = (Seat, Card)> + '_ {
        self.events.iter().filter_map(|event| match event {
            GameEvent::CardPlayed { seat, card } => Some((*seat, *card)),
            _ => None,
        })
    }
}

impl GameObserver for EventLog {
    fn on_game_reset(&mut self) {
        self.events.push(GameEvent::GameReset);
    }

    fn on_hand_dealt(&mut self, seat: Seat, hand: &Hand) {
        self.events.push(GameEvent::HandDealt {
            seat,
            cards: hand.cards().to_vec(),
        });
    }

    fn on_trump_chosen(&mut self, trump: Suit) {
        self.events.push(GameEvent::TrumpChosen { trump });
    }

    fn on_new_trick(&mut self) {
        self.events.push(GameEvent::NewTrick);
    }

    fn on_player_turn(&mut self, seat: Seat) {
        self.events.push(GameEvent::PlayerTurn { seat });
    }

    fn on_card_played(&mut self, seat: Seat, card: Card) {
        self.events.push(GameEvent::CardPlayed { seat, card });
    }

    fn on_trick_won(&mut self, seat: Seat, score: u32) {
        self.events.push(GameEvent::TrickWon { seat, score });
    }
}
