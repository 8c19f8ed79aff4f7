use std::io::{self, Write};
use whist_core::game::{GameEvent, GameObserver};
use whist_core::model::card::Card;
use whist_core::model::hand::Hand;
use whist_core::model::seat::Seat;
use whist_core::model::suit::Suit;

/// Streams every [`GameEvent`] as one JSON object per line.
///
/// The first write failure is kept and reported by [`TranscriptWriter::finish`];
/// later events are dropped.
pub struct TranscriptWriter<W: Write> {
    out: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> TranscriptWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            error: None,
        }
    }

    pub fn events_written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn record(&mut self, event: GameEvent) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, &event)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        match result {
            Ok(()) => self.written += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

impl<W: Write> GameObserver for TranscriptWriter<W> {
    fn on_game_reset(&mut self) {
        self.record(GameEvent::GameReset);
    }

    fn on_hand_dealt(&mut self, seat: Seat, hand: &Hand) {
        self.record(GameEvent::HandDealt {
            seat,
            cards: hand.cards().to_vec(),
        });
    }

    fn on_trump_chosen(&mut self, trump: Suit) {
        self.record(GameEvent::TrumpChosen { trump });
    }

    fn on_new_trick(&mut self) {
        self.record(GameEvent::NewTrick);
    }

    fn on_player_turn(&mut self, seat: Seat) {
        self.record(GameEvent::PlayerTurn { seat });
    }

    fn on_card_played(&mut self, seat: Seat, card: Card) {
        self.record(GameEvent::CardPlayed { seat, card });
    }

    fn on_trick_won(&mut self, seat: Seat, score: u32) {
        self.record(GameEvent::TrickWon { seat, score });
    }
}
