use std::io::{self, Write};
use whist_core::game::GameObserver;
use whist_core::model::card::Card;
use whist_core::model::hand::Hand;
use whist_core::model::options::PlayerType;
use whist_core::model::seat::{SEAT_COUNT, Seat};
use whist_core::model::suit::Suit;

/// Prints the table as the game unfolds. Only hands of human seats are shown.
pub struct ConsoleObserver<W: Write = io::Stdout> {
    out: W,
    kinds: [PlayerType; SEAT_COUNT],
    trick: usize,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout(kinds: [PlayerType; SEAT_COUNT]) -> Self {
        Self::new(io::stdout(), kinds)
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, kinds: [PlayerType; SEAT_COUNT]) -> Self {
        Self {
            out,
            kinds,
            trick: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self, seat: Seat) -> String {
        format!("Player {seat} ({})", self.kinds[seat.index()])
    }

    fn is_human(&self, seat: Seat) -> bool {
        self.kinds[seat.index()] == PlayerType::Human
    }

    // Write errors are dropped.
    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        let _ = self.out.write_fmt(text);
        let _ = self.out.write_all(b"\n");
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_game_reset(&mut self) {
        self.trick = 0;
        self.line(format_args!("=== New game ==="));
    }

    fn on_hand_dealt(&mut self, seat: Seat, hand: &Hand) {
        if self.is_human(seat) {
            let label = self.label(seat);
            self.line(format_args!("{label} holds: {hand}"));
        }
    }

    fn on_trump_chosen(&mut self, trump: Suit) {
        self.line(format_args!("Trump is {}", trump.name()));
    }

    fn on_new_trick(&mut self) {
        self.trick += 1;
        let trick = self.trick;
        self.line(format_args!("-- Trick {trick} --"));
    }

    fn on_player_turn(&mut self, seat: Seat) {
        if self.is_human(seat) {
            let label = self.label(seat);
            self.line(format_args!("{label}, enter a card (e.g. QS, 10H):"));
        }
    }

    fn on_card_played(&mut self, seat: Seat, card: Card) {
        let label = self.label(seat);
        self.line(format_args!("{label} plays {card}"));
    }

    fn on_trick_won(&mut self, seat: Seat, score: u32) {
        let label = self.label(seat);
        self.line(format_args!("{label} takes the trick (score {score})"));
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whist_core::model::rank::Rank;

    fn kinds() -> [PlayerType; SEAT_COUNT] {
        [
            PlayerType::Human,
            PlayerType::Smart,
            PlayerType::Legal,
            PlayerType::Random,
        ]
    }

    fn render(f: impl FnOnce(&mut ConsoleObserver<Vec<u8>>)) -> String {
        let mut console = ConsoleObserver::new(Vec::new(), kinds());
        f(&mut console);
        String::from_utf8(console.into_inner()).expect("utf8")
    }

    #[test]
    fn reveals_only_human_hands() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
        ]);
        let text = render(|console| {
            console.on_hand_dealt(Seat::Zero, &hand);
            console.on_hand_dealt(Seat::One, &hand);
        });
        assert_eq!(text, "Player 0 (human) holds: 2S QH\n");
    }

    #[test]
    fn numbers_tricks_from_reset() {
        let text = render(|console| {
            console.on_game_reset();
            console.on_new_trick();
            console.on_new_trick();
            console.on_game_reset();
            console.on_new_trick();
        });
        let tricks: Vec<&str> = text.lines().filter(|l| l.starts_with("--")).collect();
        assert_eq!(tricks, vec!["-- Trick 1 --", "-- Trick 2 --", "-- Trick 1 --"]);
    }

    #[test]
    fn prints_plays_and_winner() {
        let text = render(|console| {
            console.on_card_played(Seat::Two, Card::new(Rank::Ten, Suit::Clubs));
            console.on_trick_won(Seat::Two, 3);
        });
        assert_eq!(
            text,
            "Player 2 (legal) plays 10C\nPlayer 2 (legal) takes the trick (score 3)\n"
        );
    }
}
