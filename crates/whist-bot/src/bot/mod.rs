mod play;

pub use play::{Phase, SmartDecision, SmartPlanner};

use std::collections::HashMap;
use whist_core::model::card::Card;
use whist_core::model::rank::Rank;
use whist_core::model::seat::Seat;
use whist_core::model::suit::Suit;
use whist_core::model::trick::Trick;

/// Cards each seat has been seen to play during the current deal cycle.
#[derive(Debug, Clone, Default)]
pub struct PlayMemory {
    played: HashMap<Seat, Vec<Card>>,
}

impl PlayMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.played.values_mut().for_each(Vec::clear);
    }

    /// Appends every card of a completed trick to its player's history.
    pub fn record_trick(&mut self, trick: &Trick) {
        for play in trick.plays() {
            self.played.entry(play.seat).or_default().push(play.card);
        }
    }

    pub fn played_by(&self, seat: Seat) -> &[Card] {
        self.played.get(&seat).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_seen(&self) -> usize {
        self.played.values().map(Vec::len).sum()
    }

    /// Number of seen cards of `suit` ranked strictly below `rank`.
    pub fn seen_below(&self, suit: Suit, rank: Rank) -> usize {
        self.played
            .values()
            .flatten()
            .filter(|card| card.suit == suit && card.rank < rank)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::PlayMemory;
    use whist_core::model::card::Card;
    use whist_core::model::options::TurnDirection;
    use whist_core::model::rank::Rank;
    use whist_core::model::seat::Seat;
    use whist_core::model::suit::Suit;
    use whist_core::model::trick::Trick;
    use whist_core::rules::turn_order;

    fn trick(leader: Seat, cards: [&str; 4]) -> Trick {
        let mut trick = Trick::new(turn_order(leader, TurnDirection::Clockwise));
        for (seat, text) in trick.order().into_iter().zip(cards) {
            trick.play(seat, text.parse().unwrap()).unwrap();
        }
        trick
    }

    #[test]
    fn records_plays_per_seat() {
        let mut memory = PlayMemory::new();
        memory.record_trick(&trick(Seat::Two, ["2S", "5S", "KD", "9S"]));
        memory.record_trick(&trick(Seat::Zero, ["3S", "4H", "AS", "QC"]));
        assert_eq!(
            memory.played_by(Seat::Zero),
            &["KD".parse::<Card>().unwrap(), "3S".parse().unwrap()]
        );
        assert_eq!(memory.total_seen(), 8);
        assert_eq!(memory.seen_below(Suit::Spades, Rank::Four), 2);
        assert_eq!(memory.seen_below(Suit::Spades, Rank::Two), 0);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut memory = PlayMemory::new();
        memory.record_trick(&trick(Seat::One, ["2H", "3H", "4H", "5H"]));
        memory.clear();
        assert_eq!(memory.total_seen(), 0);
        assert!(memory.played_by(Seat::One).is_empty());
    }
}
