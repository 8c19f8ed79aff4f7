use crate::model::card::Card;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cards held by one seat, kept sorted by suit then rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand.cards.dedup();
        hand
    }

    pub fn add(&mut self, card: Card) {
        if !self.contains(card) {
            self.cards.push(card);
            self.sort();
        }
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of `suit`, lowest rank first.
    pub fn cards_of_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards.iter().copied().filter(|c| c.suit == suit).collect()
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit == suit)
    }

    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|c| c.suit == suit).count()
    }

    fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| a.suit.cmp(&b.suit).then(a.rank.cmp(&b.rank)));
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn add_and_remove_cards() {
        let mut hand = Hand::new();
        let card = Card::new(Rank::Three, Suit::Clubs);
        hand.add(card);
        assert!(hand.contains(card));
        assert!(hand.remove(card));
        assert!(!hand.contains(card));
        assert!(!hand.remove(card));
    }

    #[test]
    fn cards_are_never_duplicated() {
        let card = Card::new(Rank::Nine, Suit::Hearts);
        let mut hand = Hand::with_cards(vec![card, card]);
        assert_eq!(hand.len(), 1);
        hand.add(card);
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn cards_are_sorted_by_suit_then_rank() {
        let mut hand = Hand::new();
        hand.add(Card::new(Rank::King, Suit::Clubs));
        hand.add(Card::new(Rank::Two, Suit::Spades));
        hand.add(Card::new(Rank::Ace, Suit::Spades));
        let ordered: Vec<_> = hand.iter().copied().collect();
        assert_eq!(ordered[0], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(ordered[1], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(ordered[2], Card::new(Rank::King, Suit::Clubs));
        assert_eq!(hand.to_string(), "2S AS KC");
    }

    #[test]
    fn suit_queries() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Seven, Suit::Spades),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Ten, Suit::Diamonds),
        ]);
        assert!(hand.has_suit(Suit::Spades));
        assert!(!hand.has_suit(Suit::Hearts));
        assert_eq!(hand.count_suit(Suit::Spades), 2);
        assert_eq!(
            hand.cards_of_suit(Suit::Spades),
            vec![
                Card::new(Rank::Three, Suit::Spades),
                Card::new(Rank::Seven, Suit::Spades)
            ]
        );
    }
}
