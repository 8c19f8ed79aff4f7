use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A playing card. Ordering is by suit, then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub fn is_suit(self, suit: Suit) -> bool {
        self.suit == suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("card text is too short: {0:?}")]
    TooShort(String),
    #[error("unknown rank {0:?}")]
    Rank(String),
    #[error("unknown suit {0:?}")]
    Suit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `"QS"`, `"10h"`, or `"td"`: rank first, suit letter last.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.len() < 2 || !text.is_ascii() {
            return Err(ParseCardError::TooShort(s.to_string()));
        }
        let (rank, suit) = text.split_at(text.len() - 1);
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}
