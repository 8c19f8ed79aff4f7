use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::model::card::ParseCardError;

/// The four suits in trump-index order. The index carries no ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Spades),
            1 => Some(Suit::Hearts),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
        };
        f.write_str(symbol)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" | "SPADES" => Ok(Suit::Spades),
            "H" | "HEARTS" => Ok(Suit::Hearts),
            "D" | "DIAMONDS" => Ok(Suit::Diamonds),
            "C" | "CLUBS" => Ok(Suit::Clubs),
            _ => Err(ParseCardError::Suit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Suit;

    #[test]
    fn display_returns_ascii_symbols() {
        assert_eq!(Suit::Spades.to_string(), "S");
        assert_eq!(Suit::Clubs.to_string(), "C");
    }

    #[test]
    fn from_index_maps_valid_values() {
        assert_eq!(Suit::from_index(1), Some(Suit::Hearts));
        assert_eq!(Suit::from_index(4), None);
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.index(), i);
        }
    }

    #[test]
    fn parses_letters_and_names() {
        assert_eq!("d".parse::<Suit>(), Ok(Suit::Diamonds));
        assert_eq!("Clubs".parse::<Suit>(), Ok(Suit::Clubs));
        assert!("x".parse::<Suit>().is_err());
    }
}
