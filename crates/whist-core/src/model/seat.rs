use core::fmt;
use serde::{Deserialize, Serialize};

pub const SEAT_COUNT: usize = 4;

/// A fixed table position. Seat 0 is the first seat in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
#[repr(u8)]
pub enum Seat {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
}

impl Seat {
    pub const LOOP: [Seat; SEAT_COUNT] = [Seat::Zero, Seat::One, Seat::Two, Seat::Three];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::Zero),
            1 => Some(Seat::One),
            2 => Some(Seat::Two),
            3 => Some(Seat::Three),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The seat `steps` positions later in increasing seat order.
    pub const fn offset(self, steps: usize) -> Seat {
        Seat::LOOP[(self.index() + steps) % SEAT_COUNT]
    }

    /// The seat `steps` positions earlier in increasing seat order.
    pub const fn offset_back(self, steps: usize) -> Seat {
        Seat::LOOP[(self.index() + SEAT_COUNT - steps % SEAT_COUNT) % SEAT_COUNT]
    }

    pub const fn next(self) -> Seat {
        self.offset(1)
    }

    pub const fn previous(self) -> Seat {
        self.offset_back(1)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl From<Seat> for usize {
    fn from(seat: Seat) -> Self {
        seat.index()
    }
}

impl TryFrom<usize> for Seat {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Seat::from_index(value).ok_or_else(|| format!("seat index {value} out of range 0..4"))
    }
}

#[cfg(test)]
mod tests {
    use super::Seat;

    #[test]
    fn next_wraps_around() {
        assert_eq!(Seat::Three.next(), Seat::Zero);
    }

    #[test]
    fn previous_wraps_around() {
        assert_eq!(Seat::Zero.previous(), Seat::Three);
        assert_eq!(Seat::Two.offset_back(3), Seat::Three);
    }

    #[test]
    fn index_roundtrip() {
        for (i, seat) in Seat::LOOP.iter().enumerate() {
            assert_eq!(Seat::from_index(i), Some(*seat));
            assert_eq!(seat.index(), i);
        }
        assert_eq!(Seat::from_index(4), None);
    }

    #[test]
    fn serializes_as_index() {
        assert_eq!(serde_json::to_string(&Seat::Two).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Seat>("3").unwrap(), Seat::Three);
        assert!(serde_json::from_str::<Seat>("4").is_err());
    }
}
