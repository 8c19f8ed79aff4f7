use crate::model::deck::DECK_SIZE;
use crate::model::seat::{SEAT_COUNT, Seat};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Strategy selector for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerType {
    Random,
    Legal,
    Human,
    Smart,
}

impl PlayerType {
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerType::Random => "random",
            PlayerType::Legal => "legal",
            PlayerType::Human => "human",
            PlayerType::Smart => "smart",
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerType {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(PlayerType::Random),
            "legal" => Ok(PlayerType::Legal),
            "human" => Ok(PlayerType::Human),
            "smart" => Ok(PlayerType::Smart),
            other => Err(OptionsError::UnknownPlayerType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadingPlayer {
    /// Drawn uniformly from the game's RNG when play starts.
    Random,
    Seat(Seat),
}

impl LeadingPlayer {
    /// Legacy encoding: any negative index means random.
    pub fn from_index(index: i64) -> Result<Self, OptionsError> {
        if index < 0 {
            return Ok(LeadingPlayer::Random);
        }
        usize::try_from(index)
            .ok()
            .and_then(Seat::from_index)
            .map(LeadingPlayer::Seat)
            .ok_or(OptionsError::LeadingSeatOutOfRange(index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl TurnDirection {
    pub const fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            TurnDirection::Clockwise
        } else {
            TurnDirection::CounterClockwise
        }
    }

    pub const fn is_clockwise(self) -> bool {
        matches!(self, TurnDirection::Clockwise)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    pub seed: Option<u64>,
    pub hand_size: usize,
    pub leading_player: LeadingPlayer,
    pub win_score: u32,
    pub direction: TurnDirection,
    pub player_types: [PlayerType; SEAT_COUNT],
    pub enforce_rules: bool,
}

impl GameOptions {
    pub const MAX_HAND_SIZE: usize = DECK_SIZE / SEAT_COUNT;

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.hand_size == 0 || self.hand_size > Self::MAX_HAND_SIZE {
            return Err(OptionsError::HandSize(self.hand_size));
        }
        if self.win_score == 0 {
            return Err(OptionsError::WinScore);
        }
        Ok(())
    }

    pub fn player_type(&self, seat: Seat) -> PlayerType {
        self.player_types[seat.index()]
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            hand_size: Self::MAX_HAND_SIZE,
            leading_player: LeadingPlayer::Random,
            win_score: 7,
            direction: TurnDirection::Clockwise,
            player_types: [PlayerType::Legal; SEAT_COUNT],
            enforce_rules: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("hand size {0} is out of range (expected 1 to {})", GameOptions::MAX_HAND_SIZE)]
    HandSize(usize),
    #[error("win score must be at least 1")]
    WinScore,
    #[error("leading player {0} is not a seat index (use a negative value for random)")]
    LeadingSeatOutOfRange(i64),
    #[error("unknown player type {0:?} (expected random, legal, human or smart)")]
    UnknownPlayerType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_validate() {
        assert!(GameOptions::default().validate().is_ok());
    }

    #[test]
    fn hand_size_bounds() {
        let mut options = GameOptions::default();
        options.hand_size = 0;
        assert_eq!(options.validate(), Err(OptionsError::HandSize(0)));
        options.hand_size = 14;
        assert_eq!(options.validate(), Err(OptionsError::HandSize(14)));
        options.hand_size = 13;
        assert!(options.validate().is_ok());
    }

    #[test]
    fn zero_win_score_rejected() {
        let options = GameOptions {
            win_score: 0,
            ..GameOptions::default()
        };
        assert_eq!(options.validate(), Err(OptionsError::WinScore));
    }

    #[test]
    fn leading_player_legacy_encoding() {
        assert_eq!(LeadingPlayer::from_index(-1), Ok(LeadingPlayer::Random));
        assert_eq!(LeadingPlayer::from_index(2), Ok(LeadingPlayer::Seat(Seat::Two)));
        assert_eq!(
            LeadingPlayer::from_index(4),
            Err(OptionsError::LeadingSeatOutOfRange(4))
        );
    }

    #[test]
    fn player_type_parses_case_insensitively() {
        assert_eq!("Smart".parse::<PlayerType>(), Ok(PlayerType::Smart));
        assert!("robot".parse::<PlayerType>().is_err());
    }

    #[test]
    fn options_serialize_with_snake_case_enums() {
        let json = serde_json::to_string(&GameOptions::default()).unwrap();
        assert!(json.contains("\"leading_player\":\"random\""));
        assert!(json.contains("\"direction\":\"clockwise\""));
        assert!(json.contains("\"legal\""));
    }
}
