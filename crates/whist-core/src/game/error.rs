use crate::model::card::Card;
use crate::model::deck::DealError;
use crate::model::options::OptionsError;
use crate::model::seat::Seat;
use crate::model::trick::TrickError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("follow rule broken by seat {seat} attempting to play {card}")]
    RuleViolation { seat: Seat, card: Card },
    #[error("seat {seat} chose {card}, which is not in its hand")]
    CardNotInHand { seat: Seat, card: Card },
    #[error("game is over; no further tricks can be played")]
    Finished,
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error(transparent)]
    Trick(#[from] TrickError),
}
