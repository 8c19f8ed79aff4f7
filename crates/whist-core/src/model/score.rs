use crate::model::seat::{SEAT_COUNT, Seat};
use serde::{Deserialize, Serialize};

/// Tricks won per seat over the whole game.
///
/// Strategies only ever see `&ScoreBoard`; awarding a trick is reserved to
/// this crate's orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    totals: [u32; SEAT_COUNT],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self {
            totals: [0; SEAT_COUNT],
        }
    }

    pub(crate) fn award_trick(&mut self, seat: Seat) -> u32 {
        let total = &mut self.totals[seat.index()];
        *total += 1;
        *total
    }

    pub fn score(&self, seat: Seat) -> u32 {
        self.totals[seat.index()]
    }

    pub fn standings(&self) -> &[u32; SEAT_COUNT] {
        &self.totals
    }

    /// Highest score among seats at or above `threshold`; ties go to the
    /// lowest seat index.
    pub fn winner_at(&self, threshold: u32) -> Option<Seat> {
        Seat::LOOP
            .iter()
            .copied()
            .filter(|seat| self.score(*seat) >= threshold)
            .fold(None, |best: Option<Seat>, seat| match best {
                Some(current) if self.score(current) >= self.score(seat) => Some(current),
                _ => Some(seat),
            })
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl ScoreBoard {
    pub(crate) fn with_totals(totals: [u32; SEAT_COUNT]) -> Self {
        Self { totals }
    }
}
