use super::{log_play_decision, pick_uniform};
use rand::RngCore;
use whist_core::game::{Player, TableView};
use whist_core::model::card::Card;
use whist_core::model::options::PlayerType;

/// Plays any card in hand with equal probability, legal or not.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn kind(&self) -> PlayerType {
        PlayerType::Random
    }

    fn choose_card(&mut self, view: &TableView<'_>, rng: &mut dyn RngCore) -> Card {
        let card = pick_uniform(view.hand.cards(), rng);
        log_play_decision(view, PlayerType::Random, card, "uniform_hand");
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::tests::{hand, table, view};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn always_returns_a_held_card() {
        let h = hand(&["2S", "9H", "KD", "AC"]);
        let (trick, scores) = table(&["3S"]);
        let view = view(&h, &trick, &scores);
        let mut rng = StdRng::seed_from_u64(3);
        let mut player = RandomPlayer::new();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let card = player.choose_card(&view, &mut rng);
            assert!(h.contains(card));
            seen.insert(card);
        }
        // Ignores the lead suit entirely.
        assert_eq!(seen.len(), 4);
    }
}
