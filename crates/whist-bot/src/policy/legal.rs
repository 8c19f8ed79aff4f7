use super::{log_play_decision, pick_uniform};
use rand::RngCore;
use whist_core::game::{Player, TableView};
use whist_core::model::card::Card;
use whist_core::model::options::PlayerType;

/// Uniformly random, but follows the lead suit whenever it can.
#[derive(Debug, Default)]
pub struct LegalPlayer;

impl LegalPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for LegalPlayer {
    fn kind(&self) -> PlayerType {
        PlayerType::Legal
    }

    fn choose_card(&mut self, view: &TableView<'_>, rng: &mut dyn RngCore) -> Card {
        let (card, reason) = match view.trick.lead_suit() {
            None => (pick_uniform(view.hand.cards(), rng), "leading"),
            Some(lead) => {
                let valid = view.hand.cards_of_suit(lead);
                if valid.is_empty() {
                    (pick_uniform(view.hand.cards(), rng), "void_in_lead")
                } else {
                    (pick_uniform(&valid, rng), "follow_suit")
                }
            }
        };
        debug_assert!(whist_core::rules::can_follow(view.hand, card, view.trick));
        log_play_decision(view, PlayerType::Legal, card, reason);
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
    use whist_core::model::suit::Suit;

    #[test]
    fn follows_lead_suit_when_holding_it() {
        let h = hand(&["2S", "9S", "KD", "AC"]);
        let (trick, scores) = table(&["3S"]);
        let view = view(&h, &trick, &scores);
        let mut rng = StdRng::seed_from_u64(1);
        let mut player = LegalPlayer::new();
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let card = player.choose_card(&view, &mut rng);
            assert_eq!(card.suit, Suit::Spades);
            seen.insert(card);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn void_in_lead_may_play_anything() {
        let h = hand(&["KD", "AC"]);
        let (trick, scores) = table(&["3S"]);
        let view = view(&h, &trick, &scores);
        let mut rng = StdRng::seed_from_u64(2);
        let mut player = LegalPlayer::new();
        let seen: HashSet<Card> = (0..100).map(|_| player.choose_card(&view, &mut rng)).collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn leading_picks_from_whole_hand() {
        let h = hand(&["2S", "KD", "AC"]);
        let (trick, scores) = table(&[]);
        let view = view(&h, &trick, &scores);
        let mut rng = StdRng::seed_from_u64(4);
        let mut player = LegalPlayer::new();
        let seen: HashSet<Card> = (0..100).map(|_| player.choose_card(&view, &mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }
}
