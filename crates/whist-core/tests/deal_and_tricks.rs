use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use whist_core::model::card::Card;
use whist_core::model::deck::{DECK_SIZE, deal_out};
use whist_core::model::options::TurnDirection;
use whist_core::model::seat::Seat;
use whist_core::model::suit::Suit;
use whist_core::model::trick::Trick;
use whist_core::rules::{can_follow, legal_cards, trick_winner, turn_order};

#[test]
fn every_shuffled_deal_partitions_the_deck() {
    for seed in 0..64u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let cards_per_player = (seed as usize % 13) + 1;
        let deal = deal_out(&mut rng, 4, cards_per_player, true).expect("fits in deck");

        let mut seen = HashSet::new();
        for hand in deal.hands.iter().chain(std::iter::once(&deal.leftover)) {
            for card in hand.iter() {
                assert!(seen.insert(*card), "seed {seed}: {card} dealt twice");
            }
        }
        assert_eq!(seen.len(), DECK_SIZE);
        assert!(deal.hands.iter().all(|hand| hand.len() == cards_per_player));
    }
}

/// Plays a trick where every seat follows with its legal cards from a fresh
/// deal, choosing the first legal card each time.
#[test]
fn dealt_tricks_resolve_to_trump_or_lead_suit() {
    for seed in 0..32u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let deal = deal_out(&mut rng, 4, 13, true).expect("full deal");
        let trump = Suit::ALL[seed as usize % 4];
        let leader = Seat::LOOP[seed as usize % 4];
        let mut trick = Trick::new(turn_order(leader, TurnDirection::Clockwise));

        for seat in trick.order() {
            let hand = &deal.hands[seat.index()];
            let card = legal_cards(hand, &trick)[0];
            assert!(can_follow(hand, card, &trick));
            trick.play(seat, card).expect("in turn");
        }

        let winner = trick_winner(&trick, trump).expect("complete trick");
        let lead = trick.lead_suit().expect("led");
        let cards: Vec<Card> = trick.plays().map(|play| play.card).collect();
        if cards.iter().any(|card| card.suit == trump) {
            assert_eq!(winner.card.suit, trump);
            let best = cards.iter().filter(|c| c.suit == trump).map(|c| c.rank).max();
            assert_eq!(Some(winner.card.rank), best);
        } else {
            assert_eq!(winner.card.suit, lead);
            let best = cards.iter().filter(|c| c.suit == lead).map(|c| c.rank).max();
            assert_eq!(Some(winner.card.rank), best);
        }
        assert_eq!(trick.card_of(winner.seat), Some(winner.card));
    }
}
