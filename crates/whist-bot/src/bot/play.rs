use super::PlayMemory;
use whist_core::model::card::Card;
use whist_core::model::hand::Hand;
use whist_core::model::rank::Rank;
use whist_core::model::suit::Suit;
use whist_core::model::trick::Trick;

/// Which branch of the heuristic produced a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Following,
    Trump,
    Burn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartDecision {
    pub card: Card,
    pub phase: Phase,
    pub leading: bool,
    pub reason: &'static str,
}

pub struct SmartPlanner;

impl SmartPlanner {
    /// Picks a card from `hand`, or `None` when the hand is empty.
    ///
    /// Leading goes to the trump branch when holding trump, else burns.
    /// Following plays the lead suit when possible, then trump, then burns.
    pub fn choose(
        hand: &Hand,
        trick: &Trick,
        trump: Suit,
        memory: &PlayMemory,
    ) -> Option<SmartDecision> {
        if hand.is_empty() {
            return None;
        }

        let leading = trick.lead_suit().is_none();
        let (card, phase, reason) = match trick.lead_suit() {
            Some(lead) if hand.has_suit(lead) => {
                let (card, reason) = lowest_if_safe(hand.cards_of_suit(lead), memory);
                (card, Phase::Following, reason)
            }
            _ if hand.has_suit(trump) => {
                let (card, reason) = Self::trump(hand, trump, memory);
                (card, Phase::Trump, reason)
            }
            _ => (Self::burn(hand), Phase::Burn, "shortest_suit_highest"),
        };

        Some(SmartDecision {
            card,
            phase,
            leading,
            reason,
        })
    }

    fn trump(hand: &Hand, trump: Suit, memory: &PlayMemory) -> (Card, &'static str) {
        let trumps = hand.cards_of_suit(trump);
        if let Some(ace) = trumps.iter().copied().find(|card| card.rank == Rank::Ace) {
            return (ace, "trump_ace");
        }
        lowest_if_safe(trumps, memory)
    }

    /// Highest card of the suit with the fewest cards in hand. Equal lengths
    /// resolve to the earlier suit in [`Suit::ALL`].
    fn burn(hand: &Hand) -> Card {
        let shortest = Suit::ALL
            .iter()
            .copied()
            .filter(|suit| hand.has_suit(*suit))
            .min_by_key(|suit| hand.count_suit(*suit))
            .expect("non-empty hand holds at least one suit");
        hand.cards_of_suit(shortest)
            .into_iter()
            .max_by_key(|card| card.rank)
            .expect("shortest suit is held")
    }
}

/// `cards` is one suit in ascending rank order and must be non-empty.
///
/// Plays the lowest card once every rank beneath it has been seen, otherwise
/// the highest.
fn lowest_if_safe(cards: Vec<Card>, memory: &PlayMemory) -> (Card, &'static str) {
    let lowest = cards[0];
    let highest = cards[cards.len() - 1];
    if memory.seen_below(lowest.suit, lowest.rank) == lowest.rank.index() {
        (lowest, "lowest_safe")
    } else {
        (highest, "highest")
    }
}
