//! Follow-suit legality, trick resolution and turn order.

use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::options::TurnDirection;
use crate::model::seat::{SEAT_COUNT, Seat};
use crate::model::suit::Suit;
use crate::model::trick::{Play, Trick};

/// Whether `candidate` may be played from `hand` into `trick`.
///
/// Leading is always legal. Following, a card of the lead suit is legal, and
/// any other card is legal only when the hand holds none of the lead suit.
pub fn can_follow(hand: &Hand, candidate: Card, trick: &Trick) -> bool {
    let Some(lead_suit) = trick.lead_suit() else {
        return true;
    };

    if candidate.suit == lead_suit {
        return true;
    }

    !hand.has_suit(lead_suit)
}

/// Cards in `hand` that pass [`can_follow`].
pub fn legal_cards(hand: &Hand, trick: &Trick) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|&card| can_follow(hand, card, trick))
        .collect()
}

/// Highest trump if any was played, otherwise highest card of the lead suit.
pub fn trick_winner(trick: &Trick, trump: Suit) -> Option<Play> {
    let lead_suit = trick.lead_suit()?;
    highest_of_suit(trick, trump).or_else(|| highest_of_suit(trick, lead_suit))
}

fn highest_of_suit(trick: &Trick, suit: Suit) -> Option<Play> {
    trick
        .plays()
        .filter(|play| play.card.suit == suit)
        .max_by_key(|play| play.card.rank)
}

/// Seats in playing order for a trick led by `leader`.
///
/// Clockwise visits increasing seat indices; counter-clockwise visits
/// decreasing ones. Both wrap modulo the seat count.
pub fn turn_order(leader: Seat, direction: TurnDirection) -> [Seat; SEAT_COUNT] {
    std::array::from_fn(|step| match direction {
        TurnDirection::Clockwise => leader.offset(step),
        TurnDirection::CounterClockwise => leader.offset_back(step),
    })
}
