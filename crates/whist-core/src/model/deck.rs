use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::RngCore;
use rand::seq::SliceRandom;
use thiserror::Error;

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Suit-major Cartesian product of [`Suit::ALL`] and [`Rank::ORDERED`].
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffle_in_place<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The result of one deal: a hand per player plus whatever was left over.
#[derive(Debug, Clone)]
pub struct Deal {
    pub hands: Vec<Hand>,
    pub leftover: Hand,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("cannot deal {requested} cards from a {available}-card deck")]
    NotEnoughCards { requested: usize, available: usize },
}

/// Builds a fresh deck, optionally shuffles it with `rng`, and cuts it into
/// `player_count` contiguous hands of `cards_per_player`.
pub fn deal_out<R: RngCore + ?Sized>(
    rng: &mut R,
    player_count: usize,
    cards_per_player: usize,
    shuffle: bool,
) -> Result<Deal, DealError> {
    let requested = player_count.saturating_mul(cards_per_player);
    if requested > DECK_SIZE {
        return Err(DealError::NotEnoughCards {
            requested,
            available: DECK_SIZE,
        });
    }

    let deck = if shuffle {
        Deck::shuffled(rng)
    } else {
        Deck::standard()
    };

    let mut chunks = deck.cards().chunks(cards_per_player.max(1));
    let hands = (0..player_count)
        .map(|_| {
            if cards_per_player == 0 {
                return Hand::new();
            }
            chunks
                .next()
                .map(|chunk| Hand::with_cards(chunk.to_vec()))
                .unwrap_or_default()
        })
        .collect();
    let leftover = Hand::with_cards(deck.cards()[requested..].to_vec());

    Ok(Deal { hands, leftover })
}
