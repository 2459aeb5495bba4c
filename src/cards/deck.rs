//! The 52-card deck.
//!
//! A deck is shuffled once when it is built and then only shrinks: the top
//! card (the last element of the backing vector) is removed by `draw`.

use log::debug;

use super::card::{Card, Rank, Suit};
use crate::core::{EmptyDeckError, GameRng};

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

/// A finite stack of cards. The top of the deck is the end of `cards`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build all 52 cards and shuffle them with `rng`.
    pub fn new(rng: &mut GameRng) -> Self {
        let mut cards = Self::full_set();
        rng.shuffle(&mut cards);
        debug!("shuffled fresh deck (seed {})", rng.seed());
        Self { cards }
    }

    /// A deck in exactly the given order; the last card is drawn first.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// A complete deck whose first draws are exactly `draws`, in order.
    ///
    /// The rest of the 52 cards sit unshuffled beneath them. `draws` must not
    /// repeat a card.
    pub fn with_top(draws: &[Card]) -> Self {
        debug_assert!(
            draws.iter().enumerate().all(|(i, card)| !draws[..i].contains(card)),
            "repeated card in scripted draws"
        );
        let mut cards: Vec<Card> = Self::full_set()
            .into_iter()
            .filter(|card| !draws.contains(card))
            .collect();
        cards.extend(draws.iter().rev());
        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards }
    }

    /// Every rank of every suit, unshuffled.
    #[must_use]
    pub fn full_set() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Undrawn cards; the top of the deck is the last element.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
