//! Hands and hand valuation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::BUST_LIMIT;

/// Value of a sequence of cards, walked in order.
///
/// Each card is valued against the total accumulated before it, so an Ace
/// counts 11 only if that keeps the running total within the bust limit.
/// `[Ace, Ace, 9]` is 11 + 1 + 9 = 21, while `[Ace, 9, 5]` is 11 + 9 + 5 = 25.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u32 {
    cards.iter().fold(0, |total, card| total + card.value(total))
}

/// Cards held by one participant, in the order they were received.
///
/// Hands rarely exceed a handful of cards, so they live inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
    value: u32,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card and recompute the value.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.value = hand_value(&self.cards);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.value = 0;
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value > BUST_LIMIT
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Hand::new();
        for card in iter {
            hand.push(card);
        }
        hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        ranks.iter().map(|&r| Card::new(r, Suit::Hearts)).collect()
    }

    #[test]
    fn test_empty_hand() {
        let hand = Hand::new();
        assert_eq!(hand.value(), 0);
        assert!(hand.is_empty());
        assert!(!hand.is_busted());
        assert_eq!(hand.last(), None);
    }

    #[test]
    fn test_ten_and_jack() {
        let hand = hand(&[Rank::Ten, Rank::Jack]);
        assert_eq!(hand.value(), 20);
        assert!(!hand.is_busted());
    }

    #[test]
    fn test_ace_ace_nine() {
        let hand = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(hand.value(), 21);
        assert!(!hand.is_busted());
    }

    #[test]
    fn test_order_dependent_aces() {
        // Ace first is locked in at 11 even though the hand later busts.
        assert_eq!(hand(&[Rank::Ace, Rank::Nine, Rank::Five]).value(), 25);
        assert_eq!(hand(&[Rank::Nine, Rank::Five, Rank::Ace]).value(), 15);
    }

    #[test]
    fn test_bust_boundary() {
        assert!(!hand(&[Rank::King, Rank::Queen, Rank::Ace]).is_busted());
        assert!(hand(&[Rank::King, Rank::Queen, Rank::Two]).is_busted());
    }

    #[test]
    fn test_push_recomputes_and_clear_resets() {
        let mut hand = hand(&[Rank::Five]);
        hand.push(Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(hand.value(), 16);
        assert_eq!(hand.last(), Some(Card::new(Rank::Ace, Suit::Clubs)));

        hand.clear();
        assert_eq!(hand.value(), 0);
        assert_eq!(hand.len(), 0);
    }
}
