//! A seat at the table: a side and the hand it holds.

use log::debug;

use super::hand::Hand;
use crate::cards::{Card, Deck};
use crate::core::{EmptyDeckError, Side};

/// Player or dealer. Persists across rounds; only the hand is reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    side: Side,
    hand: Hand,
}

impl Participant {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            hand: Hand::new(),
        }
    }

    /// Draw the top card of `deck` into this hand.
    ///
    /// Returns the drawn card. The deck is left untouched on error.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, EmptyDeckError> {
        let card = deck.draw()?;
        self.hand.push(card);
        debug!("{} drew {} (hand value {})", self.side, card, self.hand.value());
        Ok(card)
    }

    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    #[must_use]
    pub fn hand_value(&self) -> u32 {
        self.hand.value()
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn most_recent_card(&self) -> Option<Card> {
        self.hand.last()
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }
}
