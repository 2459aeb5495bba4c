//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: the 13 ranks and 4 suits of a standard deck
//! - `Card`: immutable rank + suit value
//! - `Deck`: shuffled 52-card stack, drawn from the top

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
