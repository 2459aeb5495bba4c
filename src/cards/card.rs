//! Playing cards.
//!
//! `Card` is an immutable rank + suit value. Its point value depends on the
//! hand it lands in only for Aces, which count 11 unless that would push the
//! running total past the bust limit.

use serde::{Deserialize, Serialize};

use crate::core::BUST_LIMIT;

/// Card rank, in deck-building order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Points for every rank except Ace, which is valued by `Card::value`.
    ///
    /// Returns 11 for Ace (its high value).
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::Ace)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Jack => f.write_str("Jack"),
            Rank::Queen => f.write_str("Queen"),
            Rank::King => f.write_str("King"),
            Rank::Ace => f.write_str("Ace"),
            number => write!(f, "{}", number.points()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Points this card adds to a hand whose running total is `running_total`.
    ///
    /// An Ace is worth 11 if `running_total + 11` stays within the bust limit,
    /// otherwise 1. The total is the one accumulated so far, not the final
    /// hand total, so multi-Ace hands depend on draw order.
    #[must_use]
    pub const fn value(self, running_total: u32) -> u32 {
        if self.rank.is_ace() {
            if running_total + 11 <= BUST_LIMIT {
                11
            } else {
                1
            }
        } else {
            self.rank.points()
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
