//! Round outcomes and winner determination.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::participant::Hand;

/// Result of a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One side won.
    Winner(Side),
    /// Equal values, neither busted.
    Tie,
}

impl Outcome {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, Outcome::Winner(s) if *s == side)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Tie => None,
        }
    }
}

/// Decide a round from the two final hands.
///
/// A busted player loses before the dealer's hand is even looked at. Then a
/// busted dealer loses. Otherwise the higher value wins and equal values tie.
#[must_use]
pub fn determine_winner(player: &Hand, dealer: &Hand) -> Outcome {
    if player.is_busted() {
        Outcome::Winner(Side::Dealer)
    } else if dealer.is_busted() {
        Outcome::Winner(Side::Player)
    } else {
        match player.value().cmp(&dealer.value()) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::Player),
            std::cmp::Ordering::Less => Outcome::Winner(Side::Dealer),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}
