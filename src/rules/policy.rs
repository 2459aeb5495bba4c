//! Hit/stand policies.
//!
//! Policies are trait-based so the dealer rule and automated players share
//! one seam:
//! - `DealerRule`: the house rule, hit below a fixed threshold
//! - `StandOn`: an automated player that stands once it reaches a target

use crate::core::DEALER_STANDS_ON;
use crate::participant::Hand;

/// Decides whether a hand should take another card.
pub trait HitPolicy {
    fn should_hit(&self, hand: &Hand) -> bool;
}

/// The dealer hits while its hand value is below `stands_on`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DealerRule {
    pub stands_on: u32,
}

impl DealerRule {
    pub fn new(stands_on: u32) -> Self {
        Self { stands_on }
    }
}

impl Default for DealerRule {
    fn default() -> Self {
        Self::new(DEALER_STANDS_ON)
    }
}

impl HitPolicy for DealerRule {
    fn should_hit(&self, hand: &Hand) -> bool {
        !hand.is_busted() && hand.value() < self.stands_on
    }
}

/// Automated player: hit until the hand reaches `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandOn {
    pub target: u32,
}

impl StandOn {
    pub fn new(target: u32) -> Self {
        Self { target }
    }
}

impl HitPolicy for StandOn {
    fn should_hit(&self, hand: &Hand) -> bool {
        !hand.is_busted() && hand.value() < self.target
    }
}
