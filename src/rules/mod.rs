//! Table rules.
//!
//! - `engine`: round outcomes and winner determination
//! - `policy`: hit/stand policies for the dealer and automated players
//!
//! The game loop calls into these but never hardcodes a threshold or a
//! comparison itself.

pub mod engine;
pub mod policy;

pub use engine::{determine_winner, Outcome};
pub use policy::{DealerRule, HitPolicy, StandOn};
