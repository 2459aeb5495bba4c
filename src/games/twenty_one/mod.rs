//! Twenty-one: one player against a rule-driven dealer.
//!
//! - Each side is dealt two cards, player first
//! - The player hits or stands; going over 21 loses immediately
//! - The dealer then hits below 17 and stands otherwise
//! - Higher value wins, equal values tie
//!
//! `TwentyOneGame` is the round state machine; `autoplay` drives it without
//! a human, and `SessionStats` tallies results across rounds.

pub mod autoplay;
mod game;
mod stats;

pub use autoplay::{play_round, simulate};
pub use game::{DealerStep, Decision, TwentyOneBuilder, TwentyOneGame};
pub use stats::SessionStats;
