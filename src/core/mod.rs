//! Core types: sides, phases, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, BUST_LIMIT, DEALER_STANDS_ON, INITIAL_CARDS};
pub use error::{EmptyDeckError, GameError, ParseChoiceError};
pub use player::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use state::Phase;
