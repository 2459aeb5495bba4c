//! # twenty-one
//!
//! A turn-based game of twenty-one: one player against a rule-driven dealer.
//!
//! ## Design Principles
//!
//! 1. **Explicit State Machine**: A round moves through
//!    `Dealing → PlayerTurn → DealerTurn → Resolution → Replay | End`.
//!    Every operation checks the phase and fails loudly when called out of turn.
//!
//! 2. **Deterministic**: All shuffling goes through a seeded `GameRng`, so a
//!    seed and a sequence of decisions reproduce a session exactly.
//!
//! 3. **Composition Over Inheritance**: Player and dealer are one
//!    `Participant` type; rendering is plain functions; input and output are
//!    injected into the session.
//!
//! ## Modules
//!
//! - `core`: Sides, phases, RNG, configuration, errors
//! - `cards`: Cards and the 52-card deck
//! - `participant`: Hands, hand valuation, participants
//! - `rules`: Winner determination and hit/stand policies
//! - `games`: The twenty-one state machine, autoplay, session statistics
//! - `console`: Line-based input, rendering, interactive session

pub mod cards;
pub mod console;
pub mod core;
pub mod games;
pub mod participant;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EmptyDeckError, GameConfig, GameError, GameRng, GameRngState, ParseChoiceError, Phase, Side,
    SideMap, BUST_LIMIT, DEALER_STANDS_ON, INITIAL_CARDS,
};

pub use crate::cards::{Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::participant::{hand_value, Hand, Participant};

pub use crate::rules::{determine_winner, DealerRule, HitPolicy, Outcome, StandOn};

pub use crate::games::twenty_one::{
    play_round, simulate, DealerStep, Decision, SessionStats, TwentyOneBuilder, TwentyOneGame,
};

pub use crate::console::{LineSource, Session};
