//! Error types.
//!
//! Invalid user input is not an error at this level: the console layer
//! re-prompts on `ParseChoiceError`. Everything here is surfaced to the
//! caller.

use thiserror::Error;

use super::state::Phase;

/// Drawing from a deck with no cards left.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("cannot draw from an empty deck")]
pub struct EmptyDeckError;

/// Failures of game operations and of the interactive session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),

    #[error("operation requires the {expected} phase, but the game is in the {actual} phase")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("input closed while waiting for a decision")]
    InputClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A line of input that is not one of the accepted tokens.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognized choice: {input:?}")]
pub struct ParseChoiceError {
    pub input: String,
}
