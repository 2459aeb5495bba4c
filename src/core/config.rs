//! Game configuration types.
//!
//! The table rules are plain data: the binary fills a `GameConfig` from
//! command-line flags and hands it to `TwentyOneBuilder`.

use serde::{Deserialize, Serialize};

/// Hand values above this are bust.
pub const BUST_LIMIT: u32 = 21;

/// Default value at which the dealer stops hitting.
pub const DEALER_STANDS_ON: u32 = 17;

/// Default number of cards each participant receives when dealing.
pub const INITIAL_CARDS: usize = 2;

/// Table rules for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The dealer hits while its hand value is below this.
    pub dealer_stands_on: u32,

    /// Cards dealt to each participant at the start of a round.
    pub initial_cards: usize,

    /// Skip the dealer's turn when the standing player is already behind.
    pub dealer_skips_when_ahead: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEALER_STANDS_ON,
            initial_cards: INITIAL_CARDS,
            dealer_skips_when_ahead: false,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dealer's standing threshold.
    #[must_use]
    pub fn with_dealer_stands_on(mut self, value: u32) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Set the number of cards dealt to each side.
    #[must_use]
    pub fn with_initial_cards(mut self, count: usize) -> Self {
        assert!(count > 0, "Must deal at least 1 card");
        self.initial_cards = count;
        self
    }

    /// Let the dealer skip its turn when already ahead.
    #[must_use]
    pub fn with_dealer_skips_when_ahead(mut self, enabled: bool) -> Self {
        self.dealer_skips_when_ahead = enabled;
        self
    }
}
