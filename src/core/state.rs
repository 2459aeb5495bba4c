//! Round phases.
//!
//! A round moves through
//! `Dealing → PlayerTurn → DealerTurn → Resolution → Replay`, then either
//! back to `Dealing` or on to the terminal `End`. `DealerTurn` is skipped
//! when the player busts.

use serde::{Deserialize, Serialize};

/// Where the game currently is in its round lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh deck, empty hands, waiting for the deal.
    Dealing,
    /// The player chooses hit or stand.
    PlayerTurn,
    /// The dealer draws by rule.
    DealerTurn,
    /// Both turns are over; the winner is ready to be determined.
    Resolution,
    /// Outcome decided; waiting to hear whether to play again.
    Replay,
    /// Terminal.
    End,
}

impl Phase {
    /// Is this the terminal phase?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::End)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Dealing => "dealing",
            Phase::PlayerTurn => "player turn",
            Phase::DealerTurn => "dealer turn",
            Phase::Resolution => "resolution",
            Phase::Replay => "replay",
            Phase::End => "end",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_end_is_terminal() {
        assert!(Phase::End.is_terminal());
        for phase in [
            Phase::Dealing,
            Phase::PlayerTurn,
            Phase::DealerTurn,
            Phase::Resolution,
            Phase::Replay,
        ] {
            assert!(!phase.is_terminal());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Phase::PlayerTurn.to_string(), "player turn");
    }
}
