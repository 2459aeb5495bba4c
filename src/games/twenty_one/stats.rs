//! Running tally of round outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};
use crate::rules::Outcome;

/// Outcomes accumulated over a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds resolved.
    pub rounds: u32,

    /// Rounds won, per side.
    pub wins: SideMap<u32>,

    /// Rounds tied.
    pub ties: u32,

    /// Rounds in which each side went bust.
    pub busts: SideMap<u32>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one resolved round.
    pub fn record(&mut self, outcome: Outcome, player_busted: bool, dealer_busted: bool) {
        self.rounds += 1;
        match outcome {
            Outcome::Winner(side) => self.wins[side] += 1,
            Outcome::Tie => self.ties += 1,
        }
        if player_busted {
            self.busts[Side::Player] += 1;
        }
        if dealer_busted {
            self.busts[Side::Dealer] += 1;
        }
    }

    /// Fraction of rounds won by `side`.
    #[must_use]
    pub fn win_rate(&self, side: Side) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            f64::from(self.wins[side]) / f64::from(self.rounds)
        }
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rounds: {} || You: {} || Dealer: {} || Ties: {}",
            self.rounds,
            self.wins[Side::Player],
            self.wins[Side::Dealer],
            self.ties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut stats = SessionStats::new();
        stats.record(Outcome::Winner(Side::Dealer), true, false);
        stats.record(Outcome::Winner(Side::Player), false, true);
        stats.record(Outcome::Winner(Side::Player), false, false);
        stats.record(Outcome::Tie, false, false);

        assert_eq!(stats.rounds, 4);
        assert_eq!(stats.wins[Side::Player], 2);
        assert_eq!(stats.wins[Side::Dealer], 1);
        assert_eq!(stats.ties, 1);
        assert_eq!(stats.busts[Side::Player], 1);
        assert_eq!(stats.busts[Side::Dealer], 1);
        assert!((stats.win_rate(Side::Player) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_win_rate() {
        assert_eq!(SessionStats::new().win_rate(Side::Dealer), 0.0);
    }

    #[test]
    fn test_display() {
        let mut stats = SessionStats::new();
        stats.record(Outcome::Winner(Side::Player), false, false);
        assert_eq!(stats.to_string(), "Rounds: 1 || You: 1 || Dealer: 0 || Ties: 0");
    }

    #[test]
    fn test_serde() {
        let mut stats = SessionStats::new();
        stats.record(Outcome::Tie, false, false);
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(serde_json::from_str::<SessionStats>(&json).unwrap(), stats);
    }
}
