//! Session statistics accumulated across rounds.

use serde::{Deserialize, Serialize};

use crate::rules::RoundResult;

/// Totals for a whole session. Only ever grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds started and finished.
    pub rounds_played: u32,

    /// Rounds where the secret was found.
    pub rounds_won: u32,

    /// Guesses over all rounds, won or lost.
    pub total_attempts: u64,
}

impl SessionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished round.
    pub fn record(&mut self, result: &RoundResult) {
        self.rounds_played += 1;
        if result.won {
            self.rounds_won += 1;
        }
        self.total_attempts += u64::from(result.attempts);
    }

    /// Total attempts divided by rounds won. `None` until a round is won.
    ///
    /// Attempts spent on lost rounds are included in the numerator.
    #[must_use]
    pub fn average_attempts_per_win(&self) -> Option<f64> {
        if self.rounds_won == 0 {
            None
        } else {
            Some(self.total_attempts as f64 / f64::from(self.rounds_won))
        }
    }

    /// Average per win in hundredths, rounded half up in exact integers
    /// so 1.005 becomes 101, not the float-rounded 100.
    fn average_hundredths(&self) -> Option<u64> {
        if self.rounds_won == 0 {
            return None;
        }
        let won = u64::from(self.rounds_won);
        Some((self.total_attempts * 200 + won) / (2 * won))
    }
}

/// Multi-line end-of-session summary.
impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game Summary")?;
        writeln!(f, "Rounds played: {}", self.rounds_played)?;
        writeln!(f, "Rounds won: {}", self.rounds_won)?;
        write!(f, "Total attempts: {}", self.total_attempts)?;
        if let Some(hundredths) = self.average_hundredths() {
            write!(
                f,
                "\nAverage attempts per win: {}.{:02}",
                hundredths / 100,
                hundredths % 100
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut stats = SessionStats::new();
        stats.record(&RoundResult::won(3));
        stats.record(&RoundResult::lost(5));
        stats.record(&RoundResult::won(1));

        assert_eq!(stats.rounds_played, 3);
        assert_eq!(stats.rounds_won, 2);
        assert_eq!(stats.total_attempts, 9);
    }

    #[test]
    fn test_average_only_with_wins() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.average_attempts_per_win(), None);

        stats.record(&RoundResult::lost(4));
        assert_eq!(stats.average_attempts_per_win(), None);

        stats.record(&RoundResult::won(2));
        assert_eq!(stats.average_attempts_per_win(), Some(6.0));
    }

    #[test]
    fn test_summary_without_wins() {
        let mut stats = SessionStats::new();
        stats.record(&RoundResult::lost(3));

        assert_eq!(
            stats.to_string(),
            "Game Summary\nRounds played: 1\nRounds won: 0\nTotal attempts: 3"
        );
    }

    #[test]
    fn test_summary_average_two_decimals() {
        let stats = SessionStats {
            rounds_played: 3,
            rounds_won: 3,
            total_attempts: 10,
        };
        assert!(stats.to_string().ends_with("Average attempts per win: 3.33"));

        let tie = SessionStats {
            rounds_played: 8,
            rounds_won: 8,
            total_attempts: 17,
        };
        assert!(tie.to_string().ends_with("Average attempts per win: 2.13"));

        // 1.005 has no exact binary form; float rounding would print 1.00
        let half_cent = SessionStats {
            rounds_played: 200,
            rounds_won: 200,
            total_attempts: 201,
        };
        assert!(half_cent.to_string().ends_with("Average attempts per win: 1.01"));

        let whole = SessionStats {
            rounds_played: 2,
            rounds_won: 2,
            total_attempts: 14,
        };
        assert!(whole.to_string().ends_with("Average attempts per win: 7.00"));
    }

    #[test]
    fn test_serialization() {
        let stats = SessionStats {
            rounds_played: 4,
            rounds_won: 2,
            total_attempts: 11,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SessionStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }
}
