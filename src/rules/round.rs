//! Per-round state and guess resolution.
//!
//! A `RoundState` is created fresh from the session config at the start of
//! every round, modified by at most one card, then consumed by the guess
//! loop. It is pure data; the interactive loop lives in `RoundEngine`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameConfig, RandomSource};
use crate::effects::EffectReport;

/// Mutable state of one round.
///
/// Invariants: `min <= target <= max`; `max_attempts == 0` means unlimited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub min: i32,
    pub max: i32,
    pub max_attempts: u32,
    pub target: i32,
    pub attempts: u32,
}

impl RoundState {
    /// Start a round: copy the config and draw the secret uniformly.
    pub fn new<R: RandomSource>(config: &GameConfig, rng: &mut R) -> Self {
        debug_assert!(config.validate().is_ok(), "inverted range in {config:?}");
        Self {
            min: config.min,
            max: config.max,
            max_attempts: config.max_attempts,
            target: rng.gen_inclusive(config.min, config.max),
            attempts: 0,
        }
    }

    /// Apply a drawn card's effect.
    pub fn apply_card<R: RandomSource>(&mut self, card: &Card, rng: &mut R) -> EffectReport {
        card.kind.apply(self, rng)
    }

    /// Record a guess and compare it with the secret.
    pub fn guess(&mut self, value: i32) -> GuessOutcome {
        self.attempts += 1;
        match value.cmp(&self.target) {
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
            Ordering::Equal => GuessOutcome::Correct,
        }
    }

    /// Has the attempt cap been reached?
    #[must_use]
    pub fn out_of_attempts(&self) -> bool {
        self.max_attempts > 0 && self.attempts >= self.max_attempts
    }

    /// Does `value` lie in the current range?
    #[must_use]
    pub fn in_range(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Result of comparing one guess to the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessOutcome::TooLow => write!(f, "Too low."),
            GuessOutcome::TooHigh => write!(f, "Too high."),
            GuessOutcome::Correct => write!(f, "Correct!"),
        }
    }
}

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Did the player find the secret?
    pub won: bool,

    /// Guesses made this round.
    pub attempts: u32,
}

impl RoundResult {
    #[must_use]
    pub const fn won(attempts: u32) -> Self {
        Self {
            won: true,
            attempts,
        }
    }

    #[must_use]
    pub const fn lost(attempts: u32) -> Self {
        Self {
            won: false,
            attempts,
        }
    }
}
