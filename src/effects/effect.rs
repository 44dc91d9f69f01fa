//! Card effects.
//!
//! Each `CardKind` has exactly one effect, applied to the round state right
//! after the card is drawn. Effects return an `EffectReport` describing what
//! happened; rendering it is left to the caller.
//!
//! Bounds arithmetic runs in `i64` so a range spanning all of `i32` cannot
//! overflow. Results always land back inside the original `[min, max]`.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::RandomSource;
use crate::rules::RoundState;

/// Attempts granted by `ExtraAttempts`.
pub const EXTRA_ATTEMPTS: u32 = 2;

/// Parity of the secret number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[must_use]
    pub const fn of(value: i32) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Outcome of applying a card, as shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectReport {
    /// Attempt cap raised to `max_attempts`.
    AttemptsAdded { max_attempts: u32 },
    /// Attempts are unlimited; nothing changed.
    NoEffect,
    /// Range replaced with `[min, max]`.
    RangeNarrowed { min: i32, max: i32 },
    /// Parity of the secret.
    Parity(Parity),
    /// The secret lies in `[low, high]`.
    Window { low: i32, high: i32 },
    /// The secret was re-rolled.
    TargetSwapped,
}

impl std::fmt::Display for EffectReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectReport::AttemptsAdded { .. } => {
                write!(f, "You received +{EXTRA_ATTEMPTS} attempts this round.")
            }
            EffectReport::NoEffect => {
                write!(f, "You have unlimited attempts; card has no effect.")
            }
            EffectReport::RangeNarrowed { min, max } => {
                write!(f, "Range narrowed to {min} - {max} this round.")
            }
            EffectReport::Parity(Parity::Even) => write!(f, "Hint: The number is even."),
            EffectReport::Parity(Parity::Odd) => write!(f, "Hint: The number is odd."),
            EffectReport::Window { low, high } => write!(f, "Hint: it's between {low} and {high}."),
            EffectReport::TargetSwapped => {
                write!(f, "The secret number was secretly swapped by the card!")
            }
        }
    }
}

impl CardKind {
    /// Apply this card's effect to a round.
    ///
    /// Only `SwapTarget` consumes randomness.
    pub fn apply<R: RandomSource>(self, round: &mut RoundState, rng: &mut R) -> EffectReport {
        match self {
            CardKind::ExtraAttempts => {
                if round.max_attempts == 0 {
                    EffectReport::NoEffect
                } else {
                    round.max_attempts = round.max_attempts.saturating_add(EXTRA_ATTEMPTS);
                    EffectReport::AttemptsAdded {
                        max_attempts: round.max_attempts,
                    }
                }
            }
            CardKind::NarrowRange => {
                let (min, max) = narrowed_bounds(round.min, round.max, round.target);
                round.min = min;
                round.max = max;
                EffectReport::RangeNarrowed { min, max }
            }
            CardKind::RevealParity => EffectReport::Parity(Parity::of(round.target)),
            CardKind::RevealWindow => {
                let (low, high) = reveal_window(round.min, round.max, round.target);
                EffectReport::Window { low, high }
            }
            CardKind::SwapTarget => {
                round.target = rng.gen_inclusive(round.min, round.max);
                EffectReport::TargetSwapped
            }
        }
    }
}

/// Range after `NarrowRange`: a quarter-span window around `target`,
/// clipped to the current range.
///
/// ```
/// use card_guess::effects::narrowed_bounds;
///
/// // span 99 -> window 24
/// assert_eq!(narrowed_bounds(1, 100, 50), (26, 74));
/// assert_eq!(narrowed_bounds(1, 100, 3), (1, 27));
/// ```
#[must_use]
pub fn narrowed_bounds(min: i32, max: i32, target: i32) -> (i32, i32) {
    let window = ((i64::from(max) - i64::from(min)) / 4).max(1);
    clip_around(min, max, target, window)
}

/// Hint window for `RevealWindow`: roughly a tenth of the span plus two on
/// each side of `target`, clipped to the current range.
///
/// ```
/// use card_guess::effects::reveal_window;
///
/// // span 99 -> w = 9 + 2
/// assert_eq!(reveal_window(1, 100, 50), (39, 61));
/// assert_eq!(reveal_window(1, 100, 100), (89, 100));
/// ```
#[must_use]
pub fn reveal_window(min: i32, max: i32, target: i32) -> (i32, i32) {
    let window = ((i64::from(max) - i64::from(min)) / 10 + 2).max(1);
    clip_around(min, max, target, window)
}

fn clip_around(min: i32, max: i32, target: i32, window: i64) -> (i32, i32) {
    let target = i64::from(target);
    let low = (target - window).max(i64::from(min));
    let high = (target + window).min(i64::from(max));
    // Both lie between min and max, so they fit back into i32.
    (low as i32, high as i32)
}
