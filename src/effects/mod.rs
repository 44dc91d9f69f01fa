//! Effect system for modifier cards.
//!
//! Effects mutate a `RoundState` (range, attempt cap, secret) and report
//! what changed as an `EffectReport`.

pub mod effect;

pub use effect::{narrowed_bounds, reveal_window, EffectReport, Parity, EXTRA_ATTEMPTS};
