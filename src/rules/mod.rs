//! Round rules: per-round state, guess resolution and the round engine.
//!
//! `RoundState` is pure data and can be driven directly; `RoundEngine`
//! wires it to a deck and a console for interactive play.

pub mod engine;
pub mod round;

pub use engine::{guess_loop, RoundEngine};
pub use round::{GuessOutcome, RoundResult, RoundState};
