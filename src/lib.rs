//! # card-guess
//!
//! A console number guessing game where every round is modified by a card.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: The deck and the round engine each own a
//!    `RandomSource`. Production seeds a ChaCha stream from entropy; tests
//!    script exact secrets and card orders.
//!
//! 2. **Closed Card Set**: Five card kinds, one effect each, matched
//!    exhaustively. No dynamic dispatch.
//!
//! 3. **I/O at the Edge**: Round state and effects are pure data. Only
//!    `RoundEngine` and `Session` talk to a `Console`, which works over any
//!    `BufRead`/`Write` pair.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, random sources
//! - `cards`: card kinds and the cycling deck
//! - `effects`: what each card does to a round
//! - `rules`: round state, guess resolution, the round engine
//! - `console`: line-based prompts and integer input
//! - `session`: setup prompts, replay loop, statistics

pub mod core;
pub mod cards;
pub mod effects;
pub mod rules;
pub mod console;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, ConfigOverrides, GameConfig,
    GameRng, RandomSource, ScriptedRng,
};

pub use crate::cards::{Card, CardKind, Deck, CARD_KINDS};

pub use crate::effects::{EffectReport, Parity};

pub use crate::rules::{GuessOutcome, RoundEngine, RoundResult, RoundState};

pub use crate::console::Console;

pub use crate::session::{configure, Session, SessionStats};
