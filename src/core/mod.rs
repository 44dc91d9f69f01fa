//! Core types: configuration, errors and random sources.
//!
//! Everything else in the crate is parameterised by these. Randomness is
//! always injected through `RandomSource`, never taken from a global.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{ConfigOverrides, GameConfig, DEFAULT_MAX, DEFAULT_MIN};
pub use error::ConfigError;
pub use rng::{GameRng, RandomSource, ScriptedRng};
