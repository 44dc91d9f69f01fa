//! Configuration errors.

use thiserror::Error;

/// A configuration that cannot start a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Lower bound above upper bound.
    #[error("minimum {min} is greater than maximum {max}")]
    InvertedRange { min: i32, max: i32 },
}
