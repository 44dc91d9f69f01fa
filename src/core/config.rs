//! Game configuration types.
//!
//! - `GameConfig`: the base range and attempt cap every round starts from
//! - `ConfigOverrides`: values fixed on the command line, skipping prompts
//!
//! Rounds never change the config; card effects work on a per-round copy.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default lower bound offered at the prompt.
pub const DEFAULT_MIN: i32 = 1;

/// Default upper bound when the lower bound is below it.
pub const DEFAULT_MAX: i32 = 100;

/// Span used for the default upper bound once `min` reaches `DEFAULT_MAX`.
const DEFAULT_SPAN: i32 = 10;

/// Base configuration for every round of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Inclusive lower bound of the secret number.
    pub min: i32,

    /// Inclusive upper bound of the secret number.
    pub max: i32,

    /// Guesses allowed per round (0 = unlimited).
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            max_attempts: 0,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration.
    pub fn new(min: i32, max: i32, max_attempts: u32) -> Result<Self, ConfigError> {
        let config = Self {
            min,
            max,
            max_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default upper bound offered for a given lower bound.
    ///
    /// `100` while `min < 100`, otherwise `min + 10` (saturating).
    #[must_use]
    pub const fn default_max_for(min: i32) -> i32 {
        if min < DEFAULT_MAX {
            DEFAULT_MAX
        } else {
            min.saturating_add(DEFAULT_SPAN)
        }
    }

    /// Set the range (builder pattern). Call `validate` afterwards.
    #[must_use]
    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the attempt cap (0 = unlimited).
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Check the range is not inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Configuration values supplied up front (e.g. command-line flags).
///
/// `None` fields are asked for interactively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub max_attempts: Option<u32>,
}

impl ConfigOverrides {
    /// Reject overrides that could never form a valid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(ConfigError::InvertedRange { min, max }),
            _ => Ok(()),
        }
    }

    /// Lower bound to offer at the prompt, never above a fixed `max`.
    #[must_use]
    pub fn default_min(&self) -> i32 {
        self.max.map_or(DEFAULT_MIN, |max| max.min(DEFAULT_MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.min, 1);
        assert_eq!(config.max, 100);
        assert_eq!(config.max_attempts, 0);
    }

    #[test]
    fn test_default_max_for() {
        assert_eq!(GameConfig::default_max_for(1), 100);
        assert_eq!(GameConfig::default_max_for(-40), 100);
        assert_eq!(GameConfig::default_max_for(99), 100);
        assert_eq!(GameConfig::default_max_for(100), 110);
        assert_eq!(GameConfig::default_max_for(500), 510);
        assert_eq!(GameConfig::default_max_for(i32::MAX - 3), i32::MAX);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_range(-5, 5)
            .with_max_attempts(3);

        assert_eq!(config.min, -5);
        assert_eq!(config.max, 5);
        assert_eq!(config.max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = GameConfig::new(10, 1, 0).unwrap_err();
        assert_eq!(err, ConfigError::InvertedRange { min: 10, max: 1 });
        assert_eq!(err.to_string(), "minimum 10 is greater than maximum 1");
    }

    #[test]
    fn test_single_value_range_is_valid() {
        let config = GameConfig::new(7, 7, 1).unwrap();
        assert_eq!(config.min, config.max);
    }

    #[test]
    fn test_full_range_is_valid() {
        assert!(GameConfig::new(i32::MIN, i32::MAX, 0).is_ok());
    }

    #[test]
    fn test_overrides() {
        assert!(ConfigOverrides::default().validate().is_ok());

        let fixed = ConfigOverrides {
            min: Some(50),
            max: Some(20),
            max_attempts: None,
        };
        assert!(fixed.validate().is_err());

        let only_max = ConfigOverrides {
            max: Some(-10),
            ..Default::default()
        };
        assert!(only_max.validate().is_ok());
        assert_eq!(only_max.default_min(), -10);
        assert_eq!(ConfigOverrides::default().default_min(), 1);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_max_attempts(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
