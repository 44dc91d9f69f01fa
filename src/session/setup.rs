//! Interactive session configuration.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::console::Console;
use crate::core::{ConfigOverrides, GameConfig};

/// Build the session config, prompting for anything not overridden.
///
/// Prompts offer defaults: min 1, max from `GameConfig::default_max_for`,
/// attempts 0 (unlimited). The max prompt never accepts a value below min.
/// Overrides must already have passed `ConfigOverrides::validate`.
pub fn configure<I: BufRead, W: Write>(
    console: &mut Console<I, W>,
    overrides: &ConfigOverrides,
) -> io::Result<GameConfig> {
    let min = match overrides.min {
        Some(min) => min,
        None => {
            let default = overrides.default_min();
            let upper = overrides.max.unwrap_or(i32::MAX);
            console.get_int(&format!("Minimum value [{default}]: "), Some(default), i32::MIN, upper)?
        }
    };

    let max = match overrides.max {
        Some(max) => max,
        None => {
            let default = GameConfig::default_max_for(min);
            console.get_int(&format!("Maximum value [{default}]: "), Some(default), min, i32::MAX)?
        }
    };

    let max_attempts = match overrides.max_attempts {
        Some(attempts) => attempts,
        None => console
            .get_int("Max attempts per round (0 for unlimited) [0]: ", Some(0), 0, i32::MAX)?
            .unsigned_abs(),
    };

    let config = GameConfig {
        min,
        max,
        max_attempts,
    };
    debug!("configured {config:?}");
    Ok(config)
}
