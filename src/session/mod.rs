//! Session layer: configuration prompts, the replay loop and statistics.

pub mod runner;
pub mod setup;
pub mod stats;

pub use runner::Session;
pub use setup::configure;
pub use stats::SessionStats;
