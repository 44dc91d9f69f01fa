//! Terminal input and output collaborators.

pub mod input;

pub use input::Console;
