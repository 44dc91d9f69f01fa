//! Card system: the five modifier cards and the deck that deals them.
//!
//! ## Key Types
//!
//! - `CardKind`: closed enum of card variants
//! - `Card`: a kind plus its display text
//! - `Deck`: non-repeating cycles of all five kinds, reshuffled on refill

pub mod card;
pub mod deck;

pub use card::{Card, CardKind, CARD_KINDS};
pub use deck::Deck;
