//! Modifier cards - static card data.
//!
//! There are exactly five kinds of card. Each `Card` pairs its kind with the
//! fixed name and description shown to the player when it is drawn. What a
//! card *does* lives in `effects`.

use serde::{Deserialize, Serialize};

/// Number of distinct card kinds (and cards per deck cycle).
pub const CARD_KINDS: usize = 5;

/// The closed set of modifier cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// +2 attempts when attempts are capped.
    ExtraAttempts,
    /// Shrinks the range around the secret.
    NarrowRange,
    /// Tells whether the secret is even or odd.
    RevealParity,
    /// Gives a small window containing the secret.
    RevealWindow,
    /// Re-rolls the secret.
    SwapTarget,
}

impl CardKind {
    /// Every kind, in canonical order.
    pub const ALL: [CardKind; CARD_KINDS] = [
        CardKind::ExtraAttempts,
        CardKind::NarrowRange,
        CardKind::RevealParity,
        CardKind::RevealWindow,
        CardKind::SwapTarget,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::ExtraAttempts => "Extra Attempts",
            CardKind::NarrowRange => "Narrow Range",
            CardKind::RevealParity => "Reveal Parity",
            CardKind::RevealWindow => "Reveal Window",
            CardKind::SwapTarget => "Swap Target",
        }
    }

    /// One-line description shown when drawn.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            CardKind::ExtraAttempts => "Gain +2 attempts this round.",
            CardKind::NarrowRange => "The guessing range is narrowed around the secret number.",
            CardKind::RevealParity => "Tells whether the number is even or odd.",
            CardKind::RevealWindow => "Gives a small window where the number lies.",
            CardKind::SwapTarget => "The secret number is swapped for a new random one.",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A drawn card.
///
/// Read-only once created; the deck hands out copies.
///
/// ## Example
///
/// ```
/// use card_guess::cards::{Card, CardKind};
///
/// let card = Card::new(CardKind::RevealParity);
/// assert_eq!(card.name, "Reveal Parity");
/// assert_eq!(card.to_string(), "Reveal Parity - Tells whether the number is even or odd.");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Which effect this card applies.
    pub kind: CardKind,

    /// Card name (for display).
    pub name: &'static str,

    /// What the card does, in words.
    pub description: &'static str,
}

impl Card {
    /// Create a card with the canonical content for `kind`.
    #[must_use]
    pub const fn new(kind: CardKind) -> Self {
        Self {
            kind,
            name: kind.name(),
            description: kind.description(),
        }
    }

    /// One fresh card of each kind, in canonical order.
    #[must_use]
    pub fn canonical_set() -> [Card; CARD_KINDS] {
        CardKind::ALL.map(Card::new)
    }
}

impl From<CardKind> for Card {
    fn from(kind: CardKind) -> Self {
        Self::new(kind)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}
