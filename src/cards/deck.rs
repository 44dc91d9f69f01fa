//! The modifier deck.
//!
//! Sampling without replacement in cycles: each cycle holds one card of
//! every kind in shuffled order, and a new cycle is dealt only once the
//! previous one is used up. Cards therefore never repeat within a cycle,
//! but the first card of a cycle may repeat the last card of the previous.
//!
//! The deck is a fixed array plus a cursor; nothing is allocated per draw.

use log::debug;

use crate::core::RandomSource;

use super::card::{Card, CARD_KINDS};

/// Deck of modifier cards that refills itself.
///
/// ## Usage
///
/// ```
/// use card_guess::cards::Deck;
/// use card_guess::core::GameRng;
///
/// let mut deck = Deck::new(GameRng::new(42));
/// assert_eq!(deck.remaining(), 0);
///
/// let first = deck.draw();
/// assert_eq!(deck.remaining(), 4);
/// assert!(!deck.remaining_cards().contains(&first));
/// ```
#[derive(Clone, Debug)]
pub struct Deck<R> {
    /// Current cycle. Only `cards[..remaining]` are still in the deck.
    cards: [Card; CARD_KINDS],

    /// Cursor: cards left in this cycle. Draws take `cards[remaining - 1]`.
    remaining: usize,

    /// Number of cycles dealt so far.
    cycles: u64,

    rng: R,
}

impl<R: RandomSource> Deck<R> {
    /// Create an empty deck. The first draw deals the first cycle.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            cards: Card::canonical_set(),
            remaining: 0,
            cycles: 0,
            rng,
        }
    }

    /// Remove and return the next card, refilling first if the cycle is spent.
    pub fn draw(&mut self) -> Card {
        if self.remaining == 0 {
            self.refill();
        }
        self.remaining -= 1;
        let card = self.cards[self.remaining];
        debug!("drew {} ({} left in cycle {})", card.kind, self.remaining, self.cycles);
        card
    }

    /// Cards left before the next refill.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Cards still in the current cycle. The last one is drawn next.
    #[must_use]
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[..self.remaining]
    }

    /// Number of cycles dealt so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Deal a fresh shuffled cycle of one card per kind.
    fn refill(&mut self) {
        self.cards = Card::canonical_set();
        self.rng.shuffle_cards(&mut self.cards);
        self.remaining = CARD_KINDS;
        self.cycles += 1;
        debug!("deck refilled (cycle {})", self.cycles);
    }
}
