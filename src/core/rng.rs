//! Random number sources for secret numbers and deck shuffles.
//!
//! ## Key Features
//!
//! - **Injectable**: the deck and the round engine are generic over
//!   `RandomSource`, so tests can swap in a scripted source
//! - **Deterministic**: same seed produces an identical session
//! - **Context streams**: independent sequences for the deck and the rounds
//!
//! ## Usage
//!
//! ```
//! use card_guess::core::{GameRng, RandomSource};
//!
//! let rng = GameRng::new(42);
//!
//! // Separate streams so deck shuffles don't shift secret numbers
//! let mut deck_rng = rng.for_context("deck");
//! let mut round_rng = rng.for_context("round");
//!
//! let secret = round_rng.gen_inclusive(1, 100);
//! assert!((1..=100).contains(&secret));
//!
//! // Same seed, same context, same sequence
//! let mut again = GameRng::new(42).for_context("round");
//! assert_eq!(again.gen_inclusive(1, 100), secret);
//! # let _ = deck_rng.gen_inclusive(0, 1);
//! ```

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cards::{Card, CardKind};

/// Golden-ratio constant mixed into context seeds.
const CONTEXT_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Source of randomness consumed by the deck and the round engine.
pub trait RandomSource {
    /// Uniform integer in `[low, high]`. Callers guarantee `low <= high`.
    fn gen_inclusive(&mut self, low: i32, high: i32) -> i32;

    /// Permute a deck cycle in place. Every permutation should be equally likely.
    fn shuffle_cards(&mut self, cards: &mut [Card]);
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn gen_inclusive(&mut self, low: i32, high: i32) -> i32 {
        (**self).gen_inclusive(low, high)
    }

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        (**self).shuffle_cards(cards);
    }
}

/// Seeded RNG used in production.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// The seed is remembered so a session can be replayed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The derivation is fixed arithmetic (FNV-1a over the context bytes),
    /// so seeds replay identically on every toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let seed = context.bytes().fold(self.seed ^ CONTEXT_MIX, |acc, byte| {
            (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        });
        Self::new(seed)
    }

    /// Shuffle any slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl RandomSource for GameRng {
    fn gen_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.inner.gen_range(low..=high)
    }

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        self.shuffle(cards);
    }
}

/// Deterministic source that replays queued values.
///
/// - `gen_inclusive` pops the next queued value, clamped into the requested
///   range. With nothing queued it returns `low`.
/// - `shuffle_cards` consumes one queued draw order per refill and arranges
///   the cycle so cards come out in that order. Kinds left unscripted keep
///   their canonical relative order; with nothing queued the cycle is left
///   as-is, so draws come out in reverse canonical order.
///
/// ```
/// use card_guess::cards::{CardKind, Deck};
/// use card_guess::core::ScriptedRng;
///
/// let rng = ScriptedRng::new().with_draw_order([CardKind::RevealParity]);
/// let mut deck = Deck::new(rng);
/// assert_eq!(deck.draw().kind, CardKind::RevealParity);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<i32>,
    orders: VecDeque<Vec<CardKind>>,
}

impl ScriptedRng {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integers for `gen_inclusive`.
    #[must_use]
    pub fn with_values(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.values.extend(values);
        self
    }

    /// Queue the draw order for the next refill.
    #[must_use]
    pub fn with_draw_order(mut self, order: impl IntoIterator<Item = CardKind>) -> Self {
        self.orders.push_back(order.into_iter().collect());
        self
    }
}

impl RandomSource for ScriptedRng {
    fn gen_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.values
            .pop_front()
            .map_or(low, |value| value.clamp(low, high))
    }

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        let Some(order) = self.orders.pop_front() else {
            return;
        };

        // Draws take from the back, so the first scripted kind goes last.
        let mut back = cards.len();
        for kind in order {
            if back == 0 {
                break;
            }
            if let Some(pos) = cards[..back].iter().position(|card| card.kind == kind) {
                cards[..back].swap(pos, back - 1);
                back -= 1;
            }
        }
        // Unscripted kinds were disturbed by the swaps; restore their order.
        cards[..back].sort_by_key(|card| card.kind);
    }
}
