//! The round engine: draw a card, apply it, run the guess loop.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::cards::Deck;
use crate::console::Console;
use crate::core::{GameConfig, RandomSource};

use super::round::{GuessOutcome, RoundResult, RoundState};

/// Plays rounds against a human at a console.
///
/// Owns the random source for secret numbers; the deck brings its own.
///
/// ## Round flow
///
/// 1. Secret drawn uniformly from the config range
/// 2. One card drawn and announced, its effect applied and reported
/// 3. Guesses read until correct, or until a capped round runs out
#[derive(Clone, Debug)]
pub struct RoundEngine<R> {
    rng: R,
}

impl<R: RandomSource> RoundEngine<R> {
    /// Create an engine drawing secrets from `rng`.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Set up a round: secret, card and effect. Returns the state the guess
    /// loop starts from.
    pub fn deal<D, I, W>(
        &mut self,
        config: &GameConfig,
        deck: &mut Deck<D>,
        console: &mut Console<I, W>,
    ) -> io::Result<RoundState>
    where
        D: RandomSource,
        I: BufRead,
        W: Write,
    {
        let mut round = RoundState::new(config, &mut self.rng);

        let card = deck.draw();
        console.say(format_args!("You drew a card: {card}"))?;

        let report = round.apply_card(&card, &mut self.rng);
        debug!("{} -> {report:?}", card.kind);
        console.say(report)?;

        Ok(round)
    }

    /// Play one full round.
    pub fn play_round<D, I, W>(
        &mut self,
        config: &GameConfig,
        deck: &mut Deck<D>,
        console: &mut Console<I, W>,
    ) -> io::Result<RoundResult>
    where
        D: RandomSource,
        I: BufRead,
        W: Write,
    {
        let round = self.deal(config, deck, console)?;
        let result = guess_loop(round, console)?;
        info!("round finished: won={} attempts={}", result.won, result.attempts);
        Ok(result)
    }
}

/// Read guesses until the round is decided.
pub fn guess_loop<I: BufRead, W: Write>(
    mut round: RoundState,
    console: &mut Console<I, W>,
) -> io::Result<RoundResult> {
    let prompt = format!("Guess a number between {} and {}: ", round.min, round.max);

    loop {
        let guess = console.get_int(&prompt, None, round.min, round.max)?;
        match round.guess(guess) {
            outcome @ GuessOutcome::Correct => {
                let plural = if round.attempts > 1 { "s" } else { "" };
                console.say(format_args!(
                    "{outcome} You guessed it in {} attempt{plural}.",
                    round.attempts
                ))?;
                return Ok(RoundResult::won(round.attempts));
            }
            miss => console.say(miss)?,
        }

        if round.out_of_attempts() {
            console.say(format_args!("Out of attempts! The number was {}.", round.target))?;
            return Ok(RoundResult::lost(round.attempts));
        }
    }
}
