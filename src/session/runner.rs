//! The outer session loop.

use std::io::{self, BufRead, Write};

use log::info;

use crate::cards::Deck;
use crate::console::Console;
use crate::core::{GameConfig, RandomSource};
use crate::rules::{RoundEngine, RoundResult};

use super::stats::SessionStats;

/// A session: one config, one deck and one engine shared by every round.
///
/// The deck is not reset between rounds, so a cycle of cards spans rounds.
#[derive(Clone, Debug)]
pub struct Session<D, R> {
    config: GameConfig,
    deck: Deck<D>,
    engine: RoundEngine<R>,
    stats: SessionStats,
}

impl<D: RandomSource, R: RandomSource> Session<D, R> {
    /// Create a session with a validated config.
    pub fn new(config: GameConfig, deck: Deck<D>, engine: RoundEngine<R>) -> Self {
        Self {
            config,
            deck,
            engine,
            stats: SessionStats::new(),
        }
    }

    /// Play one round and record it.
    pub fn play_round<I: BufRead, W: Write>(
        &mut self,
        console: &mut Console<I, W>,
    ) -> io::Result<RoundResult> {
        let result = self
            .engine
            .play_round(&self.config, &mut self.deck, console)?;
        self.stats.record(&result);
        Ok(result)
    }

    /// Play rounds until the player declines, then print the summary.
    pub fn run<I: BufRead, W: Write>(
        mut self,
        console: &mut Console<I, W>,
    ) -> io::Result<SessionStats> {
        loop {
            self.play_round(console)?;
            if !console.confirm("Play again? (y/N): ")? {
                break;
            }
        }

        info!("session over: {:?}", self.stats);
        console.say("")?;
        console.say(self.stats)?;
        console.say("Thanks for playing!")?;
        Ok(self.stats)
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn deck(&self) -> &Deck<D> {
        &self.deck
    }
}
