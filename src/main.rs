use anyhow::Context;
use clap::Parser;
use log::info;

use card_guess::{configure, Console, ConfigOverrides, Deck, GameRng, RoundEngine, Session};

/// Guess the secret number. Each round a modifier card bends the rules.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible session (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Lowest possible secret (asked interactively if omitted)
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i32>,

    /// Highest possible secret (asked interactively if omitted)
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i32>,

    /// Guesses per round, 0 for unlimited (asked interactively if omitted)
    #[arg(long)]
    max_attempts: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let overrides = ConfigOverrides {
        min: args.min,
        max: args.max,
        max_attempts: args.max_attempts,
    };
    overrides.validate().context("invalid command line range")?;

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("session seed {}", rng.seed());

    let mut console = Console::stdio();
    console.say("Number Guessing Game")?;

    let config = configure(&mut console, &overrides).context("reading game settings")?;
    let session = Session::new(
        config,
        Deck::new(rng.for_context("deck")),
        RoundEngine::new(rng.for_context("round")),
    );
    session.run(&mut console).context("playing session")?;

    Ok(())
}
