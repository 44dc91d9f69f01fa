//! Session loop tests.
//!
//! These tests verify the outer loop:
//! - Replay prompt semantics
//! - The deck persisting across rounds
//! - Statistics and the printed summary

use card_guess::cards::{CardKind, Deck, CARD_KINDS};
use card_guess::console::Console;
use card_guess::core::{ConfigOverrides, GameConfig, GameRng, ScriptedRng};
use card_guess::session::{configure, Session, SessionStats};
use card_guess::rules::RoundEngine;

/// Draw order for every cycle: cards that keep the secret and the cap first.
const QUIET_ORDER: [CardKind; CARD_KINDS] = [
    CardKind::RevealParity,
    CardKind::RevealWindow,
    CardKind::NarrowRange,
    CardKind::ExtraAttempts,
    CardKind::SwapTarget,
];

/// Session with scripted secrets. Rounds draw parity, window, then narrow.
fn quiet_session(
    config: GameConfig,
    secrets: &[i32],
) -> Session<ScriptedRng, ScriptedRng> {
    let mut deck_rng = ScriptedRng::new();
    for _ in 0..4 {
        deck_rng = deck_rng.with_draw_order(QUIET_ORDER);
    }
    Session::new(
        config,
        Deck::new(deck_rng),
        RoundEngine::new(ScriptedRng::new().with_values(secrets.iter().copied())),
    )
}

fn run(session: Session<ScriptedRng, ScriptedRng>, input: &str) -> (SessionStats, String) {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let stats = session.run(&mut console).expect("session should finish");
    (stats, String::from_utf8(console.into_output()).unwrap())
}

/// Test a single round followed by declining.
#[test]
fn test_single_round_summary() {
    let session = quiet_session(GameConfig::new(1, 10, 0).unwrap(), &[7]);
    let (stats, output) = run(session, "5\n9\n7\nn\n");

    assert_eq!(
        stats,
        SessionStats {
            rounds_played: 1,
            rounds_won: 1,
            total_attempts: 3,
        }
    );
    assert!(output.ends_with(
        "Play again? (y/N): \n\
         Game Summary\n\
         Rounds played: 1\n\
         Rounds won: 1\n\
         Total attempts: 3\n\
         Average attempts per win: 3.00\n\
         Thanks for playing!\n"
    ));
}

/// Test only "y" in any case continues.
#[test]
fn test_replay_answers() {
    let session = quiet_session(GameConfig::new(1, 10, 0).unwrap(), &[1, 2, 3]);
    let (stats, _) = run(session, "1\ny\n2\nY\n3\nyes\n");

    assert_eq!(stats.rounds_played, 3);
    assert_eq!(stats.rounds_won, 3);
}

/// Test an empty answer stops the session.
#[test]
fn test_empty_answer_stops() {
    let session = quiet_session(GameConfig::new(1, 10, 0).unwrap(), &[1, 2]);
    let (stats, _) = run(session, "1\n\n2\n");

    assert_eq!(stats.rounds_played, 1);
}

/// Test end of input at the replay prompt stops cleanly.
#[test]
fn test_eof_at_replay_stops() {
    let session = quiet_session(GameConfig::new(1, 10, 0).unwrap(), &[4]);
    let (stats, output) = run(session, "4\n");

    assert_eq!(stats.rounds_played, 1);
    assert!(output.ends_with("Thanks for playing!\n"));
}

/// Test no average is printed without a win, and lost attempts are counted.
#[test]
fn test_losses_only() {
    let session = quiet_session(GameConfig::new(1, 10, 2).unwrap(), &[7, 7]);
    let (stats, output) = run(session, "1\n2\ny\n3\n4\nn\n");

    assert_eq!(
        stats,
        SessionStats {
            rounds_played: 2,
            rounds_won: 0,
            total_attempts: 4,
        }
    );
    assert!(!output.contains("Average attempts per win"));
    assert!(output.contains("Total attempts: 4\n"));
}

/// Test the average includes attempts from lost rounds.
#[test]
fn test_average_mixes_wins_and_losses() {
    let session = quiet_session(GameConfig::new(1, 10, 2).unwrap(), &[7, 3]);
    let (stats, output) = run(session, "1\n2\ny\n3\nn\n");

    assert_eq!(stats.total_attempts, 3);
    assert_eq!(stats.rounds_won, 1);
    assert!(output.contains("Average attempts per win: 3.00\n"));
}

/// Test the deck is shared across rounds: five rounds see five different cards.
#[test]
fn test_deck_persists_across_rounds() {
    let mut session = Session::new(
        GameConfig::new(1, 1, 0).unwrap(),
        Deck::new(GameRng::new(42)),
        RoundEngine::new(GameRng::new(7)),
    );
    let mut console = Console::new("1\n1\n1\n1\n1\n".as_bytes(), Vec::new());

    for round in 1..=CARD_KINDS {
        session.play_round(&mut console).unwrap();
        assert_eq!(session.deck().remaining(), CARD_KINDS - round);
    }
    assert_eq!(session.deck().cycles(), 1);
    assert_eq!(session.stats().rounds_played, CARD_KINDS as u32);

    let output = String::from_utf8(console.into_output()).unwrap();
    for kind in CardKind::ALL {
        assert_eq!(
            output.matches(&format!("You drew a card: {}", kind.name())).count(),
            1,
            "{kind} drawn more than once in a cycle"
        );
    }
}

/// Test setup prompts followed by a full session on the same console.
#[test]
fn test_configure_then_play() {
    let mut console = Console::new("\n20\n\n15\nn\n".as_bytes(), Vec::new());
    let config = configure(&mut console, &ConfigOverrides::default()).unwrap();
    assert_eq!(config, GameConfig::new(1, 20, 0).unwrap());

    let stats = quiet_session(config, &[15]).run(&mut console).unwrap();
    assert_eq!(stats.rounds_won, 1);
    assert_eq!(stats.total_attempts, 1);
}

/// Test seeded sessions replay identically.
#[test]
fn test_seeded_sessions_are_reproducible() {
    let transcript = |seed: u64| {
        let rng = GameRng::new(seed);
        let session = Session::new(
            GameConfig::new(1, 3, 0).unwrap(),
            Deck::new(rng.for_context("deck")),
            RoundEngine::new(rng.for_context("round")),
        );
        let mut console = Console::new("1\n2\n3\ny\n1\n2\n3\nn\n".as_bytes(), Vec::new());
        session.run(&mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    };

    assert_eq!(transcript(99), transcript(99));
}
