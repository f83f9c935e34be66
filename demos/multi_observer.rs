//! Multiple Observers
//!
//! This example drives one engine while several independent observers
//! render the same games.
//!
//! Key concepts:
//! - One engine, many named observers
//! - Localized transcripts in four languages
//! - A console board printer written against the `Observer` trait
//! - Unsubscribing between games
//!
//! Run with: RUST_LOG=tictac=debug cargo run --example multi_observer

use std::error::Error;

use tictac::builder::EngineBuilder;
use tictac::engine::{GameEngine, GameWon, InvalidMove, MoveMade, Observer, ObserverResult};
use tictac::locale::{Fallback, Language, LanguageSelector};
use tictac::observers::{RecordingObserver, TranscriptObserver};
use tracing_subscriber::EnvFilter;

// Prints the board after every move
struct ConsoleBoard;

impl Observer for ConsoleBoard {
    fn kind(&self) -> &str {
        "console"
    }

    fn on_move_made(&mut self, event: &MoveMade) -> ObserverResult {
        println!("{} -> {}\n{}\n", event.player, event.cell, event.board);
        Ok(())
    }

    fn on_invalid_move(&mut self, event: &InvalidMove) -> ObserverResult {
        println!("rejected {} for {}: {}\n", event.input, event.player, event.reason);
        Ok(())
    }

    fn on_game_won(&mut self, event: &GameWon) -> ObserverResult {
        let cells: Vec<String> = event.line.cells().iter().map(ToString::to_string).collect();
        println!("{} wins along {}\n", event.winner, cells.join(" "));
        Ok(())
    }
}

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for (row, col) in moves {
        // Rejections are reported to observers; the demo keeps going.
        let _ = engine.submit_move(*row, *col);
    }
}

fn print_transcripts(transcripts: &[TranscriptObserver]) {
    for transcript in transcripts {
        println!("--- {} ---", transcript.language());
        for line in transcript.take() {
            println!("{line}");
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== Multiple Observers Example ===\n");

    // "de" is not supported and falls back to English with a warning
    let selector = LanguageSelector::new(Fallback::To(Language::En));
    let transcripts: Vec<TranscriptObserver> = ["es", "en", "fr", "pt", "de"]
        .iter()
        .map(|code| selector.select(code).map(TranscriptObserver::new))
        .collect::<Result<_, _>>()?;

    let recorder = RecordingObserver::new();
    let mut builder = EngineBuilder::new()
        .observer("console", ConsoleBoard)
        .observer("recorder", recorder.clone());
    for (transcript, name) in transcripts.iter().zip(["es", "en", "fr", "pt", "de"]) {
        builder = builder.observer(name, transcript.clone());
    }
    let mut engine = builder.build()?;

    println!("Subscribed observers:");
    for info in engine.observers() {
        println!("  {} ({})", info.name, info.kind);
    }
    println!();

    println!("--- Game 1 ---\n");
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 2), (0, 0), (0, 2)]);
    print_transcripts(&transcripts);

    engine.reset();
    let detached = engine.unsubscribe("fr");
    println!("Unsubscribed fr: {}\n", detached.is_some());

    println!("--- Game 2 ---\n");
    play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 2),
            (2, 1),
        ],
    );
    print_transcripts(&transcripts);

    println!("Recorded {} notifications:", recorder.len());
    println!("  {}", recorder.kinds().join(", "));
    println!("Final status: {}", engine.status().name());

    Ok(())
}
