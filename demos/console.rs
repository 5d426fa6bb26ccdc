//! Console Hangman
//!
//! This example drives the engine from standard input, the way any front end
//! would.
//!
//! Key concepts:
//! - The engine only records guesses and reports progress
//! - The loss policy (six strikes) lives here, not in the engine
//! - Checking `is_running()` / handling `GameError` instead of panicking
//!
//! Run with: cargo run --example console [words...]
//! Set RUST_LOG=hangman=debug to see the engine's log events.

use anyhow::Context;
use hangman::{ErrorKind, GameSession};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const MAX_STRIKES: usize = 6;
const DEFAULT_WORDS: &[&str] = &["ownership", "borrow", "lifetime", "trait", "closure"];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut game = if args.is_empty() {
        GameSession::new(DEFAULT_WORDS)
    } else {
        GameSession::new(&args)
    }
    .context("building the game")?;

    game.start(None)?;
    println!("=== Hangman ===");
    println!("You may miss {MAX_STRIKES} times. Type one letter per line.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Word:    {}", game.progress()?);
        println!("Guessed: {:?}", game.guessed_characters()?);
        println!("Strikes: {}/{MAX_STRIKES}", game.strikes()?);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\nBye!");
            break;
        };
        let line = line?;
        let mut chars = line.trim().chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            println!("Please type exactly one letter.\n");
            continue;
        };

        match game.guess(c) {
            Ok(true) => println!("Yes, '{c}' is in the word.\n"),
            Ok(false) => println!("No '{c}' there.\n"),
            Err(err) if err.kind() == ErrorKind::InvalidArgument => {
                println!("{err}\n");
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        if game.is_solved()? {
            println!("You solved it: {}", game.word()?);
            break;
        }
        if game.strikes()? >= MAX_STRIKES {
            println!("Out of strikes! The word was: {}", game.word()?);
            break;
        }
    }

    if game.is_running() {
        game.stop()?;
    }
    Ok(())
}
