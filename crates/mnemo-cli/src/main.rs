//! mnemo binary: concentration in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Quick game on the default board
//! mnemo
//!
//! # Hard board with a reproducible deal
//! mnemo --mode hard --seed 7
//!
//! # Play a scripted deck
//! mnemo --deck-file decks/recorded.json
//! ```
//!
//! Commands at the prompt: `3` (or `reveal 3`) flips a card, `new [mode]`
//! restarts, `quit` exits.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;

use async_trait::async_trait;
use clap::Parser;
use mnemo_cli::{DriverNotice, GameDriver, SystemEnv, renderer};
use mnemo_core::{Mode, SessionEvent};
use mnemo_source::{DeckResponse, DeckSource, FileSource, ShuffledSource, SourceError};
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Memory-matching game in the terminal
#[derive(Parser, Debug)]
#[command(name = "mnemo")]
#[command(about = "Memory-matching (concentration) game in the terminal")]
#[command(version)]
struct Args {
    /// Difficulty mode (easy, medium, hard, expert)
    #[arg(short, long, default_value = "medium")]
    mode: String,

    /// Seed for the local deck shuffler (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load decks from a JSON file instead of generating them
    #[arg(long)]
    deck_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// The deck source selected by the command line.
enum CliSource {
    Shuffled(ShuffledSource),
    File(FileSource),
}

#[async_trait]
impl DeckSource for CliSource {
    async fn fetch(&self, mode: Mode) -> Result<DeckResponse, SourceError> {
        match self {
            Self::Shuffled(source) => source.fetch(mode).await,
            Self::File(source) => source.fetch(mode).await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let env = SystemEnv::new();
    let mode: Mode = args.mode.parse().unwrap_or_default();

    let source = match args.deck_file {
        Some(path) => CliSource::File(FileSource::new(path)),
        None => CliSource::Shuffled(match args.seed {
            Some(seed) => ShuffledSource::seeded(seed),
            None => ShuffledSource::from_env(&env),
        }),
    };

    let (mut driver, mut events) = GameDriver::new(env, source);

    // The first deal must succeed; afterwards a failed `new` just keeps the
    // current round alive.
    if let Err(e) = driver.start_new_game(mode).await {
        eprintln!("could not start a new game: {e}");
        return Err(e.into());
    }
    draw(&driver);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_command(&mut driver, line.trim()).await {
                    break;
                }
            },
            Some(event) = events.recv() => {
                let notices = driver.apply(event);
                for notice in &notices {
                    match notice {
                        DriverNotice::TimeChanged { .. } => {
                            if let Some(view) = driver.session().view() {
                                println!("{}", renderer::status_line(&view));
                            }
                        },
                        DriverNotice::OutcomeReached { .. } => draw(&driver),
                    }
                }
                // A resolution can flip cards back without producing a
                // notice; show the player.
                if notices.is_empty()
                    && matches!(event, SessionEvent::ResolutionElapsed { .. })
                {
                    draw(&driver);
                }
            },
        }
    }

    Ok(())
}

/// Apply one line of player input. Returns `false` to quit.
async fn handle_command(driver: &mut GameDriver<SystemEnv, CliSource>, line: &str) -> bool {
    let mut words = line.split_whitespace();

    match words.next() {
        None => true,

        Some("quit" | "q" | "exit") => false,

        Some("new") => {
            let mode: Mode = words.next().unwrap_or("medium").parse().unwrap_or_default();
            match driver.start_new_game(mode).await {
                Ok(_) => draw(driver),
                // The previous round is untouched; just tell the player.
                Err(e) => eprintln!("could not start a new game: {e}"),
            }
            true
        },

        Some(word) => {
            let index = if word == "reveal" || word == "r" { words.next() } else { Some(word) };
            match index.and_then(|w| w.parse::<u32>().ok()) {
                Some(index) => {
                    let _ = driver.reveal(index);
                    draw(driver);
                },
                None => println!("commands: <index> | reveal <index> | new [mode] | quit"),
            }
            true
        },
    }
}

/// Print the board and status line.
fn draw(driver: &GameDriver<SystemEnv, CliSource>) {
    let Some(view) = driver.session().view() else {
        return;
    };
    println!();
    print!("{}", renderer::board_to_string(&driver.session().cards(), view.mode));
    println!("{}", renderer::status_line(&view));
}
