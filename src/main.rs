//! Goban: a Go rules engine.
//!
//! ## Usage
//!
//! - `goban` - Show a demo
//! - `goban protocol` - Drive a game over the text protocol on stdin/stdout
//! - `goban decode <state>` - Print an encoded board state

use std::io;

use anyhow::{Context, Result, ensure};
use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use goban::codec::decode;
use goban::constants::{DEFAULT_SIZE, KOMI, MAX_SIZE};
use goban::game::Game;
use goban::protocol::Session;

/// Goban: a Go rules engine
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "goban=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the text protocol on stdin/stdout
    Protocol {
        /// Board size
        #[arg(short, long, default_value_t = DEFAULT_SIZE,
              value_parser = clap::value_parser!(u16).range(1..=MAX_SIZE as i64).map(usize::from))]
        size: usize,

        /// Compensation added to White's score
        #[arg(short, long, default_value_t = KOMI)]
        komi: f64,
    },
    /// Decode and print an encoded board state
    Decode {
        /// Encoded state, e.g. "9b0"
        state: String,
    },
    /// Play a short capture sequence and score it
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Protocol { size, komi }) => {
            let mut session = Session::new(size, komi);
            session
                .run(io::stdin().lock(), io::stdout().lock())
                .context("protocol session failed")?;
        }
        Some(Commands::Decode { state }) => {
            let decoded = decode(&state).with_context(|| format!("cannot decode {state:?}"))?;
            println!("size {} to move {}", decoded.size, decoded.turn);
            print!("{}", decoded.board);
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Goban: Go rules engine\n");

    // Black's lone stone is surrounded and captured; Black passes in between.
    let mut game = Game::new(5);
    let plays: [Option<(usize, usize)>; 8] = [
        Some((2, 2)),
        Some((1, 2)),
        None,
        Some((2, 1)),
        None,
        Some((3, 2)),
        None,
        Some((2, 3)),
    ];
    for play in plays {
        match play {
            Some((x, y)) => {
                let mover = game.turn();
                match game.try_place(x, y) {
                    Ok(captured) => println!("{mover} plays ({x},{y}), captures {captured}"),
                    Err(e) => println!("{mover} at ({x},{y}): {e}"),
                }
            }
            None => {
                println!("{} passes", game.turn());
                ensure!(!game.pass_turn(), "a single pass ended the game");
            }
        }
    }

    println!("\n{}", game.board());
    println!("Encoded: {}", game.get_board());

    ensure!(!game.pass_turn(), "first closing pass ended the game");
    ensure!(game.pass_turn(), "second consecutive pass did not end the game");
    let score = game.score();
    println!(
        "Final: {} wins, black {} white {}",
        score.winner, score.black, score.white
    );
    Ok(())
}
