//! Terminal front end for the mate-in-N puzzle trainer
//!
//! Reads one command per line from stdin (`help` lists them) and prints the
//! board and session messages, or JSON events with `--json`.

mod command;
mod render;
mod shell;


use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use puzzle_core::{PuzzleSession, TrainerConfig};
use shell::Shell;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "puzzle_cli", version, about = "Mate-in-N chess puzzle trainer for the terminal")]
struct Args {
    /// Trainer configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Puzzle pack (.toml or .json) to use instead of the built-in puzzles
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Puzzle to start on (0-based)
    #[arg(long)]
    start: Option<usize>,

    /// Shuffle the puzzle order
    #[arg(long)]
    shuffle: bool,

    /// Print session events as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TrainerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TrainerConfig::default(),
    }
    .with_overrides(args.catalog, args.start, args.shuffle);

    // Logs go to stderr so stdout stays clean for the board or JSON events.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let session: PuzzleSession = config
        .build_session(&mut rand::thread_rng())
        .context("starting puzzle session")?;
    info!(puzzles = session.catalog().len(), json = args.json, "starting trainer");

    let mut shell = Shell::new(session, io::stdout().lock(), args.json, config.flip_for_black);
    shell.run(io::stdin().lock()).context("terminal session failed")?;
    Ok(())
}
