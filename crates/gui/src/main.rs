//! Mate-in-N puzzle trainer GUI
//!
//! Click or drag pieces to solve each position, ask for hints at the cost of
//! a star, and move through the catalog puzzle by puzzle.

mod app;
mod board;
mod styles;

#[cfg(test)]
mod app_tests;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::PuzzleApp;
use clap::Parser;
use iced::application;
use puzzle_core::{PuzzleSession, TrainerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "puzzle_gui", version, about = "Mate-in-N chess puzzle trainer")]
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
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TrainerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TrainerConfig::default(),
    }
    .with_overrides(args.catalog, args.start, args.shuffle);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let session: PuzzleSession = config
        .build_session(&mut rand::thread_rng())
        .context("starting puzzle session")?;
    info!(puzzles = session.catalog().len(), "starting trainer");

    let flip_for_black = config.flip_for_black;
    application(PuzzleApp::title, PuzzleApp::update, PuzzleApp::view)
        .theme(PuzzleApp::theme)
        .window_size((1000.0, 640.0))
        .run_with(move || PuzzleApp::new(session, flip_for_black))?;
    Ok(())
}
