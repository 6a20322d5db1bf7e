//! Error types for catalog loading and session setup
//!
//! Everything here is detected before the first puzzle is shown. Once a
//! session is running, every user-triggered condition has an in-band recovery
//! (see `session`), so none of these surface during play.

use std::path::PathBuf;

use chess_core::{Color, FenError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("invalid position \"{fen}\": {source}")]
    InvalidFen {
        fen: String,
        #[source]
        source: FenError,
    },

    #[error("the puzzle catalog is empty")]
    EmptyCatalog,

    #[error("puzzle \"{name}\" has an empty solution line")]
    EmptySolution { name: String },

    #[error("puzzle \"{name}\" must have a mate distance of at least 1")]
    InvalidMateDistance { name: String },

    #[error("puzzle \"{name}\" declares {declared} to move but its position has {actual} to move")]
    SideToMoveMismatch {
        name: String,
        declared: Color,
        actual: Color,
    },

    #[error("puzzle \"{name}\": solution move {ply} (\"{san}\") is not legal")]
    UnplayableSolution {
        name: String,
        ply: usize,
        san: String,
    },

    #[error("puzzle \"{name}\": solution line has {plies} half-moves but only {ceiling} are allowed")]
    SolutionTooLong {
        name: String,
        plies: usize,
        ceiling: usize,
    },

    #[error("puzzle \"{name}\": solution line does not end in checkmate")]
    SolutionNotMate { name: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported puzzle file format: {} (expected .toml or .json)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl PuzzleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PuzzleError::Io {
            path: path.into(),
            source,
        }
    }
}
