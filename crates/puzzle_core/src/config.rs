//! Trainer configuration file.

use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::engine::RulesEngine;
use crate::error::PuzzleError;
use crate::session::PuzzleSession;

/// Settings shared by the GUI and the terminal front end.
///
/// Every field has a default, so an empty file (or no file) is valid:
///
/// ```toml
/// catalog = "puzzles/sample.toml"
/// start_index = 0
/// shuffle = false
/// flip_for_black = true
/// log_filter = "info,puzzle_core=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Puzzle pack to use instead of the built-in catalog.
    pub catalog: Option<PathBuf>,
    pub start_index: usize,
    pub shuffle: bool,
    /// Draw the board from Black's side when Black is to move.
    pub flip_for_black: bool,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            start_index: 0,
            shuffle: false,
            flip_for_black: true,
            log_filter: "info".to_string(),
        }
    }
}

impl TrainerConfig {
    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        let contents = std::fs::read_to_string(path).map_err(|e| PuzzleError::io(path, e))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, PuzzleError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        catalog: Option<PathBuf>,
        start_index: Option<usize>,
        shuffle: bool,
    ) -> Self {
        if catalog.is_some() {
            self.catalog = catalog;
        }
        if let Some(start_index) = start_index {
            self.start_index = start_index;
        }
        self.shuffle |= shuffle;
        self
    }

    /// The configured puzzle pack, or the built-in catalog.
    pub fn load_catalog(&self) -> Result<Catalog, PuzzleError> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Load the catalog, shuffle it if asked, and open a session on
    /// `start_index`.
    pub fn build_session<E, R>(&self, rng: &mut R) -> Result<PuzzleSession<E>, PuzzleError>
    where
        E: RulesEngine,
        R: Rng + ?Sized,
    {
        let mut catalog = self.load_catalog()?;
        if self.shuffle {
            catalog.shuffle(rng);
        }
        PuzzleSession::starting_at(catalog, self.start_index)
    }
}
