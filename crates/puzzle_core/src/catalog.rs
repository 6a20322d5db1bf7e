//! Puzzle definitions and the ordered catalog the trainer walks through.

use std::ops::Index;
use std::path::Path;

use chess_core::{Color, GameStatus, Position, parse_san};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideToMove {
    White,
    Black,
}

impl From<SideToMove> for Color {
    fn from(side: SideToMove) -> Color {
        match side {
            SideToMove::White => Color::White,
            SideToMove::Black => Color::Black,
        }
    }
}

/// One mate-in-N puzzle. Read-only once it is in a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub name: String,
    /// Starting position in FEN.
    pub position: String,
    /// Expected moves in SAN, both sides, starting with the side to move.
    pub solution_line: Vec<String>,
    pub side_to_move: SideToMove,
    /// Full moves, not plies.
    pub mate_distance: u32,
    pub flavor_text: String,
}

impl PuzzleDefinition {
    /// Half-moves an attempt may use before it is abandoned.
    pub fn ply_ceiling(&self) -> usize {
        self.mate_distance as usize * 2
    }

    /// Check the definition against the rules: the FEN parses, its side to
    /// move agrees, and the solution line is legal and ends in mate.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let name = || self.name.clone();
        if self.mate_distance == 0 {
            return Err(PuzzleError::InvalidMateDistance { name: name() });
        }
        if self.solution_line.is_empty() {
            return Err(PuzzleError::EmptySolution { name: name() });
        }
        if self.solution_line.len() > self.ply_ceiling() {
            return Err(PuzzleError::SolutionTooLong {
                name: name(),
                plies: self.solution_line.len(),
                ceiling: self.ply_ceiling(),
            });
        }

        let mut pos = Position::from_fen(&self.position).map_err(|source| PuzzleError::InvalidFen {
            fen: self.position.clone(),
            source,
        })?;
        let declared = Color::from(self.side_to_move);
        if pos.side_to_move != declared {
            return Err(PuzzleError::SideToMoveMismatch {
                name: name(),
                declared,
                actual: pos.side_to_move,
            });
        }

        for (ply, san) in self.solution_line.iter().enumerate() {
            let unplayable = || PuzzleError::UnplayableSolution {
                name: name(),
                ply: ply + 1,
                san: san.clone(),
            };
            let mv = parse_san(&pos, san).ok_or_else(unplayable)?;
            pos.make_move(mv).ok_or_else(unplayable)?;
        }
        if pos.status() != GameStatus::Checkmate {
            return Err(PuzzleError::SolutionNotMate { name: name() });
        }
        Ok(())
    }
}

/// On-disk shape of a puzzle pack: a list of `[[puzzle]]` tables.
#[derive(Debug, Deserialize)]
struct PuzzleFile {
    #[serde(rename = "puzzle")]
    puzzles: Vec<PuzzleDefinition>,
}

/// Ordered, non-empty, validated list of puzzles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) puzzles: Vec<PuzzleDefinition>,
}

impl Catalog {
    pub fn new(puzzles: Vec<PuzzleDefinition>) -> Result<Self, PuzzleError> {
        let catalog = Self { puzzles };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Fails on the first invalid puzzle, or if there are none.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.puzzles.is_empty() {
            return Err(PuzzleError::EmptyCatalog);
        }
        self.puzzles.iter().try_for_each(PuzzleDefinition::validate)
    }

    /// The puzzles shipped with the trainer.
    pub fn builtin() -> Self {
        Self {
            puzzles: builtin_puzzles(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, PuzzleError> {
        let file: PuzzleFile = toml::from_str(contents)?;
        Self::new(file.puzzles)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, PuzzleError> {
        let file: PuzzleFile = serde_json::from_str(contents)?;
        Self::new(file.puzzles)
    }

    /// Load a puzzle pack, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, PuzzleError> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(PuzzleError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        let contents = std::fs::read_to_string(path).map_err(|e| PuzzleError::io(path, e))?;
        let catalog = parse(&contents)?;
        tracing::info!(path = %path.display(), puzzles = catalog.len(), "loaded puzzle pack");
        Ok(catalog)
    }

    /// Reorder the puzzles once, e.g. at startup.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.puzzles.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PuzzleDefinition> {
        self.puzzles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PuzzleDefinition> {
        self.puzzles.iter()
    }
}

impl Index<usize> for Catalog {
    type Output = PuzzleDefinition;

    fn index(&self, index: usize) -> &PuzzleDefinition {
        &self.puzzles[index]
    }
}

fn puzzle(
    name: &str,
    position: &str,
    solution_line: &[&str],
    side_to_move: SideToMove,
    mate_distance: u32,
    flavor_text: &str,
) -> PuzzleDefinition {
    PuzzleDefinition {
        name: name.to_string(),
        position: position.to_string(),
        solution_line: solution_line.iter().map(|s| s.to_string()).collect(),
        side_to_move,
        mate_distance,
        flavor_text: flavor_text.to_string(),
    }
}

fn builtin_puzzles() -> Vec<PuzzleDefinition> {
    vec![
        puzzle(
            "Mate simple",
            "7k/5Qpp/8/8/8/8/8/6K1 w - - 0 1",
            &["Qf8#"],
            SideToMove::White,
            1,
            "The king's own pawns close the door behind him.",
        ),
        puzzle(
            "Back rank",
            "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1",
            &["Ra8#"],
            SideToMove::White,
            1,
            "Never forget to give your king some air.",
        ),
        puzzle(
            "Black to move",
            "r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1",
            &["Ra1#"],
            SideToMove::Black,
            1,
            "The same trap works for both colours.",
        ),
        puzzle(
            "Promotion",
            "k7/6P1/1K6/8/8/8/8/8 w - - 0 1",
            &["g8=Q#"],
            SideToMove::White,
            1,
            "A pawn on the seventh is a queen in waiting.",
        ),
        puzzle(
            "El Molino",
            "5rrb/5pkp/5np1/8/7B/8/3Q1P2/6KR w - - 0 1",
            &["Qh6+", "Kxh6", "Bxf6#"],
            SideToMove::White,
            2,
            "The queen is given away so the rook can finish the job.",
        ),
        puzzle(
            "Smothered",
            "4r2k/6pp/7N/3Q4/8/8/5PPP/6K1 w - - 0 1",
            &["Qg8+", "Rxg8", "Nf7#"],
            SideToMove::White,
            2,
            "Philidor's legacy: the king is buried by his own army.",
        ),
    ]
}
