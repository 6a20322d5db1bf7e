//! The rules-engine seam used by the session controller.

use std::collections::BTreeSet;

use chess_core::{
    Color, GameStatus, Move, Piece, PieceKind, Position, legal_moves, move_to_san, sq_to_coord,
};
use thiserror::Error;

use crate::error::PuzzleError;

/// Board square, 0 = a1 .. 63 = h8.
pub type Square = u8;

/// A move the rules engine refused to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rules engine rejected {}{}", coord(.from), coord(.to))]
pub struct MoveRejected {
    pub from: Square,
    pub to: Square,
}

fn coord(square: &Square) -> String {
    sq_to_coord(*square)
}

/// What the session controller needs from a chess rules engine.
///
/// The controller only ever talks to the board through this trait, so it can
/// be exercised with a scripted fake instead of real chess rules.
pub trait RulesEngine: Clone {
    /// Build an engine from a FEN-like position string.
    fn from_position(fen: &str) -> Result<Self, PuzzleError>;

    fn current_turn(&self) -> Color;

    fn occupant_at(&self, square: Square) -> Option<Piece>;

    /// Squares the piece on `square` may legally move to. Empty when the
    /// square is empty or the piece cannot move.
    fn legal_destinations(&self, square: Square) -> BTreeSet<Square>;

    /// Play `from -> to`. `promotion` is used when a pawn reaches the last rank.
    fn apply_move(&mut self, from: Square, to: Square, promotion: PieceKind) -> Result<(), MoveRejected>;

    fn is_checkmate(&self) -> bool;

    fn is_game_over(&self) -> bool;

    /// Half-moves played since the engine was built.
    fn half_move_count(&self) -> usize;

    fn to_position_string(&self) -> String;
}

/// [`RulesEngine`] backed by `chess_core`.
#[derive(Debug, Clone)]
pub struct CoreEngine {
    position: Position,
    history: Vec<Move>,
    history_san: Vec<String>,
}

impl CoreEngine {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
            history_san: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Moves played so far in SAN, oldest first.
    pub fn history_san(&self) -> &[String] {
        &self.history_san
    }

    pub fn status(&self) -> GameStatus {
        self.position.status()
    }
}

impl RulesEngine for CoreEngine {
    fn from_position(fen: &str) -> Result<Self, PuzzleError> {
        let position = Position::from_fen(fen).map_err(|source| PuzzleError::InvalidFen {
            fen: fen.to_string(),
            source,
        })?;
        Ok(Self::new(position))
    }

    fn current_turn(&self) -> Color {
        self.position.side_to_move
    }

    fn occupant_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    fn legal_destinations(&self, square: Square) -> BTreeSet<Square> {
        chess_core::legal_moves_from(&self.position, square)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    fn apply_move(&mut self, from: Square, to: Square, promotion: PieceKind) -> Result<(), MoveRejected> {
        let mv = legal_moves(&self.position)
            .into_iter()
            .find(|m| m.from == from && m.to == to && (m.promo.is_none() || m.promo == Some(promotion)))
            .ok_or(MoveRejected { from, to })?;

        let san = move_to_san(&self.position, mv);
        self.position.make_move(mv).ok_or(MoveRejected { from, to })?;
        self.history.push(mv);
        self.history_san.push(san);
        Ok(())
    }

    fn is_checkmate(&self) -> bool {
        self.position.status() == GameStatus::Checkmate
    }

    fn is_game_over(&self) -> bool {
        self.position.status().is_over()
    }

    fn half_move_count(&self) -> usize {
        self.history.len()
    }

    fn to_position_string(&self) -> String {
        self.position.to_fen()
    }
}
