//! Errors raised while reading positions.

use thiserror::Error;

/// Reasons a FEN string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 space-separated fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks in board section, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: u8 },
    #[error("invalid piece character '{0}'")]
    PieceChar(char),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling character '{0}'")]
    CastlingChar(char),
    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),
    #[error("invalid move counter '{0}'")]
    Counter(String),
    #[error("{0} king is missing")]
    MissingKing(crate::types::Color),
}
