//! Chess rules: positions, FEN, legal move generation and notation.
//!
//! This is the rules engine behind the puzzle trainer. It answers the
//! questions a trainer needs (whose turn, what may this piece do, is that
//! mate) and has no search or evaluation.

pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod types;

pub use board::*;
pub use error::FenError;
pub use movegen::*;
pub use notation::*;
pub use types::*;

#[cfg(test)]
mod board_tests;
