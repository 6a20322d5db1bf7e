//! Styling constants and piece glyphs

use chess_core::{Color as Side, PieceKind};
use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // Wheat
pub const DARK_SQUARE: Color = Color::from_rgb(0.71, 0.53, 0.39); // Sienna
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const LAST_MOVE_SQUARE: Color = Color::from_rgba(0.9, 0.9, 0.0, 0.4); // Yellow overlay
pub const DRAG_SOURCE: Color = Color::from_rgba(0.2, 0.5, 0.9, 0.35);
pub const TARGET_DOT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);

// Panel text
pub const STAR_COLOR: Color = Color::from_rgb(0.98, 0.78, 0.2);
pub const SOLVED_COLOR: Color = Color::from_rgb(0.45, 0.85, 0.45);
pub const FAILED_COLOR: Color = Color::from_rgb(0.95, 0.45, 0.4);

// Dimensions
pub const SQUARE_SIZE: f32 = 70.0;
pub const PANEL_WIDTH: f32 = 320.0;

/// Unicode chess glyph for a piece.
pub fn piece_char(color: Side, kind: PieceKind) -> &'static str {
    match (color, kind) {
        (Side::White, PieceKind::King) => "♔",
        (Side::White, PieceKind::Queen) => "♕",
        (Side::White, PieceKind::Rook) => "♖",
        (Side::White, PieceKind::Bishop) => "♗",
        (Side::White, PieceKind::Knight) => "♘",
        (Side::White, PieceKind::Pawn) => "♙",
        (Side::Black, PieceKind::King) => "♚",
        (Side::Black, PieceKind::Queen) => "♛",
        (Side::Black, PieceKind::Rook) => "♜",
        (Side::Black, PieceKind::Bishop) => "♝",
        (Side::Black, PieceKind::Knight) => "♞",
        (Side::Black, PieceKind::Pawn) => "♟",
    }
}
