//! Game-over detection as seen by the puzzle trainer:
//! - Checkmate for either side
//! - Stalemate
//! - Fifty-move rule
//! - Insufficient material

use chess_core::{Color, GameStatus, Position, legal_moves, parse_san};

fn status_of(fen: &str) -> GameStatus {
    Position::from_fen(fen).expect("valid FEN").status()
}

// =============================================================================
// Checkmate
// =============================================================================

#[test]
fn test_back_rank_mate() {
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    let mv = parse_san(&pos, "Ra8#").unwrap();
    pos.make_move(mv).unwrap();
    assert_eq!(pos.status(), GameStatus::Checkmate);
    assert!(pos.in_check(Color::Black));
}

#[test]
fn test_black_delivers_mate() {
    let mut pos = Position::from_fen("r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let mv = parse_san(&pos, "Ra1#").unwrap();
    pos.make_move(mv).unwrap();
    assert_eq!(pos.status(), GameStatus::Checkmate);
    assert!(pos.in_check(Color::White));
}

#[test]
fn test_check_is_not_mate() {
    // King escapes to h7
    assert_eq!(status_of("5Q1k/6p1/8/8/8/8/8/6K1 b - - 1 1"), GameStatus::Ongoing);
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(legal_moves(&pos).is_empty());
    assert!(!pos.in_check(Color::Black), "Stalemate means king is not in check");
    assert_eq!(pos.status(), GameStatus::Stalemate);
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    assert_eq!(status_of("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
}

// =============================================================================
// Fifty-Move Rule
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    assert_eq!(status_of("8/8/8/4k3/8/4K3/4P3/8 w - - 100 60"), GameStatus::FiftyMoveDraw);
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    assert_eq!(status_of("8/8/8/4k3/8/4K3/4P3/8 w - - 99 60"), GameStatus::Ongoing);
}

// =============================================================================
// Insufficient Material
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    assert_eq!(status_of("8/8/8/4k3/8/4K3/8/8 w - - 0 1"), GameStatus::InsufficientMaterial);
}

#[test]
fn test_insufficient_material_king_knight_vs_king() {
    assert_eq!(status_of("8/8/8/4k3/8/4KN2/8/8 w - - 0 1"), GameStatus::InsufficientMaterial);
}

#[test]
fn test_sufficient_material_with_pawn() {
    assert_eq!(status_of("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1"), GameStatus::Ongoing);
}

#[test]
fn test_sufficient_material_with_two_minors() {
    assert_eq!(status_of("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1"), GameStatus::Ongoing);
}
