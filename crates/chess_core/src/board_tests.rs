use super::*;

#[test]
fn test_fen_roundtrip() {
    for fen in [
        Position::STARTPOS_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "5rrb/5pkp/5np1/8/7B/8/3Q1P2/6KR w - - 0 1",
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
    ] {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.to_fen(), fen);
    }
}

#[test]
fn test_fen_default_counters() {
    let pos = Position::from_fen("7k/5Qpp/8/8/8/8/8/6K1 w - -").unwrap();
    assert_eq!(pos.halfmove_clock, 0);
    assert_eq!(pos.fullmove_number, 1);
}

#[test]
fn test_startpos_matches_fen() {
    assert_eq!(Position::startpos(), Position::from_fen(Position::STARTPOS_FEN).unwrap());
}

#[test]
fn test_fen_errors() {
    assert_eq!(Position::from_fen("8/8/8 w"), Err(FenError::FieldCount(2)));
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8 w - -"),
        Err(FenError::RankCount(7))
    );
    assert_eq!(
        Position::from_fen("7k/5Qpp/9/8/8/8/8/6K1 w - -"),
        Err(FenError::RankWidth { rank: 6 })
    );
    assert_eq!(
        Position::from_fen("7k/5Xpp/8/8/8/8/8/6K1 w - -"),
        Err(FenError::PieceChar('X'))
    );
    assert_eq!(
        Position::from_fen("7k/5Qpp/8/8/8/8/8/6K1 x - -"),
        Err(FenError::SideToMove("x".to_string()))
    );
    assert_eq!(
        Position::from_fen("7k/5Qpp/8/8/8/8/8/6K1 w Z -"),
        Err(FenError::CastlingChar('Z'))
    );
    assert_eq!(
        Position::from_fen("7k/5Qpp/8/8/8/8/8/6K1 w - z9"),
        Err(FenError::EnPassant("z9".to_string()))
    );
    assert_eq!(
        Position::from_fen("7k/5Qpp/8/8/8/8/8/6K1 w - - x 1"),
        Err(FenError::Counter("x".to_string()))
    );
    assert_eq!(
        Position::from_fen("8/5Qpp/8/8/8/8/8/6K1 w - -"),
        Err(FenError::MissingKing(Color::Black))
    );
}

#[test]
fn test_in_check_and_attacks() {
    let pos = Position::from_fen("7k/5Q1p/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(!pos.in_check(Color::Black));
    assert!(pos.is_square_attacked(coord_to_sq("g8").unwrap(), Color::White));
    assert!(pos.is_square_attacked(coord_to_sq("g7").unwrap(), Color::White));
    assert!(!pos.is_square_attacked(coord_to_sq("h6").unwrap(), Color::White));
}

#[test]
fn test_make_unmake_restores_position() {
    let start = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let mut pos = start.clone();
    for mv in legal_moves(&start) {
        let undo = pos.make_move(mv).unwrap();
        pos.unmake_move(mv, undo);
        assert_eq!(pos, start, "unmake failed for {}", move_to_uci(mv));
    }
}

#[test]
fn test_make_move_from_empty_square_is_refused() {
    let mut pos = Position::startpos();
    assert!(pos.make_move(Move::new(coord_to_sq("e4").unwrap(), 0)).is_none());
    assert_eq!(pos, Position::startpos());
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = parse_san(&pos, "O-O").unwrap();
    pos.make_move(mv).unwrap();
    assert_eq!(pos.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
}

#[test]
fn test_double_push_sets_en_passant() {
    let mut pos = Position::startpos();
    pos.make_move(parse_uci_move(&pos, "e2e4").unwrap()).unwrap();
    assert_eq!(pos.en_passant, coord_to_sq("e3"));
}

#[test]
fn test_status_checkmate() {
    let pos = Position::from_fen("5Q1k/6pp/8/8/8/8/8/6K1 b - - 1 1").unwrap();
    assert_eq!(pos.status(), GameStatus::Checkmate);
    assert!(pos.status().is_over());
}

#[test]
fn test_status_ongoing() {
    assert_eq!(Position::startpos().status(), GameStatus::Ongoing);
    assert!(!GameStatus::Ongoing.is_over());
}
