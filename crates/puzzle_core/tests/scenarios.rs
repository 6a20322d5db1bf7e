//! End-to-end sessions over the built-in catalog with the real rules engine.

use chess_core::{coord_to_sq, parse_san};
use puzzle_core::{
    Catalog, DragDecision, DropOutcome, PuzzleSession, RulesEngine, Selection, SessionEvent,
};

fn at(coord: &str) -> u8 {
    coord_to_sq(coord).unwrap()
}

fn new_session() -> PuzzleSession {
    PuzzleSession::new(Catalog::builtin()).unwrap()
}

fn index_of(session: &PuzzleSession, name: &str) -> usize {
    session
        .catalog()
        .iter()
        .position(|p| p.name == name)
        .unwrap_or_else(|| panic!("no puzzle named {name}"))
}

fn click_move(session: &mut PuzzleSession, from: &str, to: &str) {
    session.on_square_interacted(at(from));
    assert!(
        session.selection().is_target(at(to)),
        "{to} is not a target of {from}"
    );
    session.on_square_interacted(at(to));
}

/// Play a SAN line by clicking from- and to-squares.
fn play_line(session: &mut PuzzleSession, line: &[String]) {
    for san in line {
        let mv = parse_san(session.engine().position(), san)
            .unwrap_or_else(|| panic!("{san} is not legal here"));
        session.on_square_interacted(mv.from);
        session.on_square_interacted(mv.to);
    }
}

#[test]
fn test_mate_simple_by_click() {
    let mut session = new_session();
    session.drain_events();
    click_move(&mut session, "f7", "f8");

    assert!(session.is_solved());
    assert!(session.advance_visible());
    assert_eq!(session.engine().half_move_count(), 1);

    let events = session.drain_events();
    assert!(events.iter().any(|e| matches!(e, SessionEvent::Solved { index: 0, star_rating: 3, .. })));
    assert!(!events.iter().any(|e| matches!(e, SessionEvent::PuzzleLoaded { .. })));
}

#[test]
fn test_el_molino_reloads_after_four_quiet_plies() {
    let mut session = new_session();
    let molino = index_of(&session, "El Molino");
    session.load_puzzle(molino);
    let start = session.engine().to_position_string();
    session.drain_events();

    click_move(&mut session, "d2", "d3");
    click_move(&mut session, "h7", "h6");
    click_move(&mut session, "d3", "d4");
    assert_eq!(session.engine().half_move_count(), 3);
    click_move(&mut session, "h6", "h5");

    assert_eq!(session.engine().half_move_count(), 0);
    assert_eq!(session.engine().to_position_string(), start);
    assert!(!session.is_solved());
    let events = session.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        SessionEvent::AttemptFailed { half_moves: 4, .. }
    )));
}

#[test]
fn test_load_puzzle_matches_catalog_position() {
    let mut session = new_session();
    session.on_square_interacted(at("f7"));
    session.request_hint();
    for index in 0..session.catalog().len() {
        session.load_puzzle(index);
        assert_eq!(
            session.engine().to_position_string(),
            session.catalog()[index].position,
            "{}",
            session.catalog()[index].name
        );
        assert_eq!(session.current_index(), index);
        assert_eq!(session.hints_used(), 0);
        assert_eq!(session.star_rating(), 3);
        assert_eq!(*session.selection(), Selection::Idle);
        assert!(!session.advance_visible());
    }
}

#[test]
fn test_stalemate_below_ceiling_does_not_reload() {
    let pack = r#"
[[puzzle]]
name = "Corner"
position = "7k/5K2/8/8/8/8/8/6Q1 w - - 0 1"
solution_line = ["Qg7#"]
side_to_move = "white"
mate_distance = 2
flavor_text = "Mind the stalemate."
"#;
    let mut session = PuzzleSession::new(Catalog::from_toml_str(pack).unwrap()).unwrap();
    session.drain_events();
    click_move(&mut session, "g1", "g6");

    assert_eq!(session.engine().half_move_count(), 1);
    assert!(session.engine().is_game_over());
    assert!(!session.is_solved());
    let events = session.drain_events();
    assert!(!events.iter().any(|e| matches!(e, SessionEvent::AttemptFailed { .. })));
    assert!(!events.iter().any(|e| matches!(e, SessionEvent::PuzzleLoaded { .. })));

    session.load_puzzle(0);
    click_move(&mut session, "g1", "g7");
    assert!(session.is_solved());
}

#[test]
fn test_el_molino_scripted_solution_mates_before_ceiling() {
    let mut session = new_session();
    let molino = index_of(&session, "El Molino");
    session.load_puzzle(molino);

    click_move(&mut session, "d2", "h6");
    click_move(&mut session, "g7", "h6");
    assert!(!session.is_solved());
    click_move(&mut session, "h4", "f6");

    assert!(session.is_solved());
    assert_eq!(session.engine().half_move_count(), 3);
    assert_eq!(session.engine().history_san(), ["Qh6+", "Kxh6", "Bxf6#"]);
}

#[test]
fn test_every_builtin_solution_solves_its_puzzle() {
    let mut session = new_session();
    for index in 0..session.catalog().len() {
        session.load_puzzle(index);
        let line = session.current_puzzle().solution_line.clone();
        play_line(&mut session, &line);
        assert!(session.is_solved(), "{} not solved", session.current_puzzle().name);
    }
    assert_eq!(session.scoreboard().solved_count(), session.catalog().len());
    assert_eq!(
        session.scoreboard().summary(session.catalog().len()),
        "Solved 6 of 6 (18 of 18 stars)"
    );
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut session = new_session();
    let promotion = index_of(&session, "Promotion");
    session.load_puzzle(promotion);
    assert_eq!(session.on_drop(at("g7"), at("g8")), DropOutcome::Accepted);
    assert!(session.is_solved());
    assert_eq!(session.engine().history_san(), ["g8=Q#"]);
}

#[test]
fn test_black_to_move_puzzle() {
    let mut session = new_session();
    let black = index_of(&session, "Black to move");
    session.load_puzzle(black);

    assert_eq!(session.on_drag_start(at("g1")), DragDecision::Deny);
    assert_eq!(session.on_drag_start(at("a8")), DragDecision::Allow);
    click_move(&mut session, "a8", "a1");
    assert!(session.is_solved());
}

#[test]
fn test_wrong_side_and_empty_square_stay_idle() {
    let mut session = new_session();
    session.on_square_interacted(at("h8"));
    assert_eq!(*session.selection(), Selection::Idle);
    session.on_square_interacted(at("d4"));
    assert_eq!(*session.selection(), Selection::Idle);
    session.on_square_interacted(at("f7"));
    assert_eq!(session.selection().square(), Some(at("f7")));
}

#[test]
fn test_illegal_drop_snaps_back() {
    let mut session = new_session();
    session.drain_events();
    assert_eq!(session.on_drop(at("f7"), at("a1")), DropOutcome::SnapBack);
    assert_eq!(
        session.drain_events(),
        vec![SessionEvent::SnapBack { from: at("f7") }]
    );
    assert_eq!(session.engine().half_move_count(), 0);
}

#[test]
fn test_no_moves_after_solve() {
    let mut session = new_session();
    click_move(&mut session, "f7", "f8");
    assert_eq!(session.on_drag_start(at("h8")), DragDecision::Deny);
    session.on_square_interacted(at("h8"));
    assert!(session.selection().targets().is_none_or(|t| t.is_empty()));
    assert!(session.is_solved());
}

#[test]
fn test_advance_through_whole_catalog_wraps() {
    let mut session = new_session();
    let n = session.catalog().len();
    for _ in 0..n - 1 {
        session.advance_to_next();
    }
    assert_eq!(session.progress_text(), format!("Puzzle {n} of {n}"));
    session.drain_events();

    session.advance_to_next();
    assert_eq!(session.current_index(), 0);
    assert!(session
        .drain_events()
        .iter()
        .any(|e| *e == SessionEvent::CatalogComplete { puzzles: n }));
}

#[test]
fn test_star_rating_after_hints_for_every_puzzle() {
    let mut session = new_session();
    for index in 0..session.catalog().len() {
        session.load_puzzle(index);
        let pool = session.current_puzzle().solution_line.len();
        for h in 0..=pool {
            assert_eq!(session.star_rating() as usize, 3usize.saturating_sub(h).max(1));
            assert_eq!(session.stars_text().chars().count(), 3);
            session.request_hint();
        }
        assert_eq!(session.hints_used(), pool);
    }
}

#[test]
fn test_hinted_solve_records_fewer_stars() {
    let mut session = new_session();
    assert_eq!(session.request_hint().as_deref(), Some("Qf8#"));
    click_move(&mut session, "f7", "f8");
    assert_eq!(session.scoreboard().best(0), Some(2));

    // A clean re-solve raises the record.
    session.load_puzzle(0);
    click_move(&mut session, "f7", "f8");
    assert_eq!(session.scoreboard().best(0), Some(3));
}
