use chess_core::coord_to_sq;
use puzzle_core::{Catalog, PuzzleSession, RulesEngine, Selection};

use crate::app::{Message, Notice, PuzzleApp};
use crate::board::BoardMessage;

fn at(coord: &str) -> u8 {
    coord_to_sq(coord).unwrap()
}

fn app() -> PuzzleApp {
    let session = PuzzleSession::new(Catalog::builtin()).unwrap();
    PuzzleApp::new(session, true).0
}

fn click(app: &mut PuzzleApp, coord: &str) {
    let _ = app.update(Message::Board(BoardMessage::Pressed(at(coord))));
    let _ = app.update(Message::Board(BoardMessage::Released(at(coord))));
}

fn drag(app: &mut PuzzleApp, from: &str, to: &str) {
    let _ = app.update(Message::Board(BoardMessage::Pressed(at(from))));
    let _ = app.update(Message::Board(BoardMessage::Released(at(to))));
}

#[test]
fn test_click_click_solves_first_puzzle() {
    let mut app = app();
    click(&mut app, "f7");
    assert_eq!(app.session().selection().square(), Some(at("f7")));
    click(&mut app, "f8");
    assert!(app.session().is_solved());
    assert!(matches!(app.notice(), Some(Notice::Solved(_))));
}

#[test]
fn test_drag_solves_first_puzzle() {
    let mut app = app();
    drag(&mut app, "f7", "f8");
    assert!(app.session().is_solved());
}

#[test]
fn test_illegal_drag_leaves_position() {
    let mut app = app();
    let before = app.session().engine().to_position_string();
    drag(&mut app, "f7", "a1");
    assert_eq!(app.session().engine().to_position_string(), before);
    assert!(!app.session().is_solved());
}

#[test]
fn test_refused_press_then_release_elsewhere_is_ignored() {
    let mut app = app();
    drag(&mut app, "h8", "f7");
    assert_eq!(*app.session().selection(), Selection::Idle);
    drag(&mut app, "d4", "f7");
    assert_eq!(*app.session().selection(), Selection::Idle);
    assert_eq!(app.session().engine().half_move_count(), 0);
}

#[test]
fn test_click_on_target_after_selection_still_moves() {
    let mut app = app();
    click(&mut app, "f7");
    // A stray release elsewhere keeps the selection.
    drag(&mut app, "d4", "a1");
    assert_eq!(app.session().selection().square(), Some(at("f7")));
    click(&mut app, "f8");
    assert!(app.session().is_solved());
}

#[test]
fn test_hint_notices() {
    let mut app = app();
    let _ = app.update(Message::Hint);
    assert_eq!(app.notice(), Some(&Notice::Hint("Qf8#".to_string())));
    let _ = app.update(Message::Hint);
    assert_eq!(app.notice(), Some(&Notice::HintsExhausted));
    assert_eq!(app.session().star_rating(), 2);
}

#[test]
fn test_next_and_retry() {
    let mut app = app();
    drag(&mut app, "f7", "f8");
    let _ = app.update(Message::Next);
    assert_eq!(app.session().current_index(), 1);
    assert!(app.notice().is_none());

    click(&mut app, "a1");
    let _ = app.update(Message::Retry);
    assert_eq!(*app.session().selection(), Selection::Idle);
    assert_eq!(app.session().current_index(), 1);
}

#[test]
fn test_board_flips_for_black() {
    let mut app = app();
    assert!(!app.is_flipped());
    let black = app
        .session()
        .catalog()
        .iter()
        .position(|p| p.name == "Black to move")
        .unwrap();
    while app.session().current_index() != black {
        let _ = app.update(Message::Next);
    }
    assert!(app.is_flipped());
    let _ = app.update(Message::FlipBoard);
    assert!(!app.is_flipped());
}

#[test]
fn test_title_shows_progress() {
    let app = app();
    assert_eq!(app.title(), "Mate-in-N Trainer | Puzzle 1 of 6");
}
