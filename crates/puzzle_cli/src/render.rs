//! Plain-text rendering of the board and of session events.

use chess_core::sq_to_coord;
use puzzle_core::{RulesEngine, Selection, SessionEvent, stars_glyphs};

/// Draw the board as text. The selected piece is bracketed, empty targets
/// show `*` and capturable targets are parenthesised.
pub fn ascii_board<E: RulesEngine>(engine: &E, selection: &Selection, flipped: bool) -> String {
    let ranks: Vec<i8> = if flipped { (0..8).collect() } else { (0..8).rev().collect() };
    let files: Vec<i8> = if flipped { (0..8).rev().collect() } else { (0..8).collect() };

    let mut out = String::new();
    for &rank in &ranks {
        out.push_str(&format!("{} ", rank + 1));
        for &file in &files {
            let sq = (rank * 8 + file) as u8;
            let piece = engine.occupant_at(sq).map(|p| p.fen_char());
            let cell = match (piece, selection.square() == Some(sq), selection.is_target(sq)) {
                (Some(ch), true, _) => format!("[{ch}]"),
                (Some(ch), false, true) => format!("({ch})"),
                (Some(ch), false, false) => format!(" {ch} "),
                (None, _, true) => " * ".to_string(),
                (None, _, false) => " . ".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &file in &files {
        out.push_str(&format!(" {} ", (b'a' + file as u8) as char));
    }
    out
}

/// One line describing `event`, or `None` for events with no text of their own.
pub fn describe_event(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::Render { .. } => None,
        SessionEvent::PuzzleLoaded {
            index,
            name,
            mate_distance,
        } => Some(format!("=== Puzzle {}: {name} (mate in {mate_distance}) ===", index + 1)),
        SessionEvent::HintRevealed {
            hint, star_rating, ..
        } => Some(format!("Hint: {hint}   {}", stars_glyphs(*star_rating))),
        SessionEvent::Solved {
            flavor_text,
            star_rating,
            ..
        } => Some(format!(
            "Checkmate! {flavor_text}   {}\nType \"next\" for the next puzzle.",
            stars_glyphs(*star_rating)
        )),
        SessionEvent::AttemptFailed { half_moves, .. } => Some(format!(
            "No mate after {half_moves} half-moves. The puzzle starts over."
        )),
        SessionEvent::CatalogComplete { puzzles } => {
            Some(format!("All {puzzles} puzzles done! Back to the first one."))
        }
        SessionEvent::SnapBack { from } => Some(format!(
            "That move is not allowed; the piece goes back to {}.",
            sq_to_coord(*from)
        )),
    }
}
