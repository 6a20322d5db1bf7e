//! Puzzle session controller
//!
//! Owns the active puzzle, its rules-engine position, the hint tally and the
//! selection state, and turns board interactions into moves:
//!
//! ```text
//!            click S (own piece)              click S in targets
//!   Idle ─────────────────────────▶ Selected ───────────────────▶ move, Idle
//!    ▲                                 │  click same square / anything else
//!    └─────────────────────────────────┘
//! ```
//!
//! After each accepted move the position is checked: mate solves the puzzle
//! and shows the advance control, running out of half-moves restarts it.
//! Every handler runs to completion before the next one; front ends drain
//! [`SessionEvent`]s after each call to update the screen.

use std::collections::BTreeSet;

use chess_core::{Color, PieceKind, sq_to_coord};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, PuzzleDefinition};
use crate::engine::{CoreEngine, RulesEngine, Square};
use crate::error::PuzzleError;
use crate::scoring::{HintTracker, Scoreboard};

/// Which square (if any) the player has picked up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        square: Square,
        /// Where the selected piece may go. May be empty.
        targets: BTreeSet<Square>,
    },
}

impl Selection {
    pub fn square(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected { square, .. } => Some(*square),
        }
    }

    pub fn targets(&self) -> Option<&BTreeSet<Square>> {
        match self {
            Selection::Idle => None,
            Selection::Selected { targets, .. } => Some(targets),
        }
    }

    pub fn is_target(&self, square: Square) -> bool {
        self.targets().is_some_and(|t| t.contains(&square))
    }

    /// Selected square followed by its targets.
    pub fn highlights(&self) -> Vec<Square> {
        match self {
            Selection::Idle => Vec::new(),
            Selection::Selected { square, targets } => {
                std::iter::once(*square).chain(targets.iter().copied()).collect()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleStatus {
    Solving,
    Solved,
}

/// Mutable state of the one live session. Reset in place on every load.
#[derive(Debug, Clone)]
pub struct SessionState<E> {
    pub catalog_index: usize,
    pub engine: E,
    pub hints: HintTracker,
    pub selection: Selection,
    pub status: PuzzleStatus,
    pub last_move: Option<(Square, Square)>,
}

/// Things the presentation layer should react to, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Redraw `position` (FEN) with `highlights` (selected square first).
    Render {
        position: String,
        highlights: Vec<Square>,
    },
    PuzzleLoaded {
        index: usize,
        name: String,
        mate_distance: u32,
    },
    HintRevealed {
        hint: String,
        hints_used: usize,
        star_rating: u8,
    },
    Solved {
        index: usize,
        name: String,
        flavor_text: String,
        star_rating: u8,
    },
    AttemptFailed {
        index: usize,
        name: String,
        half_moves: usize,
    },
    /// Advanced past the last puzzle; the catalog starts over.
    CatalogComplete {
        puzzles: usize,
    },
    /// A dropped piece must return to `from`.
    SnapBack {
        from: Square,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDecision {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Accepted,
    SnapBack,
}

enum Interaction {
    Move { from: Square, to: Square },
    Deselect,
    Select,
}

/// Drives one trainer session over a [`Catalog`].
#[derive(Debug)]
pub struct PuzzleSession<E: RulesEngine = CoreEngine> {
    catalog: Catalog,
    /// Untouched engine per puzzle, cloned on every load.
    pristine: Vec<E>,
    state: SessionState<E>,
    scoreboard: Scoreboard,
    events: Vec<SessionEvent>,
}

impl<E: RulesEngine> PuzzleSession<E> {
    pub fn new(catalog: Catalog) -> Result<Self, PuzzleError> {
        Self::starting_at(catalog, 0)
    }

    /// Start on `start_index`, wrapped into the catalog.
    pub fn starting_at(catalog: Catalog, start_index: usize) -> Result<Self, PuzzleError> {
        catalog.validate()?;
        let pristine = catalog
            .iter()
            .map(|p| E::from_position(&p.position))
            .collect::<Result<Vec<E>, PuzzleError>>()?;

        let index = start_index % catalog.len();
        let state = SessionState {
            catalog_index: index,
            engine: pristine[index].clone(),
            hints: HintTracker::new(catalog[index].solution_line.len()),
            selection: Selection::Idle,
            status: PuzzleStatus::Solving,
            last_move: None,
        };
        let mut session = Self {
            catalog,
            pristine,
            state,
            scoreboard: Scoreboard::new(),
            events: Vec::new(),
        };
        session.load_puzzle(index);
        Ok(session)
    }

    // =========================================================================
    // Puzzle lifecycle
    // =========================================================================

    /// Reset everything for puzzle `index`: fresh position, no hints, three
    /// stars, nothing selected, advance control hidden. Idempotent.
    pub fn load_puzzle(&mut self, index: usize) {
        let index = index % self.catalog.len();
        let puzzle = &self.catalog[index];

        self.state = SessionState {
            catalog_index: index,
            engine: self.pristine[index].clone(),
            hints: HintTracker::new(puzzle.solution_line.len()),
            selection: Selection::Idle,
            status: PuzzleStatus::Solving,
            last_move: None,
        };
        info!(index, name = %puzzle.name, mate_in = puzzle.mate_distance, "puzzle loaded");

        self.events.push(SessionEvent::PuzzleLoaded {
            index,
            name: puzzle.name.clone(),
            mate_distance: puzzle.mate_distance,
        });
        self.request_render();
    }

    /// Move on to the next puzzle, wrapping to the first after the last.
    pub fn advance_to_next(&mut self) {
        let mut next = self.state.catalog_index + 1;
        if next >= self.catalog.len() {
            info!(puzzles = self.catalog.len(), "catalog complete, starting over");
            self.events.push(SessionEvent::CatalogComplete {
                puzzles: self.catalog.len(),
            });
            next = 0;
        }
        self.state.catalog_index = next;
        self.load_puzzle(next);
    }

    // =========================================================================
    // Hints
    // =========================================================================

    /// Disclose the next unused solution move. Returns `None` and changes
    /// nothing once every solution move has been shown.
    pub fn request_hint(&mut self) -> Option<String> {
        let Some(revealed) = self.state.hints.request() else {
            debug!("hint requested with the pool exhausted");
            return None;
        };
        let hint = self.current_puzzle().solution_line[revealed].clone();
        let star_rating = self.state.hints.star_rating();
        info!(hint = %hint, hints_used = self.state.hints.hints_used(), star_rating, "hint revealed");

        self.events.push(SessionEvent::HintRevealed {
            hint: hint.clone(),
            hints_used: self.state.hints.hints_used(),
            star_rating,
        });
        Some(hint)
    }

    // =========================================================================
    // Board interaction
    // =========================================================================

    /// A click (or tap) on `square`.
    pub fn on_square_interacted(&mut self, square: Square) {
        let interaction = match &self.state.selection {
            Selection::Selected { square: from, targets } if targets.contains(&square) => {
                Interaction::Move {
                    from: *from,
                    to: square,
                }
            }
            Selection::Selected { square: from, .. } if *from == square => Interaction::Deselect,
            _ => Interaction::Select,
        };

        match interaction {
            Interaction::Move { from, to } => {
                self.commit_move(from, to);
            }
            Interaction::Deselect => {
                debug!(square = %sq_to_coord(square), "deselected");
                self.state.selection = Selection::Idle;
            }
            Interaction::Select => self.select(square),
        }
        self.request_render();
    }

    /// May the piece on `from` be picked up? Only the side to move's own
    /// pieces, and never once the game has ended. Does not change selection.
    pub fn on_drag_start(&self, from: Square) -> DragDecision {
        let engine = &self.state.engine;
        if engine.is_game_over() {
            return DragDecision::Deny;
        }
        match engine.occupant_at(from) {
            Some(piece) if piece.color == engine.current_turn() => DragDecision::Allow,
            _ => DragDecision::Deny,
        }
    }

    /// A piece dragged from `from` was released on `to`.
    pub fn on_drop(&mut self, from: Square, to: Square) -> DropOutcome {
        let legal = from != to
            && self.on_drag_start(from) == DragDecision::Allow
            && self.state.engine.legal_destinations(from).contains(&to);

        if legal && self.commit_move(from, to) {
            self.request_render();
            return DropOutcome::Accepted;
        }
        debug!(from = %sq_to_coord(from), to = %sq_to_coord(to), "drop rejected");
        self.events.push(SessionEvent::SnapBack { from });
        DropOutcome::SnapBack
    }

    /// The board finished animating a drop; redraw from the engine's position.
    pub fn on_drag_settled(&mut self) {
        self.request_render();
    }

    fn select(&mut self, square: Square) {
        let engine = &self.state.engine;
        self.state.selection = match engine.occupant_at(square) {
            Some(piece) if piece.color == engine.current_turn() => {
                let targets = engine.legal_destinations(square);
                debug!(square = %sq_to_coord(square), targets = targets.len(), "selected");
                Selection::Selected { square, targets }
            }
            _ => Selection::Idle,
        };
    }

    /// Play `from -> to`, always promoting to a queen. Returns false and leaves
    /// the session untouched if the engine refuses.
    fn commit_move(&mut self, from: Square, to: Square) -> bool {
        if let Err(rejected) = self.state.engine.apply_move(from, to, PieceKind::Queen) {
            warn!(%rejected, "move refused after legality pre-check");
            return false;
        }
        debug!(from = %sq_to_coord(from), to = %sq_to_coord(to), "move played");
        self.state.selection = Selection::Idle;
        self.state.last_move = Some((from, to));
        self.evaluate_after_move();
        true
    }

    // =========================================================================
    // Post-move evaluation
    // =========================================================================

    fn evaluate_after_move(&mut self) {
        let index = self.state.catalog_index;
        let puzzle = &self.catalog[index];
        let engine = &self.state.engine;

        if engine.is_checkmate() {
            let star_rating = self.state.hints.star_rating();
            info!(index, name = %puzzle.name, star_rating, "puzzle solved");
            self.state.status = PuzzleStatus::Solved;
            self.scoreboard.record(index, star_rating);
            self.events.push(SessionEvent::Solved {
                index,
                name: puzzle.name.clone(),
                flavor_text: puzzle.flavor_text.clone(),
                star_rating,
            });
            return;
        }

        let half_moves = engine.half_move_count();
        if half_moves >= puzzle.ply_ceiling() {
            info!(index, name = %puzzle.name, half_moves, "attempt failed, restarting puzzle");
            self.events.push(SessionEvent::AttemptFailed {
                index,
                name: puzzle.name.clone(),
                half_moves,
            });
            self.load_puzzle(index);
        }
    }

    fn request_render(&mut self) {
        self.events.push(SessionEvent::Render {
            position: self.state.engine.to_position_string(),
            highlights: self.state.selection.highlights(),
        });
    }

    // =========================================================================
    // Accessors and text surfaces
    // =========================================================================

    /// Take every event produced since the last call.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState<E> {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.state.engine
    }

    pub fn current_index(&self) -> usize {
        self.state.catalog_index
    }

    pub fn current_puzzle(&self) -> &PuzzleDefinition {
        &self.catalog[self.state.catalog_index]
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    pub fn hints_used(&self) -> usize {
        self.state.hints.hints_used()
    }

    pub fn star_rating(&self) -> u8 {
        self.state.hints.star_rating()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_solved(&self) -> bool {
        self.state.status == PuzzleStatus::Solved
    }

    /// The advance control is only offered once the puzzle is solved.
    pub fn advance_visible(&self) -> bool {
        self.is_solved()
    }

    pub fn stars_text(&self) -> String {
        self.state.hints.stars_text()
    }

    /// "Puzzle K of N"
    pub fn progress_text(&self) -> String {
        format!("Puzzle {} of {}", self.state.catalog_index + 1, self.catalog.len())
    }

    pub fn status_line(&self) -> String {
        let puzzle = self.current_puzzle();
        match self.state.status {
            PuzzleStatus::Solved => format!("Solved! {}", puzzle.flavor_text),
            PuzzleStatus::Solving => {
                let side = Color::from(puzzle.side_to_move);
                let moves = if puzzle.mate_distance == 1 { "move" } else { "moves" };
                format!(
                    "Level {}: {}. {} to play, mate in {} {}.",
                    self.state.catalog_index + 1,
                    puzzle.name,
                    side,
                    puzzle.mate_distance,
                    moves
                )
            }
        }
    }
}
