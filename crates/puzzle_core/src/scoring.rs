//! Hint accounting and star ratings

use std::collections::BTreeMap;

use serde::Serialize;

/// Stars awarded for a puzzle solved without hints.
pub const MAX_STARS: u8 = 3;
/// No puzzle is ever rated below this.
pub const MIN_STARS: u8 = 1;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Hints taken on the active puzzle.
///
/// The pool is the length of the puzzle's solution line: each hint discloses
/// the next unused solution move, and once they are all out further requests
/// do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintTracker {
    hints_used: usize,
    pool: usize,
}

impl HintTracker {
    pub fn new(pool: usize) -> Self {
        Self { hints_used: 0, pool }
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    pub fn remaining(&self) -> usize {
        self.pool - self.hints_used
    }

    pub fn is_exhausted(&self) -> bool {
        self.hints_used >= self.pool
    }

    /// Take the next hint. Returns the index into the solution line that is
    /// now disclosed, or `None` when the pool is used up.
    pub fn request(&mut self) -> Option<usize> {
        if self.is_exhausted() {
            return None;
        }
        let revealed = self.hints_used;
        self.hints_used += 1;
        Some(revealed)
    }

    /// `max(1, 3 - hints_used)`
    pub fn star_rating(&self) -> u8 {
        let spent = self.hints_used.min(MAX_STARS as usize) as u8;
        (MAX_STARS - spent).max(MIN_STARS)
    }

    pub fn stars_text(&self) -> String {
        stars_glyphs(self.star_rating())
    }
}

/// Always three glyph slots: `rating` filled, the rest empty.
pub fn stars_glyphs(rating: u8) -> String {
    let filled = rating.min(MAX_STARS) as usize;
    let mut out = String::with_capacity(MAX_STARS as usize * 3);
    out.extend(std::iter::repeat_n(FILLED_STAR, filled));
    out.extend(std::iter::repeat_n(EMPTY_STAR, MAX_STARS as usize - filled));
    out
}

/// Best star rating per solved puzzle for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    best: BTreeMap<usize, u8>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a solve. A re-solve with fewer stars never lowers the record.
    pub fn record(&mut self, puzzle_index: usize, stars: u8) {
        let entry = self.best.entry(puzzle_index).or_insert(stars);
        *entry = (*entry).max(stars);
    }

    pub fn best(&self, puzzle_index: usize) -> Option<u8> {
        self.best.get(&puzzle_index).copied()
    }

    pub fn solved_count(&self) -> usize {
        self.best.len()
    }

    pub fn total_stars(&self) -> u32 {
        self.best.values().map(|&s| u32::from(s)).sum()
    }

    pub fn summary(&self, catalog_size: usize) -> String {
        format!(
            "Solved {} of {} ({} of {} stars)",
            self.solved_count(),
            catalog_size,
            self.total_stars(),
            catalog_size * MAX_STARS as usize
        )
    }
}
