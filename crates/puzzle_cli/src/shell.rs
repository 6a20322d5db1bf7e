//! Line-driven trainer loop over any reader and writer.

use std::io::{self, BufRead, Write};

use chess_core::Color;
use puzzle_core::{PuzzleSession, RulesEngine, SessionEvent};
use tracing::debug;

use crate::command::{Command, CommandError, HELP, parse_command};
use crate::render::{ascii_board, describe_event};

pub struct Shell<W: Write> {
    session: PuzzleSession,
    out: W,
    /// One JSON object per session event instead of text.
    json: bool,
    flip_for_black: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(session: PuzzleSession, out: W, json: bool, flip_for_black: bool) -> Self {
        Self {
            session,
            out,
            json,
            flip_for_black,
        }
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.flush_events()?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(CommandError::Empty) => {}
                Err(e) => {
                    debug!(line = %line.trim(), error = %e, "bad command");
                    if self.json {
                        let error = serde_json::json!({ "event": "error", "message": e.to_string() });
                        writeln!(self.out, "{error}")?;
                    } else {
                        writeln!(self.out, "error: {e}")?;
                    }
                }
            }
        }

        if !self.json {
            let size = self.session.catalog().len();
            writeln!(self.out, "{}", self.session.scoreboard().summary(size))?;
        }
        self.out.flush()
    }

    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Click(sq) => self.session.on_square_interacted(sq),
            Command::Drag { from, to } => {
                self.session.on_drop(from, to);
                self.session.on_drag_settled();
            }
            Command::Hint => {
                if self.session.request_hint().is_none() && !self.json {
                    writeln!(self.out, "No hints left for this puzzle.")?;
                }
            }
            Command::Next => {
                if self.session.advance_visible() {
                    self.session.advance_to_next();
                } else if !self.json {
                    writeln!(self.out, "Solve this puzzle first (or \"retry\").")?;
                }
            }
            Command::Retry => self.session.load_puzzle(self.session.current_index()),
            Command::Show => {
                if !self.json {
                    self.print_status()?;
                    self.print_board()?;
                }
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => {}
        }
        self.flush_events()
    }

    /// Write out everything the session produced. Text mode prints the board
    /// once per batch, after the messages, if anything asked for a redraw.
    fn flush_events(&mut self) -> io::Result<()> {
        let events = self.session.drain_events();
        if self.json {
            for event in &events {
                let line = serde_json::to_string(event).map_err(io::Error::other)?;
                writeln!(self.out, "{line}")?;
            }
            return self.out.flush();
        }

        let mut redraw = false;
        for event in &events {
            if let Some(text) = describe_event(event) {
                writeln!(self.out, "{text}")?;
            }
            if matches!(event, SessionEvent::PuzzleLoaded { .. }) {
                self.print_status()?;
            }
            redraw |= matches!(event, SessionEvent::Render { .. });
        }
        if redraw {
            self.print_board()?;
        }
        self.out.flush()
    }

    fn print_status(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{} | {} | {}",
            self.session.progress_text(),
            self.session.status_line(),
            self.session.stars_text()
        )
    }

    fn print_board(&mut self) -> io::Result<()> {
        let flipped = self.flip_for_black
            && Color::from(self.session.current_puzzle().side_to_move) == Color::Black;
        let board = ascii_board(self.session.engine(), self.session.selection(), flipped);
        writeln!(self.out, "{board}")?;
        writeln!(self.out, "{} to move", self.session.engine().current_turn())
    }
}
