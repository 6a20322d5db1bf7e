//! Parsing of the trainer's line commands.

use chess_core::coord_to_sq;
use puzzle_core::Square;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click (select, deselect or move to) a square.
    Click(Square),
    /// Drag a piece from one square and drop it on another.
    Drag { from: Square, to: Square },
    Hint,
    Next,
    Retry,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command \"{0}\" (try \"help\")")]
    Unknown(String),
    #[error("\"{0}\" is not a square")]
    BadSquare(String),
    #[error("{0} needs {1}")]
    MissingArgument(&'static str, &'static str),
}

pub const HELP: &str = "\
commands:
  click <sq>          select a piece, or move the selected piece to <sq>
  drag <from> <to>    drag a piece and drop it (also: e2e4, e2 e4)
  <sq>                same as click <sq>
  hint                reveal the next solution move (costs a star)
  next                go to the next puzzle once this one is solved
  retry               restart the current puzzle
  show                print the board and status
  help                this text
  quit                leave the trainer";

fn square(token: &str) -> Result<Square, CommandError> {
    coord_to_sq(token).ok_or_else(|| CommandError::BadSquare(token.to_string()))
}

fn arg<'a>(
    parts: &[&'a str],
    i: usize,
    cmd: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    parts.get(i).copied().ok_or(CommandError::MissingArgument(cmd, what))
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Err(CommandError::Empty);
    };

    match head.to_ascii_lowercase().as_str() {
        "click" | "c" => Ok(Command::Click(square(arg(&parts, 1, "click", "a square")?)?)),
        "drag" | "d" | "move" => Ok(Command::Drag {
            from: square(arg(&parts, 1, "drag", "two squares")?)?,
            to: square(arg(&parts, 2, "drag", "two squares")?)?,
        }),
        "hint" | "h" => Ok(Command::Hint),
        "next" | "n" => Ok(Command::Next),
        "retry" | "r" => Ok(Command::Retry),
        "show" | "s" | "board" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        // Bare coordinates: "e2", "e2 e4" or "e2e4".
        token => match (token.len(), parts.get(1)) {
            (2, None) => Ok(Command::Click(square(token)?)),
            (2, Some(to)) => Ok(Command::Drag {
                from: square(token)?,
                to: square(to)?,
            }),
            (4, None) if token.is_ascii() => Ok(Command::Drag {
                from: square(&token[..2])?,
                to: square(&token[2..])?,
            }),
            _ => Err(CommandError::Unknown(head.to_string())),
        },
    }
}
