//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::styles::{self, PANEL_WIDTH};

use chess_core::Color;
use iced::widget::{button, column, container, horizontal_rule, row, text, vertical_space};
use iced::{Element, Length, Task, Theme};
use puzzle_core::{DragDecision, DropOutcome, PuzzleSession, SessionEvent};
use tracing::debug;

/// Banner shown under the status line after something noteworthy happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Hint(String),
    HintsExhausted,
    Solved(String),
    AttemptFailed,
    CatalogComplete(String),
}

impl Notice {
    fn color(&self) -> iced::Color {
        match self {
            Notice::Solved(_) | Notice::CatalogComplete(_) => styles::SOLVED_COLOR,
            Notice::AttemptFailed => styles::FAILED_COLOR,
            Notice::Hint(_) | Notice::HintsExhausted => styles::STAR_COLOR,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Hint(san) => write!(f, "Hint: try {san}"),
            Notice::HintsExhausted => write!(f, "No hints left for this puzzle"),
            Notice::Solved(flavor) => write!(f, "Checkmate! {flavor}"),
            Notice::AttemptFailed => write!(f, "Out of moves. The puzzle has been reset."),
            Notice::CatalogComplete(summary) => {
                write!(f, "Every puzzle done! {summary}. Starting over.")
            }
        }
    }
}

/// Main application state
pub struct PuzzleApp {
    session: PuzzleSession,
    /// Orient the board from the side to move when Black plays
    flip_for_black: bool,
    /// Manual flip on top of the automatic orientation
    board_flipped: bool,
    /// Square the mouse went down on
    pressed: Option<u8>,
    /// Square a drag started from, if the controller allowed it
    dragging: Option<u8>,
    notice: Option<Notice>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    Board(BoardMessage),
    Hint,
    Next,
    Retry,
    FlipBoard,
}

impl PuzzleApp {
    pub fn new(session: PuzzleSession, flip_for_black: bool) -> (Self, Task<Message>) {
        let mut app = Self {
            session,
            flip_for_black,
            board_flipped: false,
            pressed: None,
            dragging: None,
            notice: None,
        };
        app.process_events();
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("Mate-in-N Trainer | {}", self.session.progress_text())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::Pressed(sq)) => {
                self.pressed = Some(sq);
                self.dragging = match self.session.on_drag_start(sq) {
                    DragDecision::Allow => Some(sq),
                    DragDecision::Deny => None,
                };
            }

            Message::Board(BoardMessage::Released(sq)) => {
                let pressed = self.pressed.take();
                match self.dragging.take() {
                    Some(from) if from != sq => {
                        if self.session.on_drop(from, sq) == DropOutcome::Accepted {
                            self.notice = None;
                        }
                        self.session.on_drag_settled();
                    }
                    // Press and release on different squares without a drag is ignored.
                    _ if pressed == Some(sq) => self.session.on_square_interacted(sq),
                    _ => {}
                }
            }

            Message::Hint => {
                if self.session.request_hint().is_none() {
                    self.notice = Some(Notice::HintsExhausted);
                }
            }

            Message::Next => {
                self.notice = None;
                self.session.advance_to_next();
            }

            Message::Retry => {
                self.notice = None;
                self.session.load_puzzle(self.session.current_index());
            }

            Message::FlipBoard => {
                self.board_flipped = !self.board_flipped;
            }
        }

        self.process_events();
        Task::none()
    }

    /// Turn controller events into panel notices. The board itself is always
    /// drawn straight from the session, so `Render` needs no bookkeeping.
    fn process_events(&mut self) {
        for event in self.session.drain_events() {
            debug!(?event, "session event");
            match event {
                SessionEvent::HintRevealed { hint, .. } => self.notice = Some(Notice::Hint(hint)),
                SessionEvent::Solved { flavor_text, .. } => {
                    self.notice = Some(Notice::Solved(flavor_text));
                }
                SessionEvent::AttemptFailed { .. } => self.notice = Some(Notice::AttemptFailed),
                SessionEvent::CatalogComplete { puzzles } => {
                    let summary = self.session.scoreboard().summary(puzzles);
                    self.notice = Some(Notice::CatalogComplete(summary));
                }
                SessionEvent::SnapBack { .. } => self.dragging = None,
                SessionEvent::PuzzleLoaded { .. } | SessionEvent::Render { .. } => {}
            }
        }
    }

    /// White at the bottom unless Black is to solve (or the user flipped).
    pub fn is_flipped(&self) -> bool {
        let black_to_solve =
            Color::from(self.session.current_puzzle().side_to_move) == Color::Black;
        (self.flip_for_black && black_to_solve) != self.board_flipped
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.session, self.is_flipped(), self.dragging)
            .view()
            .map(Message::Board);

        row![
            board,
            container(self.control_panel())
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let puzzle = self.session.current_puzzle();

        let progress = text(self.session.progress_text()).size(14);
        let status = text(self.session.status_line()).size(16);
        let stars = text(self.session.stars_text())
            .size(28)
            .color(styles::STAR_COLOR);
        let hints = text(format!(
            "Hints used: {} of {}",
            self.session.hints_used(),
            puzzle.solution_line.len()
        ))
        .size(13);

        let hint_btn = button(text("Hint"))
            .on_press(Message::Hint)
            .style(button::secondary)
            .width(Length::Fill);

        let retry_btn = button(text("Restart puzzle"))
            .on_press(Message::Retry)
            .style(button::secondary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        let mut panel = column![
            progress,
            status,
            stars,
            hints,
            vertical_space().height(10),
            hint_btn,
            retry_btn,
            flip_btn,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
        ]
        .spacing(5);

        if let Some(notice) = &self.notice {
            panel = panel.push(text(notice.to_string()).size(15).color(notice.color()));
        }

        if self.session.advance_visible() {
            panel = panel.push(vertical_space().height(10)).push(
                button(text("Next puzzle"))
                    .on_press(Message::Next)
                    .style(button::primary)
                    .width(Length::Fill),
            );
        }

        panel = panel
            .push(vertical_space().height(20))
            .push(text(self.session.scoreboard().summary(self.session.catalog().len())).size(13));

        panel.into()
    }
}
