//! Chess board widget rendering

use crate::styles::{self, SQUARE_SIZE};
use iced::widget::{column, container, mouse_area, row, text};
use iced::{Color, Element, Length};
use puzzle_core::{PuzzleSession, RulesEngine};

/// Message type for board interactions
///
/// A click is a press and a release on the same square; a drag is a press on
/// one square and a release on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMessage {
    Pressed(u8),
    Released(u8),
}

/// Renders the session's position with the selection overlay
pub struct BoardView<'a> {
    session: &'a PuzzleSession,
    flipped: bool,
    dragging: Option<u8>,
}

impl<'a> BoardView<'a> {
    pub fn new(session: &'a PuzzleSession, flipped: bool, dragging: Option<u8>) -> Self {
        Self {
            session,
            flipped,
            dragging,
        }
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for rank in 0..8 {
            let display_rank = if self.flipped { rank } else { 7 - rank };
            let mut rank_row = row![].spacing(0);

            for file in 0..8 {
                let display_file = if self.flipped { 7 - file } else { file };
                let sq = (display_rank * 8 + display_file) as u8;
                rank_row = rank_row.push(self.render_square(sq, display_rank, display_file));
            }

            board_column = board_column.push(rank_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.3, 0.3, 0.3),
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, sq: u8, rank: usize, file: usize) -> Element<'a, BoardMessage> {
        let selection = self.session.selection();
        let is_light = (rank + file) % 2 == 1;
        let mut bg_color = if is_light {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        if selection.square() == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        }
        if let Some((from, to)) = self.session.state().last_move
            && (sq == from || sq == to)
        {
            bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
        }
        if self.dragging == Some(sq) {
            bg_color = blend_colors(bg_color, styles::DRAG_SOURCE);
        }

        let piece = self.session.engine().occupant_at(sq);
        let content: Element<'a, BoardMessage> = match piece {
            Some(p) => text(styles::piece_char(p.color, p.kind))
                .size(SQUARE_SIZE * 0.75)
                .color(Color::BLACK)
                .center()
                .into(),
            None if selection.is_target(sq) => text("●")
                .size(SQUARE_SIZE * 0.3)
                .color(styles::TARGET_DOT)
                .center()
                .into(),
            None => text("").into(),
        };

        let square = container(content)
            .width(SQUARE_SIZE)
            .height(SQUARE_SIZE)
            .center_x(Length::Fixed(SQUARE_SIZE))
            .center_y(Length::Fixed(SQUARE_SIZE))
            .style(move |_theme| container::Style {
                background: Some(iced::Background::Color(bg_color)),
                ..Default::default()
            });

        mouse_area(square)
            .on_press(BoardMessage::Pressed(sq))
            .on_release(BoardMessage::Released(sq))
            .into()
    }
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
