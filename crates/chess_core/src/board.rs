use crate::error::FenError;
use crate::movegen::legal_moves;
use crate::types::*;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

/// Outcome of a position from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    FiftyMoveDraw,
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Position {
    pub const STARTPOS_FEN: &'static str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: true,
                wq: true,
                bk: true,
                bq: true,
            },
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Parse Forsyth-Edwards Notation. The move counters are optional and
    /// default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = [None; 64];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let piece = Piece::from_fen_char(ch).ok_or(FenError::PieceChar(ch))?;
                    let s = sq(file, rank).ok_or(FenError::RankWidth {
                        rank: rank as u8 + 1,
                    })?;
                    board[s as usize] = Some(piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth {
                        rank: rank as u8 + 1,
                    });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank as u8 + 1,
                });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::default();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::CastlingChar(c)),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            coord => Some(coord_to_sq(coord).ok_or_else(|| FenError::EnPassant(coord.to_string()))?),
        };

        let counter = |s: &str| s.parse::<u32>().map_err(|_| FenError::Counter(s.to_string()));
        let halfmove_clock = counter(parts.get(4).copied().unwrap_or("0"))?;
        let fullmove_number = counter(parts.get(5).copied().unwrap_or("1"))?;

        let pos = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        };
        for color in [Color::White, Color::Black] {
            if pos.king_sq(color).is_none() {
                return Err(FenError::MissingKing(color));
            }
        }
        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let s = (rank * 8 + file) as u8;
                match self.piece_at(s) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(self.side_to_move.fen_char());
        out.push(' ');

        let c = &self.castling;
        let rights: String = [(c.wk, 'K'), (c.wq, 'Q'), (c.bk, 'k'), (c.bq, 'q')]
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, ch)| *ch)
            .collect();
        out.push_str(if rights.is_empty() { "-" } else { &rights });

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }
        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&s| self.piece_at(s) == Some(Piece::new(c, PieceKind::King)))
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    /// Classify the position for the side to move.
    pub fn status(&self) -> GameStatus {
        if legal_moves(self).is_empty() {
            return if self.in_check(self.side_to_move) {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }
        if self.halfmove_clock >= 100 {
            return GameStatus::FiftyMoveDraw;
        }
        if self.is_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }
        GameStatus::Ongoing
    }

    /// Bare kings, or a king with one minor piece against a bare king.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for pc in self.board.iter().flatten() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors += 1,
                _ => return false,
            }
        }
        minors <= 1
    }

    fn piece_on_ray(&self, target: u8, df: i8, dr: i8) -> Option<Piece> {
        let mut f = file_of(target) + df;
        let mut r = rank_of(target) + dr;
        while let Some(s) = sq(f, r) {
            if let Some(pc) = self.piece_at(s) {
                return Some(pc);
            }
            f += df;
            r += dr;
        }
        None
    }

    fn any_piece_at_offsets(&self, target: u8, deltas: &[(i8, i8)], want: Piece) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);
        deltas
            .iter()
            .filter_map(|(df, dr)| sq(tf + df, tr + dr))
            .any(|s| self.piece_at(s) == Some(want))
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        // Pawns attack diagonally forward, so look one rank behind the target.
        let pawn_deltas: [(i8, i8); 2] = match by {
            Color::White => [(-1, -1), (1, -1)],
            Color::Black => [(-1, 1), (1, 1)],
        };
        if self.any_piece_at_offsets(target, &pawn_deltas, Piece::new(by, PieceKind::Pawn))
            || self.any_piece_at_offsets(target, &KNIGHT_DELTAS, Piece::new(by, PieceKind::Knight))
            || self.any_piece_at_offsets(target, &KING_DELTAS, Piece::new(by, PieceKind::King))
        {
            return true;
        }

        let slider_hits = |dirs: &[(i8, i8)], kind: PieceKind| {
            dirs.iter().any(|&(df, dr)| {
                matches!(self.piece_on_ray(target, df, dr),
                    Some(pc) if pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen))
            })
        };
        slider_hits(&DIAGONALS, PieceKind::Bishop) || slider_hits(&ORTHOGONALS, PieceKind::Rook)
    }

    /// Play `mv` without legality checks. Returns `None` (leaving the position
    /// untouched) if the from-square is empty.
    pub fn make_move(&mut self, mv: Move) -> Option<Undo> {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from)?;
        let mut captured = self.piece_at(to);
        let undo_castling = self.castling.clone();
        let undo_ep = self.en_passant;
        let undo_hmc = self.halfmove_clock;
        let undo_fmn = self.fullmove_number;

        self.en_passant = None;
        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let behind = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(to), rank_of(to) + behind) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        self.set_piece(from, None);
        let landed = if moved.kind == PieceKind::Pawn && rank_of(to) == moved.color.promotion_rank() {
            Piece::new(moved.color, mv.promo.unwrap_or(PieceKind::Queen))
        } else {
            moved
        };
        self.set_piece(to, Some(landed));

        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            let rook_squares = match (from, to) {
                (4, 6) => Some((7, 5)),
                (4, 2) => Some((0, 3)),
                (60, 62) => Some((63, 61)),
                (60, 58) => Some((56, 59)),
                _ => None,
            };
            if let Some((rf, rt)) = rook_squares
                && let Some(rook) = self.piece_at(rf)
            {
                self.set_piece(rf, None);
                self.set_piece(rt, Some(rook));
                rook_move = Some((rf, rt));
            }
        }

        if moved.kind == PieceKind::King {
            match moved.color {
                Color::White => {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                Color::Black => {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
            }
        }
        // A rook leaving or being captured on its home corner loses the right.
        for corner in [from, to] {
            match corner {
                0 => self.castling.wq = false,
                7 => self.castling.wk = false,
                56 => self.castling.bq = false,
                63 => self.castling.bk = false,
                _ => {}
            }
        }

        if moved.kind == PieceKind::Pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Some(Undo {
            captured,
            castling: undo_castling,
            en_passant: undo_ep,
            halfmove_clock: undo_hmc,
            fullmove_number: undo_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        })
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // Restoring the recorded piece also reverts promotions.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));

        match undo.ep_captured_sq {
            Some(cs) => self.set_piece(cs, undo.captured),
            None => self.set_piece(mv.to, undo.captured),
        }
    }
}
