use crate::board::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Position};
use crate::types::*;

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Legal moves of the piece standing on `from` (empty if the square is empty
/// or holds a piece of the side not to move).
pub fn legal_moves_from(pos: &Position, from: u8) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::new();
    if let Some(pc) = pos.piece_at(from)
        && pc.color == pos.side_to_move
    {
        piece_moves(pos, from, pc, &mut out);
    }
    retain_legal(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    for from in 0..64u8 {
        if let Some(pc) = pos.piece_at(from)
            && pc.color == pos.side_to_move
        {
            piece_moves(pos, from, pc, out);
        }
    }
    retain_legal(pos, out);
}

// Drop moves that leave the mover's own king attacked.
fn retain_legal(pos: &mut Position, moves: &mut Vec<Move>) {
    let mover = pos.side_to_move;
    moves.retain(|&mv| match pos.make_move(mv) {
        Some(undo) => {
            let illegal = pos.in_check(mover);
            pos.unmake_move(mv, undo);
            !illegal
        }
        None => false,
    });
}

fn piece_moves(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
        PieceKind::Knight => gen_steps(pos, from, pc.color, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(pos, from, pc.color, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(pos, from, pc.color, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(pos, from, pc.color, &DIAGONALS, out);
            gen_slider(pos, from, pc.color, &ORTHOGONALS, out);
        }
        PieceKind::King => {
            gen_steps(pos, from, pc.color, &KING_DELTAS, out);
            gen_castle(pos, from, pc.color, out);
        }
    }
}

fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    if rank_of(to) == c.promotion_rank() {
        out.extend(PROMOTIONS.iter().map(|&pk| Move::with_promo(from, to, pk)));
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let (dir, start_rank): (i8, i8) = match c {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };

    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, c, out);
        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, c, out),
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for (df, dr) in dirs {
        let mut f = file_of(from) + df;
        let mut r = rank_of(from) + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    // (king_from, right, king_to, squares that must be empty, squares that must be safe)
    let options: [(u8, bool, u8, &[u8], &[u8]); 2] = match c {
        Color::White => [
            (4, pos.castling.wk, 6, &[5, 6], &[5, 6]),
            (4, pos.castling.wq, 2, &[1, 2, 3], &[2, 3]),
        ],
        Color::Black => [
            (60, pos.castling.bk, 62, &[61, 62], &[61, 62]),
            (60, pos.castling.bq, 58, &[57, 58, 59], &[58, 59]),
        ],
    };
    if pos.in_check(c) {
        return;
    }
    let enemy = c.other();
    for (king_from, allowed, king_to, empty, safe) in options {
        if from != king_from || !allowed {
            continue;
        }
        if empty.iter().all(|&s| pos.piece_at(s).is_none())
            && safe.iter().all(|&s| !pos.is_square_attacked(s, enemy))
        {
            let mut mv = Move::new(from, king_to);
            mv.is_castle = true;
            out.push(mv);
        }
    }
}
