//! Move notation: long algebraic (UCI) and Standard Algebraic Notation.

use crate::{board::Position, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = sq_to_coord(mv.from);
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.letter().to_ascii_lowercase());
    }
    s
}

/// Resolve a UCI string against the legal moves so castle/en-passant flags are
/// filled in. A missing promotion suffix means queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if !txt.is_ascii() || txt.len() < 4 {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        Some(ch) => Some(PieceKind::from_letter(ch)?),
        None => None,
    };

    legal_moves(pos).into_iter().find(|m| {
        m.from == from
            && m.to == to
            && (m.promo.is_none() || m.promo == promo.or(Some(PieceKind::Queen)))
    })
}

/// SAN for `mv`, which must be legal in `pos`. Includes the `+`/`#` suffix.
pub fn move_to_san(pos: &Position, mv: Move) -> String {
    let mut san = san_body(pos, mv, &legal_moves(pos));

    let mut after = pos.clone();
    if after.make_move(mv).is_some() && after.in_check(after.side_to_move) {
        if legal_moves(&after).is_empty() {
            san.push('#');
        } else {
            san.push('+');
        }
    }
    san
}

/// Find the legal move written as `token` in SAN. Check, mate and annotation
/// suffixes are ignored, as is the `=` before a promotion piece.
pub fn parse_san(pos: &Position, token: &str) -> Option<Move> {
    let wanted = normalize_san(token);
    if wanted.is_empty() {
        return None;
    }
    let moves = legal_moves(pos);
    moves
        .iter()
        .copied()
        .find(|&mv| normalize_san(&san_body(pos, mv, &moves)) == wanted)
}

fn normalize_san(token: &str) -> String {
    token
        .trim()
        .trim_end_matches(['+', '#', '!', '?'])
        .replace('0', "O")
        .replace('=', "")
}

// SAN without check suffix; `legal` is the full legal move list of `pos`
// and is used for disambiguation.
fn san_body(pos: &Position, mv: Move, legal: &[Move]) -> String {
    let Some(piece) = pos.piece_at(mv.from) else {
        return move_to_uci(mv);
    };

    if mv.is_castle {
        return if mv.to > mv.from { "O-O" } else { "O-O-O" }.to_string();
    }

    let is_capture = pos.piece_at(mv.to).is_some() || mv.is_en_passant;
    let mut san = String::new();

    if piece.kind == PieceKind::Pawn {
        if is_capture {
            san.push((b'a' + file_of(mv.from) as u8) as char);
        }
    } else {
        san.push(piece.kind.letter());

        let rivals: Vec<&Move> = legal
            .iter()
            .filter(|m| {
                m.to == mv.to && m.from != mv.from && pos.piece_at(m.from) == Some(piece)
            })
            .collect();
        if !rivals.is_empty() {
            let coord = sq_to_coord(mv.from);
            let shares_file = rivals.iter().any(|m| file_of(m.from) == file_of(mv.from));
            let shares_rank = rivals.iter().any(|m| rank_of(m.from) == rank_of(mv.from));
            if !shares_file {
                san.push_str(&coord[..1]);
            } else if !shares_rank {
                san.push_str(&coord[1..]);
            } else {
                san.push_str(&coord);
            }
        }
    }

    if is_capture {
        san.push('x');
    }
    san.push_str(&sq_to_coord(mv.to));

    if let Some(promo) = mv.promo {
        san.push('=');
        san.push(promo.letter());
    }
    san
}
