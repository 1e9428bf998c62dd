//! Standard algebraic notation for generated moves.

use cozy_chess as cz;

use crate::board::{has_moves, piece_kind, square};

/// Render `mv` in SAN. `siblings` is the full legal move list of `board`,
/// used for disambiguation.
pub(crate) fn notation(
    board: &cz::Board,
    piece: cz::Piece,
    mv: cz::Move,
    castle: bool,
    capture: bool,
    siblings: &[(cz::Piece, cz::Move)],
) -> String {
    let mut san = String::with_capacity(8);
    let from = square(mv.from);

    if castle {
        let king_side = (mv.to.file() as u8) > (mv.from.file() as u8);
        san.push_str(if king_side { "O-O" } else { "O-O-O" });
    } else {
        match piece_kind(piece).san_letter() {
            None => {
                if capture {
                    san.push(from.file_char());
                }
            }
            Some(letter) => {
                san.push(letter);
                disambiguate(&mut san, piece, mv, siblings);
            }
        }
        if capture {
            san.push('x');
        }
        san.push_str(&square(mv.to).to_string());
        if let Some(letter) = mv.promotion.and_then(|p| piece_kind(p).san_letter()) {
            san.push('=');
            san.push(letter);
        }
    }

    let mut after = board.clone();
    after.play(mv);
    if !after.checkers().is_empty() {
        san.push(if has_moves(&after) { '+' } else { '#' });
    }
    san
}

fn disambiguate(
    san: &mut String,
    piece: cz::Piece,
    mv: cz::Move,
    siblings: &[(cz::Piece, cz::Move)],
) {
    let rivals: Vec<cz::Square> = siblings
        .iter()
        .filter(|(p, m)| *p == piece && m.to == mv.to && m.from != mv.from)
        .map(|(_, m)| m.from)
        .collect();
    if rivals.is_empty() {
        return;
    }

    let from = square(mv.from);
    let shares_file = rivals.iter().any(|s| s.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|s| s.rank() == mv.from.rank());
    if !shares_file {
        san.push(from.file_char());
    } else if !shares_rank {
        san.push(from.rank_char());
    } else {
        san.push(from.file_char());
        san.push(from.rank_char());
    }
}
