//! Static position evaluation: material plus piece-square tables.
//!
//! Scores are in centipawns from White's perspective (positive favours
//! White), regardless of who is to move.

use chess_core::{Color, PieceKind, RulesEngine, Square};

/// Score of a position in which the side to move has been mated.
pub const MATE_SCORE: i32 = 10_000;

/// Penalty applied to the side to move when it is in check.
pub const CHECK_PENALTY: i32 = 50;

pub const DRAW_SCORE: i32 = 0;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 20_000];

/// Piece-square table; row 0 is White's far side (rank 8), column 0 is the a-file.
type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN_TABLE: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [ 5,  5, 10, 25, 25, 10,  5,  5],
    [ 0,  0,  0, 20, 20,  0,  0,  0],
    [ 5, -5,-10,  0,  0,-10, -5,  5],
    [ 5, 10, 10,-20,-20, 10, 10,  5],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: Table = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_TABLE: Table = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const ROOK_TABLE: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: Table = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

// Middlegame king: stay behind the pawns, prefer a castled corner.
#[rustfmt::skip]
const KING_TABLE: Table = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

/// Indexed by PieceKind::idx().
const TABLES: [&Table; 6] = [
    &PAWN_TABLE,
    &KNIGHT_TABLE,
    &BISHOP_TABLE,
    &ROOK_TABLE,
    &QUEEN_TABLE,
    &KING_TABLE,
];

/// Evaluates the position from White's perspective.
///
/// - Checkmate: `-MATE_SCORE` if White is mated, `+MATE_SCORE` if Black is
/// - Stalemate and other draws: `DRAW_SCORE`
/// - Otherwise material + piece-square bonuses, minus `CHECK_PENALTY` for
///   the side in check
pub fn evaluate<R: RulesEngine + ?Sized>(pos: &R) -> i32 {
    let side = pos.side_to_move();

    if pos.is_checkmate() {
        return match side {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }
    if pos.is_draw() || pos.is_stalemate() {
        return DRAW_SCORE;
    }

    let mut score = 0i32;
    for sq in Square::all() {
        if let Some(pc) = pos.piece_at(sq) {
            let v = piece_value(pc.kind) + positional_value(pc.kind, pc.color, sq);
            score += if pc.color == Color::White { v } else { -v };
        }
    }

    if pos.is_in_check() {
        score += match side {
            Color::White => -CHECK_PENALTY,
            Color::Black => CHECK_PENALTY,
        };
    }
    score
}

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Piece-square bonus for `kind` of `color` standing on `sq`.
///
/// White reads the tables as printed; Black reads them flipped top to bottom.
#[inline]
pub fn positional_value(kind: PieceKind, color: Color, sq: Square) -> i32 {
    let row = (7 - sq.rank()) as usize;
    let row = match color {
        Color::White => row,
        Color::Black => 7 - row,
    };
    TABLES[kind.idx()][row][sq.file() as usize]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
