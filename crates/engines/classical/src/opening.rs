//! A three-ply opening book.
//!
//! Keyed purely on how many moves have been played since the position was
//! loaded, not on the position itself: the book move is returned only if it
//! happens to be legal.

use chess_core::{Move, RulesEngine, Square};
use tracing::debug;

/// (from, to) for plies 0, 1 and 2.
const BOOK: [(&str, &str); 3] = [("e2", "e4"), ("d2", "d4"), ("g1", "f3")];

/// Book move for the current ply, if there is one and it is legal.
pub fn suggest<R: RulesEngine + ?Sized>(pos: &R) -> Option<Move> {
    let ply = pos.ply_history_length();
    let (from, to) = BOOK.get(ply)?;
    let from: Square = from.parse().ok()?;
    let to: Square = to.parse().ok()?;

    let mv = pos
        .legal_moves(Some(from))
        .into_iter()
        .find(|m| m.to == to);
    match &mv {
        Some(m) => debug!(ply, mv = %m, "book move"),
        None => debug!(ply, "book move not legal here"),
    }
    mv
}

#[cfg(test)]
#[path = "opening_tests.rs"]
mod opening_tests;
