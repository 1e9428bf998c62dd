//! The rules-engine contract consumed by search and evaluation.
//!
//! Engines never look inside a position; they enumerate legal moves, play
//! them forward and back, and ask terminal/check questions through this
//! trait. [`Game`](crate::Game) is the production implementation.

use std::ops::{Deref, DerefMut};

use crate::error::RulesError;
use crate::types::{Color, Move, Piece, Square};

/// Board state, legal move generation and game-end detection.
pub trait RulesEngine {
    /// Replace the current state with a FEN position and clear the history.
    fn load(&mut self, fen: &str) -> Result<(), RulesError>;

    /// All legal moves, optionally only those leaving `from`.
    ///
    /// The order is engine-defined and stable for a given position.
    fn legal_moves(&self, from: Option<Square>) -> Vec<Move>;

    /// Play a legal move, pushing an undo frame.
    fn apply(&mut self, mv: &Move) -> Result<(), RulesError>;

    /// Revert the most recent [`apply`](Self::apply), returning its move.
    fn undo_last(&mut self) -> Result<Move, RulesError>;

    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    /// Stalemate, fifty-move rule, insufficient material or threefold repetition.
    fn is_draw(&self) -> bool;
    fn is_in_check(&self) -> bool;

    fn side_to_move(&self) -> Color;

    /// Number of moves applied since the position was loaded.
    fn ply_history_length(&self) -> usize;

    fn piece_at(&self, sq: Square) -> Option<Piece>;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw() || self.is_stalemate()
    }
}

/// A move applied to a position for the lifetime of the scope.
///
/// Dropping the scope undoes the move, so a search branch leaves the
/// parent position as it found it even when it returns early with `?`.
pub struct MoveScope<'a, R: RulesEngine + ?Sized> {
    pos: &'a mut R,
}

impl<'a, R: RulesEngine + ?Sized> MoveScope<'a, R> {
    pub fn apply(pos: &'a mut R, mv: &Move) -> Result<Self, RulesError> {
        pos.apply(mv)?;
        Ok(Self { pos })
    }
}

impl<R: RulesEngine + ?Sized> Deref for MoveScope<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<R: RulesEngine + ?Sized> DerefMut for MoveScope<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<R: RulesEngine + ?Sized> Drop for MoveScope<'_, R> {
    fn drop(&mut self) {
        // The matching apply succeeded, so there is always a frame to pop.
        let undone = self.pos.undo_last();
        debug_assert!(undone.is_ok(), "MoveScope could not undo its move: {undone:?}");
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
