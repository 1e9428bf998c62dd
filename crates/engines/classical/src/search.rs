//! Minimax search with alpha-beta pruning
//!
//! Moves are searched in the order the rules engine generates them; there
//! is no move ordering, transposition table or quiescence search. The time
//! budget is checked only between root moves: once a root subtree has been
//! entered it is searched to completion.

use chess_core::{Color, Move, MoveScope, RulesEngine, RulesError, TimeControl};
use tracing::{debug, trace};

use crate::eval::evaluate;

/// Bound used in place of an infinite alpha/beta window.
pub const INFINITY: i32 = i32::MAX;

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Best move found and its score from White's perspective
    pub best_move: Option<(Move, i32)>,
    /// Positions visited below the root
    pub nodes: u64,
    /// Root candidates that were fully scored
    pub root_moves_searched: usize,
    /// True if remaining root moves were skipped because time ran out
    pub stopped: bool,
}

/// Searches the position and returns the best move for the side to move.
///
/// Each root candidate is scored with `minimax(depth - 1)` and kept only if
/// strictly better for the mover than the best so far, so ties go to the
/// earliest generated move. After every candidate the time control is
/// consulted; on expiry the best move found so far is returned.
///
/// The position is left exactly as it was given, including on error.
pub fn pick_best_move<R: RulesEngine + ?Sized>(
    pos: &mut R,
    depth: u8,
    tc: &TimeControl,
) -> Result<SearchOutcome, RulesError> {
    let moves = pos.legal_moves(None);
    let mut outcome = SearchOutcome::default();
    if moves.is_empty() {
        return Ok(outcome);
    }

    let mover = pos.side_to_move();
    let mut best_for_mover = i32::MIN;

    for mv in moves {
        let score = {
            let mut child = MoveScope::apply(pos, &mv)?;
            outcome.nodes += 1;
            let maximizing = child.side_to_move() == Color::White;
            minimax(
                &mut *child,
                depth.saturating_sub(1),
                -INFINITY,
                INFINITY,
                maximizing,
                &mut outcome.nodes,
            )?
        };
        outcome.root_moves_searched += 1;
        trace!(mv = %mv, score, "root move scored");

        let relative = for_side(score, mover);
        if relative > best_for_mover {
            best_for_mover = relative;
            outcome.best_move = Some((mv, score));
        }

        if tc.check_time() {
            outcome.stopped = true;
            break;
        }
    }

    debug!(
        best = ?outcome.best_move.as_ref().map(|(m, _)| m.san.as_str()),
        score = outcome.best_move.as_ref().map(|(_, s)| *s),
        nodes = outcome.nodes,
        root_moves = outcome.root_moves_searched,
        elapsed_ms = tc.elapsed().as_millis() as u64,
        budget_ms = ?tc.time_limit().map(|d| d.as_millis() as u64),
        stopped = outcome.stopped,
        "search finished"
    );
    Ok(outcome)
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Scores are from White's perspective: White maximizes, Black minimizes.
/// Leaves (depth 0 or a finished game) are scored by [`evaluate`].
pub fn minimax<R: RulesEngine + ?Sized>(
    pos: &mut R,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> Result<i32, RulesError> {
    if depth == 0 || pos.is_game_over() {
        return Ok(evaluate(pos));
    }

    let moves = pos.legal_moves(None);

    if maximizing {
        let mut best = -INFINITY;
        for mv in &moves {
            let score = {
                let mut child = MoveScope::apply(pos, mv)?;
                *nodes += 1;
                minimax(&mut *child, depth - 1, alpha, beta, false, nodes)?
            };
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = INFINITY;
        for mv in &moves {
            let score = {
                let mut child = MoveScope::apply(pos, mv)?;
                *nodes += 1;
                minimax(&mut *child, depth - 1, alpha, beta, true, nodes)?
            };
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }
}

/// White-perspective score seen from `side`.
#[inline]
fn for_side(score: i32, side: Color) -> i32 {
    match side {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
