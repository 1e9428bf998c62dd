//! Classical Chess Engine
//!
//! Minimax search with alpha-beta pruning over a material and
//! piece-square-table evaluation, plus the difficulty table and the
//! three-ply opening book that sit alongside it.

pub mod difficulty;
pub mod eval;
pub mod opening;
pub mod search;

use std::time::Duration;

use chess_core::{Engine, Move, RulesEngine, RulesError, SearchLimits, SearchResult, TimeControl};

pub use difficulty::{resolve, DifficultyProfile, DEFAULT_PROFILE, PROFILES};
pub use eval::{evaluate, CHECK_PENALTY, MATE_SCORE};
pub use opening::suggest;
pub use search::{minimax, pick_best_move, SearchOutcome};

/// Best move for the side to move within `depth` plies and `time_budget`.
///
/// Returns `None` when there are no legal moves.
pub fn best_move<R: RulesEngine + ?Sized>(
    pos: &mut R,
    depth: u8,
    time_budget: Duration,
) -> Result<Option<Move>, RulesError> {
    let tc = TimeControl::new(Some(time_budget));
    tc.start();
    let outcome = pick_best_move(pos, depth, &tc)?;
    Ok(outcome.best_move.map(|(mv, _)| mv))
}

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// Stateless between searches apart from the statistics of the last one.
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(
        &mut self,
        pos: &mut dyn RulesEngine,
        limits: &SearchLimits,
    ) -> Result<SearchResult, RulesError> {
        limits.start();

        let outcome = pick_best_move(pos, limits.depth, &limits.time_control)?;
        self.nodes = outcome.nodes;

        Ok(SearchResult {
            score: outcome.best_move.as_ref().map(|(_, s)| *s).unwrap_or(0),
            best_move: outcome.best_move.map(|(mv, _)| mv),
            depth: limits.depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        })
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
