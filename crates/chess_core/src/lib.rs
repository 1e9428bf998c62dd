//! Chess rules and engine plumbing shared by every engine in the workspace.
//!
//! - [`RulesEngine`]: the contract search and evaluation are written against
//! - [`Game`]: the `cozy-chess` backed implementation of that contract
//! - [`Engine`], [`SearchLimits`], [`TimeControl`]: what engines implement and consume

pub mod board;
pub mod error;
pub mod rules;
mod san;
pub mod time_control;
pub mod types;

pub use board::{Game, STARTPOS_FEN};
pub use error::RulesError;
pub use rules::{MoveScope, RulesEngine};
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by the classical and random engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from White's perspective
    pub score: i32,
    /// Search depth requested
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all chess engines must implement.
///
/// Engines borrow the position exclusively for the duration of a search
/// and must hand it back unchanged.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `limits` - Search limits (depth, time, etc.)
    fn search(
        &mut self,
        pos: &mut dyn RulesEngine,
        limits: &SearchLimits,
    ) -> Result<SearchResult, RulesError>;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "chess-ai"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
