//! Move recommendation for a chess position.
//!
//! The free functions take a FEN string and answer one question each:
//! the best move at a difficulty, the opening-book move, or a random legal
//! move. All of them return `Ok(None)` when the side to move has no legal
//! moves and an error only when the FEN itself is malformed.
//!
//! [`ChessAi`] bundles those pieces into a configurable opponent.

pub mod config;
pub mod error;
pub mod opponent;

use chess_core::{Game, Move, RulesError};
use rand::Rng;

pub use config::{AiConfig, EngineKind};
pub use error::AiError;
pub use opponent::ChessAi;

/// Best move for the side to move, searched at the named difficulty.
///
/// Unknown difficulty names play as `"medium"`.
pub fn best_move(fen: &str, difficulty: &str) -> Result<Option<Move>, RulesError> {
    let mut game = Game::from_fen(fen)?;
    let profile = classical_engine::resolve(difficulty);
    classical_engine::best_move(&mut game, profile.depth, profile.time_budget())
}

/// Book move for the position, counting plies from the loaded position.
pub fn suggest_opening_move(fen: &str) -> Result<Option<Move>, RulesError> {
    let game = Game::from_fen(fen)?;
    Ok(classical_engine::suggest(&game))
}

/// A uniformly random legal move, drawn from the thread-local generator.
pub fn random_legal_move(fen: &str) -> Result<Option<Move>, RulesError> {
    random_legal_move_with(fen, &mut rand::thread_rng())
}

pub fn random_legal_move_with<G: Rng + ?Sized>(
    fen: &str,
    rng: &mut G,
) -> Result<Option<Move>, RulesError> {
    let game = Game::from_fen(fen)?;
    Ok(random_engine::random_legal_move(&game, rng))
}

/// [`best_move`] on tokio's blocking pool.
#[cfg(feature = "async")]
pub async fn best_move_async(fen: String, difficulty: String) -> Result<Option<Move>, AiError> {
    let result = tokio::task::spawn_blocking(move || best_move(&fen, &difficulty))
        .await
        .map_err(|e| AiError::Task(e.to_string()))?;
    Ok(result?)
}
