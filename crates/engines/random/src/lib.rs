//! Random Move Chess Engine
//!
//! Picks uniformly among the legal moves. Serves as the fallback opponent
//! and as a baseline any searching engine should beat.

use chess_core::{Engine, Move, RulesEngine, RulesError, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod lib_tests;

/// A uniformly random legal move, or `None` if there are none.
///
/// The random source is supplied by the caller so results can be
/// reproduced with a seeded generator.
pub fn random_legal_move<R, G>(pos: &R, rng: &mut G) -> Option<Move>
where
    R: RulesEngine + ?Sized,
    G: Rng + ?Sized,
{
    pos.legal_moves(None).choose(rng).cloned()
}

/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Deterministic engine: the same seed replays the same choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(
        &mut self,
        pos: &mut dyn RulesEngine,
        _limits: &SearchLimits,
    ) -> Result<SearchResult, RulesError> {
        self.nodes = 1;
        let best_move = random_legal_move(&*pos, &mut self.rng);

        Ok(SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
