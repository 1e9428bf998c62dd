//! A configured computer opponent.

use std::sync::Arc;

use chess_core::{Clock, Engine, Game, Move, RulesEngine, RulesError, SystemClock};
use classical_engine::{ClassicalEngine, DifficultyProfile};
use random_engine::RandomEngine;
use tracing::{debug, info};

use crate::config::{AiConfig, EngineKind};
use crate::error::AiError;

/// Create an engine instance for the configured kind.
fn create_engine(config: &AiConfig) -> Box<dyn Engine> {
    match config.engine {
        EngineKind::Classical => Box::new(ClassicalEngine::new()),
        EngineKind::Random => match config.seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}

/// Picks moves for one side according to an [`AiConfig`].
///
/// With the opening book enabled, book moves take priority over search.
pub struct ChessAi {
    config: AiConfig,
    profile: DifficultyProfile,
    engine: Box<dyn Engine>,
    clock: Arc<dyn Clock>,
}

impl ChessAi {
    pub fn new(config: AiConfig) -> Self {
        let profile = classical_engine::resolve(&config.difficulty);
        let engine = create_engine(&config);
        info!(
            engine = engine.name(),
            difficulty = profile.name,
            opening_book = config.opening_book,
            "opponent ready"
        );
        Self {
            config,
            profile,
            engine,
            clock: Arc::new(SystemClock),
        }
    }

    /// Measure search budgets against `clock` instead of the system clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// The difficulty actually in effect (unknown names resolve to medium).
    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn engine_author(&self) -> &str {
        self.engine.author()
    }

    pub fn set_difficulty(&mut self, name: &str) {
        self.config.difficulty = name.to_string();
        self.profile = classical_engine::resolve(name);
    }

    pub fn set_opening_book(&mut self, enabled: bool) {
        self.config.opening_book = enabled;
    }

    pub fn set_engine(&mut self, kind: EngineKind) {
        if self.config.engine != kind {
            self.config.engine = kind;
            self.engine = create_engine(&self.config);
        }
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Move for the side to move in `fen`, or `None` if the game is over.
    pub fn choose_move(&mut self, fen: &str) -> Result<Option<Move>, AiError> {
        let mut game = Game::from_fen(fen)?;
        Ok(self.choose_move_in(&mut game)?)
    }

    /// Like [`choose_move`](Self::choose_move) on a live position.
    ///
    /// The position is unchanged when this returns, including on error.
    pub fn choose_move_in(&mut self, pos: &mut dyn RulesEngine) -> Result<Option<Move>, RulesError> {
        if self.config.opening_book {
            if let Some(mv) = classical_engine::suggest(&*pos) {
                return Ok(Some(mv));
            }
        }

        let limits = self.profile.limits().with_clock(Arc::clone(&self.clock));
        let result = self.engine.search(pos, &limits)?;
        debug!(
            engine = self.engine.name(),
            difficulty = self.profile.name,
            mv = ?result.best_move.as_ref().map(Move::uci),
            score = result.score,
            nodes = result.nodes,
            stopped = result.stopped,
            "move chosen"
        );
        Ok(result.best_move)
    }
}

impl Default for ChessAi {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

impl std::fmt::Debug for ChessAi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChessAi")
            .field("config", &self.config)
            .field("profile", &self.profile)
            .field("engine", &self.engine.name())
            .finish()
    }
}

#[cfg(test)]
#[path = "opponent_tests.rs"]
mod opponent_tests;
