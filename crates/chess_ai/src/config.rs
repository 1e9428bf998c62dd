//! Opponent configuration, loadable from TOML.
//!
//! ```toml
//! difficulty = "hard"
//! opening_book = true
//! engine = "classical"
//! seed = 7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// Which engine picks moves once the opening book is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Classical,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// easy / medium / hard / expert; anything else plays as medium
    pub difficulty: String,
    /// Consult the three-ply book before searching
    pub opening_book: bool,
    pub engine: EngineKind,
    /// Seed for the random engine (None = from entropy)
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: classical_engine::DEFAULT_PROFILE.name.to_string(),
            opening_book: false,
            engine: EngineKind::Classical,
            seed: None,
        }
    }
}

impl AiConfig {
    pub fn with_difficulty(difficulty: &str) -> Self {
        Self {
            difficulty: difficulty.to_string(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, AiError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AiError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| AiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
