use std::path::PathBuf;

use chess_core::RulesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("search task failed: {0}")]
    Task(String),
}
