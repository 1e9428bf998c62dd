use thiserror::Error;

/// Failures raised by a rules engine.
///
/// The search core never recovers from these; they travel up to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    #[error("unparseable move or square `{0}`")]
    InvalidMoveText(String),

    #[error("no move to undo")]
    NothingToUndo,
}
