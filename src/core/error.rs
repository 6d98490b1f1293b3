//! Engine error type.

use super::grid::Position;

/// Errors surfaced by the cascade engine.
///
/// Detection and resolution are total over a well-formed grid, so every
/// variant here comes from construction, configuration, or the cascade cap.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid grid shape: {0}")]
    InvalidGridShape(String),

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("{0:?} cannot be used as a tile symbol")]
    InvalidSymbol(char),

    #[error("position {position} is outside a {size}x{size} grid")]
    OutOfBounds { position: Position, size: usize },

    #[error("cascade did not stabilize within {rounds} rounds")]
    NonTerminatingCascade { rounds: u32 },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
