//! Engine configuration.
//!
//! Callers describe the board they want at startup:
//! - board side length
//! - refill alphabet
//! - cascade round cap
//! - RNG seed
//!
//! ```
//! use tile_cascade::core::{Alphabet, EngineConfig};
//!
//! let config = EngineConfig::default()
//!     .with_board_size(6)
//!     .with_alphabet(Alphabet::from_glyphs("RGBY").unwrap())
//!     .with_seed(99);
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::element::Alphabet;
use super::error::{EngineError, Result};

/// Board size used by the default config.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Round cap used by the default config.
pub const DEFAULT_MAX_CASCADE_ROUNDS: u32 = 1_000;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length `N` of the square board.
    pub board_size: usize,

    /// Symbols drawn when refilling.
    pub alphabet: Alphabet,

    /// Maximum resolve rounds per cascade. `None` for unbounded.
    pub max_cascade_rounds: Option<u32>,

    /// Seed for the refill RNG.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            alphabet: Alphabet::default(),
            max_cascade_rounds: Some(DEFAULT_MAX_CASCADE_ROUNDS),
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the refill alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the cascade round cap.
    #[must_use]
    pub fn with_max_cascade_rounds(mut self, rounds: Option<u32>) -> Self {
        self.max_cascade_rounds = rounds;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the config for values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(EngineError::InvalidConfig("board_size must be at least 1".into()));
        }
        if self.max_cascade_rounds == Some(0) {
            return Err(EngineError::InvalidConfig(
                "max_cascade_rounds must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }
}
