//! # tile-cascade
//!
//! A match-three cascade resolution engine for square tile grids.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: Every step takes a `Grid`/`BoardState` and
//!    returns a new one. Grids use `im-rs` vectors, so copies are cheap.
//!
//! 2. **Injectable Randomness**: Refills are the only random step and go
//!    through [`SymbolSource`]. Seed a [`TileRng`] or script the draws with
//!    [`ScriptedSource`] for reproducible cascades.
//!
//! 3. **Bounded Cascades**: The detect/resolve/refill loop is iterative and
//!    capped; a board that never settles is an error, not a hang.
//!
//! ## Modules
//!
//! - `core`: Elements, grids, board state, RNG, configuration, errors
//! - `matching`: Run-length match detection and shape templates
//! - `resolve`: Match removal, gravity, scoring, and refills
//! - `cascade`: The fixed-point loop tying it all together
//!
//! ## Example
//!
//! ```
//! use tile_cascade::{BoardState, CascadeEngine, EngineConfig, Position};
//!
//! let mut engine = CascadeEngine::from_config(&EngineConfig::default().with_seed(7)).unwrap();
//! let board: BoardState = engine.new_board(8).unwrap();
//!
//! // The caller owns the live state and swaps in whatever comes back.
//! let board = engine
//!     .swap_and_resolve(&board, Position::new(0, 0), Position::new(0, 1))
//!     .unwrap();
//! assert!(board.grid().is_full());
//! ```

pub mod cascade;
pub mod core;
pub mod matching;
pub mod resolve;

// Re-export commonly used types
pub use crate::core::{
    Alphabet, BoardState, Element, EngineConfig, EngineError, Grid, Position, Result,
    ScriptedSource, Symbol, SymbolSource, TileRng, TileRngState,
};

pub use crate::matching::{
    default_patterns, find_matches, find_pattern_matches, Axis, Match, Pattern, PatternMatch,
    MIN_MATCH_LENGTH,
};

pub use crate::resolve::{apply_gravity, fill_empty, mark_cleared, remove_matches, score_delta};

pub use crate::cascade::{
    process_cascade, run_cascade, CascadeEngine, CascadeReport, CascadeRound, CascadeStatus,
};
