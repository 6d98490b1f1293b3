//! The cascade loop.
//!
//! A swap can set off a chain: clearing a match drops tiles and pulls in
//! fresh ones, which may form new matches. [`CascadeEngine`] repeats
//! detect, resolve and refill until the board is stable, or gives up with
//! [`EngineError::NonTerminatingCascade`](crate::core::EngineError) once the
//! round cap is hit.
//!
//! ## Example Usage
//!
//! ```
//! use tile_cascade::cascade::CascadeEngine;
//! use tile_cascade::core::{EngineConfig, Position};
//! use tile_cascade::matching::find_matches;
//!
//! let mut engine = CascadeEngine::from_config(&EngineConfig::default().with_seed(42)).unwrap();
//! let board = engine.new_board(8).unwrap();
//!
//! let next = engine
//!     .swap_and_resolve(&board, Position::new(3, 3), Position::new(3, 4))
//!     .unwrap();
//! assert!(find_matches(next.grid()).is_empty());
//! assert!(next.score() >= board.score());
//! ```

mod engine;

pub use engine::{
    process_cascade, run_cascade, CascadeEngine, CascadeReport, CascadeRound, CascadeStatus,
};
