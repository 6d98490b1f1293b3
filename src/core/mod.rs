//! Core engine types: elements, grids, board state, RNG, configuration, errors.
//!
//! Everything above this module (detection, resolution, cascades) works on
//! these immutable values and never mutates a grid in place.

pub mod config;
pub mod element;
pub mod error;
pub mod grid;
pub mod rng;
pub mod source;
pub mod state;

pub use config::EngineConfig;
pub use element::{Alphabet, Element, Symbol};
pub use error::{EngineError, Result};
pub use grid::{Grid, Position};
pub use rng::{TileRng, TileRngState};
pub use source::{ScriptedSource, SymbolSource};
pub use state::BoardState;
