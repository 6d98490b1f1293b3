//! Resolution steps applied after detection.
//!
//! - [`remove_matches`]: clear matched cells, settle under gravity, add score
//! - [`fill_empty`]: draw new symbols into the holes gravity left behind
//!
//! Each step takes a snapshot and returns a new one.

mod filler;
mod resolver;

pub use filler::fill_empty;
pub use resolver::{apply_gravity, mark_cleared, remove_matches, score_delta, POINTS_PER_TILE};
