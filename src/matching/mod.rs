//! Match detection.
//!
//! A match is a maximal straight run of three or more identical tiles in a
//! row or a column. Detection is a pure function of the grid:
//!
//! ```
//! use tile_cascade::core::Grid;
//! use tile_cascade::matching::{find_matches, Match};
//!
//! let grid: Grid = "AAA\n000\n000".parse().unwrap();
//! assert_eq!(find_matches(&grid), vec![Match::horizontal(0, 0, 3)]);
//! ```
//!
//! Arbitrary shapes are matched with [`Pattern`] templates instead. The
//! cascade itself only uses run-length matches.

mod detector;
mod pattern;

pub use detector::{find_matches, is_stable, Axis, Match, MIN_MATCH_LENGTH};
pub use pattern::{default_patterns, find_pattern_matches, Pattern, PatternMatch};
