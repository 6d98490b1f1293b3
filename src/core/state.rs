//! Board state: a grid snapshot paired with the running score.
//!
//! The engine never holds a "current" board. Callers own the live
//! `BoardState` and replace it with whatever the engine returns.

use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Immutable grid + score pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    grid: Grid,
    score: u64,
}

impl BoardState {
    #[must_use]
    pub fn new(grid: Grid, score: u64) -> Self {
        Self { grid, score }
    }

    /// Fresh state with a score of zero.
    #[must_use]
    pub fn with_zero_score(grid: Grid) -> Self {
        Self::new(grid, 0)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Same score, different grid.
    #[must_use]
    pub fn with_grid(&self, grid: Grid) -> Self {
        Self::new(grid, self.score)
    }

    /// Same grid, different score.
    #[must_use]
    pub fn with_score(&self, score: u64) -> Self {
        Self::new(self.grid.clone(), score)
    }

    /// Split into grid and score.
    #[must_use]
    pub fn into_parts(self) -> (Grid, u64) {
        (self.grid, self.score)
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "score: {}", self.score)?;
        write!(f, "{}", self.grid)
    }
}
