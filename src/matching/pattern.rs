//! Named shape templates matched by sliding them over the grid.
//!
//! A [`Pattern`] is a set of cells relative to a `width x height` bounding
//! box. [`find_pattern_matches`] reports every placement where all of those
//! cells hold the same tile. Unlike the run-length [`Match`](super::Match),
//! placements are not maximal: a run of four yields two three-cell hits.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, Grid, Position, Result};

/// A named shape of cells relative to its bounding box's top-left corner.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PatternFields")]
pub struct Pattern {
    name: String,
    width: usize,
    height: usize,
    /// Most shapes are 3-4 cells, so this usually stays inline.
    cells: SmallVec<[Position; 4]>,
}

/// Unchecked serde form of [`Pattern`].
#[derive(Deserialize)]
struct PatternFields {
    name: String,
    width: usize,
    height: usize,
    cells: Vec<Position>,
}

impl TryFrom<PatternFields> for Pattern {
    type Error = EngineError;

    fn try_from(fields: PatternFields) -> Result<Self> {
        Self::new(fields.name, fields.width, fields.height, fields.cells)
    }
}

impl Pattern {
    /// Build a pattern, checking that every cell fits its bounding box.
    ///
    /// Duplicate cells are dropped. An empty cell list or a zero-sized box
    /// is rejected with [`EngineError::InvalidPattern`].
    pub fn new(
        name: impl Into<String>,
        width: usize,
        height: usize,
        cells: impl IntoIterator<Item = Position>,
    ) -> Result<Self> {
        let name = name.into();
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidPattern(format!(
                "{name}: bounding box {width}x{height} is empty"
            )));
        }

        let mut unique: SmallVec<[Position; 4]> = SmallVec::new();
        for cell in cells {
            if cell.row >= height || cell.col >= width {
                return Err(EngineError::InvalidPattern(format!(
                    "{name}: cell {cell} is outside its {width}x{height} box"
                )));
            }
            if !unique.contains(&cell) {
                unique.push(cell);
            }
        }
        if unique.is_empty() {
            return Err(EngineError::InvalidPattern(format!("{name}: no cells")));
        }

        Ok(Self {
            name,
            width,
            height,
            cells: unique,
        })
    }

    /// Three in a row, left to right.
    #[must_use]
    pub fn horizontal_three() -> Self {
        Self::line("horizontal three", 1, 3)
    }

    /// Three in a column, top to bottom.
    #[must_use]
    pub fn vertical_three() -> Self {
        Self::line("vertical three", 3, 1)
    }

    fn line(name: &str, height: usize, width: usize) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| Position::new(row, col)));
        Self {
            name: name.to_owned(),
            width,
            height,
            cells: cells.collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells relative to the bounding box, in the order given to [`Pattern::new`].
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Cells of this pattern placed with its top-left corner at `origin`.
    pub fn absolute_cells(&self, origin: Position) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .map(move |rel| Position::new(origin.row + rel.row, origin.col + rel.col))
    }

    /// True if the pattern placed at `origin` lies on `grid` and every
    /// cell holds the same non-empty tile.
    #[must_use]
    pub fn matches_at(&self, grid: &Grid, origin: Position) -> bool {
        let mut cells = self.absolute_cells(origin).map(|pos| grid.get(pos));
        let first = match cells.next() {
            Some(Some(first)) if !first.is_empty() => first,
            _ => return false,
        };
        cells.all(|cell| cell == Some(first))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}

/// The straight three-in-a-row shapes: horizontal, then vertical.
#[must_use]
pub fn default_patterns() -> Vec<Pattern> {
    vec![Pattern::horizontal_three(), Pattern::vertical_three()]
}

/// One placement of a pattern on a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Index of the pattern in the slice passed to [`find_pattern_matches`].
    pub pattern: usize,
    /// Where the pattern's bounding box starts.
    pub origin: Position,
}

impl PatternMatch {
    #[must_use]
    pub const fn new(pattern: usize, origin: Position) -> Self {
        Self { pattern, origin }
    }

    /// Cells covered by this placement of `pattern`.
    pub fn cells<'a>(&self, pattern: &'a Pattern) -> impl Iterator<Item = Position> + 'a {
        pattern.absolute_cells(self.origin)
    }
}

/// Slide each pattern over `grid` and report every placement that hits.
///
/// Results are grouped by pattern in slice order; within a pattern,
/// origins run row-major. Patterns larger than the grid never match.
#[must_use]
pub fn find_pattern_matches(grid: &Grid, patterns: &[Pattern]) -> Vec<PatternMatch> {
    let size = grid.size();
    let mut hits = Vec::new();

    for (index, pattern) in patterns.iter().enumerate() {
        if pattern.height > size || pattern.width > size {
            continue;
        }
        for row in 0..=size - pattern.height {
            for col in 0..=size - pattern.width {
                let origin = Position::new(row, col);
                if pattern.matches_at(grid, origin) {
                    hits.push(PatternMatch::new(index, origin));
                }
            }
        }
    }

    hits
}
