//! Square tile grid.
//!
//! A [`Grid`] is an immutable `N x N` snapshot. Cells are stored row-major
//! in an `im::Vector`, so every edit returns a new grid that shares
//! structure with the one it came from.
//!
//! ```
//! use tile_cascade::core::{Grid, Position};
//!
//! let grid: Grid = "A B C\nB C A\nC A B".parse().unwrap();
//! assert_eq!(grid.size(), 3);
//!
//! let swapped = grid.swap(Position::new(0, 0), Position::new(0, 1)).unwrap();
//! assert_eq!(swapped.get(Position::new(0, 0)), grid.get(Position::new(0, 1)));
//! // The original snapshot is untouched.
//! assert_eq!(grid.to_string().lines().next(), Some("A B C"));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::element::Element;
use super::error::{EngineError, Result};

/// Zero-indexed cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable square grid of elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Element>>", into = "Vec<Vec<Element>>")]
pub struct Grid {
    size: usize,
    cells: Vector<Element>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(EngineError::InvalidGridShape(
                "grid must have at least one row".into(),
            ));
        }
        Ok(Self {
            size,
            cells: std::iter::repeat(Element::Empty).take(size * size).collect(),
        })
    }

    /// Build a grid from rows, checking that it is square.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = Element>,
    {
        let rows: Vec<Vec<Element>> = rows.into_iter().map(|r| r.into_iter().collect()).collect();
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidGridShape(
                "grid must have at least one row".into(),
            ));
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(EngineError::InvalidGridShape(format!(
                    "row {index} has {} cells, expected {size}",
                    row.len()
                )));
            }
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid from a row-major cell buffer of exactly `size * size` cells.
    pub(crate) fn from_cells(size: usize, cells: Vector<Element>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Side length `N`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Element at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Element> {
        if self.contains(pos) {
            self.cells.get(self.index(pos)).copied()
        } else {
            None
        }
    }

    /// Element at `(row, col)`, for in-crate loops that already know the
    /// coordinate is in bounds. Panics otherwise.
    #[must_use]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Element {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.size + col]
    }

    /// Copy of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Element> + '_ {
        (0..self.size).map(move |col| self.cell(row, col))
    }

    /// Copy of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Element> + '_ {
        (0..self.size).map(move |row| self.cell(row, col))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// New grid with `pos` replaced.
    pub fn with(&self, pos: Position, element: Element) -> Result<Self> {
        self.check(pos)?;
        let index = self.index(pos);
        Ok(Self {
            size: self.size,
            cells: self.cells.update(index, element),
        })
    }

    /// New grid with the two cells exchanged.
    ///
    /// Only bounds are checked; the cells need not be adjacent.
    pub fn swap(&self, a: Position, b: Position) -> Result<Self> {
        self.check(a)?;
        self.check(b)?;
        let mut cells = self.cells.clone();
        cells.swap(self.index(a), self.index(b));
        Ok(Self { size: self.size, cells })
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|e| e.is_empty()).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|e| !e.is_empty())
    }

    /// Row-major cells.
    pub fn cells(&self) -> impl Iterator<Item = Element> + '_ {
        self.cells.iter().copied()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    fn check(&self, pos: Position) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                position: pos,
                size: self.size,
            })
        }
    }
}

impl std::str::FromStr for Grid {
    type Err = EngineError;

    /// Parse one row per non-blank line. Whitespace inside a line is ignored
    /// and `'0'` marks an empty cell.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Element::from_glyph)
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cell(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<Element>>> for Grid {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<Element>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Element>> {
    fn from(grid: Grid) -> Self {
        (0..grid.size).map(|row| grid.row(row).collect()).collect()
    }
}
