//! Run-length match detection.

use serde::{Deserialize, Serialize};

use crate::core::{Element, Grid, Position};

/// Shortest run that counts as a match.
pub const MIN_MATCH_LENGTH: usize = 3;

/// Direction a match runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

/// A maximal run of at least [`MIN_MATCH_LENGTH`] identical tiles.
///
/// Matches refer to cells by coordinate and are only meaningful for the
/// grid they were detected on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub axis: Axis,
    /// First (top-most or left-most) cell of the run.
    pub origin: Position,
    pub length: usize,
}

impl Match {
    #[must_use]
    pub const fn new(axis: Axis, origin: Position, length: usize) -> Self {
        Self { axis, origin, length }
    }

    /// Run along `row` starting at column `col`.
    #[must_use]
    pub const fn horizontal(row: usize, col: usize, length: usize) -> Self {
        Self::new(Axis::Horizontal, Position::new(row, col), length)
    }

    /// Run down `col` starting at row `row`.
    #[must_use]
    pub const fn vertical(row: usize, col: usize, length: usize) -> Self {
        Self::new(Axis::Vertical, Position::new(row, col), length)
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.origin.row
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.origin.col
    }

    /// Every cell covered by this match, in axis order.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let Self { axis, origin, length } = *self;
        (0..length).map(move |i| match axis {
            Axis::Horizontal => Position::new(origin.row, origin.col + i),
            Axis::Vertical => Position::new(origin.row + i, origin.col),
        })
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        match self.axis {
            Axis::Horizontal => {
                pos.row == self.origin.row
                    && pos.col >= self.origin.col
                    && pos.col < self.origin.col + self.length
            }
            Axis::Vertical => {
                pos.col == self.origin.col
                    && pos.row >= self.origin.row
                    && pos.row < self.origin.row + self.length
            }
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} x{} at {}", self.axis, self.length, self.origin)
    }
}

/// Find every match on `grid`.
///
/// Rows are scanned first (top to bottom), then columns (left to right).
/// A cell shared by a horizontal and a vertical run shows up in both
/// matches; shapes are never merged.
#[must_use]
pub fn find_matches(grid: &Grid) -> Vec<Match> {
    let size = grid.size();
    let mut matches = Vec::new();

    for row in 0..size {
        scan_line(grid.row(row), |start, length| {
            matches.push(Match::horizontal(row, start, length));
        });
    }

    for col in 0..size {
        scan_line(grid.column(col), |start, length| {
            matches.push(Match::vertical(start, col, length));
        });
    }

    matches
}

/// True when `grid` has no matches.
#[must_use]
pub fn is_stable(grid: &Grid) -> bool {
    find_matches(grid).is_empty()
}

/// Run-length scan of one line, reporting `(start, length)` for each run
/// long enough to match.
fn scan_line(line: impl Iterator<Item = Element>, mut emit: impl FnMut(usize, usize)) {
    let mut run: Option<(Element, usize)> = None;
    let mut len = 0;

    let mut close = |run: Option<(Element, usize)>, len: usize| {
        if let Some((_, start)) = run {
            if len >= MIN_MATCH_LENGTH {
                emit(start, len);
            }
        }
    };

    for (index, cell) in line.enumerate() {
        match run {
            Some((head, _)) if head == cell => len += 1,
            _ => {
                close(run, len);
                // Empty cells never start a run.
                if cell.is_empty() {
                    run = None;
                    len = 0;
                } else {
                    run = Some((cell, index));
                    len = 1;
                }
            }
        }
    }

    close(run, len);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn test_match_cells() {
        let h: Vec<_> = Match::horizontal(2, 1, 3).cells().collect();
        assert_eq!(h, vec![Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)]);

        let v: Vec<_> = Match::vertical(0, 4, 3).cells().collect();
        assert_eq!(v, vec![Position::new(0, 4), Position::new(1, 4), Position::new(2, 4)]);
    }

    #[test]
    fn test_match_contains() {
        let m = Match::vertical(1, 2, 4);
        assert!(m.contains(Position::new(1, 2)));
        assert!(m.contains(Position::new(4, 2)));
        assert!(!m.contains(Position::new(5, 2)));
        assert!(!m.contains(Position::new(0, 2)));
        assert!(!m.contains(Position::new(2, 3)));
    }

    #[test]
    fn test_no_matches() {
        let g = grid("ABA\nBAB\nABA");
        assert!(find_matches(&g).is_empty());
        assert!(is_stable(&g));
    }

    #[test]
    fn test_run_flushed_at_line_end() {
        let g = grid("ABCC\nDDDD\nABAB\nBABA");
        assert_eq!(find_matches(&g), vec![Match::horizontal(1, 0, 4)]);
    }

    #[test]
    fn test_run_in_middle_of_line() {
        let g = grid("ABBBA\nCDCDC\nDCDCD\nCDCDC\nDCDCD");
        assert_eq!(find_matches(&g), vec![Match::horizontal(0, 1, 3)]);
    }

    #[test]
    fn test_two_runs_in_one_line() {
        let g = grid(
            "AAABBB\n\
             CDCDCD\n\
             DCDCDC\n\
             CDCDCD\n\
             DCDCDC\n\
             CDCDCD",
        );
        assert_eq!(
            find_matches(&g),
            vec![Match::horizontal(0, 0, 3), Match::horizontal(0, 3, 3)]
        );
    }

    #[test]
    fn test_empty_cells_break_runs() {
        let g = grid("AA0AA\n00000\n00000\n00000\n00000");
        assert!(find_matches(&g).is_empty());
    }

    #[test]
    fn test_empty_runs_never_match() {
        let g = Grid::new(5).unwrap();
        assert!(find_matches(&g).is_empty());
    }

    #[test]
    fn test_run_of_two_ignored() {
        let g = grid("AAB\nBBA\nABA");
        assert!(find_matches(&g).is_empty());
    }

    #[test]
    fn test_rows_before_columns() {
        let g = grid("A000\nA000\nA000\n0BBB");
        assert_eq!(
            find_matches(&g),
            vec![Match::horizontal(3, 1, 3), Match::vertical(0, 0, 3)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Match::horizontal(0, 1, 3).to_string(), "Horizontal x3 at (0, 1)");
    }
}
