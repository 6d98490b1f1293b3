//! Match removal, gravity, and scoring.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::{BoardState, Element, Grid, Position};
use crate::matching::Match;

/// Points awarded per unit of match length.
pub const POINTS_PER_TILE: u64 = 10;

/// Clear every matched cell, apply gravity, and add the score.
///
/// An empty `matches` slice returns a copy of `state` untouched.
#[must_use]
pub fn remove_matches(state: &BoardState, matches: &[Match]) -> BoardState {
    if matches.is_empty() {
        return state.clone();
    }

    let cleared = mark_cleared(state.grid(), matches);
    let settled = apply_gravity(&cleared);
    BoardState::new(settled, state.score() + score_delta(matches))
}

/// Set every cell covered by `matches` to [`Element::Empty`].
///
/// Cells shared by several matches are cleared once. Every match must
/// have been detected on `grid`; a footprint that leaves the grid is a
/// caller bug and trips a debug assertion.
#[must_use]
pub fn mark_cleared(grid: &Grid, matches: &[Match]) -> Grid {
    let doomed: FxHashSet<Position> = matches.iter().flat_map(Match::cells).collect();

    let mut cleared = grid.clone();
    for pos in doomed {
        debug_assert!(
            grid.contains(pos),
            "match cell {pos} is outside a {size}x{size} grid",
            size = grid.size()
        );
        if let Ok(next) = cleared.with(pos, Element::Empty) {
            cleared = next;
        }
    }
    cleared
}

/// Drop every tile to the bottom of its column.
///
/// Tiles keep their top-to-bottom order and never change column.
#[must_use]
pub fn apply_gravity(grid: &Grid) -> Grid {
    let size = grid.size();
    let mut columns: Vec<Vec<Element>> = Vec::with_capacity(size);

    for col in 0..size {
        let tiles: Vec<Element> = grid.column(col).filter(|e| !e.is_empty()).collect();
        let mut settled = vec![Element::Empty; size - tiles.len()];
        settled.extend(tiles);
        columns.push(settled);
    }

    let cells: Vector<Element> = (0..size)
        .flat_map(|row| columns.iter().map(move |column| column[row]))
        .collect();
    Grid::from_cells(size, cells)
}

/// Score earned by `matches`: ten points per unit of length.
///
/// Lengths are summed as-is, so a cell shared by two matches counts twice.
#[must_use]
pub fn score_delta(matches: &[Match]) -> u64 {
    let tiles: usize = matches.iter().map(|m| m.length).sum();
    tiles as u64 * POINTS_PER_TILE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_matches_is_identity() {
        let state = BoardState::new(grid("AB\nBA"), 70);
        assert_eq!(remove_matches(&state, &[]), state);
    }

    #[test]
    fn test_mark_clears_footprint_only() {
        let g = grid("AAAB\nCDCD\nDCDC\nCDCD");
        let cleared = mark_cleared(&g, &[Match::horizontal(0, 0, 3)]);
        assert_eq!(cleared, grid("000B\nCDCD\nDCDC\nCDCD"));
    }

    #[test]
    fn test_mark_overlap_cleared_once() {
        let g = grid("AAA\nA00\nA00");
        let matches = [Match::horizontal(0, 0, 3), Match::vertical(0, 0, 3)];
        let cleared = mark_cleared(&g, &matches);
        assert_eq!(cleared.empty_count(), 9);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside a 3x3 grid")]
    fn test_mark_rejects_match_off_the_board() {
        let state = BoardState::with_zero_score(grid("ABC\nBCA\nCAB"));
        let _ = remove_matches(&state, &[Match::horizontal(0, 2, 3)]);
    }

    #[test]
    fn test_gravity_compacts_down() {
        let g = grid("A0C\n0B0\n000");
        assert_eq!(apply_gravity(&g), grid("000\n000\nABC"));
    }

    #[test]
    fn test_gravity_preserves_column_order() {
        let g = grid("A0000\n00000\nB0000\n00000\nC0000");
        let settled = apply_gravity(&g);
        let col: String = settled.column(0).map(Element::glyph).collect();
        assert_eq!(col, "00ABC");
    }

    #[test]
    fn test_gravity_full_grid_unchanged() {
        let g = grid("AB\nCD");
        assert_eq!(apply_gravity(&g), g);
    }

    #[test]
    fn test_score_counts_each_match_length() {
        let matches = [Match::horizontal(0, 0, 3), Match::vertical(0, 0, 3)];
        assert_eq!(score_delta(&matches), 60);
        assert_eq!(score_delta(&[Match::vertical(2, 5, 4)]), 40);
        assert_eq!(score_delta(&[]), 0);
    }

    #[test]
    fn test_remove_three_in_top_row() {
        let state = BoardState::with_zero_score(grid("AAA\n000\n000"));
        let next = remove_matches(&state, &[Match::horizontal(0, 0, 3)]);

        assert_eq!(next.score(), 30);
        assert_eq!(next.grid().empty_count(), 9);
    }

    #[test]
    fn test_remove_drops_tiles_above() {
        let state = BoardState::new(grid("BCD\nAAA\nCDB"), 10);
        let next = remove_matches(&state, &[Match::horizontal(1, 0, 3)]);

        assert_eq!(next.score(), 40);
        assert_eq!(next.grid(), &grid("000\nBCD\nCDB"));
    }
}
