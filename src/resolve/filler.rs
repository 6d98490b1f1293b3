//! Refilling empty cells.

use im::Vector;

use crate::core::{Alphabet, Element, Grid, SymbolSource};

/// Replace every empty cell with a symbol drawn from `source`.
///
/// Cells are visited row by row, top to bottom and left to right, so a
/// scripted source fills them in reading order. Occupied cells are left
/// alone and draw nothing.
pub fn fill_empty<S>(grid: &Grid, alphabet: &Alphabet, source: &mut S) -> Grid
where
    S: SymbolSource + ?Sized,
{
    if grid.is_full() {
        return grid.clone();
    }

    let cells: Vector<Element> = grid
        .cells()
        .map(|cell| match cell {
            Element::Empty => Element::Tile(source.draw_symbol(alphabet)),
            tile => tile,
        })
        .collect();
    Grid::from_cells(grid.size(), cells)
}
