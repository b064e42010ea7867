// render.rs - What a front end has to repaint

use crate::grid::{Cell, Grid};

/// One cell of a repaint: where it is and what it now shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCell {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

impl From<&Cell> for RenderCell {
    fn from(cell: &Cell) -> Self {
        Self { row: cell.row(), col: cell.col(), alive: cell.is_alive() }
    }
}

/// Cells flipped by the last committed turn, row-major.
pub fn changed_cells(grid: &Grid) -> impl Iterator<Item = (usize, usize)> + '_ {
    grid.cells().filter(|cell| cell.changed()).map(|cell| (cell.row(), cell.col()))
}

/// Sparse repaint: only the cells the last turn flipped.
pub fn render_diff(grid: &Grid) -> Vec<RenderCell> {
    grid.cells().filter(|cell| cell.changed()).map(RenderCell::from).collect()
}

/// Dense repaint: every cell.
pub fn full_render(grid: &Grid) -> Vec<RenderCell> {
    grid.cells().map(RenderCell::from).collect()
}
