// rules.rs - Conway's B3/S23 transition

use tracing::trace;

use crate::grid::Grid;

/// Next state for a cell that is `alive` with `neighbors` live neighbors.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Under/overpopulation, or stays dead
    }
}

/// Advances `grid` by one generation.
///
/// Every `alive_next` is computed from the untouched current generation
/// before any cell commits. Only then does each cell move `alive` into
/// `alive_prev` and `alive_next` into `alive`.
pub fn step(grid: &mut Grid) {
    let next: Vec<bool> = grid
        .cells()
        .map(|cell| next_state(cell.alive, grid.live_neighbors(cell.row(), cell.col())))
        .collect();

    for (cell, alive_next) in grid.cells_mut().zip(next) {
        cell.alive_next = alive_next;
    }

    for cell in grid.cells_mut() {
        cell.alive_prev = cell.alive;
        cell.alive = cell.alive_next;
    }

    trace!(population = grid.population(), "generation committed");
}
