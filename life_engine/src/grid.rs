// grid.rs - Fixed-size board for Conway's Game of Life
//
// Cells live in one row-major Vec. Nothing wraps: any coordinate outside
// [0, rows) x [0, cols) is an error on lookup and a dead neighbor when
// counting.

use std::fmt;

use crate::error::{Error, Result};

/// Moore neighborhood offsets, row-major.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// One square of the board.
///
/// `alive` is authoritative between turns. `alive_next` is scratch space
/// for the generation being computed and `alive_prev` is the state before
/// the last committed turn, kept only for diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    pub(crate) alive: bool,
    pub(crate) alive_next: bool,
    pub(crate) alive_prev: bool,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Self { row, col, alive: false, alive_next: false, alive_prev: false }
    }

    pub fn row(&self) -> usize { self.row }
    pub fn col(&self) -> usize { self.col }
    pub fn is_alive(&self) -> bool { self.alive }

    /// State before the last committed turn.
    pub fn was_alive(&self) -> bool { self.alive_prev }

    /// True when the last committed turn flipped this cell.
    pub fn changed(&self) -> bool { self.alive != self.alive_prev }

    fn reset(&mut self) {
        self.alive = false;
        self.alive_next = false;
        self.alive_prev = false;
    }
}

/// Fixed-size, non-wrapping board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// # Panics
    ///
    /// If either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "grid must be at least 1x1, got {rows}x{cols}");
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col)))
            .collect();
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if !self.contains(row, col) {
            return Err(Error::OutOfRange { row, col, rows: self.rows, cols: self.cols });
        }
        Ok(row * self.cols + col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        let index = self.index(row, col)?;
        Ok(&self.cells[index])
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.cell(row, col)?.alive)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let index = self.index(row, col)?;
        self.cells[index].alive = alive;
        Ok(())
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let index = self.index(row, col)?;
        let cell = &mut self.cells[index];
        cell.alive = !cell.alive;
        Ok(cell.alive)
    }

    /// Live cells among the 8 neighbors of (row, col), in 0..=8.
    pub fn neighbor_count(&self, row: usize, col: usize) -> Result<u8> {
        self.index(row, col)?;
        Ok(self.live_neighbors(row, col))
    }

    /// Caller guarantees (row, col) is on the grid.
    pub(crate) fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBORS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if self.contains(nr, nc) && self.cells[nr * self.cols + nc].alive {
                count += 1;
            }
        }
        count
    }

    /// All cells, row ascending then column ascending.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> std::slice::IterMut<'_, Cell> {
        self.cells.iter_mut()
    }

    /// Visits every cell in row-major order.
    pub fn for_each_cell<F: FnMut(&Cell)>(&self, visitor: F) {
        self.cells.iter().for_each(visitor);
    }

    /// Kills every cell and forgets the previous generation.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Text rendering, one line per row. Live cells print as `■`, or as
    /// their neighbor count when `show_neighbors` is set.
    pub fn dump(&self, show_neighbors: bool) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols * 3 + 1));
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                match (cell.alive, show_neighbors) {
                    (false, false) => out.push_str(" ."),
                    (true, false)  => out.push_str(" ■"),
                    (false, true)  => out.push_str(" . "),
                    (true, true)   => {
                        let n = self.live_neighbors(cell.row, cell.col);
                        out.push_str(&format!(" {n} "));
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(r, c) in live {
            grid.set(r, c, true).unwrap();
        }
        grid
    }

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_rows_is_fatal() {
        Grid::new(0, 5);
    }

    #[test]
    fn stored_position_matches_index() {
        let grid = Grid::new(4, 7);
        for r in 0..4 {
            for c in 0..7 {
                let cell = grid.cell(r, c).unwrap();
                assert_eq!((cell.row(), cell.col()), (r, c));
            }
        }
    }

    #[test]
    fn lookups_outside_grid_fail() {
        let mut grid = Grid::new(2, 3);
        assert_eq!(grid.get(2, 0), Err(Error::OutOfRange { row: 2, col: 0, rows: 2, cols: 3 }));
        assert_eq!(grid.get(0, 3), Err(Error::OutOfRange { row: 0, col: 3, rows: 2, cols: 3 }));
        assert!(grid.set(5, 5, true).is_err());
        assert!(grid.toggle(2, 3).is_err());
        assert!(grid.neighbor_count(9, 0).is_err());
    }

    #[test]
    fn set_get_toggle() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 2, true).unwrap();
        assert!(grid.get(1, 2).unwrap());
        assert!(!grid.toggle(1, 2).unwrap());
        assert!(!grid.get(1, 2).unwrap());
    }

    #[test]
    fn neighbor_counts_in_full_grid() {
        let all: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let grid = grid_with(3, 3, &all);
        assert_eq!(grid.neighbor_count(1, 1).unwrap(), 8);
        assert_eq!(grid.neighbor_count(0, 0).unwrap(), 3);
        assert_eq!(grid.neighbor_count(0, 1).unwrap(), 5);
    }

    #[test]
    fn neighbors_do_not_wrap() {
        let grid = grid_with(4, 4, &[(3, 3), (0, 3), (3, 0)]);
        assert_eq!(grid.neighbor_count(0, 0).unwrap(), 0);
    }

    #[test]
    fn cell_does_not_count_itself() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(grid.neighbor_count(1, 1).unwrap(), 0);
        assert_eq!(grid.neighbor_count(0, 0).unwrap(), 1);
    }

    #[test]
    fn visit_order_is_row_major() {
        let grid = Grid::new(2, 3);
        let mut seen = Vec::new();
        grid.for_each_cell(|cell| seen.push((cell.row(), cell.col())));
        assert_eq!(seen, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn clear_resets_every_flag() {
        let mut grid = grid_with(2, 2, &[(0, 0), (1, 1)]);
        for cell in grid.cells_mut() {
            cell.alive_prev = true;
            cell.alive_next = true;
        }
        grid.clear();
        assert!(grid.cells().all(|c| !c.alive && !c.alive_next && !c.alive_prev));
    }

    #[test]
    fn dump_marks_live_cells() {
        let grid = grid_with(2, 3, &[(0, 1), (1, 1)]);
        assert_eq!(grid.to_string(), " . ■ .\n . ■ .\n");
        assert_eq!(grid.dump(true), " .  1  . \n .  1  . \n");
    }
}
