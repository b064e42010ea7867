// patterns.rs - ASCII pattern catalog and placement
//
// Pattern text is one line per row, '0' for a dead cell and any other
// digit for a live one. Blank lines and surrounding whitespace are ignored,
// so the tables below can open and close their raw strings on lines of
// their own.

use std::rc::Rc;

use tracing::warn;

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Full-board starting layouts, placed at (0, 0).
pub const SEEDS: &[(&str, &str)] = &[
    ("Pulsar", "
0000000000000000000000000000000
0000000000000000000000000000000
0000111000111000000011100011100
0000000000000000000000000000000
0010000101000010001000010100001
0010000101000010001000010100001
0010000101000010001000010100001
0000111000111000000011100011100
0000000000000000000000000000000
0000111000111000000011100011100
0010000101000010001000010100001
0010000101000010001000010100001
0010000101000010001000010100001
0000000000000000000000000000000
0000111000111000000011100011100
"),
    ("Penta-decathlon", "
000000000000000000000000000000000000000
000000000000000000000000000000000000000
000000000000000000000000000000000000000
000000000000000000000000000000000000000
000000111000000000011100000000001110000
000000010000000000001000000000000100000
000000010000000000001000000000000100000
000000111000000000011100000000001110000
000000000000000000000000000000000000000
000000111000000000011100000000001110000
000000111000000000011100000000001110000
000000000000000000000000000000000000000
000000111000000000011100000000001110000
000000010000000000001000000000000100000
000000010000000000001000000000000100000
000000111000000000011100000000001110000
"),
];

/// Small shapes the user drops onto a running board.
pub const ENTITIES: &[(&str, &str)] = &[
    ("Pulsar", "
0011100011100
0000000000000
1000010100001
1000010100001
1000010100001
0011100011100
0000000000000
0011100011100
1000010100001
1000010100001
1000010100001
0000000000000
0011100011100
"),
    ("R-pentomino", "
0110
1100
0100
"),
    ("Glider", "
010
001
111
"),
    ("Blinker", "
111
"),
    ("Toad", "
0111
1110
"),
    ("Beacon", "
1100
1100
0011
0011
"),
    ("Gosper Glider Gun", "
000000000000000000000000100000000000
000000000000000000000010100000000000
000000000000110000001100000000000011
000000000001000100001100000000000011
110000000010000010001100000000000000
110000000010001011000010100000000000
000000000010000010000000100000000000
000000000001000100000000000000000000
000000000000110000000000000000000000
"),
];

/// A parsed, rectangular pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Parses pattern text, rejecting empty, ragged or non-digit input.
    pub fn parse(name: &str, text: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidPatternFormat { name: name.to_string(), reason };

        let lines: Vec<&str> = text.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        let Some(first) = lines.first() else {
            return Err(invalid("no rows".to_string()));
        };
        let cols = first.chars().count();

        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(invalid(format!("row {row} has {width} cells, expected {cols}")));
            }
            for (col, ch) in line.chars().enumerate() {
                let digit = ch
                    .to_digit(10)
                    .ok_or_else(|| invalid(format!("{ch:?} at row {row}, column {col} is not a digit")))?;
                cells.push(digit > 0);
            }
        }

        Ok(Self { name: name.to_string(), rows: lines.len(), cols, cells })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    /// Offsets of the live cells, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }
}

/// Stamps `pattern` onto `grid` with its top-left corner at
/// (`offset_row`, `offset_col`).
///
/// Placement only turns cells on. Live cells are written in row-major order
/// with no fit check up front, so a pattern hanging off the edge fails with
/// [`Error::OutOfRange`] after the cells before the first miss are already
/// set.
pub fn place(grid: &mut Grid, pattern: &Pattern, offset_row: usize, offset_col: usize) -> Result<()> {
    for (pr, pc) in pattern.live_cells() {
        let row = offset_row.saturating_add(pr);
        let col = offset_col.saturating_add(pc);
        if let Err(err) = grid.set(row, col, true) {
            warn!(pattern = pattern.name(), offset_row, offset_col, "{err}");
            return Err(err);
        }
    }
    Ok(())
}

/// Named seeds and entities, in menu order.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    seeds: Vec<Rc<Pattern>>,
    entities: Vec<Rc<Pattern>>,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the game. Fails only if a table entry above
    /// is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_tables(SEEDS, ENTITIES)
    }

    pub fn from_tables(seeds: &[(&str, &str)], entities: &[(&str, &str)]) -> Result<Self> {
        let mut catalog = Self::new();
        for &(name, text) in seeds {
            catalog.add_seed(name, text)?;
        }
        for &(name, text) in entities {
            catalog.add_entity(name, text)?;
        }
        Ok(catalog)
    }

    pub fn add_seed(&mut self, name: &str, text: &str) -> Result<()> {
        self.seeds.push(Rc::new(Pattern::parse(name, text)?));
        Ok(())
    }

    pub fn add_entity(&mut self, name: &str, text: &str) -> Result<()> {
        self.entities.push(Rc::new(Pattern::parse(name, text)?));
        Ok(())
    }

    pub fn seed(&self, name: &str) -> Result<Rc<Pattern>> {
        find(&self.seeds, name)
    }

    pub fn entity(&self, name: &str) -> Result<Rc<Pattern>> {
        find(&self.entities, name)
    }

    pub fn seed_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.seeds.iter().map(|p| p.name())
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entities.iter().map(|p| p.name())
    }
}

fn find(patterns: &[Rc<Pattern>], name: &str) -> Result<Rc<Pattern>> {
    patterns
        .iter()
        .find(|p| p.name() == name)
        .cloned()
        .ok_or_else(|| Error::UnknownPattern { name: name.to_string() })
}
