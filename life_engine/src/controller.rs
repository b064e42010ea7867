// controller.rs - Turn counter, run/pause state and user commands
//
// One controller owns the grid and every path that mutates it. The front
// end and the tick driver call into it strictly one at a time, then ask
// `take_render_request` what they owe the screen.

use std::rc::Rc;
use std::time::Instant;

use tracing::{debug, info, trace};

use crate::error::Result;
use crate::grid::Grid;
use crate::patterns::{self, Pattern, PatternCatalog};
use crate::render::{self, RenderCell};
use crate::rules;
use crate::speed::Speed;

/// Which repaint the front end owes after the last mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRequest {
    /// Repaint `render_diff()`: only cells the last turn flipped.
    Sparse,
    /// Repaint `full_render()`: every cell.
    Full,
}

pub struct SimulationController {
    grid: Grid,
    catalog: PatternCatalog,
    turn: u64,
    running: bool,
    speed: Speed,
    last_turn: Option<Instant>,
    pending_insert: Option<Rc<Pattern>>,
    active_seed: Option<Rc<Pattern>>,
    render: Option<RenderRequest>,
}

impl SimulationController {
    /// Starts idle at turn 0 with a full repaint pending.
    pub fn new(grid: Grid, catalog: PatternCatalog) -> Self {
        Self {
            grid,
            catalog,
            turn: 0,
            running: false,
            speed: Speed::default(),
            last_turn: None,
            pending_insert: None,
            active_seed: None,
            render: Some(RenderRequest::Full),
        }
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn catalog(&self) -> &PatternCatalog { &self.catalog }
    pub fn turn(&self) -> u64 { self.turn }
    pub fn is_running(&self) -> bool { self.running }
    pub fn speed(&self) -> Speed { self.speed }
    pub fn pending_insert(&self) -> Option<&Pattern> { self.pending_insert.as_deref() }
    pub fn active_seed(&self) -> Option<&Pattern> { self.active_seed.as_deref() }

    /// Toggles between running and idle, returning the new state.
    pub fn start_pause(&mut self) -> bool {
        self.running = !self.running;
        debug!(running = self.running, turn = self.turn, "start/pause");
        self.running
    }

    /// Tick-loop body. Commits a turn if the simulation is running and at
    /// least one speed interval has passed since the last committed turn.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        let due = self
            .last_turn
            .is_none_or(|last| now.saturating_duration_since(last) >= self.speed.interval());
        if due {
            self.last_turn = Some(now);
            self.advance();
        }
        due
    }

    /// Commits one turn unconditionally.
    pub fn advance(&mut self) {
        self.turn += 1;
        rules::step(&mut self.grid);
        self.request_render(RenderRequest::Sparse);
        debug!(turn = self.turn, population = self.grid.population(), "turn");
        trace!("{}", self.dump(false));
    }

    /// Takes effect on the next poll without touching the last-turn time.
    pub fn set_speed(&mut self, speed: Speed) {
        if speed != self.speed {
            debug!(level = speed.level(), interval = ?speed.interval(), "speed changed");
        }
        self.speed = speed;
    }

    pub fn set_speed_level(&mut self, level: u8) -> Result<()> {
        self.set_speed(Speed::try_from(level)?);
        Ok(())
    }

    /// A click on (row, col): drops the pending entity there, or toggles the
    /// cell when nothing is pending.
    ///
    /// A failed drop keeps the entity pending so the user can try another
    /// cell. Cells written before the failure stay written.
    pub fn click(&mut self, row: usize, col: usize) -> Result<()> {
        let Some(pattern) = self.pending_insert.clone() else {
            self.grid.toggle(row, col)?;
            self.request_render(RenderRequest::Full);
            return Ok(());
        };

        let placed = patterns::place(&mut self.grid, &pattern, row, col);
        self.request_render(RenderRequest::Full);
        placed?;
        info!(pattern = pattern.name(), row, col, "inserted");
        self.pending_insert = None;
        Ok(())
    }

    /// Arms `pattern` for the next click. The grid is untouched.
    pub fn begin_insert(&mut self, pattern: Rc<Pattern>) {
        debug!(pattern = pattern.name(), "insert pending");
        self.pending_insert = Some(pattern);
    }

    pub fn choose_insert(&mut self, name: &str) -> Result<()> {
        let pattern = self.catalog.entity(name)?;
        self.begin_insert(pattern);
        Ok(())
    }

    pub fn cancel_insert(&mut self) {
        if let Some(pattern) = self.pending_insert.take() {
            debug!(pattern = pattern.name(), "insert cancelled");
        }
    }

    /// Stops, rewinds to turn 0 on an empty board and replays the active
    /// seed, if any.
    pub fn reset(&mut self) -> Result<()> {
        self.rewind();
        info!(seed = self.active_seed.as_ref().map(|p| p.name()), "reset");

        match &self.active_seed {
            Some(seed) => patterns::place(&mut self.grid, seed, 0, 0),
            None => Ok(()),
        }
    }

    /// Forgets the active seed and resets to an empty board.
    pub fn clear(&mut self) {
        self.active_seed = None;
        self.rewind();
        info!("cleared");
    }

    /// Stops at turn 0 on an empty board with nothing pending.
    fn rewind(&mut self) {
        self.running = false;
        self.turn = 0;
        self.grid.clear();
        self.pending_insert = None;
        self.request_render(RenderRequest::Full);
    }

    /// Clears the board, remembers `pattern` for `reset` and places it at
    /// the origin.
    pub fn load_seed(&mut self, pattern: Rc<Pattern>) -> Result<()> {
        self.clear();
        info!(seed = pattern.name(), "seed loaded");
        let placed = patterns::place(&mut self.grid, &pattern, 0, 0);
        self.active_seed = Some(pattern);
        placed
    }

    pub fn choose_seed(&mut self, name: &str) -> Result<()> {
        let pattern = self.catalog.seed(name)?;
        self.load_seed(pattern)
    }

    pub fn render_diff(&self) -> Vec<RenderCell> {
        render::render_diff(&self.grid)
    }

    pub fn full_render(&self) -> Vec<RenderCell> {
        render::full_render(&self.grid)
    }

    /// The repaint owed since the last call, if any.
    pub fn take_render_request(&mut self) -> Option<RenderRequest> {
        self.render.take()
    }

    pub fn render_pending(&self) -> bool {
        self.render.is_some()
    }

    /// `render_diff` only covers the latest turn, so a second turn before
    /// the pending repaint is taken needs a full one.
    fn request_render(&mut self, request: RenderRequest) {
        self.render = match (self.render, request) {
            (None, RenderRequest::Sparse) => Some(RenderRequest::Sparse),
            _ => Some(RenderRequest::Full),
        };
    }

    /// `Tick: N` followed by the board.
    pub fn dump(&self, show_neighbors: bool) -> String {
        format!("Tick: {}\n{}", self.turn, self.grid.dump(show_neighbors))
    }
}
