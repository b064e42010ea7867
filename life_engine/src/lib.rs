//! Conway's Game of Life on a fixed, non-wrapping grid.
//!
//! The engine is split the same way a generation flows through it: a
//! [`Grid`] of cells, the [`rules`] that advance it one turn, the
//! [`render`] diffs a front end repaints from, the [`patterns`] that get
//! stamped onto it, and the [`SimulationController`] that owns all of the
//! above and is driven by UI events and the [`ticker`].

pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod speed;
pub mod ticker;

pub use controller::{RenderRequest, SimulationController};
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use patterns::{Pattern, PatternCatalog};
pub use render::RenderCell;
pub use speed::{POLL_INTERVAL, Speed};
