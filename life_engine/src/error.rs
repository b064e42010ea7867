//! Engine errors

use thiserror::Error;

/// Engine result type
pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("pattern {name:?} is malformed: {reason}")]
    InvalidPatternFormat { name: String, reason: String },

    #[error("no pattern named {name:?}")]
    UnknownPattern { name: String },

    #[error("speed level {0} is not in 1..=5")]
    InvalidSpeed(u8),
}
