//! Error types for ulam-spiral.

use thiserror::Error;

/// Result type for ulam-spiral operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when building a [`Grid`](crate::Grid) from caller-supplied cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No rows were supplied.
    #[error("grid must have at least one row")]
    EmptyGrid,

    /// A row's length differs from the number of rows.
    #[error("grid is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    /// The grid has no center cell.
    #[error("grid size must be odd, got {0}")]
    EvenSize(usize),
}
