use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid side length must be at least 1 and N*N must fit in memory, got {0}")]
    InvalidSize(usize),

    #[error("fill rate must lie in [0, 1], got {0}")]
    InvalidFillRate(f64),

    #[error("expected {expected} cells for the grid, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("grid must be square: {rows} rows, row {row} has {len} cells")]
    NotSquare { rows: usize, row: usize, len: usize },

    #[error("unknown cell character {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("canvas size must be positive")]
    ZeroCanvas,

    #[error(transparent)]
    Grid(#[from] GridError),
}
