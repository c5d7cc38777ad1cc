//! Grid-subsystem error type.

use thiserror::Error;

use gn_core::{CellKind, CoreError, Position};

/// Errors produced by `gn-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Position, rows: usize, cols: usize },

    #[error("layout has no cells")]
    Empty,

    #[error("layout row {row} has {got} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, got: usize },

    #[error("bad marker at row {row}, col {col}: {source}")]
    Marker {
        row:    usize,
        col:    usize,
        #[source]
        source: CoreError,
    },

    #[error("duplicate {kind} cell at {second} (first at {first})")]
    Duplicate { kind: CellKind, first: Position, second: Position },

    #[error("random layout needs at least two cells, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },

    #[error("layout CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
