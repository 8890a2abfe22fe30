//! Linear-system error types.
//!
//! [`LinalgError`]
//! ├ shape errors : empty, non-square, mismatched right-hand side, ragged rows
//! └ singular     : no usable pivot under partial pivoting


use thiserror::Error;


#[derive(Debug, Error)]
pub enum LinalgError {
    #[error("empty linear system")]
    EmptySystem,

    #[error("matrix must be square: got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: matrix has {n} columns, vector has {rhs_len} entries")]
    DimensionMismatch { n: usize, rhs_len: usize },

    #[error("ragged rows: row {row} has {got} entries, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("singular matrix: no nonzero pivot in column {col}")]
    SingularMatrix { col: usize },
}
