//! Interpolation error types.
//!
//! [`InterpolationError`]
//! ┌ input shape : empty, unequal lengths, too few points, table/derivative size
//! ├ geometry    : duplicate or non-increasing x, unequal spacing
//! ├ config      : invalid tolerances
//! └ linalg      : forwarded [`LinalgError`] from the spline solver

use thiserror::Error;
use crate::linalg::errors::LinalgError;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("unequal length: x has {x_len} elements, dy has {dy_len}")]
    DerivativeLength { x_len: usize, dy_len: usize },

    #[error("table shape {rows}x{cols} does not match {x_len} x-values")]
    TableShape { x_len: usize, rows: usize, cols: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("unequal spacing at index {idx}: expected step {h}, got {got}")]
    UnequalSpacing { idx: usize, h: f64, got: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid spacing_tol {got} must be finite and > 0")]
    InvalidSpacingTol { got: f64 },

    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
