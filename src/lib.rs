//! Polynomial interpolation from small sample tables.
//!
//! ┌ [`interpolation`] : Neville, Newton forward differences, Hermite,
//! │                     natural cubic-spline systems
//! ├ [`linalg`]        : Gaussian elimination for the spline system
//! └ [`grid`]          : dense row-major table shared by all of the above

pub mod grid;
pub mod interpolation;
pub mod linalg;

pub use grid::Grid;
