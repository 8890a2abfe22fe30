//! Defines the structs returned by the configuration-driven runners.
//!
//! - [`InterpolationReport`] : point evaluations (Neville, Newton forward)
//! - [`SplineReport`]        : spline system together with its solution

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::spline::natural::SplineSystem;
use crate::linalg::gauss::LinearSolution;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"neville"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }
}

/// Summary of a spline system build and solve.
///
/// [`SplineReport`]
/// - `algorithm_name` : `"natural cubic spline"`
/// - `n_provided`     : number of knots
/// - `system`         : `A`, `b` as built, before elimination
/// - `solution`       : reduced `A`, transformed `b`, and second-derivative coefficients `x`
#[derive(Debug, Clone)]
pub struct SplineReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub system: SplineSystem,
    pub solution: LinearSolution,
}
