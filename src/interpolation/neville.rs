//! Neville's Method
//!
//! Implements [Neville's algorithm](https://en.wikipedia.org/wiki/Neville%27s_algorithm)
//! for evaluating the interpolating polynomial through `n` points at a
//! single query point without forming its coefficients.
//!
//! The table `Q` is `n × n`; column 0 holds `y`, and column `j` holds the
//! value at the query point of the degree-`j` polynomial through
//! `x[i..=i+j]`. The result is the top-right cell `Q[0][n-1]`.


use crate::grid::Grid;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_shape, impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Neville interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NevilleCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy)]
pub struct NevilleCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NevilleCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NevilleCfg<'a>);


/// Builds the full Neville table for `x_interp`.
///
/// ```text
/// Q[i][j] = ((x_interp - x[i+j]) Q[i][j-1] + (x[i] - x_interp) Q[i+1][j-1]) / (x[i] - x[i+j])
/// ```
///
/// Only cells with `i + j < n` are written. Repeated `x` values divide by
/// zero and the non-finite result is propagated.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`],
///   [`InterpolationError::InsufficientPoints`] on malformed input.
pub fn neville_table(x: &[f64], y: &[f64], x_interp: f64) -> Result<Grid, InterpolationError> {
    check_shape(x, y)?;

    let n = x.len();
    let mut q = Grid::square(n);

    for i in 0..n {
        q[(i, 0)] = y[i];
    }

    for j in 1..n {
        for i in 0..n - j {
            q[(i, j)] = ((x_interp - x[i + j]) * q[(i, j - 1)]
                + (x[i] - x_interp) * q[(i + 1, j - 1)])
                / (x[i] - x[i + j]);
        }
    }

    Ok(q)
}


/// Interpolated value at `x_interp` through all `(x, y)` samples.
pub fn neville(x: &[f64], y: &[f64], x_interp: f64) -> Result<f64, InterpolationError> {
    let q = neville_table(x, y, x_interp)?;
    Ok(q[(0, x.len() - 1)])
}


/// Neville interpolant over borrowed samples.
///
/// The table is rebuilt for every query point.
#[derive(Debug, Clone, Copy)]
pub struct Neville<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> Neville<'a> {
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self, InterpolationError> {
        check_shape(x, y)?;
        Ok(Self { x, y })
    }
}

impl Interpolator for Neville<'_> {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        neville(self.x, self.y, x)
    }

    fn n_points(&self) -> usize { self.x.len() }
}


/// Performs Neville interpolation at every point in `cfg.common.x_eval()`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"neville"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
pub fn interpolate(cfg: NevilleCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let evals = cfg.common.x_eval();
    let interpolant = Neville::new(cfg.common.x(), cfg.common.y())?;

    let mut report = InterpolationReport::new(
        Algorithm::Neville,
        interpolant.n_points(),
        evals.len(),
    );
    report.evaluated = interpolant.eval_many(evals)?;

    Ok(report)
}
