//! Natural Cubic-Spline System
//!
//! Builds the linear system for the second-derivative coefficients `c` of a
//! natural cubic spline through `n + 1` knots and solves it by Gaussian
//! elimination ([`crate::linalg::gauss`]).
//!
//! ```text
//! row 0      : c[0] = 0
//! row i      : c[i-1] + 4 c[i] + c[i+1] = 3 (Δ[i] - Δ[i-1])      0 < i < n
//! row n      : c[n] = 0
//! ```
//!
//! where `Δ[i] = (y[i+1] - y[i]) / (x[i+1] - x[i])`. The boundary is fixed
//! to natural (`S'' = 0` at both ends).


use crate::grid::Grid;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_shape, impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::SplineReport;
use crate::interpolation::spline::helpers::{deltas, spacings};
use crate::linalg::gauss::{solve_linear_system_with, Strategy};


#[derive(Debug, Copy, Clone)]
pub struct NaturalSplineCfg<'a> {
    common: CommonCfg<'a>,
    strategy: Strategy,
}
impl<'a> NaturalSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), strategy: Strategy::default() }
    }

    pub fn strategy(&self) -> Strategy { self.strategy }

    pub fn set_strategy(mut self, v: Strategy) -> Self {
        self.strategy = v;
        self
    }
}
impl_common_cfg!(NaturalSplineCfg<'a>);


/// Coefficient matrix `a` and right-hand side `b`, both of size `n + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSystem {
    pub a: Grid,
    pub b: Vec<f64>,
}


/// Builds the natural cubic-spline system for the knots `(x, y)`.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`],
///   [`InterpolationError::InsufficientPoints`] on malformed input.
pub fn spline_system(x: &[f64], y: &[f64]) -> Result<SplineSystem, InterpolationError> {
    check_shape(x, y)?;

    let n = x.len() - 1;
    let mut a = Grid::square(n + 1);
    let mut b = vec![0.0; n + 1];

    let h = spacings(x);
    let d = deltas(y, &h);

    for i in 1..n {
        a[(i, i - 1)] = 1.0;
        a[(i, i)]     = 4.0;
        a[(i, i + 1)] = 1.0;
        b[i] = 3.0 * (d[i] - d[i - 1]);
    }

    a[(0, 0)] = 1.0;
    a[(n, n)] = 1.0;

    log::debug!("built {0}x{0} natural spline system", n + 1);
    Ok(SplineSystem { a, b })
}


/// Builds and solves the natural spline system.
///
/// # Returns
/// [`SplineReport`] containing
/// - `algorithm_name` : `"natural cubic spline"`
/// - `n_provided`     : number of knots
/// - `system`         : `A` and `b` as built
/// - `solution`       : reduced `A`, transformed `b`, solution `x`
///
/// # Errors
/// - Shape errors from [`spline_system`].
/// - [`InterpolationError::Linalg`] if the configured [`Strategy`] rejects
///   the system.
pub fn solve(cfg: NaturalSplineCfg) -> Result<SplineReport, InterpolationError> {
    cfg.common.validate()?;

    let x = cfg.common.x();
    let system = spline_system(x, cfg.common.y())?;
    let solution = solve_linear_system_with(&system.a, &system.b, cfg.strategy)?;

    if !solution.is_complete() {
        log::warn!(
            "natural spline solve skipped pivots {:?}; solution is incomplete",
            solution.skipped_pivots
        );
    }

    Ok(SplineReport {
        algorithm_name: Algorithm::SplineNatural.algorithm_name(),
        n_provided: x.len(),
        system,
        solution,
    })
}
