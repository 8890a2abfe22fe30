//! Newton Forward-Difference Interpolation
//!
//! Implements global polynomial interpolation on equally spaced samples using
//! [Newton's forward-difference formula](https://en.wikipedia.org/wiki/Newton_polynomial#Newton_forward_divided_difference_formula).
//!
//! With `h = x[1] - x[0]` and `p = (x - x[0]) / h`,
//!
//! ```text
//! P(x) = Δ⁰y₀ + p Δ¹y₀ + p(p-1)/2! Δ²y₀ + ... + p(p-1)...(p-n+2)/(n-1)! Δⁿ⁻¹y₀
//! ```
//!
//! Equal spacing is a precondition. The raw functions in this module do not
//! verify it and return a meaningless (finite) value when it is violated;
//! [`interpolate`] checks it according to the configured [`Validation`].
//!
//! [`Validation`]: crate::interpolation::config::Validation


use crate::grid::Grid;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_shape, enforce, impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;

/// Relative tolerance on `|x[i+1] - x[i] - h| / |h|` for the spacing check.
pub const DEFAULT_SPACING_TOL: f64 = 1e-9;


/// Newton forward-difference configuration
///
/// # Fields
/// - `common`      : [`CommonCfg`]
/// - `spacing_tol` : relative tolerance for the equal-spacing check
///
/// # Construction
/// - Use [`NewtonForwardCfg::new`] then optional setters.
///
/// # Defaults
/// - `spacing_tol` is [`DEFAULT_SPACING_TOL`].
#[derive(Debug, Clone, Copy)]
pub struct NewtonForwardCfg<'a> {
    common: CommonCfg<'a>,
    spacing_tol: f64,
}
impl<'a> NewtonForwardCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), spacing_tol: DEFAULT_SPACING_TOL }
    }

    pub fn spacing_tol(&self) -> f64 { self.spacing_tol }

    pub fn set_spacing_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidSpacingTol { got: v });
        }
        self.spacing_tol = v;
        Ok(self)
    }
}
impl_common_cfg!(NewtonForwardCfg<'a>);


/// Builds the forward-difference table.
///
/// Column 0 holds `y`; `D[i][j] = D[i+1][j-1] - D[i][j-1]` for `i + j < n`.
pub fn newton_forward_table(x: &[f64], y: &[f64]) -> Result<Grid, InterpolationError> {
    check_shape(x, y)?;

    let n = y.len();
    let mut d = Grid::square(n);

    for i in 0..n {
        d[(i, 0)] = y[i];
    }

    for j in 1..n {
        for i in 0..n - j {
            d[(i, j)] = d[(i + 1, j - 1)] - d[(i, j - 1)];
        }
    }

    log::debug!("built {n}x{n} forward-difference table");
    Ok(d)
}


/// Normalized leading coefficients `f_k = Δᵏy₀ / (k! hᵏ)`, one per order.
pub fn newton_forward_coefficients(x: &[f64], table: &Grid) -> Result<Vec<f64>, InterpolationError> {
    Ok(NewtonForward::from_table(x, table)?.coefficients())
}


/// Evaluates the forward polynomial encoded by `table` at `x_interp`.
pub fn newton_forward_eval(x: &[f64], table: &Grid, x_interp: f64) -> Result<f64, InterpolationError> {
    NewtonForward::from_table(x, table)?.eval(x_interp)
}


/// Newton forward polynomial: origin, step and the first table row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonForward {
    x0: f64,
    h: f64,
    leading: Vec<f64>,
}

impl NewtonForward {
    /// Takes `x0`, `h` from `x` and the leading differences from row 0 of `table`.
    ///
    /// # Errors
    /// - [`InterpolationError::InsufficientPoints`] if `x` has fewer than two values.
    /// - [`InterpolationError::TableShape`] if `table` is not `x.len() × x.len()`.
    pub fn from_table(x: &[f64], table: &Grid) -> Result<Self, InterpolationError> {
        let n = x.len();
        if n < 2 {
            return Err(InterpolationError::InsufficientPoints { got: n });
        }
        if table.rows() != n || table.cols() != n {
            return Err(InterpolationError::TableShape {
                x_len: n,
                rows: table.rows(),
                cols: table.cols(),
            });
        }

        Ok(Self { x0: x[0], h: x[1] - x[0], leading: table.row(0).to_vec() })
    }

    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        let table = newton_forward_table(x, y)?;
        Self::from_table(x, &table)
    }

    pub fn step(&self) -> f64 { self.h }

    /// `Δᵏy₀` for `k = 0..n`
    pub fn leading_differences(&self) -> &[f64] { &self.leading }

    pub fn coefficients(&self) -> Vec<f64> {
        let mut denom = 1.0;
        self.leading
            .iter()
            .enumerate()
            .map(|(k, &dk)| {
                if k > 0 { denom *= k as f64 * self.h; }
                dk / denom
            })
            .collect()
    }
}

impl Interpolator for NewtonForward {
    /// Terms are accumulated for `j = 1, 2, ...` in order; the running
    /// product `t_j = t_{j-1} (p - (j-1)) / j` depends on it.
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        let p = (x - self.x0) / self.h;

        let mut f = self.leading[0];
        let mut term = 1.0;
        for (j, &dj) in self.leading.iter().enumerate().skip(1) {
            term *= (p - (j - 1) as f64) / j as f64;
            f += term * dj;
        }

        Ok(f)
    }

    fn n_points(&self) -> usize { self.leading.len() }
}


/// Checks `|x[i+1] - x[i] - h| <= tol |h|` for every step.
pub(crate) fn check_equal_spacing(x: &[f64], tol: f64) -> Result<(), InterpolationError> {
    let h = x[1] - x[0];
    for i in 1..x.len() - 1 {
        let got = x[i + 1] - x[i];
        if (got - h).abs() > tol * h.abs() {
            return Err(InterpolationError::UnequalSpacing { idx: i, h, got });
        }
    }
    Ok(())
}


/// Performs Newton forward-difference interpolation.
///
/// # Behavior
/// - Checks equal spacing of `x`; under [`Validation::Strict`] a violation is
///   returned as [`InterpolationError::UnequalSpacing`], otherwise it is logged.
/// - Builds the forward-difference table and evaluates the polynomial at
///   each point of `cfg.common.x_eval()`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton forward"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// [`Validation::Strict`]: crate::interpolation::config::Validation::Strict
pub fn interpolate(cfg: NewtonForwardCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    enforce(cfg.common.validation(), check_equal_spacing(x, cfg.spacing_tol))?;

    let poly = NewtonForward::new(x, y)?;

    let mut report = InterpolationReport::new(
        Algorithm::NewtonForward,
        poly.n_points(),
        evals.len(),
    );
    report.evaluated = poly.eval_many(evals)?;

    Ok(report)
}
