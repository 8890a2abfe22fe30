//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with default minimum allowed spacing between adjacent
//! `x` data; [`DEFAULT_X_TOL`]. Shared by all interpolation algorithms.
//!
//! [`CommonCfg`] — universal fields
//! - `x`          : x values provided
//! - `y`          : y values provided
//! - `x_eval`     : x values to evaluate
//! - `x_tol`      : minimum spacing between adjacent `x`
//! - `validation` : [`Validation`] policy for geometry checks
//!
//! [`CommonCfg::new`] initializes configuration with empty `Vec<f64>`s.
//!
//! Setters reject non-finite values and mismatched lengths immediately.
//! [`CommonCfg::validate`], called by every runner before computing, repeats
//! the shape checks (empty input, unequal lengths, fewer than two points) and
//! then the geometry checks (duplicate or non-increasing `x`), which fail
//! under [`Validation::Strict`] and are logged and accepted under
//! [`Validation::Permissive`]. Setter order does not matter.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


/// Policy for precondition violations that are not shape errors.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Validation {
    /// Reject the input with a typed error.
    #[default]
    Strict,
    /// Log a warning and compute anyway.
    Permissive,
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) validation: Validation,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
            validation: Validation::Strict,
        }
    }
    /// Shape checks, then geometry checks under the current policy and `x_tol`.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        check_shape(self.x, self.y)?;
        enforce(self.validation, check_geometry(self.x, self.x_min_spacing))
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }
    pub fn validation(&self) -> Validation { self.validation }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a[f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
    pub(crate) fn with_validation(&mut self, v: Validation) { self.validation = v; }
}

impl<'a> Default for CommonCfg<'a> {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}


/// Shape preconditions shared by every entry point.
pub(crate) fn check_shape(x: &[f64], y: &[f64]) -> Result<(), InterpolationError> {
    if x.is_empty() || y.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: x.len() });
    }
    Ok(())
}


/// Distinct, strictly increasing `x` with at least `min_spacing` between neighbours.
pub(crate) fn check_geometry(x: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    for i in 1..x.len() {
        if (x[i] - x[i - 1]).abs() < min_spacing {
            return Err(InterpolationError::DuplicateX { x1: x[i - 1], x2: x[i] });
        }
        if x[i] <= x[i - 1] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}


/// Applies `validation` to the outcome of a precondition check.
pub(crate) fn enforce(
    validation: Validation,
    check: Result<(), InterpolationError>,
) -> Result<(), InterpolationError> {
    match (validation, check) {
        (_, Ok(()))                        => Ok(()),
        (Validation::Strict, Err(e))       => Err(e),
        (Validation::Permissive, Err(e))   => {
            log::warn!("precondition violated, proceeding: {e}");
            Ok(())
        }
    }
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;
                use $crate::interpolation::config::non_finite_idx;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                if v.len() < 2 {
                    return Err(InterpolationError::InsufficientPoints { got: v.len() });
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            pub fn set_validation(
                mut self,
                v: $crate::interpolation::config::Validation,
            ) -> Self {
                self.common.with_validation(v);
                self
            }
        }
    };
}
pub(crate) use impl_common_cfg;
