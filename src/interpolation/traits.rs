use crate::interpolation::errors::InterpolationError;

/// A polynomial interpolant built from a fixed sample set.
pub trait Interpolator {
    /// evaluates single point
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// number of samples the interpolant was built from
    fn n_points(&self) -> usize;

    /// evaluates many points, in order
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
