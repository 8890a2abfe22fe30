//! Hermite Divided Differences
//!
//! Builds the divided-difference table for
//! [Hermite interpolation](https://en.wikipedia.org/wiki/Hermite_interpolation)
//! from function values and first derivatives.
//!
//! Every node is doubled, `z[2i] = z[2i+1] = x[i]`, giving a `2n × 2n` table.
//!
//! ```text
//! H[2i][0] = H[2i+1][0] = y[i]
//! H[2i+1][1]            = dy[i]
//! H[2i][1]              = (y[i+1] - y[i]) / (x[i+1] - x[i])      i < n-1
//! H[i][j]               = (H[i+1][j-1] - H[i][j-1]) / (z[i+j] - z[i])
//! ```
//!
//! `H[2n-2][1]` has no successor sample and stays `0.0`.


use crate::grid::Grid;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_shape, impl_common_cfg, non_finite_idx, CommonCfg};
use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Clone, Copy)]
pub struct HermiteCfg<'a> {
    common: CommonCfg<'a>,
    dy: &'a [f64],
}
impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), dy: &[] }
    }

    pub fn dy(&self) -> &'a [f64] { self.dy }

    pub fn set_dy(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        let x_len = self.common.x.len();
        if x_len != 0 && v.len() != x_len {
            return Err(InterpolationError::DerivativeLength { x_len, dy_len: v.len() });
        }

        self.dy = v;
        Ok(self)
    }
}
impl_common_cfg!(HermiteCfg<'a>);


/// Hermite divided-difference table with its doubled node sequence.
///
/// - `algorithm_name` : name of the algorithm used
/// - `table`          : `2n × 2n` divided differences, column `j` of order `j`
/// - `nodes`          : `z`, each `x[i]` repeated twice
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteTable {
    pub algorithm_name: &'static str,
    pub table: Grid,
    pub nodes: Vec<f64>,
}

impl HermiteTable {
    pub fn size(&self) -> usize { self.nodes.len() }

    pub fn into_parts(self) -> (Grid, Vec<f64>) {
        (self.table, self.nodes)
    }
}


/// Builds the Hermite divided-difference table.
///
/// # Errors
/// - Shape errors as for every entry point.
/// - [`InterpolationError::DerivativeLength`] if `dy.len() != x.len()`.
pub fn hermite_table(x: &[f64], y: &[f64], dy: &[f64]) -> Result<HermiteTable, InterpolationError> {
    check_shape(x, y)?;
    if dy.len() != x.len() {
        return Err(InterpolationError::DerivativeLength { x_len: x.len(), dy_len: dy.len() });
    }

    let n = x.len();
    let size = 2 * n;

    let z: Vec<f64> = x.iter().flat_map(|&xi| [xi, xi]).collect();
    let mut h = Grid::square(size);

    for i in 0..n {
        h[(2 * i, 0)]     = y[i];
        h[(2 * i + 1, 0)] = y[i];

        h[(2 * i + 1, 1)] = dy[i];
        if i != n - 1 {
            h[(2 * i, 1)] = (y[i + 1] - y[i]) / (x[i + 1] - x[i]);
        }
    }

    for j in 2..size {
        for i in 0..size - j {
            h[(i, j)] = (h[(i + 1, j - 1)] - h[(i, j - 1)]) / (z[i + j] - z[i]);
        }
    }

    log::debug!("built {size}x{size} hermite table");
    Ok(HermiteTable {
        algorithm_name: Algorithm::Hermite.algorithm_name(),
        table: h,
        nodes: z,
    })
}


/// Builds the Hermite table from a validated configuration.
pub fn build(cfg: HermiteCfg) -> Result<HermiteTable, InterpolationError> {
    cfg.common.validate()?;
    hermite_table(cfg.common.x(), cfg.common.y(), cfg.dy)
}
