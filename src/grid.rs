//! Dense row-major grid.
//!
//! [`Grid`] backs every table in the crate: the Neville, forward-difference
//! and Hermite tables as well as the spline coefficient matrix.
//! Cells never written by an algorithm stay `0.0`.


use std::ops::{Index, IndexMut};
use crate::linalg::errors::LinalgError;


/// Row-major `rows × cols` grid of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    pub fn square(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// Builds a grid from nested rows.
    ///
    /// # Errors
    /// - [`LinalgError::RaggedRows`] if any row length differs from the first.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LinalgError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n_cols {
                return Err(LinalgError::RaggedRows { row, expected: n_cols, got: r.len() });
            }
            data.extend_from_slice(r);
        }

        Ok(Self { rows: n_rows, cols: n_cols, data })
    }

    // getters
    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn is_square(&self) -> bool { self.rows == self.cols }
    pub fn as_slice(&self) -> &[f64] { &self.data }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self[(r, col)]).collect()
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b { return; }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Computes `self · v`.
    ///
    /// # Errors
    /// - [`LinalgError::DimensionMismatch`] if `v.len() != cols`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, LinalgError> {
        if v.len() != self.cols {
            return Err(LinalgError::DimensionMismatch { n: self.cols, rhs_len: v.len() });
        }

        Ok((0..self.rows)
            .map(|r| self.row(r).iter().zip(v).map(|(a, b)| a * b).sum())
            .collect())
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} grid", self.rows, self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} grid", self.rows, self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
