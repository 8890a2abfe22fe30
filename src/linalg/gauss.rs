//! Gaussian elimination with back-substitution.
//!
//! Reduces a square system `A x = b` to upper-triangular form and solves it
//! by back-substitution. Two elimination strategies are offered:
//!
//! ┌ [`Strategy::Naive`]
//! │   no row interchanges; a zero pivot is skipped and the rows below it
//! │   are left unmodified in that column. Back-substitution leaves
//! │   `x[i] = 0` on a zero pivot. Singular or ill-posed systems therefore
//! │   produce an incomplete solution silently (see
//! │   [`LinearSolution::skipped_pivots`]).
//! │
//! └ [`Strategy::PartialPivot`]
//!     swaps in the row with the largest `|A[r][i]|` (first maximum wins)
//!     and fails with [`LinalgError::SingularMatrix`] on an all-zero column.
//!
//! The caller's matrix and vector are copied; nothing is mutated in place.


use crate::grid::Grid;
use crate::linalg::errors::LinalgError;


/// Elimination strategy.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Skip zero pivots, no row interchanges.
    Naive,
    /// Row interchange on the largest absolute pivot.
    #[default]
    PartialPivot,
}

impl Strategy {
    pub const fn strategy_name(self) -> &'static str {
        match self {
            Strategy::Naive        => "naive",
            Strategy::PartialPivot => "partial_pivot",
        }
    }
}
impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.strategy_name())
    }
}


/// Result of solving `A x = b`.
///
/// - `a`              : `A` reduced to upper-triangular form
/// - `b`              : right-hand side after the same row operations
/// - `x`              : solution vector
/// - `skipped_pivots` : pivot rows skipped because `A[i][i] == 0` (naive only)
/// - `row_swaps`      : `(i, p)` interchanges performed (partial pivoting only)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSolution {
    pub a: Grid,
    pub b: Vec<f64>,
    pub x: Vec<f64>,
    pub skipped_pivots: Vec<usize>,
    pub row_swaps: Vec<(usize, usize)>,
}

impl LinearSolution {
    /// `true` if every pivot was usable.
    pub fn is_complete(&self) -> bool {
        self.skipped_pivots.is_empty()
    }
}


/// Solves `A x = b` with the default strategy ([`Strategy::PartialPivot`]).
pub fn solve_linear_system(a: &Grid, b: &[f64]) -> Result<LinearSolution, LinalgError> {
    solve_linear_system_with(a, b, Strategy::default())
}


/// Solves `A x = b` with the given elimination strategy.
///
/// # Errors
/// - [`LinalgError::EmptySystem`] for a `0 × 0` matrix.
/// - [`LinalgError::NotSquare`] if `A` is not square.
/// - [`LinalgError::DimensionMismatch`] if `b.len()` differs from the size of `A`.
/// - [`LinalgError::SingularMatrix`] under [`Strategy::PartialPivot`] when a
///   column has no nonzero pivot candidate.
pub fn solve_linear_system_with(
    a: &Grid,
    b: &[f64],
    strategy: Strategy,
) -> Result<LinearSolution, LinalgError> {
    if a.rows() == 0 {
        return Err(LinalgError::EmptySystem);
    }
    if !a.is_square() {
        return Err(LinalgError::NotSquare { rows: a.rows(), cols: a.cols() });
    }
    if b.len() != a.rows() {
        return Err(LinalgError::DimensionMismatch { n: a.rows(), rhs_len: b.len() });
    }

    // private working copy
    let mut a = a.clone();
    let mut b = b.to_vec();

    let mut skipped_pivots = Vec::new();
    let mut row_swaps = Vec::new();

    match strategy {
        Strategy::Naive        => eliminate_naive(&mut a, &mut b, &mut skipped_pivots),
        Strategy::PartialPivot => eliminate_partial_pivot(&mut a, &mut b, &mut row_swaps)?,
    }

    let x = back_substitute(&a, &b);

    Ok(LinearSolution { a, b, x, skipped_pivots, row_swaps })
}


#[inline]
fn subtract_scaled_row(a: &mut Grid, b: &mut [f64], pivot: usize, target: usize, factor: f64) {
    for k in 0..a.cols() {
        let v = a[(pivot, k)];
        a[(target, k)] -= factor * v;
    }
    b[target] -= factor * b[pivot];
}


fn eliminate_naive(a: &mut Grid, b: &mut [f64], skipped: &mut Vec<usize>) {
    let n = a.rows();

    for i in 0..n {
        let pivot = a[(i, i)];
        if pivot == 0.0 {
            log::warn!("zero pivot at row {i}; leaving rows below unreduced in column {i}");
            skipped.push(i);
            continue;
        }

        for j in i + 1..n {
            let factor = a[(j, i)] / pivot;
            subtract_scaled_row(a, b, i, j, factor);
        }
    }
}


fn eliminate_partial_pivot(
    a: &mut Grid,
    b: &mut [f64],
    swaps: &mut Vec<(usize, usize)>,
) -> Result<(), LinalgError> {
    let n = a.rows();

    for i in 0..n {
        // strict comparison keeps the first maximum
        let mut p = i;
        for r in i + 1..n {
            if a[(r, i)].abs() > a[(p, i)].abs() {
                p = r;
            }
        }

        if a[(p, i)] == 0.0 {
            return Err(LinalgError::SingularMatrix { col: i });
        }

        if p != i {
            log::debug!("swapping rows {i} and {p}");
            a.swap_rows(i, p);
            b.swap(i, p);
            swaps.push((i, p));
        }

        let pivot = a[(i, i)];
        for j in i + 1..n {
            let factor = a[(j, i)] / pivot;
            subtract_scaled_row(a, b, i, j, factor);
        }
    }

    Ok(())
}


/// `x[i] = (b[i] - Σ_{j>i} A[i][j] x[j]) / A[i][i]`, last row first.
/// A zero pivot leaves `x[i] = 0`.
fn back_substitute(a: &Grid, b: &[f64]) -> Vec<f64> {
    let n = a.rows();
    let mut x = vec![0.0; n];

    for i in (0..n).rev() {
        let pivot = a[(i, i)];
        if pivot == 0.0 { continue; }

        let mut s = b[i];
        for j in i + 1..n {
            s -= a[(i, j)] * x[j];
        }
        x[i] = s / pivot;
    }

    x
}
