use tabula::grid::Grid;
use tabula::linalg::errors::LinalgError;
use tabula::linalg::{solve_linear_system, solve_linear_system_with, Strategy};

type TabulaResult = Result<(), LinalgError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at {}: left={}, right={}, ATOL={}",
            i, ai, bi, ATOL
        );
    }
}

fn grid(rows: &[&[f64]]) -> Grid {
    let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
    Grid::from_rows(&rows).unwrap()
}

#[test]
fn two_by_two() -> TabulaResult {
    let a = grid(&[&[2.0, 1.0], &[1.0, 3.0]]);
    let b = [3.0, 5.0];

    for strategy in [Strategy::Naive, Strategy::PartialPivot] {
        let sol = solve_linear_system_with(&a, &b, strategy)?;
        assert_vec_close(&sol.x, &[0.8, 1.4]);
    }
    Ok(())
}

#[test]
fn default_strategy_is_partial_pivot() {
    assert_eq!(Strategy::default(), Strategy::PartialPivot);
    assert_eq!(Strategy::Naive.to_string(), "naive");
    assert_eq!(Strategy::PartialPivot.to_string(), "partial_pivot");
}

#[test]
fn three_by_three_needs_pivoting() -> TabulaResult {
    let a = grid(&[
        &[0.0, 2.0, 1.0],
        &[1.0, 1.0, 1.0],
        &[2.0, 1.0, 0.0],
    ]);
    let b = [7.0, 6.0, 4.0];

    let sol = solve_linear_system(&a, &b)?;
    assert!(!sol.row_swaps.is_empty());
    assert_vec_close(&sol.x, &[1.0, 2.0, 3.0]);
    assert_vec_close(&a.mul_vec(&sol.x)?, &b);

    // reduced matrix is upper triangular
    for i in 0..3 {
        for j in 0..i {
            assert!(approx_eq(sol.a[(i, j)], 0.0), "a[{i}][{j}] = {}", sol.a[(i, j)]);
        }
    }
    Ok(())
}

#[test]
fn naive_skips_zero_pivot() -> TabulaResult {
    let a = grid(&[&[0.0, 1.0], &[1.0, 0.0]]);
    let b = [2.0, 3.0];

    let sol = solve_linear_system_with(&a, &b, Strategy::Naive)?;
    assert_eq!(sol.skipped_pivots, vec![0, 1]);
    assert!(!sol.is_complete());
    assert_eq!(sol.a, a);
    assert_eq!(sol.b, b.to_vec());
    assert_eq!(sol.x, vec![0.0, 0.0]);
    Ok(())
}

#[test]
fn partial_pivot_swaps_zero_pivot() -> TabulaResult {
    let a = grid(&[&[0.0, 1.0], &[1.0, 0.0]]);
    let b = [2.0, 3.0];

    let sol = solve_linear_system_with(&a, &b, Strategy::PartialPivot)?;
    assert_eq!(sol.row_swaps, vec![(0, 1)]);
    assert!(sol.is_complete());
    assert_eq!(sol.b, vec![3.0, 2.0]);
    assert_eq!(sol.x, vec![3.0, 2.0]);
    Ok(())
}

#[test]
fn singular_naive_is_incomplete() -> TabulaResult {
    let a = grid(&[&[1.0, 2.0], &[2.0, 4.0]]);
    let b = [1.0, 2.0];

    let sol = solve_linear_system_with(&a, &b, Strategy::Naive)?;
    assert_eq!(sol.skipped_pivots, vec![1]);
    assert_eq!(sol.a.row(1), &[0.0, 0.0]);
    assert_eq!(sol.x, vec![1.0, 0.0]);
    Ok(())
}

#[test]
fn singular_partial_pivot_errors() {
    let a = grid(&[&[1.0, 2.0], &[2.0, 4.0]]);
    let b = [1.0, 2.0];

    let err = solve_linear_system_with(&a, &b, Strategy::PartialPivot).unwrap_err();
    assert!(matches!(err, LinalgError::SingularMatrix { col: 1 }));
}

#[test]
fn caller_data_untouched() -> TabulaResult {
    let a = grid(&[&[0.0, 2.0, 1.0], &[1.0, 1.0, 1.0], &[2.0, 1.0, 0.0]]);
    let b = vec![7.0, 6.0, 4.0];
    let (a0, b0) = (a.clone(), b.clone());

    solve_linear_system_with(&a, &b, Strategy::Naive)?;
    solve_linear_system_with(&a, &b, Strategy::PartialPivot)?;

    assert_eq!(a, a0);
    assert_eq!(b, b0);
    Ok(())
}

#[test]
fn empty_system_error() {
    let err = solve_linear_system(&Grid::zeros(0, 0), &[]).unwrap_err();
    assert!(matches!(err, LinalgError::EmptySystem));
}

#[test]
fn not_square_error() {
    let err = solve_linear_system(&Grid::zeros(2, 3), &[0.0, 0.0]).unwrap_err();
    assert!(matches!(err, LinalgError::NotSquare { rows: 2, cols: 3 }));
}

#[test]
fn dimension_mismatch_error() {
    let err = solve_linear_system(&Grid::square(3), &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch { n: 3, rhs_len: 2 }));
}
