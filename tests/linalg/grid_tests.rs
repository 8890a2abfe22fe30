use tabula::grid::Grid;
use tabula::linalg::errors::LinalgError;

#[test]
fn zeros_shape() {
    let g = Grid::zeros(2, 3);
    assert_eq!(g.rows(), 2);
    assert_eq!(g.cols(), 3);
    assert!(!g.is_square());
    assert!(g.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn row_major_indexing() -> Result<(), LinalgError> {
    let g = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;

    assert_eq!(g[(0, 1)], 2.0);
    assert_eq!(g[(1, 0)], 3.0);
    assert_eq!(g.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(g.row(1), &[3.0, 4.0]);
    assert_eq!(g.column(1), vec![2.0, 4.0]);
    assert_eq!(g.get(1, 1), Some(4.0));
    assert_eq!(g.get(2, 0), None);
    assert_eq!(g.get(0, 2), None);
    Ok(())
}

#[test]
fn ragged_rows_error() {
    let err = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert!(matches!(err, LinalgError::RaggedRows { row: 1, expected: 2, got: 1 }));
}

#[test]
fn swap_rows() -> Result<(), LinalgError> {
    let mut g = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])?;
    g.swap_rows(0, 2);
    assert_eq!(g.to_rows(), vec![vec![5.0, 6.0], vec![3.0, 4.0], vec![1.0, 2.0]]);

    g.swap_rows(1, 1);
    assert_eq!(g.row(1), &[3.0, 4.0]);
    Ok(())
}

#[test]
fn row_mut_writes_through() {
    let mut g = Grid::square(2);
    g.row_mut(1).copy_from_slice(&[7.0, 8.0]);
    g[(0, 0)] = 1.0;
    assert_eq!(g.to_rows(), vec![vec![1.0, 0.0], vec![7.0, 8.0]]);
}

#[test]
fn mul_vec() -> Result<(), LinalgError> {
    let g = Grid::from_rows(&[vec![1.0, 2.0, 3.0], vec![0.0, -1.0, 4.0]])?;
    assert_eq!(g.mul_vec(&[1.0, 1.0, 2.0])?, vec![9.0, 7.0]);

    let err = g.mul_vec(&[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch { n: 3, rhs_len: 2 }));
    Ok(())
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_past_last_column_panics() {
    let g = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let _ = g[(0, 2)];
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_mut_past_last_row_panics() {
    let mut g = Grid::zeros(2, 2);
    g[(2, 0)] = 1.0;
}
