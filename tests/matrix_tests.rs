use approx::assert_relative_eq;
use gauss_rs::prelude::*;

fn sample() -> Matrix {
    Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that nested rows become a row-major matrix.
#[test]
fn test_from_rows_shape_and_cells() {
    let m = sample();
    assert_eq!(m.shape(), (3, 3));
    assert!(m.is_square());
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(m.get(1, 2).unwrap(), 6.0);
}

/// Test that ragged and empty inputs are rejected.
#[test]
fn test_from_rows_rejects_bad_input() {
    let ragged = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    assert!(matches!(ragged, Err(LinalgError::InvalidArgument(_))));

    let empty = Matrix::<f64>::from_rows(vec![]);
    assert_eq!(empty, Err(LinalgError::EmptyInput));

    let short = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0]);
    assert!(matches!(short, Err(LinalgError::InvalidArgument(_))));
}

/// Test identity and zero construction.
#[test]
fn test_identity_and_zeros() {
    let id = Matrix::<f64>::identity(3);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 });
        }
    }
    assert!(Matrix::<f64>::zeros(2, 4).as_slice().iter().all(|&v| v == 0.0));
}

// ============================================================================
// Access Tests
// ============================================================================

/// Test checked access reports the offending axis.
#[test]
fn test_out_of_range_access() {
    let mut m = sample();
    assert_eq!(
        m.get(3, 0),
        Err(LinalgError::OutOfRange {
            axis: "row",
            index: 3,
            len: 3
        })
    );
    assert_eq!(
        m.set(0, 5, 1.0),
        Err(LinalgError::OutOfRange {
            axis: "column",
            index: 5,
            len: 3
        })
    );
    assert!(m.row(7).is_err());
    assert!(m.col(7).is_err());
}

/// Test row and column replacement.
#[test]
fn test_set_row_and_col() {
    let mut m = sample();
    m.set_row(0, &[0.0, 0.0, 0.0]).unwrap();
    m.set_col(2, &[1.0, 1.0, 1.0]).unwrap();
    assert_eq!(m.row(0).unwrap(), vec![0.0, 0.0, 1.0]);
    assert_eq!(m.col(2).unwrap(), vec![1.0, 1.0, 1.0]);

    assert!(matches!(
        m.set_row(1, &[1.0, 2.0]),
        Err(LinalgError::InvalidArgument(_))
    ));
}

// ============================================================================
// Row Operation Tests
// ============================================================================

/// Test the three elementary row operations.
#[test]
fn test_elementary_row_operations() {
    let mut m = sample();

    m.swap_rows(0, 2).unwrap();
    assert_eq!(m.row(0).unwrap(), vec![7.0, 8.0, 9.0]);

    m.scale_row(1, 0.5).unwrap();
    assert_eq!(m.row(1).unwrap(), vec![2.0, 2.5, 3.0]);

    m.add_row_multiple(2, 1, -0.5).unwrap();
    assert_eq!(m.row(2).unwrap(), vec![0.0, 0.75, 1.5]);
}

/// Test that zero factors are rejected.
#[test]
fn test_zero_factors_rejected() {
    let mut m = sample();
    assert!(matches!(
        m.scale_row(0, 0.0),
        Err(LinalgError::InvalidArgument(_))
    ));
    assert!(matches!(
        m.add_row_multiple(0, 1, 0.0),
        Err(LinalgError::InvalidArgument(_))
    ));
    assert_eq!(m, sample());
}

// ============================================================================
// Derivation Tests
// ============================================================================

/// Test transpose, minor and last-column removal.
#[test]
fn test_structural_derivations() {
    let m = sample();

    let t = m.transpose();
    assert_eq!(t.row(0).unwrap(), vec![1.0, 4.0, 7.0]);

    let minor = m.remove_row_col(1, 1).unwrap();
    assert_eq!(minor.as_slice(), &[1.0, 3.0, 7.0, 9.0]);

    let coef = m.remove_last_col().unwrap();
    assert_eq!(coef.shape(), (3, 2));
    assert_eq!(coef.row(2).unwrap(), vec![7.0, 8.0]);
}

/// Test that sub-matrix bounds are inclusive.
#[test]
fn test_sub_matrix_inclusive() {
    let m = sample();
    let sub = m.sub_matrix(1, 2, 0, 1).unwrap();
    assert_eq!(sub.as_slice(), &[4.0, 5.0, 7.0, 8.0]);
    assert!(m.sub_matrix(0, 3, 0, 1).is_err());
    assert!(m.sub_matrix(2, 1, 0, 1).is_err());
}

/// Test horizontal concatenation and column replacement.
#[test]
fn test_augment_and_replace_col() {
    let m = sample();
    let b = Matrix::column_vector(&[10.0, 11.0, 12.0]);

    let aug = Matrix::augment(&m, &b).unwrap();
    assert_eq!(aug.shape(), (3, 4));
    assert_eq!(aug.col(3).unwrap(), vec![10.0, 11.0, 12.0]);

    let replaced = m.replace_col(0, &b).unwrap();
    assert_eq!(replaced.col(0).unwrap(), vec![10.0, 11.0, 12.0]);
    assert_eq!(replaced.col(1).unwrap(), m.col(1).unwrap());

    let short = Matrix::column_vector(&[1.0, 2.0]);
    assert!(matches!(
        Matrix::augment(&m, &short),
        Err(LinalgError::InvalidArgument(_))
    ));
    assert!(matches!(
        m.replace_col(0, &short),
        Err(LinalgError::InvalidArgument(_))
    ));
}

/// Test tolerance-based comparison.
#[test]
fn test_approx_eq() {
    let a = sample();
    let mut b = sample();
    b[(0, 0)] += 1e-10;
    assert!(a.approx_eq(&b, 1e-9));
    b[(0, 0)] += 1.0;
    assert!(!a.approx_eq(&b, 1e-9));
    assert!(!a.approx_eq(&a.transpose().remove_last_col().unwrap(), 1.0));
    assert_relative_eq!(b[(0, 0)], 2.0, epsilon = 1e-9);
}

/// Test the fixed-width display format.
#[test]
fn test_display_three_decimals() {
    let m = Matrix::from_rows(vec![vec![1.0, -0.5], vec![2.25, 10.0]]).unwrap();
    let text = format!("{}", m);
    assert_eq!(
        text,
        "       1.000      -0.500\n       2.250      10.000"
    );
}
