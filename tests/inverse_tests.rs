use approx::assert_relative_eq;
use gauss_rs::prelude::*;
use nalgebra::DMatrix;

fn engine() -> LinearEngine {
    Engine::new().build().unwrap()
}

fn m(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

fn product(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.rows();
    let mut p = Matrix::zeros(n, b.cols());
    for i in 0..n {
        for j in 0..b.cols() {
            p[(i, j)] = (0..a.cols()).map(|k| a[(i, k)] * b[(k, j)]).sum();
        }
    }
    p
}

fn invertible_samples() -> Vec<Matrix> {
    vec![
        m(vec![vec![4.0, 3.0], vec![6.0, 3.0]]),
        m(vec![
            vec![0.0, 2.0, 1.0],
            vec![1.0, 0.0, 3.0],
            vec![4.0, -1.0, 0.0],
        ]),
        m(vec![
            vec![2.0, -1.0, 0.0, 1.0],
            vec![1.0, 3.0, 2.0, 0.0],
            vec![0.0, 1.0, 4.0, -2.0],
            vec![3.0, 0.0, 1.0, 5.0],
        ]),
        m(vec![vec![5.0]]),
    ]
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// Test the 2x2 reference inverse with both methods.
#[test]
fn test_reference_inverse() {
    let a = m(vec![vec![4.0, 3.0], vec![6.0, 3.0]]);
    let e = engine();
    for method in [Augment, Adjoint] {
        let inv = e.inverse(&a, method).unwrap().matrix;
        assert_relative_eq!(inv[(0, 0)], -0.5, epsilon = 1e-9);
        assert_relative_eq!(inv[(0, 1)], 0.5, epsilon = 1e-9);
        assert_relative_eq!(inv[(1, 0)], 1.0, epsilon = 1e-9);
        assert_relative_eq!(inv[(1, 1)], -2.0 / 3.0, epsilon = 1e-9);
    }
}

/// Test singular and non-square inputs.
#[test]
fn test_inverse_errors() {
    let e = engine();
    let singular = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
    assert_eq!(e.inverse(&singular, Augment), Err(LinalgError::Singular));
    assert_eq!(e.inverse(&singular, Adjoint), Err(LinalgError::Singular));

    let wide = m(vec![vec![1.0, 2.0, 3.0]]);
    assert_eq!(
        e.inverse(&wide, Augment),
        Err(LinalgError::NotSquare { rows: 1, cols: 3 })
    );
    assert_eq!(
        e.cofactor_matrix(&wide),
        Err(LinalgError::NotSquare { rows: 1, cols: 3 })
    );
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test that A times its inverse is the identity for both methods.
#[test]
fn test_product_is_identity() {
    let e = engine();
    for a in invertible_samples() {
        let id = Matrix::identity(a.rows());
        for method in [Augment, Adjoint] {
            let inv = e.inverse(&a, method).unwrap().matrix;
            assert!(product(&a, &inv).approx_eq(&id, 1e-6));
        }
    }
}

/// Test that the two methods agree.
#[test]
fn test_methods_agree() {
    let e = engine();
    for a in invertible_samples() {
        let aug = e.inverse(&a, Augment).unwrap().matrix;
        let adj = e.inverse(&a, Adjoint).unwrap().matrix;
        assert!(aug.approx_eq(&adj, 1e-6));
    }
}

/// Test that inverting twice returns the original matrix.
#[test]
fn test_round_trip() {
    let e = engine();
    for a in invertible_samples() {
        let inv = e.inverse(&a, Augment).unwrap().matrix;
        let back = e.inverse(&inv, Augment).unwrap().matrix;
        assert!(back.approx_eq(&a, 1e-6));
    }
}

/// Test against nalgebra's inverse.
#[test]
fn test_matches_nalgebra() {
    let e = engine();
    for a in invertible_samples() {
        let n = a.rows();
        let reference = DMatrix::from_row_slice(n, n, a.as_slice())
            .try_inverse()
            .unwrap();
        let inv = e.inverse(&a, Augment).unwrap().matrix;
        for i in 0..n {
            for j in 0..n {
                assert_relative_eq!(inv[(i, j)], reference[(i, j)], epsilon = 1e-9);
            }
        }
    }
}

// ============================================================================
// Cofactor Tests
// ============================================================================

/// Test cofactor signs and values on a 3x3 matrix.
#[test]
fn test_cofactor_matrix() {
    let a = m(vec![
        vec![1.0, 2.0, 3.0],
        vec![0.0, 4.0, 5.0],
        vec![1.0, 0.0, 6.0],
    ]);
    let result = engine().cofactor_matrix(&a).unwrap();
    let expected = m(vec![
        vec![24.0, 5.0, -4.0],
        vec![-12.0, 3.0, 2.0],
        vec![-2.0, -5.0, 4.0],
    ]);
    assert!(result.matrix.approx_eq(&expected, 1e-9));
    assert!(result.trace.contains("C12 = (-1)^3 * det(M12)"));
}

/// Test that the cofactor of a 1x1 matrix is 1.
#[test]
fn test_cofactor_one_by_one() {
    let result = engine().cofactor_matrix(&m(vec![vec![9.0]])).unwrap();
    assert_eq!(result.matrix[(0, 0)], 1.0);
}

/// Test that the augmented trace shows the identity block.
#[test]
fn test_augment_trace() {
    let a = m(vec![vec![4.0, 3.0], vec![6.0, 3.0]]);
    let result = engine().inverse(&a, Augment).unwrap();
    assert!(result.trace.contains("[A | I]"));
    assert!(result.trace.contains("Reduced row echelon form:"));
    assert!(result.trace.contains("Inverse matrix (right half):"));
}

// ============================================================================
// Scale Tests
// ============================================================================

fn diagonal(n: usize, value: f64) -> Matrix {
    let mut d = Matrix::zeros(n, n);
    for i in 0..n {
        d[(i, i)] = value;
    }
    d
}

/// Test that small-scale invertible matrices are inverted by both methods.
#[test]
fn test_small_scale_inverse() {
    let e = engine();

    let a = diagonal(4, 0.001);
    for method in [Augment, Adjoint] {
        let inv = e.inverse(&a, method).unwrap().matrix;
        assert!(inv.approx_eq(&diagonal(4, 1000.0), 1e-6));
        assert!(product(&a, &inv).approx_eq(&Matrix::identity(4), 1e-9));
    }

    let b = m(vec![vec![0.004, 0.003], vec![0.006, 0.003]]);
    for method in [Augment, Adjoint] {
        let inv = e.inverse(&b, method).unwrap().matrix;
        assert_relative_eq!(inv[(0, 0)], -500.0, epsilon = 1e-6);
        assert_relative_eq!(inv[(1, 1)], -2000.0 / 3.0, epsilon = 1e-6);
    }
}

/// Test that a tiny but non-zero determinant does not make a matrix singular.
#[test]
fn test_small_determinant_is_not_singular() {
    let a = diagonal(4, 0.001);
    let det = engine().determinant(&a, RowReduction).unwrap().value;
    assert_relative_eq!(det, 1e-12, max_relative = 1e-9);
    assert!(engine().inverse(&a, Augment).is_ok());
}
