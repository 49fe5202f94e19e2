use approx::assert_relative_eq;
use gauss_rs::prelude::*;

fn engine() -> LinearEngine {
    Engine::new().build().unwrap()
}

fn m(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

fn unique(solution: &Solution) -> Vec<f64> {
    match solution {
        Solution::Unique(x) => x.col(0).unwrap(),
        other => panic!("expected a unique solution, got {:?}", other),
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// Test the unique 2x2 system with every method.
#[test]
fn test_unique_all_methods() {
    let a = m(vec![vec![2.0, 1.0], vec![1.0, 1.0]]);
    let b = Matrix::column_vector(&[3.0, 2.0]);
    let e = engine();

    for method in [Gauss, GaussJordan, Cramer, Inverse] {
        let result = e.solve(&a, &b, method).unwrap();
        let x = unique(&result.solution);
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-9);
        assert!(!result.trace.is_empty());
    }
}

/// Test the dependent system yields the expected parametric form.
#[test]
fn test_parametric_system() {
    let a = m(vec![vec![1.0, 1.0], vec![2.0, 2.0]]);
    let b = Matrix::column_vector(&[2.0, 4.0]);
    let e = engine();

    for method in [Gauss, GaussJordan] {
        let result = e.solve(&a, &b, method).unwrap();
        match &result.solution {
            Solution::Parametric(p) => {
                assert_eq!(p.shape(), (2, 2));
                assert_relative_eq!(p[(0, 0)], 2.0);
                assert_relative_eq!(p[(1, 0)], 0.0);
                assert_relative_eq!(p[(0, 1)], -1.0);
                assert_relative_eq!(p[(1, 1)], 1.0);
            }
            other => panic!("expected parametric, got {:?}", other),
        }
        assert_eq!(result.solution.free_count(), 1);
    }
}

/// Test the inconsistent system reports no solution.
#[test]
fn test_no_solution() {
    let a = m(vec![vec![1.0, 1.0], vec![2.0, 2.0]]);
    let b = Matrix::column_vector(&[2.0, 5.0]);
    let e = engine();

    for method in [Gauss, GaussJordan] {
        let result = e.solve(&a, &b, method).unwrap();
        assert_eq!(result.solution, Solution::NoSolution);
        assert!(!result.solution.is_solvable());
        assert!(result.trace.contains("no solution"));
    }
}

/// Test that Cramer and the inverse method reject singular systems.
#[test]
fn test_singular_methods_fail() {
    let a = m(vec![vec![1.0, 1.0], vec![2.0, 2.0]]);
    let b = Matrix::column_vector(&[2.0, 4.0]);
    let e = engine();
    assert_eq!(e.solve(&a, &b, Cramer), Err(LinalgError::Singular));
    assert_eq!(e.solve(&a, &b, Inverse), Err(LinalgError::Singular));
}

/// Test that Cramer needs a square coefficient matrix.
#[test]
fn test_cramer_not_square() {
    let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let b = Matrix::column_vector(&[1.0, 2.0]);
    assert_eq!(
        engine().solve(&a, &b, Cramer),
        Err(LinalgError::NotSquare { rows: 2, cols: 3 })
    );
}

/// Test that the constant vector must match the coefficient rows.
#[test]
fn test_constant_shape_mismatch() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = Matrix::column_vector(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        engine().solve(&a, &b, Gauss),
        Err(LinalgError::InvalidArgument(_))
    ));
}

/// Test that non-finite cells are rejected before solving.
#[test]
fn test_non_finite_rejected() {
    let a = m(vec![vec![1.0, f64::NAN], vec![3.0, 4.0]]);
    let b = Matrix::column_vector(&[1.0, 2.0]);
    assert!(matches!(
        engine().solve(&a, &b, GaussJordan),
        Err(LinalgError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Agreement Tests
// ============================================================================

/// Test that Gauss and Gauss-Jordan agree on a larger unique system.
#[test]
fn test_gauss_and_gauss_jordan_agree_unique() {
    let a = m(vec![
        vec![0.0, 2.0, 1.0, -1.0],
        vec![1.0, 1.0, 0.0, 2.0],
        vec![3.0, -1.0, 2.0, 0.0],
        vec![2.0, 0.0, 1.0, 3.0],
    ]);
    let b = Matrix::column_vector(&[1.0, 4.0, 2.0, 3.0]);
    let e = engine();

    let reference = unique(&e.solve(&a, &b, Cramer).unwrap().solution);
    for method in [Gauss, GaussJordan, Inverse] {
        let x = unique(&e.solve(&a, &b, method).unwrap().solution);
        for (xi, ri) in x.iter().zip(reference.iter()) {
            assert_relative_eq!(*xi, *ri, epsilon = 1e-9);
        }
    }
}

/// Test that both parametric forms produce the same vectors and satisfy
/// the system for several parameter choices.
#[test]
fn test_parametric_forms_agree() {
    // Rank 2, four variables.
    let a = m(vec![
        vec![1.0, 2.0, 0.0, 1.0],
        vec![2.0, 4.0, 1.0, 3.0],
        vec![3.0, 6.0, 1.0, 4.0],
    ]);
    let b = Matrix::column_vector(&[1.0, 3.0, 4.0]);
    let e = engine();

    let g = e.solve(&a, &b, Gauss).unwrap().solution;
    let gj = e.solve(&a, &b, GaussJordan).unwrap().solution;
    assert_eq!(g.free_count(), 2);
    assert_eq!(gj.free_count(), 2);

    for params in [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [-2.0, 3.0]] {
        let xg = g.evaluate(&params).unwrap();
        let xgj = gj.evaluate(&params).unwrap();
        for (u, v) in xg.iter().zip(xgj.iter()) {
            assert_relative_eq!(*u, *v, epsilon = 1e-9);
        }

        for i in 0..a.rows() {
            let lhs: f64 = (0..a.cols()).map(|j| a[(i, j)] * xg[j]).sum();
            assert_relative_eq!(lhs, b[(i, 0)], epsilon = 1e-9);
        }
    }
}

/// Test a free variable in the middle of the variable list.
#[test]
fn test_free_variable_order() {
    // x1 + x3 = 2, x2 free, x4 = 1
    let aug = m(vec![
        vec![1.0, 0.0, 1.0, 0.0, 2.0],
        vec![0.0, 0.0, 0.0, 1.0, 1.0],
    ]);
    let result = engine().solve_augmented(&aug, GaussJordan).unwrap();
    match result.solution {
        Solution::Parametric(p) => {
            assert_eq!(p.shape(), (4, 3));
            assert_eq!(p.col(0).unwrap(), vec![2.0, 0.0, 0.0, 1.0]);
            assert_eq!(p.col(1).unwrap(), vec![0.0, 1.0, 0.0, 0.0]);
            assert_eq!(p.col(2).unwrap(), vec![-1.0, 0.0, 1.0, 0.0]);
        }
        other => panic!("expected parametric, got {:?}", other),
    }
}

/// Test solving from a single augmented matrix with every method.
#[test]
fn test_solve_augmented_all_methods() {
    let aug = m(vec![vec![2.0, 1.0, 3.0], vec![1.0, 1.0, 2.0]]);
    let e = engine();
    for method in [Gauss, GaussJordan, Cramer, Inverse] {
        let x = unique(&e.solve_augmented(&aug, method).unwrap().solution);
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-9);
    }
}

// ============================================================================
// Echelon Form Tests
// ============================================================================

/// Test that reduced echelon form is idempotent.
#[test]
fn test_rref_idempotent() {
    let e = engine();
    let inputs = [
        m(vec![
            vec![2.0, 4.0, -2.0, 2.0],
            vec![4.0, 9.0, -3.0, 8.0],
            vec![-2.0, -3.0, 7.0, 10.0],
        ]),
        m(vec![vec![1.0, 1.0, 2.0], vec![2.0, 2.0, 5.0]]),
        m(vec![vec![0.0, 3.0], vec![0.0, 1.0], vec![0.0, 0.0]]),
    ];
    for input in inputs.iter() {
        let once = e.reduced_echelon_form(input).unwrap().matrix;
        let twice = e.reduced_echelon_form(&once).unwrap().matrix;
        assert!(once.approx_eq(&twice, 1e-12));
    }
}

/// Test that echelon form normalizes pivots and clears below them.
#[test]
fn test_echelon_form_structure() {
    let aug = m(vec![
        vec![2.0, 4.0, -2.0, 2.0],
        vec![4.0, 9.0, -3.0, 8.0],
        vec![-2.0, -3.0, 7.0, 10.0],
    ]);
    let result = engine().echelon_form(&aug).unwrap();
    let r = &result.matrix;
    for i in 0..3 {
        assert_relative_eq!(r[(i, i)], 1.0);
        for k in 0..i {
            assert_eq!(r[(i, k)], 0.0);
        }
    }
    assert!(result.trace.contains("-> R1 = R1 / 2.000"));
    assert!(result.trace.contains("-> R2 = R2 - (4.000 * R1)"));
    assert!(result.trace.contains("Matrix after pivot column 1:"));
}

/// Test rank on full-rank and deficient matrices.
#[test]
fn test_rank() {
    let e = engine();
    assert_eq!(e.rank(&Matrix::identity(4)).unwrap(), 4);
    assert_eq!(
        e.rank(&m(vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]])).unwrap(),
        1
    );
}

/// Test that pivoting takes the first non-zero row, not the largest.
#[test]
fn test_first_nonzero_pivot() {
    let aug = m(vec![
        vec![0.0, 1.0, 1.0],
        vec![1.0, 1.0, 2.0],
        vec![100.0, 1.0, 101.0],
    ]);
    let result = engine().echelon_form(&aug).unwrap();
    assert!(result.trace.contains("-> Swap R1 with R2"));
    assert!(!result.trace.contains("Swap R1 with R3"));
}

// ============================================================================
// Scale Tests
// ============================================================================

/// Test that every method solves a small-scale system.
#[test]
fn test_small_scale_all_methods() {
    let mut a = Matrix::zeros(4, 4);
    for i in 0..4 {
        a[(i, i)] = 0.001;
    }
    let b = Matrix::column_vector(&[0.001, 0.002, 0.003, 0.004]);
    let e = engine();

    for method in [Gauss, GaussJordan, Cramer, Inverse] {
        let x = unique(&e.solve(&a, &b, method).unwrap().solution);
        for (got, want) in x.iter().zip([1.0, 2.0, 3.0, 4.0]) {
            assert_relative_eq!(*got, want, epsilon = 1e-9);
        }
    }
}
