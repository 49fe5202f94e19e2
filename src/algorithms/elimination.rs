//! Row-echelon reduction, classification and back-substitution.
//!
//! ## Purpose
//!
//! This module is the elimination core shared by the system solvers, the
//! augmented inverse and the interpolation routines. It reduces an augmented
//! matrix `[A|b]` to row-echelon form (REF) or reduced row-echelon form
//! (RREF), classifies the reduced system and reads solutions off it.
//!
//! ## Design notes
//!
//! * **Pivoting**: the pivot is the first entry at or below the current
//!   pivot row whose magnitude exceeds the tolerance. Magnitude is never
//!   compared between candidates, so the recorded steps are reproducible.
//! * **REF** pivots over the coefficient columns only (all but the last).
//!   **RREF** pivots over every column, then clears above each leading entry
//!   from the bottom row up.
//! * Pivots are normalized to exactly 1 and eliminated cells are set to
//!   exactly 0, so a reduced matrix reduces to itself.
//!
//! ## Key concepts
//!
//! * **Pivot column**: a column holding the leading entry of some row.
//! * **Free column**: a coefficient column without a pivot; its variable
//!   parameterizes the solution set.
//!
//! ## Invariants
//!
//! * Inputs are never modified; reductions work on a copy.
//! * Classification and substitution expect an already reduced `[A|b]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::math::tolerance::{display, first_nonzero, is_zero};
use crate::primitives::errors::LinalgError;
use crate::primitives::matrix::Matrix;
use crate::primitives::trace::{step, NoTrace, TraceSink};

// ============================================================================
// Classification
// ============================================================================

/// Shape of the solution set of a reduced system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemKind {
    /// Some row reads `0 = c` with `c != 0`.
    Inconsistent,

    /// Every variable has a pivot.
    Unique,

    /// Consistent, with at least one free variable.
    Parametric,
}

// ============================================================================
// Reduction
// ============================================================================

/// Row-echelon form of an augmented matrix `[A|b]`.
///
/// Pivots are searched in the coefficient columns only, normalized to 1,
/// and every entry below a pivot is eliminated.
pub fn echelon_form<T: Float>(
    augmented: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Matrix<T>, LinalgError> {
    let mut m = augmented.clone();
    let pivot_cols = m.cols().saturating_sub(1);

    step!(sink, "Initial matrix:\n{}\n\n", m);
    forward(&mut m, pivot_cols, tol, sink)?;
    step!(sink, "Row echelon form:\n{}\n\n", m);

    Ok(m)
}

/// Reduced row-echelon form of any matrix.
///
/// The forward phase pivots over every column; the backward phase clears
/// the entries above each row's leading entry, bottom row first.
pub fn reduced_echelon_form<T: Float>(
    matrix: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Matrix<T>, LinalgError> {
    let mut m = matrix.clone();
    let cols = m.cols();

    step!(sink, "Initial matrix:\n{}\n\n", m);
    step!(sink, "Forward phase\n\n");
    forward(&mut m, cols, tol, sink)?;
    step!(sink, "Backward phase\n\n");
    backward(&mut m, tol, sink)?;
    step!(sink, "Reduced row echelon form:\n{}\n\n", m);

    Ok(m)
}

/// Number of pivots found when reducing `matrix` over all its columns.
pub fn rank<T: Float>(matrix: &Matrix<T>, tol: T) -> Result<usize, LinalgError> {
    let mut m = matrix.clone();
    let cols = m.cols();
    forward(&mut m, cols, tol, &mut NoTrace)
}

/// Forward elimination over the first `pivot_cols` columns; returns the
/// number of pivots placed.
fn forward<T: Float>(
    m: &mut Matrix<T>,
    pivot_cols: usize,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<usize, LinalgError> {
    let rows = m.rows();
    let mut r = 0;

    for c in 0..pivot_cols {
        if r >= rows {
            break;
        }

        let Some(p) = (r..rows).find(|&i| !is_zero(m[(i, c)], tol)) else {
            trace!("column {} has no pivot candidate at or below row {}", c, r);
            step!(sink, "Column {} has no pivot, skipped.\n\n", c + 1);
            continue;
        };

        if p != r {
            trace!("pivot for column {} found in row {}, swapping into row {}", c, p, r);
            step!(sink, "-> Swap R{} with R{}\n", r + 1, p + 1);
            m.swap_rows(r, p)?;
        }

        let pivot = m[(r, c)];
        if pivot != T::one() {
            step!(sink, "-> R{} = R{} / {:.3}\n", r + 1, r + 1, display(pivot));
            m.scale_row(r, T::one() / pivot)?;
            m[(r, c)] = T::one();
        }

        for i in (r + 1)..rows {
            let factor = m[(i, c)];
            if is_zero(factor, tol) {
                continue;
            }
            step!(
                sink,
                "-> R{} = R{} - ({:.3} * R{})\n",
                i + 1,
                i + 1,
                display(factor),
                r + 1
            );
            m.add_row_multiple(i, r, -factor)?;
            m[(i, c)] = T::zero();
        }

        step!(sink, "Matrix after pivot column {}:\n{}\n\n", c + 1, m);
        r += 1;
    }

    Ok(r)
}

/// Clear above each leading entry, bottom row first.
fn backward<T: Float>(m: &mut Matrix<T>, tol: T, sink: &mut dyn TraceSink) -> Result<(), LinalgError> {
    for i in (0..m.rows()).rev() {
        let Some(lead) = first_nonzero(m.row_slice(i), tol) else {
            continue;
        };

        let mut changed = false;
        for k in 0..i {
            if is_zero(m[(k, lead)], tol) {
                continue;
            }
            let factor = m[(k, lead)] / m[(i, lead)];
            step!(
                sink,
                "-> R{} = R{} - ({:.3} * R{})\n",
                k + 1,
                k + 1,
                display(factor),
                i + 1
            );
            m.add_row_multiple(k, i, -factor)?;
            m[(k, lead)] = T::zero();
            changed = true;
        }

        if changed {
            step!(sink, "Matrix after clearing above R{}:\n{}\n\n", i + 1, m);
        }
    }
    Ok(())
}

// ============================================================================
// Reading Solutions
// ============================================================================

/// Classify a reduced augmented matrix `[A|b]`.
pub fn classify<T: Float>(reduced: &Matrix<T>, tol: T) -> SystemKind {
    let vars = reduced.cols().saturating_sub(1);
    let mut pivots = 0;

    for i in 0..reduced.rows() {
        let row = reduced.row_slice(i);
        match first_nonzero(&row[..vars], tol) {
            Some(_) => pivots += 1,
            None if !is_zero(row[vars], tol) => return SystemKind::Inconsistent,
            None => {}
        }
    }

    if pivots == vars {
        SystemKind::Unique
    } else {
        SystemKind::Parametric
    }
}

/// Unique solution of a reduced `[A|b]` as an `n x 1` column.
///
/// Rows are processed bottom to top:
/// `x_p = (b_i - sum_{j > p} a_ij * x_j) / a_ip` with `p` the row's pivot.
pub fn back_substitute<T: Float>(reduced: &Matrix<T>, tol: T) -> Result<Matrix<T>, LinalgError> {
    let vars = reduced.cols().saturating_sub(1);
    let mut x = vec![T::zero(); vars];

    for i in (0..reduced.rows()).rev() {
        let row = reduced.row_slice(i);
        let Some(p) = first_nonzero(&row[..vars], tol) else {
            continue;
        };
        let mut rhs = row[vars];
        for j in (p + 1)..vars {
            rhs = rhs - row[j] * x[j];
        }
        x[p] = rhs / row[p];
    }

    Ok(Matrix::column_vector(&x))
}

/// Parametric solution of a consistent reduced `[A|b]`.
///
/// Column 0 is the particular solution (all free variables 0). Column
/// `q + 1` is the direction of the `q`-th free variable in increasing
/// column order (that variable 1, other free variables 0).
pub fn parametric_solution<T: Float>(reduced: &Matrix<T>, tol: T) -> Result<Matrix<T>, LinalgError> {
    let vars = reduced.cols().saturating_sub(1);

    let mut is_pivot = vec![false; vars];
    for i in 0..reduced.rows() {
        if let Some(p) = first_nonzero(&reduced.row_slice(i)[..vars], tol) {
            is_pivot[p] = true;
        }
    }
    let free: Vec<usize> = (0..vars).filter(|&j| !is_pivot[j]).collect();
    let width = 1 + free.len();

    let mut result = Matrix::zeros(vars, width);
    for (q, &col) in free.iter().enumerate() {
        result[(col, q + 1)] = T::one();
    }

    for i in (0..reduced.rows()).rev() {
        let row = reduced.row_slice(i);
        let Some(p) = first_nonzero(&row[..vars], tol) else {
            continue;
        };
        for c in 0..width {
            let mut val = if c == 0 { row[vars] } else { T::zero() };
            for j in (p + 1)..vars {
                val = val - row[j] * result[(j, c)];
            }
            result[(p, c)] = val / row[p];
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::trace::StepLog;

    fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn echelon_skips_free_column() {
        let a = m(vec![vec![0.0, 2.0, 4.0], vec![0.0, 1.0, 3.0]]);
        let mut log = StepLog::new();
        let r = echelon_form(&a, 1e-9, &mut log).unwrap();
        assert_eq!(r.row(0).unwrap(), vec![0.0, 1.0, 2.0]);
        assert_eq!(r.row(1).unwrap(), vec![0.0, 0.0, 1.0]);
        assert!(log.as_str().contains("Column 1 has no pivot"));
    }

    #[test]
    fn echelon_leaves_constant_column_unpivoted() {
        let a = m(vec![vec![1.0, 1.0, 2.0], vec![2.0, 2.0, 5.0]]);
        let r = echelon_form(&a, 1e-9, &mut NoTrace).unwrap();
        assert_eq!(r.row(1).unwrap(), vec![0.0, 0.0, 1.0]);
        assert_eq!(classify(&r, 1e-9), SystemKind::Inconsistent);
    }

    #[test]
    fn rank_counts_pivots() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![0.0, 1.0]]);
        assert_eq!(rank(&a, 1e-9).unwrap(), 2);
    }

    #[test]
    fn parametric_directions_follow_free_columns() {
        // x + 2y + 3z = 6
        let a = m(vec![vec![1.0, 2.0, 3.0, 6.0]]);
        let sol = parametric_solution(&a, 1e-9).unwrap();
        assert_eq!(sol.shape(), (3, 3));
        assert_eq!(sol.col(0).unwrap(), vec![6.0, 0.0, 0.0]);
        assert_eq!(sol.col(1).unwrap(), vec![-2.0, 1.0, 0.0]);
        assert_eq!(sol.col(2).unwrap(), vec![-3.0, 0.0, 1.0]);
    }
}
