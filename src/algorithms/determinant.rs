//! Determinant by cofactor expansion and by row reduction.
//!
//! ## Purpose
//!
//! This module provides two independent determinant algorithms. They are
//! expected to agree (up to rounding) on every square matrix, which makes
//! each a check on the other.
//!
//! ## Design notes
//!
//! * **Cofactor expansion**: recursive expansion along the first row over
//!   explicit minors. Cost grows factorially; it is used on small matrices
//!   or when the caller explicitly asks for it.
//! * **Row reduction**: forward elimination to upper-triangular form with
//!   first-nonzero pivoting. A column without a pivot short-circuits to 0.
//!   Each row swap flips the sign.
//! * Steps go to a [`TraceSink`]; pass [`NoTrace`](crate::primitives::trace::NoTrace)
//!   to skip them.
//!
//! ## Key concepts
//!
//! ```text
//! det(A) = sum_j (-1)^j * a[0][j] * det(minor(0, j))
//! det(A) = (-1)^swaps * prod_i u[i][i]
//! ```
//!
//! ## Invariants
//!
//! * Only square matrices are accepted.
//! * `det` of the `0 x 0` matrix is 1, so cofactors of `1 x 1` matrices are 1.
//! * The input matrix is never modified.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::tolerance::{display, is_zero};
use crate::primitives::errors::LinalgError;
use crate::primitives::matrix::Matrix;
use crate::primitives::trace::{step, TraceSink};

/// Determinant algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeterminantMethod {
    /// Recursive expansion along the first row.
    Cofactor,

    /// Triangularization by row operations.
    #[default]
    RowReduction,
}

// ============================================================================
// Cofactor Expansion
// ============================================================================

/// Determinant by recursive cofactor expansion along row 0.
pub fn cofactor_expansion<T: Float>(
    a: &Matrix<T>,
    sink: &mut dyn TraceSink,
) -> Result<T, LinalgError> {
    a.ensure_square()?;

    step!(sink, "Initial matrix:\n{}\n", a);
    let det = expand(a, 0, sink)?;
    step!(sink, "\n========================================\n");
    step!(sink, "Final determinant = {:.3}\n", display(det));

    Ok(det)
}

fn expand<T: Float>(a: &Matrix<T>, depth: usize, sink: &mut dyn TraceSink) -> Result<T, LinalgError> {
    let pad = depth * 2;
    let n = a.rows();
    step!(sink, "{:pad$}-> Determinant of {}x{} matrix\n", "", n, n, pad = pad);

    match n {
        0 => Ok(T::one()),
        1 => {
            let val = a[(0, 0)];
            step!(sink, "{:pad$}   Result = {:.3}\n", "", display(val), pad = pad);
            Ok(val)
        }
        2 => {
            let val = a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)];
            step!(
                sink,
                "{:pad$}   det = ({:.3} * {:.3}) - ({:.3} * {:.3}) = {:.3}\n",
                "",
                display(a[(0, 0)]),
                display(a[(1, 1)]),
                display(a[(0, 1)]),
                display(a[(1, 0)]),
                display(val),
                pad = pad
            );
            Ok(val)
        }
        _ => {
            if sink.enabled() {
                step!(sink, "{:pad$}   det =", "", pad = pad);
                for j in 0..n {
                    let sep = if j > 0 { " +" } else { "" };
                    step!(sink, "{} ({:.3} * C1{})", sep, display(a[(0, j)]), j + 1);
                }
                step!(sink, "\n");
            }

            let mut det = T::zero();
            for j in 0..n {
                let minor = a.remove_row_col(0, j)?;
                let minor_det = expand(&minor, depth + 1, sink)?;
                let term = a[(0, j)] * minor_det;
                det = if j % 2 == 0 { det + term } else { det - term };
            }

            step!(sink, "{:pad$}   Determinant at this level = {:.3}\n", "", display(det), pad = pad);
            Ok(det)
        }
    }
}

// ============================================================================
// Row Reduction
// ============================================================================

/// Determinant by Gaussian elimination to upper-triangular form.
pub fn row_reduction<T: Float>(
    a: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<T, LinalgError> {
    a.ensure_square()?;

    let mut m = a.clone();
    let n = m.rows();
    let mut swaps = 0usize;
    step!(sink, "Initial matrix:\n{}\n\n", m);

    for i in 0..n {
        let Some(pivot_row) = (i..n).find(|&r| !is_zero(m[(r, i)], tol)) else {
            step!(sink, "Column {} has no pivot. Determinant is 0.\n", i + 1);
            return Ok(T::zero());
        };

        if pivot_row != i {
            step!(sink, "-> Swap R{} with R{}.\n", i + 1, pivot_row + 1);
            m.swap_rows(pivot_row, i)?;
            swaps += 1;
        }

        let pivot = m[(i, i)];
        for r in (i + 1)..n {
            let entry = m[(r, i)];
            if is_zero(entry, tol) {
                continue;
            }
            let factor = entry / pivot;
            step!(
                sink,
                "-> R{} = R{} - ({:.3} * R{})\n",
                r + 1,
                r + 1,
                display(factor),
                i + 1
            );
            m.add_row_multiple(r, i, -factor)?;
            m[(r, i)] = T::zero();
        }

        if i + 1 < n {
            step!(sink, "Matrix after eliminating column {}:\n{}\n\n", i + 1, m);
        }
    }

    step!(sink, "========================================\n");
    step!(sink, "Final matrix (upper triangular):\n{}\n\n", m);

    let mut det = (0..n).fold(T::one(), |acc, i| acc * m[(i, i)]);
    if sink.enabled() {
        step!(sink, "Determinant = product of diagonal entries\n= ");
        for i in 0..n {
            let sep = if i + 1 < n { " * " } else { "" };
            step!(sink, "{:.3}{}", display(m[(i, i)]), sep);
        }
        step!(sink, " = {:.3}\n", display(det));
    }

    if swaps % 2 == 1 {
        det = -det;
        step!(
            sink,
            "Odd number of row swaps ({}), result multiplied by -1.\nFinal determinant = {:.3}\n",
            swaps,
            display(det)
        );
    }

    Ok(det)
}
