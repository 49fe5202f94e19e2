//! Matrix inversion by augmented reduction and by the adjoint.
//!
//! ## Purpose
//!
//! This module inverts square, non-singular matrices in two independent
//! ways and exposes the cofactor matrix that the adjoint method builds on.
//!
//! ## Design notes
//!
//! * **Augmented**: `[A | I]` is brought to reduced row-echelon form; the
//!   right half is then `A^-1`.
//! * **Adjoint**: `A^-1 = adj(A) / det(A)` where `adj(A)` is the transposed
//!   cofactor matrix.
//! * Singularity is decided once, up front, by the row-reduction
//!   determinant: it is exactly 0 iff some column has no pivot above the
//!   tolerance. A non-zero determinant is accepted however small.
//!
//! ## Key concepts
//!
//! ```text
//! C[i][j] = (-1)^(i+j) * det(minor(i, j))
//! adj(A)  = C^T
//! ```

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::determinant::row_reduction;
use crate::algorithms::elimination::reduced_echelon_form;
use crate::math::ops::divide;
use crate::math::tolerance::display;
use crate::primitives::errors::LinalgError;
use crate::primitives::matrix::Matrix;
use crate::primitives::trace::{step, NoTrace, TraceSink};

/// Inversion algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InverseMethod {
    /// Reduce `[A | I]` to reduced row-echelon form.
    #[default]
    Augment,

    /// Divide the adjoint by the determinant.
    Adjoint,
}

// ============================================================================
// Augmented Method
// ============================================================================

/// Inverse via the reduced echelon form of `[A | I]`.
pub fn inverse_augment<T: Float>(
    a: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Matrix<T>, LinalgError> {
    ensure_invertible(a, tol)?;

    let n = a.rows();
    let augmented = Matrix::augment(a, &Matrix::identity(n))?;
    step!(sink, "Augment with the identity matrix [A | I].\n\n");

    let reduced = reduced_echelon_form(&augmented, tol, sink)?;
    let inverse = reduced.columns_range(n, 2 * n)?;

    step!(sink, "Inverse matrix (right half):\n{}\n", inverse);
    Ok(inverse)
}

// ============================================================================
// Adjoint Method
// ============================================================================

/// Signed minors `C[i][j] = (-1)^(i+j) * det(minor(i, j))`.
pub fn cofactor_matrix<T: Float>(
    a: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Matrix<T>, LinalgError> {
    a.ensure_square()?;

    let n = a.rows();
    let mut cofactors = Matrix::zeros(n, n);
    step!(sink, "Matrix:\n{}\n\n", a);

    for i in 0..n {
        for j in 0..n {
            let minor = a.remove_row_col(i, j)?;
            let minor_det = row_reduction(&minor, tol, &mut NoTrace)?;
            let value = if (i + j) % 2 == 0 { minor_det } else { -minor_det };
            cofactors[(i, j)] = value;

            step!(sink, "M{}{} =\n{}\n", i + 1, j + 1, minor);
            step!(
                sink,
                "C{}{} = (-1)^{} * det(M{}{}) = (-1)^{} * {:.3} = {:.3}\n\n",
                i + 1,
                j + 1,
                i + j + 2,
                i + 1,
                j + 1,
                i + j + 2,
                display(minor_det),
                display(value)
            );
        }
    }

    step!(sink, "Cofactor matrix:\n{}\n", cofactors);
    Ok(cofactors)
}

/// Inverse via `adj(A) / det(A)`.
pub fn inverse_adjoint<T: Float>(
    a: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Matrix<T>, LinalgError> {
    let det = ensure_invertible(a, tol)?;
    step!(sink, "det(A) = {:.3}\n\n", display(det));

    let cofactors = cofactor_matrix(a, tol, sink)?;
    let adjoint = cofactors.transpose();
    step!(sink, "\nAdjoint (transposed cofactor matrix):\n{}\n\n", adjoint);

    let inverse = divide(&adjoint, det)?;
    step!(sink, "Inverse = adj(A) / {:.3}:\n{}\n", display(det), inverse);
    Ok(inverse)
}

/// Square and non-singular; returns the determinant.
fn ensure_invertible<T: Float>(a: &Matrix<T>, tol: T) -> Result<T, LinalgError> {
    a.ensure_square()?;
    let det = row_reduction(a, tol, &mut NoTrace)?;
    if det == T::zero() {
        return Err(LinalgError::Singular);
    }
    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_by_one_cofactor_is_unit() {
        let a = Matrix::from_rows(vec![vec![7.0]]).unwrap();
        let c = cofactor_matrix(&a, 1e-9, &mut NoTrace).unwrap();
        assert_eq!(c[(0, 0)], 1.0);
        let inv = inverse_adjoint(&a, 1e-9, &mut NoTrace).unwrap();
        assert!((inv[(0, 0)] - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn singular_is_rejected_before_reduction() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert_eq!(
            inverse_augment(&a, 1e-9, &mut NoTrace),
            Err(LinalgError::Singular)
        );
        assert_eq!(
            inverse_adjoint(&a, 1e-9, &mut NoTrace),
            Err(LinalgError::Singular)
        );
    }
}
