//! Solvers for systems of linear equations.
//!
//! ## Purpose
//!
//! This module solves `A x = b` by four methods and reports the outcome as
//! a [`Solution`]: a unique vector, a parametric family, or no solution.
//!
//! ## Design notes
//!
//! * **Gauss** reduces `[A|b]` to row-echelon form and back-substitutes.
//! * **Gauss-Jordan** reduces `[A|b]` to reduced row-echelon form; the same
//!   substitution then reads the answer straight off the rows.
//! * **Cramer** and the **inverse method** need a square, non-singular `A`
//!   and fail with [`LinalgError::Singular`] otherwise.
//! * A system without solutions is a regular outcome, never an error.
//!
//! ## Invariants
//!
//! * A `Unique` solution is `n x 1`.
//! * A `Parametric` solution is `n x (1 + k)` for `k` free variables: column
//!   0 holds the particular solution, column `q + 1` the direction of the
//!   `q`-th free variable in increasing variable order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::determinant::row_reduction;
use crate::algorithms::elimination::{
    back_substitute, classify, echelon_form, parametric_solution, reduced_echelon_form, SystemKind,
};
use crate::algorithms::inverse::inverse_augment;
use crate::math::ops::multiply;
use crate::math::tolerance::display;
use crate::primitives::errors::LinalgError;
use crate::primitives::matrix::Matrix;
use crate::primitives::trace::{step, NoTrace, TraceSink};

// ============================================================================
// Solution
// ============================================================================

/// Outcome of solving a linear system.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<T = f64> {
    /// Exactly one solution, as an `n x 1` column.
    Unique(Matrix<T>),

    /// Infinitely many solutions: particular solution followed by one
    /// direction column per free variable.
    Parametric(Matrix<T>),

    /// The system is inconsistent.
    NoSolution,
}

impl<T: Float> Solution<T> {
    /// Whether any solution exists.
    pub fn is_solvable(&self) -> bool {
        !matches!(self, Solution::NoSolution)
    }

    /// Number of free parameters (0 for a unique solution).
    pub fn free_count(&self) -> usize {
        match self {
            Solution::Parametric(m) => m.cols() - 1,
            _ => 0,
        }
    }

    /// Concrete solution vector for the given parameter values.
    ///
    /// A unique solution takes no parameters. A parametric one takes exactly
    /// one value per free variable, in increasing variable order.
    pub fn evaluate(&self, params: &[T]) -> Result<Vec<T>, LinalgError> {
        match self {
            Solution::NoSolution => Err(LinalgError::invalid("system has no solution")),
            Solution::Unique(x) => {
                if !params.is_empty() {
                    return Err(LinalgError::invalid(format!(
                        "unique solution takes no parameters, got {}",
                        params.len()
                    )));
                }
                x.col(0)
            }
            Solution::Parametric(m) => {
                let k = m.cols() - 1;
                if params.len() != k {
                    return Err(LinalgError::invalid(format!(
                        "expected {} parameter values, got {}",
                        k,
                        params.len()
                    )));
                }
                let values = (0..m.rows())
                    .map(|i| {
                        params
                            .iter()
                            .enumerate()
                            .fold(m[(i, 0)], |acc, (q, &t)| acc + t * m[(i, q + 1)])
                    })
                    .collect();
                Ok(values)
            }
        }
    }
}

impl<T: Float> Display for Solution<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Solution::NoSolution => writeln!(f, "The system has no solution."),
            Solution::Unique(x) => {
                for i in 0..x.rows() {
                    writeln!(f, "x{} = {:.3}", i + 1, display(x[(i, 0)]))?;
                }
                Ok(())
            }
            Solution::Parametric(m) => {
                let free = m.cols() - 1;
                for i in 0..m.rows() {
                    write!(f, "x{} = {:.3}", i + 1, display(m[(i, 0)]))?;
                    for q in 0..free {
                        let coef = m[(i, q + 1)];
                        if coef != T::zero() {
                            write!(f, " + ({:.3})t{}", display(coef), q + 1)?;
                        }
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// Method Selection
// ============================================================================

/// Solution method for linear systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplMethod {
    /// Row-echelon form with back-substitution.
    Gauss,

    /// Reduced row-echelon form.
    #[default]
    GaussJordan,

    /// Cramer's rule with row-reduction determinants.
    Cramer,

    /// `x = A^-1 b` with the augmented inverse.
    Inverse,
}

// ============================================================================
// Elimination Solvers
// ============================================================================

/// Solve `[A|b]` by Gaussian elimination.
pub fn gauss<T: Float>(
    augmented: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Solution<T>, LinalgError> {
    ensure_augmented(augmented)?;
    let reduced = echelon_form(augmented, tol, sink)?;
    resolve(&reduced, tol, sink)
}

/// Solve `[A|b]` by Gauss-Jordan elimination.
pub fn gauss_jordan<T: Float>(
    augmented: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Solution<T>, LinalgError> {
    ensure_augmented(augmented)?;
    let reduced = reduced_echelon_form(augmented, tol, sink)?;
    resolve(&reduced, tol, sink)
}

fn resolve<T: Float>(
    reduced: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Solution<T>, LinalgError> {
    let solution = match classify(reduced, tol) {
        SystemKind::Inconsistent => Solution::NoSolution,
        SystemKind::Unique => Solution::Unique(back_substitute(reduced, tol)?),
        SystemKind::Parametric => Solution::Parametric(parametric_solution(reduced, tol)?),
    };

    match &solution {
        Solution::NoSolution => step!(sink, "A row reads 0 = c with c != 0.\n"),
        Solution::Unique(_) => step!(sink, "Every variable has a pivot.\n"),
        Solution::Parametric(m) => step!(sink, "{} free variable(s).\n", m.cols() - 1),
    }
    step!(sink, "\n{}", solution);

    Ok(solution)
}

fn ensure_augmented<T: Float>(augmented: &Matrix<T>) -> Result<(), LinalgError> {
    if augmented.cols() < 2 {
        return Err(LinalgError::invalid(format!(
            "augmented matrix needs at least 2 columns, got {}",
            augmented.cols()
        )));
    }
    Ok(())
}

// ============================================================================
// Determinant and Inverse Solvers
// ============================================================================

/// Solve `A x = b` with Cramer's rule.
pub fn cramer<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Solution<T>, LinalgError> {
    a.ensure_square()?;
    ensure_constants(a, b)?;

    let det = row_reduction(a, tol, &mut NoTrace)?;
    step!(sink, "Matrix A:\n{}\n\ndet(A) = {:.3}\n\n", a, display(det));
    // Exact zero only when elimination found a column without a pivot.
    if det == T::zero() {
        return Err(LinalgError::Singular);
    }

    let n = a.rows();
    let mut x = Vec::with_capacity(n);
    for i in 0..n {
        let replaced = a.replace_col(i, b)?;
        let det_i = row_reduction(&replaced, tol, &mut NoTrace)?;
        let value = det_i / det;
        step!(sink, "A{} (column {} replaced by b):\n{}\n", i + 1, i + 1, replaced);
        step!(
            sink,
            "det(A{}) = {:.3}\nx{} = {:.3} / {:.3} = {:.3}\n\n",
            i + 1,
            display(det_i),
            i + 1,
            display(det_i),
            display(det),
            display(value)
        );
        x.push(value);
    }

    Ok(Solution::Unique(Matrix::column_vector(&x)))
}

/// Solve `A x = b` as `x = A^-1 b`.
pub fn inverse_method<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Solution<T>, LinalgError> {
    a.ensure_square()?;
    ensure_constants(a, b)?;

    let inverse = inverse_augment(a, tol, sink)?;
    let x = multiply(&inverse, b)?;
    step!(sink, "\nx = A^-1 * b:\n{}\n", x);

    Ok(Solution::Unique(x))
}

fn ensure_constants<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<(), LinalgError> {
    if b.cols() != 1 || b.rows() != a.rows() {
        return Err(LinalgError::invalid(format!(
            "constant vector must be {}x1, got {}x{}",
            a.rows(),
            b.rows(),
            b.cols()
        )));
    }
    Ok(())
}

// ============================================================================
// Dispatch
// ============================================================================

/// Solve `A x = b` with the chosen method.
pub fn solve<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    method: SplMethod,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Solution<T>, LinalgError> {
    match method {
        SplMethod::Gauss => gauss(&Matrix::augment(a, b)?, tol, sink),
        SplMethod::GaussJordan => gauss_jordan(&Matrix::augment(a, b)?, tol, sink),
        SplMethod::Cramer => cramer(a, b, tol, sink),
        SplMethod::Inverse => inverse_method(a, b, tol, sink),
    }
}
