//! Polynomial interpolation and cubic-spline control points.
//!
//! ## Purpose
//!
//! This module fits the unique polynomial through a set of points and
//! computes the control points of a cubic B-spline passing through them.
//!
//! ## Design notes
//!
//! * **Polynomial**: `n` points give an `n x (n + 1)` Vandermonde system
//!   solved by Gauss-Jordan. Coefficients run from the highest power down.
//! * **Spline**: the interior control points solve a tridiagonal system
//!   (4 on the diagonal, 1 beside it) once per coordinate by Gauss.
//! * Points arrive as an `n x 2` matrix, one `(x, y)` pair per row.
//!
//! ## Key concepts
//!
//! ```text
//! row i: [x_i^(n-1), ..., x_i, 1 | y_i]
//! 4 P_i + P_(i-1) + P_(i+1) = 6 S_(i+1)
//! ```
//!
//! ## Invariants
//!
//! * Interpolation needs distinct x values; otherwise the system is not
//!   uniquely solvable and the call fails.
//! * Splines need at least 3 points.
//!
//! ## Non-goals
//!
//! * Evaluating the spline curve itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::system::{gauss, gauss_jordan, Solution};
use crate::math::tolerance::display;
use crate::primitives::errors::LinalgError;
use crate::primitives::matrix::Matrix;
use crate::primitives::trace::{step, TraceSink};

// ============================================================================
// Polynomial Interpolation
// ============================================================================

/// Coefficients of the interpolating polynomial, highest power first.
pub fn polynomial_coefficients<T: Float>(
    points: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Vec<T>, LinalgError> {
    ensure_points(points, 1)?;

    let n = points.rows();
    let mut system = Matrix::zeros(n, n + 1);
    for i in 0..n {
        let x = points[(i, 0)];
        let mut power = T::one();
        for j in (0..n).rev() {
            system[(i, j)] = power;
            power = power * x;
        }
        system[(i, n)] = points[(i, 1)];
    }

    step!(sink, "Vandermonde system:\n{}\n\n", system);
    match gauss_jordan(&system, tol, sink)? {
        Solution::Unique(c) => {
            let coefficients = c.col(0)?;
            step!(sink, "\np(x) = {}\n", PolynomialText(&coefficients));
            Ok(coefficients)
        }
        _ => Err(LinalgError::invalid(
            "interpolation points must have distinct x values",
        )),
    }
}

/// `(min x, max x)` of the points.
pub fn domain<T: Float>(points: &Matrix<T>) -> (T, T) {
    (0..points.rows()).fold((T::infinity(), T::neg_infinity()), |(lo, hi), i| {
        let x = points[(i, 0)];
        (lo.min(x), hi.max(x))
    })
}

/// Evaluate a polynomial (highest power first) by Horner's rule.
#[inline]
pub fn horner<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

struct PolynomialText<'a, T>(&'a [T]);

impl<T: Float> core::fmt::Display for PolynomialText<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let degree = self.0.len().saturating_sub(1);
        for (k, &c) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, " + ")?;
            }
            match degree - k {
                0 => write!(f, "{:.3}", display(c))?,
                1 => write!(f, "{:.3}x", display(c))?,
                p => write!(f, "{:.3}x^{}", display(c), p)?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// Cubic Spline
// ============================================================================

/// Interior control points of the cubic B-spline through `points`.
///
/// Returns `n - 2` points for `n` inputs.
pub fn spline_control_points<T: Float>(
    points: &Matrix<T>,
    tol: T,
    sink: &mut dyn TraceSink,
) -> Result<Vec<(T, T)>, LinalgError> {
    ensure_points(points, 3)?;

    let n = points.rows();
    let m = n - 2;
    let four = T::from(4.0).unwrap();
    let six = T::from(6.0).unwrap();

    let mut tri = Matrix::zeros(m, m);
    for i in 0..m {
        tri[(i, i)] = four;
        if i > 0 {
            tri[(i, i - 1)] = T::one();
        }
        if i + 1 < m {
            tri[(i, i + 1)] = T::one();
        }
    }
    step!(sink, "Tridiagonal matrix:\n{}\n\n", tri);

    let mut coords = Vec::with_capacity(2);
    for (axis, name) in ["x", "y"].iter().enumerate() {
        let mut rhs: Vec<T> = (0..m).map(|i| six * points[(i + 1, axis)]).collect();
        rhs[0] = rhs[0] - points[(0, axis)];
        rhs[m - 1] = rhs[m - 1] - points[(n - 1, axis)];

        step!(sink, "Solving for the {} coordinates\n\n", name);
        let augmented = Matrix::augment(&tri, &Matrix::column_vector(&rhs))?;
        match gauss(&augmented, tol, sink)? {
            Solution::Unique(c) => coords.push(c.col(0)?),
            _ => return Err(LinalgError::Singular),
        }
    }

    let control: Vec<(T, T)> = coords[0]
        .iter()
        .zip(coords[1].iter())
        .map(|(&x, &y)| (x, y))
        .collect();

    step!(sink, "\nControl points:\n");
    for (i, (x, y)) in control.iter().enumerate() {
        step!(sink, "P{} = ({:.3}, {:.3})\n", i + 1, display(*x), display(*y));
    }

    Ok(control)
}

fn ensure_points<T: Float>(points: &Matrix<T>, min: usize) -> Result<(), LinalgError> {
    if points.cols() != 2 {
        return Err(LinalgError::invalid(format!(
            "points must be an n x 2 matrix of (x, y) rows, got {} columns",
            points.cols()
        )));
    }
    if points.rows() < min {
        return Err(LinalgError::TooFewPoints {
            got: points.rows(),
            min,
        });
    }
    Ok(())
}
