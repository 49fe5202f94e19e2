//! Result records returned by the engine.
//!
//! ## Purpose
//!
//! Each engine operation returns an immutable record pairing its value with
//! the step trace recorded while computing it.
//!
//! ## Design notes
//!
//! * Traces are plain strings. Above the trace threshold they hold a fixed
//!   notice instead of the steps.
//! * Records own their data; nothing borrows from the engine.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::horner;
use crate::algorithms::regression::predict;
use crate::algorithms::system::Solution;
use crate::primitives::errors::LinalgError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Linear Algebra Results
// ============================================================================

/// Outcome of solving a linear system.
#[derive(Debug, Clone, PartialEq)]
pub struct SplResult<T = f64> {
    /// Unique, parametric or no solution.
    pub solution: Solution<T>,

    /// Recorded steps.
    pub trace: String,
}

/// Determinant value with its trace.
#[derive(Debug, Clone, PartialEq)]
pub struct DeterminantResult<T = f64> {
    /// The determinant.
    pub value: T,

    /// Recorded steps.
    pub trace: String,
}

/// Inverse matrix with its trace.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseResult<T = f64> {
    /// `A^-1`.
    pub matrix: Matrix<T>,

    /// Recorded steps.
    pub trace: String,
}

/// Cofactor matrix with its trace.
#[derive(Debug, Clone, PartialEq)]
pub struct CofactorResult<T = f64> {
    /// Signed minors.
    pub matrix: Matrix<T>,

    /// Recorded steps.
    pub trace: String,
}

/// Row-echelon or reduced row-echelon form with its trace.
#[derive(Debug, Clone, PartialEq)]
pub struct EchelonResult<T = f64> {
    /// The reduced matrix.
    pub matrix: Matrix<T>,

    /// Recorded steps.
    pub trace: String,
}

// ============================================================================
// Interpolation Results
// ============================================================================

/// Interpolating polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialInterpolation<T = f64> {
    /// Coefficients from the highest power down to the constant term.
    pub coefficients: Vec<T>,

    /// Smallest and largest x among the interpolated points.
    pub domain: (T, T),

    /// Recorded steps.
    pub trace: String,
}

impl<T: Float> PolynomialInterpolation<T> {
    /// Polynomial degree (number of coefficients minus one).
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Value of the polynomial at `x`.
    pub fn evaluate(&self, x: T) -> T {
        horner(&self.coefficients, x)
    }

    /// Whether `x` lies within the interpolated range.
    pub fn in_domain(&self, x: T) -> bool {
        x >= self.domain.0 && x <= self.domain.1
    }
}

/// Cubic-spline control points.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineResult<T = f64> {
    /// Interior control points as `(x, y)` pairs.
    pub control_points: Vec<(T, T)>,

    /// Recorded steps.
    pub trace: String,
}

// ============================================================================
// Regression Results
// ============================================================================

/// Fitted polynomial regression model.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionModel<T = f64> {
    /// Coefficients in feature order; the first is the intercept.
    pub coefficients: Vec<T>,

    /// Polynomial degree of the expansion.
    pub degree: usize,

    /// Number of raw predictors.
    pub predictors: usize,

    /// Feature labels aligned with `coefficients`; the intercept label is empty.
    ///
    /// Monomials follow odometer order over the exponent vector with the
    /// first predictor varying fastest, e.g. `x1, x1^2, x2, x1x2, x2^2` for
    /// two predictors at degree 2. With degree 1 the labels are
    /// `x1, ..., xk` in predictor order.
    pub feature_names: Vec<String>,
}

impl<T: Float> RegressionModel<T> {
    /// Model value at a raw predictor vector.
    pub fn predict(&self, input: &[T]) -> Result<T, LinalgError> {
        predict(&self.coefficients, input, self.degree)
    }
}
