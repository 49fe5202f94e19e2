//! Matrix arithmetic: products and scalar division.
//!
//! ## Purpose
//!
//! This module provides the few arithmetic operations the solvers need on
//! whole matrices: the matrix product (inverse method, normal equations),
//! the dot product (regression prediction) and scalar division (adjoint
//! inverse).
//!
//! ## Invariants
//!
//! * Inputs are never modified; every function returns a new matrix.
//! * Division by an exact zero is rejected.
//!
//! ## Non-goals
//!
//! * No blocked or SIMD kernels; sizes here are small and exactness of the
//!   operation order matters more than throughput.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LinalgError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Products
// ============================================================================

/// Matrix product `a * b`.
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    if a.cols() != b.rows() {
        return Err(LinalgError::invalid(format!(
            "cannot multiply {}x{} by {}x{}",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }

    let mut result = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut sum = T::zero();
            for k in 0..a.cols() {
                sum = sum + a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = sum;
        }
    }
    Ok(result)
}

/// Dot product over the common prefix of two slices.
#[inline]
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

// ============================================================================
// Scalar Division
// ============================================================================

/// Every cell divided by a non-zero `scalar`.
pub fn divide<T: Float>(a: &Matrix<T>, scalar: T) -> Result<Matrix<T>, LinalgError> {
    if scalar == T::zero() {
        return Err(LinalgError::invalid("scalar divisor must be non-zero"));
    }
    let mut result = a.clone();
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            result[(i, j)] = a[(i, j)] / scalar;
        }
    }
    Ok(result)
}
