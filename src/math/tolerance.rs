//! Tolerance-based zero tests.
//!
//! Pivot selection, rank counting, consistency checks and singularity tests
//! all compare against the same absolute tolerance so that the solvers agree
//! with each other on what "zero" means.

// External dependencies
use num_traits::Float;

/// Default absolute tolerance for zero tests.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// `|value| <= tol`.
#[inline]
pub fn is_zero<T: Float>(value: T, tol: T) -> bool {
    value.abs() <= tol
}

/// Index of the first entry with `|value| > tol`.
#[inline]
pub fn first_nonzero<T: Float>(values: &[T], tol: T) -> Option<usize> {
    values.iter().position(|&v| !is_zero(v, tol))
}

/// Lossy conversion used when writing numbers into traces.
#[inline]
pub fn display<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
