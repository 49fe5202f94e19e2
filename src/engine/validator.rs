//! Input validation for engine configuration and matrix data.
//!
//! ## Purpose
//!
//! This module checks engine entry-point inputs before any algorithm runs:
//! finite cells, compatible shapes and sane configuration values.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Cheap shape checks run before the per-cell scan.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not decide solvability or singularity; the algorithms
//!   report those.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LinalgError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine inputs and configuration.
///
/// All methods return `Result<(), LinalgError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Matrix Validation
    // ========================================================================

    /// Every cell of `m` is finite.
    pub fn validate_finite<T: Float>(m: &Matrix<T>, name: &str) -> Result<(), LinalgError> {
        for (idx, &val) in m.as_slice().iter().enumerate() {
            if !val.is_finite() {
                return Err(LinalgError::InvalidNumericValue(format!(
                    "{}[{}][{}]={}",
                    name,
                    idx / m.cols(),
                    idx % m.cols(),
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Square and finite.
    pub fn validate_square<T: Float>(m: &Matrix<T>) -> Result<(), LinalgError> {
        m.ensure_square()?;
        Self::validate_finite(m, "A")
    }

    /// Coefficient matrix and an `n x 1` constant vector, both finite.
    pub fn validate_system<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<(), LinalgError> {
        if a.rows() == 0 || a.cols() == 0 {
            return Err(LinalgError::EmptyInput);
        }
        if b.cols() != 1 || b.rows() != a.rows() {
            return Err(LinalgError::invalid(format!(
                "constant vector must be {}x1, got {}x{}",
                a.rows(),
                b.rows(),
                b.cols()
            )));
        }
        Self::validate_finite(a, "A")?;
        Self::validate_finite(b, "b")
    }

    /// An augmented matrix `[A|b]` with at least one variable.
    pub fn validate_augmented<T: Float>(m: &Matrix<T>) -> Result<(), LinalgError> {
        if m.rows() == 0 {
            return Err(LinalgError::EmptyInput);
        }
        if m.cols() < 2 {
            return Err(LinalgError::invalid(format!(
                "augmented matrix needs at least 2 columns, got {}",
                m.cols()
            )));
        }
        Self::validate_finite(m, "M")
    }

    /// `n x 2` point matrix with at least `min` rows.
    pub fn validate_points<T: Float>(points: &Matrix<T>, min: usize) -> Result<(), LinalgError> {
        if points.cols() != 2 {
            return Err(LinalgError::invalid(format!(
                "points must be an n x 2 matrix, got {} columns",
                points.cols()
            )));
        }
        if points.rows() < min {
            return Err(LinalgError::TooFewPoints {
                got: points.rows(),
                min,
            });
        }
        Self::validate_finite(points, "points")
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Regression degree of at least 1.
    pub fn validate_degree(degree: usize) -> Result<(), LinalgError> {
        if degree == 0 {
            return Err(LinalgError::InvalidDegree(degree));
        }
        Ok(())
    }

    /// Positive, finite zero tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), LinalgError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(LinalgError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LinalgError> {
        if let Some(param) = duplicate_param {
            return Err(LinalgError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
