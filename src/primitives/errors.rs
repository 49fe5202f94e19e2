//! Error types for matrix construction, elimination and configuration.
//!
//! ## Purpose
//!
//! This module defines [`LinalgError`], the single error type returned by
//! every fallible operation in the crate.
//!
//! ## Design notes
//!
//! * **Contract violations only**: Every variant describes malformed input or
//!   an undefined operation (e.g. inverting a singular matrix). A linear
//!   system without solutions is *not* an error; it is reported through
//!   [`Solution::NoSolution`](crate::algorithms::system::Solution).
//! * **Fail-fast**: Errors are raised at the point of detection and are never
//!   retried or recovered internally.
//! * **no_std**: `Display` is always available; `std::error::Error` is
//!   implemented only with the `std` feature.
//!
//! ## Key concepts
//!
//! * **InvalidArgument family**: `EmptyInput`, `InvalidArgument`,
//!   `TooFewPoints`, `InvalidNumericValue`, `InvalidDegree`.
//! * **Shape family**: `NotSquare`, `OutOfRange`.
//! * **Numeric family**: `Singular`.
//! * **Configuration family**: `InvalidTolerance`, `DuplicateParameter`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors raised by matrix operations, solvers and the engine builder.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// A matrix was requested from zero rows.
    EmptyInput,

    /// Malformed shape or argument (ragged rows, mismatched dimensions, zero factor).
    InvalidArgument(String),

    /// Operation requires a square matrix.
    NotSquare {
        /// Number of rows of the offending matrix.
        rows: usize,
        /// Number of columns of the offending matrix.
        cols: usize,
    },

    /// Operation requires a non-singular matrix (determinant is zero).
    Singular,

    /// Row or column index outside the matrix bounds.
    OutOfRange {
        /// Which axis was indexed ("row" or "column").
        axis: &'static str,
        /// The offending index.
        index: usize,
        /// Number of rows or columns on that axis.
        len: usize,
    },

    /// Not enough points for the requested interpolation.
    TooFewPoints {
        /// Number of points supplied.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// A matrix cell is NaN or infinite.
    InvalidNumericValue(String),

    /// Polynomial regression degree must be at least 1.
    InvalidDegree(usize),

    /// Zero tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::EmptyInput => write!(f, "Input matrix has no rows"),
            LinalgError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            LinalgError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {}x{}", rows, cols)
            }
            LinalgError::Singular => {
                write!(f, "Matrix is singular (determinant is 0)")
            }
            LinalgError::OutOfRange { axis, index, len } => write!(
                f,
                "Index out of range: {} {} (matrix has {} {}s)",
                axis, index, len, axis
            ),
            LinalgError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            LinalgError::InvalidNumericValue(msg) => {
                write!(f, "Invalid numeric value: {}", msg)
            }
            LinalgError::InvalidDegree(degree) => {
                write!(f, "Invalid degree: {} (must be at least 1)", degree)
            }
            LinalgError::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", tol)
            }
            LinalgError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

impl LinalgError {
    /// Shorthand for building an [`LinalgError::InvalidArgument`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LinalgError::InvalidArgument(msg.into())
    }
}
