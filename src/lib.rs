//! # gauss-rs: step-by-step linear algebra for Rust
//!
//! A dense linear-algebra engine that solves systems of linear equations,
//! computes determinants and inverses, interpolates points and fits
//! polynomial regression models. Every operation also produces a readable
//! account of its steps: pivot choices, row operations and intermediate
//! matrices.
//!
//! **What it covers:**
//! - Linear systems by Gauss, Gauss-Jordan, Cramer's rule and the inverse
//!   method, with unique, parametric and inconsistent outcomes
//! - Determinants by cofactor expansion and by row reduction
//! - Inverses by augmented reduction and by the adjoint
//! - Polynomial interpolation and cubic-spline control points
//! - Multivariate polynomial regression through the normal equations
//!
//! **Step traces:**
//!
//! Each result carries a `trace` string. Traces are recorded only for inputs
//! with at most `trace_threshold` rows (11 by default). Larger inputs run the
//! same algorithm without recording and report a fixed notice instead.
//!
//! ## Quick Start
//!
//! ### Solving a system
//!
//! ```rust
//! use gauss_rs::prelude::*;
//!
//! let engine = Engine::new().build()?;
//!
//! let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 1.0]])?;
//! let b = Matrix::column_vector(&[3.0, 2.0]);
//!
//! let result = engine.solve(&a, &b, GaussJordan)?;
//! assert_eq!(result.solution.evaluate(&[])?, vec![1.0, 1.0]);
//! println!("{}", result.trace);
//! # Result::<(), LinalgError>::Ok(())
//! ```
//!
//! ```text
//! Initial matrix:
//!        2.000       1.000       3.000
//!        1.000       1.000       2.000
//!
//! Forward phase
//!
//! -> R1 = R1 / 2.000
//! -> R2 = R2 - (1.000 * R1)
//! ...
//! ```
//!
//! ### Parametric solutions
//!
//! ```rust
//! use gauss_rs::prelude::*;
//!
//! let engine = Engine::new().build()?;
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 1.0], vec![2.0, 2.0]])?;
//! let b = Matrix::column_vector(&[2.0, 4.0]);
//!
//! match engine.solve(&a, &b, Gauss)?.solution {
//!     Solution::Parametric(m) => {
//!         // Particular solution, then one direction per free variable.
//!         assert_eq!(m.col(0)?, vec![2.0, 0.0]);
//!         assert_eq!(m.col(1)?, vec![-1.0, 1.0]);
//!     }
//!     other => panic!("expected a parametric solution, got {:?}", other),
//! }
//! # Result::<(), LinalgError>::Ok(())
//! ```
//!
//! ### Determinants and inverses
//!
//! ```rust
//! use gauss_rs::prelude::*;
//!
//! let engine = Engine::new()
//!     .tolerance(1e-9)      // Absolute zero tolerance
//!     .trace_threshold(11)  // Record steps up to 11 x 11
//!     .build()?;
//!
//! let a = Matrix::<f64>::from_rows(vec![vec![4.0, 3.0], vec![6.0, 3.0]])?;
//!
//! let det = engine.determinant(&a, Cofactor)?;
//! assert!((det.value + 6.0).abs() < 1e-12);
//!
//! let inv = engine.inverse(&a, Adjoint)?;
//! assert!((inv.matrix[(0, 0)] + 0.5).abs() < 1e-12);
//! # Result::<(), LinalgError>::Ok(())
//! ```
//!
//! ### Interpolation and regression
//!
//! ```rust
//! use gauss_rs::prelude::*;
//!
//! let engine = Engine::new().build()?;
//!
//! let points = Matrix::<f64>::from_rows(vec![vec![1.0, 1.0], vec![2.0, 4.0], vec![3.0, 9.0]])?;
//! let poly = engine.interpolate(&points)?;
//! assert!((poly.evaluate(2.5) - 6.25).abs() < 1e-9);
//!
//! let samples = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
//! let model = engine.fit_regression_samples(&samples, &[3.0, 5.0, 7.0, 9.0], 1)?;
//! assert!((model.predict(&[10.0])? - 21.0).abs() < 1e-9);
//! # Result::<(), LinalgError>::Ok(())
//! ```
//!
//! ## Numerical behavior
//!
//! Pivots are the first entry at or below the pivot row whose magnitude
//! exceeds the tolerance; candidates are never compared by magnitude. This
//! keeps the recorded steps predictable but offers no protection against
//! ill-conditioned input. Singularity, rank and consistency decisions all
//! use the same absolute tolerance.
//!
//! ## Feature Flags
//!
//! - `std` (default): `std::error::Error` for [`LinalgError`](prelude::LinalgError).
//!   Without it the crate is `no_std` and needs `alloc`.
//! - `dev`: exposes internal modules under `internals` for testing.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: one
//! `debug` record per engine call, `trace` records for pivot decisions and
//! a `warn` record when a regression prediction truncates its features. No
//! logger is installed by the library.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the dense `Matrix`, the error type and the step trace sinks.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains matrix products, binomial coefficients, monomial enumeration
// and tolerance-based zero tests.
mod math;

// Layer 3: Algorithms - the numeric core.
//
// Contains determinants, echelon reduction, system solvers, inversion,
// interpolation and regression.
mod algorithms;

// Layer 4: Engine - validation, trace policy and result records.
mod engine;

// High-level fluent API.
//
// Provides the `Engine` builder and the `LinearEngine` entry points.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard gauss-rs prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use gauss_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CofactorResult, DeterminantMethod,
        DeterminantMethod::{Cofactor, RowReduction},
        DeterminantResult, EchelonResult, EngineBuilder as Engine, InverseMethod,
        InverseMethod::{Adjoint, Augment},
        InverseResult, LinalgError, LinearEngine, Matrix, NoTrace, PolynomialInterpolation,
        RegressionModel, Solution, SolverConfig, SplMethod,
        SplMethod::{Cramer, Gauss, GaussJordan, Inverse},
        SplResult, SplineResult, StepLog, TraceSink,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
