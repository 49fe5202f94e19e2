//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical helpers used by the algorithms:
//! - Matrix and dot products, scalar division
//! - Binomial coefficients and monomial exponent enumeration
//! - Tolerance-based zero tests
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binomial coefficients and monomial enumeration.
pub mod combinatorics;

/// Matrix products and scalar division.
pub mod ops;

/// Zero tests against an absolute tolerance.
pub mod tolerance;
