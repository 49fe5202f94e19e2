//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the numeric algorithms of the engine:
//! - Determinants by cofactor expansion and by row reduction
//! - Row-echelon reduction, classification and substitution
//! - Linear system solvers (Gauss, Gauss-Jordan, Cramer, inverse method)
//! - Matrix inversion (augmented and adjoint) and cofactor matrices
//! - Polynomial interpolation and cubic-spline control points
//! - Polynomial regression through the normal equations
//!
//! Every algorithm writes its steps into a
//! [`TraceSink`](crate::primitives::trace::TraceSink) supplied by the caller.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Determinant algorithms.
pub mod determinant;

/// Echelon reduction and solution read-off.
pub mod elimination;

/// Polynomial and spline interpolation.
pub mod interpolation;

/// Matrix inversion.
pub mod inverse;

/// Polynomial regression.
pub mod regression;

/// Linear system solvers.
pub mod system;
