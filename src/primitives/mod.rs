//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational data structures shared by every
//! other layer:
//! - The dense [`Matrix`](matrix::Matrix) and its elementary row operations
//! - The crate error type
//! - Trace sinks that collect human-readable algorithm steps
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Dense row-major matrix.
pub mod matrix;

/// Step trace sinks.
pub mod trace;
