//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer sits between the public API and the algorithms:
//! - Input and configuration validation
//! - The trace policy (record steps, or report that they were omitted)
//! - Result records pairing values with their traces
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trace policy and numeric configuration.
pub mod executor;

/// Result records.
pub mod output;

/// Input validation.
pub mod validator;
