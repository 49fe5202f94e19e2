//! Execution policy shared by every engine operation.
//!
//! ## Purpose
//!
//! This module holds the numeric configuration of an engine call and
//! decides whether the call records its steps. Small inputs run with a
//! [`StepLog`]; inputs larger than the trace threshold run with [`NoTrace`]
//! and report a fixed notice instead.
//!
//! ## Design notes
//!
//! * The governing dimension is the row count of the operation's input.
//! * One algorithm body serves both cases; only the sink differs.
//! * Callers that skip the builder can construct a [`SolverConfig`] directly
//!   and pass any algorithm from the algorithms layer to
//!   [`SolverConfig::execute`].
//!
//! ## Invariants
//!
//! * A trace is recorded iff `dimension <= trace_threshold`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::math::tolerance::DEFAULT_TOLERANCE;
use crate::primitives::errors::LinalgError;
use crate::primitives::trace::{NoTrace, StepLog, TraceSink};

/// Default largest dimension for which steps are recorded.
pub const DEFAULT_TRACE_THRESHOLD: usize = 11;

// ============================================================================
// Configuration
// ============================================================================

/// Numeric settings for one engine call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T> {
    /// Absolute tolerance for zero tests.
    pub tolerance: T,

    /// Largest input dimension for which steps are recorded.
    pub trace_threshold: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap(),
            trace_threshold: DEFAULT_TRACE_THRESHOLD,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Whether an input of `dimension` rows records its steps.
    #[inline]
    pub fn records(&self, dimension: usize) -> bool {
        dimension <= self.trace_threshold
    }

    /// Notice that replaces the trace above the threshold.
    pub fn omitted_notice(&self) -> String {
        format!(
            "Steps omitted: matrix dimension exceeds {} x {}.",
            self.trace_threshold, self.trace_threshold
        )
    }

    /// Run `op` with the sink the trace policy selects for `dimension`.
    ///
    /// Returns the value together with the recorded steps, or the omitted
    /// notice when the dimension exceeds the threshold.
    pub fn execute<R, F>(
        &self,
        operation: &'static str,
        dimension: usize,
        op: F,
    ) -> Result<(R, String), LinalgError>
    where
        F: FnOnce(&mut dyn TraceSink, T) -> Result<R, LinalgError>,
    {
        let traced = self.records(dimension);
        debug!(
            "{}: dimension {}, trace {}",
            operation,
            dimension,
            if traced { "recorded" } else { "omitted" }
        );

        if traced {
            let mut log = StepLog::new();
            let value = op(&mut log, self.tolerance)?;
            Ok((value, log.into_string()))
        } else {
            let value = op(&mut NoTrace, self.tolerance)?;
            Ok((value, self.omitted_notice()))
        }
    }
}
