//! Step trace sinks.
//!
//! ## Purpose
//!
//! Every algorithm writes a human-readable account of its steps (pivot
//! choices, row operations, intermediate matrices) into a [`TraceSink`].
//! The same algorithm body serves both the traced and the untraced case:
//! callers pass [`StepLog`] to record, or [`NoTrace`] to discard.
//!
//! ## Design notes
//!
//! * Steps are passed as `fmt::Arguments`, so nothing is formatted when the
//!   sink is disabled.
//! * Expensive step preparation (e.g. building a formula string in a loop)
//!   should be guarded with [`TraceSink::enabled`].
//!
//! ## Invariants
//!
//! * `NoTrace` never allocates.
//! * `StepLog` text is append-only.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt::{self, Write};

// ============================================================================
// Sink Trait
// ============================================================================

/// Destination for algorithm step descriptions.
pub trait TraceSink {
    /// Whether recorded steps are kept.
    fn enabled(&self) -> bool;

    /// Append a formatted step.
    fn record(&mut self, args: fmt::Arguments<'_>);
}

/// Record a formatted step into a [`TraceSink`].
///
/// ```ignore
/// step!(sink, "-> R{} = R{} / {:.3}\n", row + 1, row + 1, pivot);
/// ```
macro_rules! step {
    ($sink:expr, $($arg:tt)*) => {
        $sink.record(format_args!($($arg)*))
    };
}
pub(crate) use step;

// ============================================================================
// Implementations
// ============================================================================

/// Sink that discards every step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn enabled(&self) -> bool {
        false
    }

    #[inline]
    fn record(&mut self, _args: fmt::Arguments<'_>) {}
}

/// Sink that accumulates steps into a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    text: String,
}

impl StepLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a log that starts with a heading.
    pub fn with_heading(heading: &str) -> Self {
        Self {
            text: String::from(heading),
        }
    }

    /// Borrow the recorded text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the log and return its text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl TraceSink for StepLog {
    #[inline]
    fn enabled(&self) -> bool {
        true
    }

    fn record(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.text.write_fmt(args);
    }
}
