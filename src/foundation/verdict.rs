//! Validation outcomes.
//!
//! A [`Verdict`] is the result of running one candidate value through one
//! configured validator instance. It always echoes the input back unchanged
//! and carries at most one [`Violation`]: the pipeline stops at the first
//! failing check, so there is never a list of errors to report.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

/// Ordered argument sequence of a chained test call.
///
/// Most tests take zero, one, or two arguments; the inline capacity keeps
/// the common case off the heap.
pub type Args = SmallVec<[Value; 2]>;

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of validating one value.
///
/// `value` is the candidate echoed back unchanged (`None` when the value
/// was absent). `error` is `None` on success. Ordinary validation failures
/// are always reported here, never as a Rust `Err`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// The input, echoed back unchanged.
    pub value: Option<Value>,
    /// The first failing check, if any.
    pub error: Option<Violation>,
}

impl Verdict {
    /// A passing verdict echoing `value`.
    #[must_use]
    pub fn pass(value: Option<Value>) -> Self {
        Self { value, error: None }
    }

    /// A failing verdict echoing `value` and carrying `violation`.
    #[must_use]
    pub fn fail(value: Option<Value>, violation: Violation) -> Self {
        Self {
            value,
            error: Some(violation),
        }
    }

    /// True when no check failed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The resolved failure message, if any check failed.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().map(|v| v.message.as_str())
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A single failed check: which one, why, and with what context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Dotted failure key, `<type>.<failureName>`.
    pub key: String,
    /// Fully resolved human-readable message.
    pub message: String,
    /// The inputs the failing check saw.
    pub context: FailureContext,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Context captured alongside a [`Violation`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FailureContext {
    /// The candidate value (`None` for a missing-value failure).
    pub value: Option<Value>,
    /// Arguments of the failing chained test; empty for requirement and
    /// required failures.
    pub args: Args,
    /// The effective label at validation time.
    pub label: String,
}

// ============================================================================
// TESTS
// ============================================================================
