//! Fatal error taxonomy.
//!
//! Everything in this module signals a defect in *calling code*: a
//! malformed type specification, a lookup for a name nobody registered, or
//! a chained test invoked against its declared signature. These are
//! returned as `Err` immediately from the offending call and are never
//! encoded into a [`Verdict`](crate::foundation::Verdict): genuine
//! data-validation outcomes travel inside the verdict so that validating
//! untrusted input can never crash calling code.

use thiserror::Error;

// ============================================================================
// SPEC ERRORS
// ============================================================================

/// A malformed type specification, rejected at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// The type name was empty.
    #[error("validator type name must be a non-empty identifier")]
    EmptyName,

    /// The type name contains characters outside `[A-Za-z0-9_]` or starts
    /// with a digit.
    #[error("validator type name `{0}` is not a valid identifier")]
    InvalidName(String),

    /// A type with this name is already registered.
    #[error("validator type `{0}` is already registered")]
    DuplicateType(String),

    /// A requirement name appears more than once in the spec.
    #[error("requirement `{0}` is declared more than once")]
    DuplicateRequirement(String),

    /// A requirement was declared with an empty name.
    #[error("requirements must have non-empty names")]
    UnnamedRequirement,

    /// A test name appears more than once in the spec.
    #[error("test `{0}` is declared more than once")]
    DuplicateTest(String),

    /// A test was declared with an empty name.
    #[error("tests must have non-empty names")]
    UnnamedTest,

    /// A test name collides with one of the built-in chaining methods
    /// (`required`, `label`, `validate`).
    #[error("test name `{0}` collides with a built-in chaining method")]
    ReservedTest(String),
}

// ============================================================================
// LOOKUP ERRORS
// ============================================================================

/// A registry lookup for a name that was never registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no validator type registered under `{name}`")]
pub struct UnknownTypeError {
    /// The name that missed.
    pub name: String,
}

impl UnknownTypeError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// CHAIN ERRORS
// ============================================================================

/// A chained test invoked in a way its declared contract forbids.
///
/// Raised from the chaining call itself, before the test is queued, so a
/// bad call site fails at configuration time rather than at validate time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The named test does not exist on this validator type.
    #[error("validator type `{type_name}` has no test named `{test}`")]
    UnknownTest {
        /// The validator type being chained.
        type_name: String,
        /// The test name that missed.
        test: String,
    },

    /// The call supplied the wrong number of arguments.
    #[error("test `{test}` expects {expected} argument(s), got {found}")]
    Arity {
        /// The test being invoked.
        test: String,
        /// Declared argument count.
        expected: usize,
        /// Supplied argument count.
        found: usize,
    },

    /// An argument had the wrong kind for its position.
    #[error("argument {index} of test `{test}` must be {expected}")]
    Param {
        /// The test being invoked.
        test: String,
        /// Zero-based position of the offending argument.
        index: usize,
        /// Human description of the declared kind.
        expected: &'static str,
    },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_error_messages() {
        assert_eq!(
            SpecError::DuplicateType("dma".into()).to_string(),
            "validator type `dma` is already registered"
        );
        assert_eq!(
            SpecError::ReservedTest("label".into()).to_string(),
            "test name `label` collides with a built-in chaining method"
        );
    }

    #[test]
    fn unknown_type_message() {
        let err = UnknownTypeError::new("ghost");
        assert_eq!(err.to_string(), "no validator type registered under `ghost`");
    }

    #[test]
    fn chain_error_messages() {
        let err = ChainError::Arity {
            test: "range".into(),
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "test `range` expects 2 argument(s), got 3");

        let err = ChainError::Param {
            test: "range".into(),
            index: 1,
            expected: "a number",
        };
        assert_eq!(err.to_string(), "argument 1 of test `range` must be a number");
    }
}
