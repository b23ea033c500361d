//! Caller-supplied descriptions of new validator types.
//!
//! A [`TypeSpec`] names the type and declares, fluently:
//!
//! - **requirements**: base predicates every value must satisfy, in
//!   declaration order, before any chained test runs
//! - **tests**: optional named parameterized checks with a declared
//!   [`Signature`], invocable by name on an instance
//! - **messages**: failure-key to template overrides for the catalog
//!
//! The spec is handed to a registry once and never mutated afterwards.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fluent_validator::prelude::*;
//!
//! let spec = TypeSpec::new("dma")
//!     .requirement("base", |v| v.is_string())
//!     .requirement("invalid", |v| is_market_code(v))
//!     .test("range", Signature::exact([ParamKind::Number, ParamKind::Number]), |v, args| {
//!         // args already match the signature
//!         (!within(v, args)).then_some("range".into())
//!     })
//!     .message("base", "must be a string");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{ChainError, SpecError};

/// Base acceptance predicate over a present candidate value.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Parameterized check; returns the failure key on failure, `None` on
/// pass. Arguments are pre-validated against the declared [`Signature`],
/// so the body never needs its own arity checks.
pub type Tester = Arc<dyn Fn(&Value, &[Value]) -> Option<Cow<'static, str>> + Send + Sync>;

/// Chaining methods every instance already has; tests may not shadow them.
pub(crate) const RESERVED_TESTS: &[&str] = &["required", "label", "validate"];

// ============================================================================
// SIGNATURES
// ============================================================================

/// Kind constraint for one test argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Any JSON number.
    Number,
    /// A string.
    Text,
    /// A boolean.
    Bool,
    /// Anything.
    Any,
}

impl ParamKind {
    fn admits(self, value: &Value) -> bool {
        match self {
            Self::Number => value.is_number(),
            Self::Text => value.is_string(),
            Self::Bool => value.is_boolean(),
            Self::Any => true,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Number => "a number",
            Self::Text => "a string",
            Self::Bool => "a boolean",
            Self::Any => "any value",
        }
    }
}

/// Declared argument contract of a test: either an exact ordered list of
/// [`ParamKind`]s, or unconstrained.
///
/// Checked when the test is chained, not when it runs, so a bad call site
/// fails loudly at configuration time.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    params: Option<Vec<ParamKind>>,
}

impl Signature {
    /// Accepts any number of arguments of any kind.
    #[must_use]
    pub fn any() -> Self {
        Self { params: None }
    }

    /// Accepts exactly zero arguments.
    #[must_use]
    pub fn none() -> Self {
        Self {
            params: Some(Vec::new()),
        }
    }

    /// Accepts exactly the given kinds, in order.
    #[must_use]
    pub fn exact(params: impl Into<Vec<ParamKind>>) -> Self {
        Self {
            params: Some(params.into()),
        }
    }

    pub(crate) fn check(&self, test: &str, args: &[Value]) -> Result<(), ChainError> {
        let Some(params) = &self.params else {
            return Ok(());
        };
        if params.len() != args.len() {
            return Err(ChainError::Arity {
                test: test.to_owned(),
                expected: params.len(),
                found: args.len(),
            });
        }
        for (index, (kind, arg)) in params.iter().zip(args).enumerate() {
            if !kind.admits(arg) {
                return Err(ChainError::Param {
                    test: test.to_owned(),
                    index,
                    expected: kind.describe(),
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// TYPE SPEC
// ============================================================================

/// One declared test: its argument contract plus the check itself.
#[derive(Clone)]
pub(crate) struct TestSpec {
    pub(crate) signature: Signature,
    pub(crate) tester: Tester,
}

/// Caller-supplied description of a new validator type.
#[derive(Clone)]
pub struct TypeSpec {
    pub(crate) name: String,
    pub(crate) requirements: Vec<(Cow<'static, str>, Predicate)>,
    pub(crate) tests: Vec<(Cow<'static, str>, TestSpec)>,
    pub(crate) messages: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl TypeSpec {
    /// Starts a spec for a type called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirements: Vec::new(),
            tests: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Appends a base requirement. Requirements run in declaration order
    /// and every value must pass all of them before any chained test runs.
    #[must_use]
    pub fn requirement(
        mut self,
        name: impl Into<Cow<'static, str>>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.requirements.push((name.into(), Arc::new(predicate)));
        self
    }

    /// Declares a named test with its argument contract.
    #[must_use]
    pub fn test(
        mut self,
        name: impl Into<Cow<'static, str>>,
        signature: Signature,
        tester: impl Fn(&Value, &[Value]) -> Option<Cow<'static, str>> + Send + Sync + 'static,
    ) -> Self {
        self.tests.push((
            name.into(),
            TestSpec {
                signature,
                tester: Arc::new(tester),
            },
        ));
        self
    }

    /// Declares a message template for a failure key, overriding the
    /// global default for that key if one exists.
    #[must_use]
    pub fn message(
        mut self,
        key: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.messages.push((key.into(), template.into()));
        self
    }

    /// The declared type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks the structural invariants a spec must hold before it may be
    /// compiled.
    pub(crate) fn verify(&self) -> Result<(), SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::EmptyName);
        }
        if !is_identifier(&self.name) {
            return Err(SpecError::InvalidName(self.name.clone()));
        }
        for (index, (name, _)) in self.requirements.iter().enumerate() {
            if name.is_empty() {
                return Err(SpecError::UnnamedRequirement);
            }
            if self.requirements[..index].iter().any(|(n, _)| n == name) {
                return Err(SpecError::DuplicateRequirement(name.to_string()));
            }
        }
        for (index, (name, _)) in self.tests.iter().enumerate() {
            if name.is_empty() {
                return Err(SpecError::UnnamedTest);
            }
            if RESERVED_TESTS.iter().any(|reserved| name == reserved) {
                return Err(SpecError::ReservedTest(name.to_string()));
            }
            if self.tests[..index].iter().any(|(n, _)| n == name) {
                return Err(SpecError::DuplicateTest(name.to_string()));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSpec")
            .field("name", &self.name)
            .field(
                "requirements",
                &self.requirements.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("tests", &self.tests.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("messages", &self.messages.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .finish()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ============================================================================
// TESTS
// ============================================================================
