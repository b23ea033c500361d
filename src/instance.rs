//! Per-use validator configuration.
//!
//! An [`Instance`] is created fresh from a compiled definition for each
//! validation use-site, configured through a fluent chain, and discarded
//! after use. Chaining calls consume and return the instance; `validate`
//! borrows it, so one configured instance can be run against many values.
//!
//! Chained tests are invoked by name through [`Instance::test`]; the call
//! checks the test's declared [`Signature`](crate::spec::Signature) right
//! away, so an unknown name or a bad argument list fails at configuration
//! time, never inside `validate`.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::catalog::DEFAULT_SUBJECT;
use crate::definition::TypeDefinition;
use crate::foundation::{Args, ChainError, Validatable, Verdict};
use crate::pipeline;
use crate::spec::Tester;

/// One queued occurrence of a chained test. The tester is resolved at
/// chaining time; the queue is evaluated strictly in chaining order.
#[derive(Clone)]
pub(crate) struct QueuedTest {
    pub(crate) name: String,
    pub(crate) args: Args,
    pub(crate) tester: Tester,
}

impl fmt::Debug for QueuedTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueuedTest")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Mutable per-use configuration of a compiled validator type.
#[derive(Debug, Clone)]
pub struct Instance {
    pub(crate) definition: Arc<TypeDefinition>,
    pub(crate) required: bool,
    pub(crate) label: Option<String>,
    pub(crate) fallback_label: Cow<'static, str>,
    pub(crate) queued: Vec<QueuedTest>,
}

impl Instance {
    pub(crate) fn new(definition: Arc<TypeDefinition>) -> Self {
        Self::with_fallback_label(definition, Cow::Borrowed(DEFAULT_SUBJECT))
    }

    /// An instance whose messages fall back to `fallback_label` when no
    /// explicit label is chained. Host adapters use this to guarantee
    /// error messages are never anonymous.
    pub(crate) fn with_fallback_label(
        definition: Arc<TypeDefinition>,
        fallback_label: Cow<'static, str>,
    ) -> Self {
        Self {
            definition,
            required: false,
            label: None,
            fallback_label,
            queued: Vec::new(),
        }
    }

    /// Marks the value as mandatory.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches a display label used by message resolution.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(text.into());
        self
    }

    /// Queues a named test with an explicit ordered argument sequence.
    ///
    /// The test's declared signature is checked here: an unknown name or a
    /// wrong argument count/kind returns a [`ChainError`] instead of
    /// queueing anything. The same test may be queued multiple times and
    /// every occurrence is evaluated.
    ///
    /// # Errors
    ///
    /// [`ChainError::UnknownTest`] when the type declares no such test;
    /// [`ChainError::Arity`] / [`ChainError::Param`] when `args` violate
    /// the declared signature.
    pub fn test(
        mut self,
        name: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<Self, ChainError> {
        let args: Args = args.into_iter().collect();
        let Some(spec) = self.definition.test(name) else {
            return Err(ChainError::UnknownTest {
                type_name: self.definition.name().to_owned(),
                test: name.to_owned(),
            });
        };
        spec.signature.check(name, &args)?;
        let tester = Arc::clone(&spec.tester);
        self.queued.push(QueuedTest {
            name: name.to_owned(),
            args,
            tester,
        });
        Ok(self)
    }

    /// Executes the configured checks against `value`; `None` models an
    /// absent value.
    #[must_use]
    pub fn validate(&self, value: Option<&Value>) -> Verdict {
        pipeline::execute(self, value)
    }

    /// The compiled type this instance configures.
    #[must_use]
    pub fn definition(&self) -> &Arc<TypeDefinition> {
        &self.definition
    }

    /// Explicit label if chained, else the fallback subject name.
    pub(crate) fn effective_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.fallback_label)
    }
}

impl Validatable for Instance {
    fn required(self) -> Self {
        Instance::required(self)
    }

    fn label(self, text: impl Into<String>) -> Self {
        Instance::label(self, text)
    }

    fn validate(&self, value: Option<&Value>) -> Verdict {
        Instance::validate(self, value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
