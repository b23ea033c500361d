//! Compiled validator types.
//!
//! Compilation turns a [`TypeSpec`] into an immutable [`TypeDefinition`]:
//! the spec's structural invariants are verified, its message templates are
//! merged over the global defaults (spec keys winning per key), and the
//! requirement/test tables are frozen. A definition is created once per
//! registered name, shared via `Arc`, and never mutated afterwards, so
//! concurrent validation against it needs no locking.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::foundation::SpecError;
use crate::instance::Instance;
use crate::spec::{Predicate, TestSpec, TypeSpec};

/// Compiled, immutable artifact of one validator type.
pub struct TypeDefinition {
    name: String,
    requirements: Vec<(Cow<'static, str>, Predicate)>,
    tests: Vec<(Cow<'static, str>, TestSpec)>,
    catalog: Catalog,
}

impl TypeDefinition {
    /// Compiles `spec`, verifying its invariants and resolving its message
    /// table against the global defaults.
    pub fn compile(spec: TypeSpec) -> Result<Self, SpecError> {
        spec.verify()?;
        let TypeSpec {
            name,
            requirements,
            tests,
            messages,
        } = spec;
        Ok(Self {
            name,
            requirements,
            tests,
            catalog: Catalog::merge_over_defaults(messages),
        })
    }

    /// The registered type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared test names, in declaration order.
    pub fn test_names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(|(name, _)| name.as_ref())
    }

    /// The resolved message catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn requirements(&self) -> &[(Cow<'static, str>, Predicate)] {
        &self.requirements
    }

    pub(crate) fn test(&self, name: &str) -> Option<&TestSpec> {
        self.tests
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, spec)| spec)
    }

    /// A fresh instance with default configuration: not required, no
    /// label, empty test queue.
    #[must_use]
    pub fn instantiate(self: Arc<Self>) -> Instance {
        Instance::new(self)
    }
}

impl fmt::Debug for TypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDefinition")
            .field("name", &self.name)
            .field(
                "requirements",
                &self.requirements.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("tests", &self.tests.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
