//! Type registry.
//!
//! A [`Registry`] maps type names to compiled definitions. The designed
//! lifecycle is "populate fully during startup, then treat as read-only":
//! registration takes the write lock briefly, lookups share the read lock,
//! and definitions are immutable once stored, so a populated registry can
//! be hit from any number of threads.
//!
//! One process-wide default registry is provided for ergonomic use
//! ([`global`] and the free functions [`add_validator`] / [`create`] /
//! [`lookup`]); tests and embedders can construct isolated `Registry`
//! values to avoid cross-contamination.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::debug;

use crate::definition::TypeDefinition;
use crate::foundation::{SpecError, UnknownTypeError};
use crate::instance::Instance;
use crate::spec::TypeSpec;

/// Mapping from validator type name to compiled definition.
#[derive(Debug, Default)]
pub struct Registry {
    types: RwLock<HashMap<String, Arc<TypeDefinition>>>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `spec` and stores the resulting definition under its name.
    ///
    /// # Errors
    ///
    /// Any [`SpecError`] from compilation, or
    /// [`SpecError::DuplicateType`] when the name is already taken.
    pub fn add(&self, spec: TypeSpec) -> Result<(), SpecError> {
        let definition = Arc::new(TypeDefinition::compile(spec)?);
        let mut types = self.types.write().unwrap_or_else(PoisonError::into_inner);
        if types.contains_key(definition.name()) {
            return Err(SpecError::DuplicateType(definition.name().to_owned()));
        }
        debug!(name = definition.name(), "registered validator type");
        types.insert(definition.name().to_owned(), definition);
        Ok(())
    }

    /// The definition registered under `name`.
    ///
    /// # Errors
    ///
    /// [`UnknownTypeError`] when nothing is registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<TypeDefinition>, UnknownTypeError> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| UnknownTypeError::new(name))
    }

    /// Instantiates the type registered under `name` directly, without
    /// going through a host namespace.
    ///
    /// # Errors
    ///
    /// [`UnknownTypeError`] when nothing is registered under `name`.
    pub fn create(&self, name: &str) -> Result<Instance, UnknownTypeError> {
        Ok(self.lookup(name)?.instantiate())
    }

    /// True when `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Names of every registered type, in no particular order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

// ============================================================================
// PROCESS-WIDE DEFAULT
// ============================================================================

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide default registry.
#[must_use]
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Registers `spec` with the process-wide default registry.
///
/// # Errors
///
/// See [`Registry::add`].
pub fn add_validator(spec: TypeSpec) -> Result<(), SpecError> {
    global().add(spec)
}

/// Looks `name` up in the process-wide default registry.
///
/// # Errors
///
/// See [`Registry::lookup`].
pub fn lookup(name: &str) -> Result<Arc<TypeDefinition>, UnknownTypeError> {
    global().lookup(name)
}

/// Instantiates `name` from the process-wide default registry.
///
/// # Errors
///
/// See [`Registry::create`].
pub fn create(name: &str) -> Result<Instance, UnknownTypeError> {
    global().create(name)
}

// ============================================================================
// TESTS
// ============================================================================
