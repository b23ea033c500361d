//! Host-framework adapter.
//!
//! The core produces pure-data [`Constructor`] handles; this module is the
//! only place that knows how to hang them on an external validation
//! framework's namespace. The host implements [`Namespace`] (plain
//! `HashMap`s already do) and [`register_type`] installs a constructor for
//! a registered type under its name.
//!
//! Every instance a constructor produces resolves a default label when
//! none was chained, so error messages coming out of a host are never
//! anonymous: `register_type` wires the literal `"value"`,
//! [`register_type_labeled`] wires whatever subject name the host
//! configured.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::DEFAULT_SUBJECT;
use crate::definition::TypeDefinition;
use crate::foundation::UnknownTypeError;
use crate::instance::Instance;
use crate::registry::Registry;

// ============================================================================
// CONSTRUCTOR
// ============================================================================

/// Zero-argument factory for instances of one registered type, carrying
/// the host-configured default label.
#[derive(Debug, Clone)]
pub struct Constructor {
    definition: Arc<TypeDefinition>,
    default_label: Cow<'static, str>,
}

impl Constructor {
    fn new(definition: Arc<TypeDefinition>, default_label: Cow<'static, str>) -> Self {
        Self {
            definition,
            default_label,
        }
    }

    /// A fresh instance whose messages fall back to the configured
    /// default label.
    #[must_use]
    pub fn instantiate(&self) -> Instance {
        Instance::with_fallback_label(Arc::clone(&self.definition), self.default_label.clone())
    }

    /// The name of the type this constructor produces.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.definition.name()
    }
}

// ============================================================================
// NAMESPACE
// ============================================================================

/// Anywhere a host lets constructors be installed by name.
pub trait Namespace {
    /// Installs `constructor` under `name`, replacing any previous entry.
    fn install(&mut self, name: String, constructor: Constructor);
}

impl Namespace for HashMap<String, Constructor> {
    fn install(&mut self, name: String, constructor: Constructor) {
        self.insert(name, constructor);
    }
}

// ============================================================================
// REGISTRATION
// ============================================================================

/// Installs the type registered under `name` into `namespace`, defaulting
/// unlabelled messages to the literal `"value"`.
///
/// # Errors
///
/// [`UnknownTypeError`] when `name` was never registered.
pub fn register_type<N>(
    namespace: &mut N,
    registry: &Registry,
    name: &str,
) -> Result<(), UnknownTypeError>
where
    N: Namespace + ?Sized,
{
    register_type_labeled(namespace, registry, name, DEFAULT_SUBJECT)
}

/// Installs the type registered under `name` into `namespace` with a
/// host-configured default label.
///
/// # Errors
///
/// [`UnknownTypeError`] when `name` was never registered.
pub fn register_type_labeled<N>(
    namespace: &mut N,
    registry: &Registry,
    name: &str,
    default_label: impl Into<Cow<'static, str>>,
) -> Result<(), UnknownTypeError>
where
    N: Namespace + ?Sized,
{
    let definition = registry.lookup(name)?;
    debug!(name, "installed validator constructor");
    namespace.install(name.to_owned(), Constructor::new(definition, default_label.into()));
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
