//! Prelude module for convenient imports.
//!
//! A single `use fluent_validator::prelude::*;` brings in everything a
//! typical caller needs: the spec builder, the registry, the host adapter,
//! the chaining trait, and the outcome types.

pub use crate::args;
pub use crate::catalog::{Catalog, DEFAULT_SUBJECT, MessageContext};
pub use crate::definition::TypeDefinition;
pub use crate::foundation::{
    Args, ChainError, FailureContext, SpecError, UnknownTypeError, Validatable, Verdict, Violation,
};
pub use crate::host::{Constructor, Namespace, register_type, register_type_labeled};
pub use crate::instance::Instance;
pub use crate::registry::{Registry, add_validator, create, global, lookup};
pub use crate::spec::{ParamKind, Signature, TypeSpec};
