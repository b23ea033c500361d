//! Shared vocabulary of the validation system.
//!
//! This module contains the building blocks everything else speaks in:
//!
//! - **Traits**: [`Validatable`]
//! - **Outcomes**: [`Verdict`], [`Violation`], [`FailureContext`]
//! - **Fatal errors**: [`SpecError`], [`UnknownTypeError`], [`ChainError`]
//!
//! The split between outcomes and fatal errors is the load-bearing design
//! decision: configuration and programming mistakes (bad spec, bad arity,
//! unknown name) surface immediately as `Err`, while genuine validation
//! failures travel inside the returned [`Verdict`] and never crash the
//! caller.

pub mod error;
pub mod traits;
pub mod verdict;

pub use error::{ChainError, SpecError, UnknownTypeError};
pub use traits::Validatable;
pub use verdict::{Args, FailureContext, Verdict, Violation};
