//! Core capability trait for configured validators.

use serde_json::Value;

use crate::foundation::Verdict;

/// The contract every usable validator instance exposes: mark the value
/// mandatory, attach a display label, and execute against a candidate.
///
/// Compiled validator types embed the shared execution pipeline rather
/// than inheriting from anything host-specific, so any type implementing
/// this trait can be handed to code that only cares about the three
/// configuration capabilities.
///
/// # Examples
///
/// ```rust,ignore
/// use fluent_validator::prelude::*;
///
/// fn check_mandatory<V: Validatable>(v: V, value: &serde_json::Value) -> Verdict {
///     v.required().validate(Some(value))
/// }
/// ```
pub trait Validatable: Sized {
    /// Marks the value as mandatory: an absent value fails validation.
    #[must_use]
    fn required(self) -> Self;

    /// Attaches a display name substituted into error messages in place of
    /// the default subject name.
    #[must_use]
    fn label(self, text: impl Into<String>) -> Self;

    /// Executes the configured checks against `value`.
    ///
    /// `None` models an absent value. Never fails with a Rust `Err` for
    /// ordinary validation outcomes; does not mutate, so the same
    /// configured instance can be run against many values.
    fn validate(&self, value: Option<&Value>) -> Verdict;
}
