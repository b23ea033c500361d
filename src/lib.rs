//! # fluent-validator
//!
//! Define new, named, chainable value-validation types and plug them into
//! a host validation framework.
//!
//! A caller describes a type once (base acceptance *requirements*,
//! optional parameterized *tests*, and templated failure messages) and
//! the crate compiles that description into a reusable definition. Each
//! use-site instantiates the definition, configures it fluently
//! (`required()`, `label(..)`, named test calls), and executes it against
//! a candidate value to get a structured pass/fail [`Verdict`] with a
//! fully resolved message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fluent_validator::prelude::*;
//!
//! add_validator(
//!     TypeSpec::new("fiddle")
//!         .requirement("base", |v| v.is_string())
//!         .requirement("len", |v| v.as_str().is_some_and(|s| (1..=100).contains(&s.len())))
//!         .test("range", Signature::exact([ParamKind::Number, ParamKind::Number]), |v, args| {
//!             let len = v.as_str().map_or(0, str::len) as u64;
//!             let (lo, hi) = (args[0].as_u64().unwrap_or(0), args[1].as_u64().unwrap_or(0));
//!             ((len < lo) || (len > hi)).then_some("range".into())
//!         })
//!         .message("base", "must be a string")
//!         .message("range", "{{key}} \"{{value}}\" must be between {{args.0}} and {{args.1}} chars in length"),
//! )?;
//!
//! let verdict = create("fiddle")?
//!     .test("range", args![10, 20])?
//!     .validate(Some(&serde_json::json!("1")));
//! assert!(!verdict.is_ok());
//! ```
//!
//! ## Architecture
//!
//! - [`spec`]: the caller-facing description ([`spec::TypeSpec`]) and
//!   declared test contracts ([`spec::Signature`])
//! - [`definition`]: compiled, immutable validator types
//! - [`instance`]: fluent per-use configuration
//! - `pipeline`: required check, then requirements, then queued tests;
//!   first failure wins
//! - [`catalog`]: failure-key to template tables and placeholder
//!   resolution
//! - [`registry`]: name to definition mapping, isolated or process-wide
//! - [`host`]: the only host-aware piece, installs constructors into an
//!   external namespace
//!
//! Configuration mistakes (malformed specs, unknown names, bad test
//! arguments) fail loudly as `Err` at the offending call; data-validation
//! outcomes always travel inside the returned [`Verdict`] and never crash
//! the caller.

pub mod catalog;
pub mod definition;
pub mod foundation;
pub mod host;
pub mod instance;
mod macros;
mod pipeline;
pub mod prelude;
pub mod registry;
pub mod spec;

pub use foundation::{ChainError, SpecError, UnknownTypeError, Validatable, Verdict, Violation};
pub use registry::{add_validator, create, global, lookup};
