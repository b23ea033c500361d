//! Failure-message catalog.
//!
//! Each compiled validator type carries a [`Catalog`]: a table from failure
//! key to message template, resolved against the failing value, the
//! effective label, and the chained-test arguments.
//!
//! # Template grammar
//!
//! Three placeholders are recognised:
//!
//! - `{{key}}`: the effective label (explicit label, else the default
//!   subject name)
//! - `{{value}}`: the candidate value, stringified; strings render bare
//! - `{{args.N}}`: the N-th chained-test argument, 0-indexed
//!
//! A template that does not mention `{{key}}` is rendered with the quoted
//! label prepended, so `must be a string` resolves to
//! `"value" must be a string`, while a template that places `{{key}}`
//! itself is rendered verbatim.
//!
//! # Lookup precedence
//!
//! Per-type declared template > global default for the key > a generic
//! fallback naming the key. Resolution is pure: identical template and
//! context always produce the identical string.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;

/// Subject name used in messages when no label was attached.
pub const DEFAULT_SUBJECT: &str = "value";

/// Default templates shared by every type; a spec overrides per key.
const GLOBAL_DEFAULTS: &[(&str, &str)] = &[("required", "is required")];

// ============================================================================
// CATALOG
// ============================================================================

/// Per-type table from failure key to message template.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: HashMap<Cow<'static, str>, Cow<'static, str>>,
}

impl Catalog {
    /// An empty catalog with no templates at all, not even the global
    /// defaults. Useful for tests; compiled types use
    /// [`Catalog::with_defaults`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog seeded with the global default templates.
    #[must_use]
    pub fn with_defaults() -> Self {
        let templates = GLOBAL_DEFAULTS
            .iter()
            .map(|&(key, template)| (Cow::Borrowed(key), Cow::Borrowed(template)))
            .collect();
        Self { templates }
    }

    /// Merges `declared` templates over the global defaults, declared keys
    /// winning per key.
    #[must_use]
    pub(crate) fn merge_over_defaults(
        declared: impl IntoIterator<Item = (Cow<'static, str>, Cow<'static, str>)>,
    ) -> Self {
        let mut catalog = Self::with_defaults();
        for (key, template) in declared {
            catalog.templates.insert(key, template);
        }
        catalog
    }

    /// Inserts or replaces one template.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) {
        self.templates.insert(key.into(), template.into());
    }

    /// The raw template for `key`, if one is declared.
    #[must_use]
    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(Cow::as_ref)
    }

    /// Resolves the message for `key` against `ctx`, falling back to a
    /// generic message naming the key when no template is declared.
    #[must_use]
    pub fn resolve(&self, key: &str, ctx: &MessageContext<'_>) -> String {
        match self.template(key) {
            Some(template) => render(template, ctx),
            None => render(&format!("failed \"{key}\""), ctx),
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Everything a template can refer to.
#[derive(Debug, Clone, Copy)]
pub struct MessageContext<'a> {
    /// Effective label, already defaulted by the caller.
    pub label: &'a str,
    /// The candidate value, if present.
    pub value: Option<&'a Value>,
    /// Arguments of the failing chained test.
    pub args: &'a [Value],
}

/// Renders `template`, applying the quoted-label prefix when the template
/// does not mention `{{key}}` itself.
fn render(template: &str, ctx: &MessageContext<'_>) -> String {
    let body = substitute(template, ctx);
    if template.contains("{{key}}") {
        body
    } else {
        format!("\"{}\" {}", ctx.label, body)
    }
}

/// Replaces every `{{token}}` occurrence; unknown tokens and out-of-range
/// argument indices render empty.
fn substitute(template: &str, ctx: &MessageContext<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // Unterminated placeholder: emit literally.
            out.push_str(&rest[start..]);
            return out;
        };
        out.push_str(&expand(&after[..end], ctx));
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn expand(token: &str, ctx: &MessageContext<'_>) -> String {
    match token {
        "key" => ctx.label.to_owned(),
        "value" => ctx.value.map(display_value).unwrap_or_default(),
        _ => token
            .strip_prefix("args.")
            .and_then(|index| index.parse::<usize>().ok())
            .and_then(|index| ctx.args.get(index))
            .map(display_value)
            .unwrap_or_default(),
    }
}

/// Stringifies a candidate value for interpolation: strings render bare,
/// everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
