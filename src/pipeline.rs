//! Check execution.
//!
//! One entry point, [`execute`], runs a candidate value through a
//! configured instance in strict order:
//!
//! 1. absent + required → `required` failure, before anything else runs
//! 2. absent + not required → immediate pass, value echoed as `None`
//! 3. requirements, in declaration order
//! 4. queued tests, in chaining order
//!
//! The first failing check wins; nothing downstream of it executes, so
//! requirement failures always precede test failures regardless of how the
//! chain was written. Testers only ever see values that passed every
//! requirement.

use serde_json::Value;

use crate::catalog::MessageContext;
use crate::foundation::{FailureContext, Verdict, Violation};
use crate::instance::Instance;

pub(crate) fn execute(instance: &Instance, value: Option<&Value>) -> Verdict {
    let Some(value) = value else {
        if instance.required {
            return fail(instance, None, "required", &[]);
        }
        return Verdict::pass(None);
    };

    for (name, predicate) in instance.definition.requirements() {
        if !predicate(value) {
            return fail(instance, Some(value), name, &[]);
        }
    }

    for queued in &instance.queued {
        if let Some(failure) = (queued.tester)(value, &queued.args) {
            return fail(instance, Some(value), &failure, &queued.args);
        }
    }

    Verdict::pass(Some(value.clone()))
}

fn fail(instance: &Instance, value: Option<&Value>, failure: &str, args: &[Value]) -> Verdict {
    let label = instance.effective_label();
    let message = instance.definition.catalog().resolve(
        failure,
        &MessageContext { label, value, args },
    );
    let violation = Violation {
        key: format!("{}.{failure}", instance.definition.name()),
        message,
        context: FailureContext {
            value: value.cloned(),
            args: args.iter().cloned().collect(),
            label: label.to_owned(),
        },
    };
    Verdict::fail(value.cloned(), violation)
}

// ============================================================================
// TESTS
// ============================================================================
