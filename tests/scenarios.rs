//! Scenario suite for a string validator with length requirements and the
//! three classic chained tests: `range`, `isUpperCase`, `disallow`.

use std::sync::{Arc, LazyLock};

use fluent_validator::args;
use fluent_validator::prelude::*;
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;
use serde_json::{Value, json};

const MIN_LEN: usize = 1;
const MAX_LEN: usize = 100;

static FIDDLE: LazyLock<Arc<TypeDefinition>> = LazyLock::new(|| {
    let upper = Regex::new("^[A-Z]+$").expect("valid pattern");
    let spec = TypeSpec::new("fiddle")
        .requirement("base", Value::is_string)
        .requirement("len", |v| {
            v.as_str()
                .is_some_and(|s| (MIN_LEN..=MAX_LEN).contains(&s.chars().count()))
        })
        .test("isUpperCase", Signature::none(), move |v, _| {
            let ok = v.as_str().is_some_and(|s| upper.is_match(s));
            (!ok).then_some("uppercase".into())
        })
        .test(
            "range",
            Signature::exact([ParamKind::Number, ParamKind::Number]),
            |v, test_args| {
                let len = v.as_str().map_or(0, |s| s.chars().count() as u64);
                let lo = test_args[0].as_u64().unwrap_or(0);
                let hi = test_args[1].as_u64().unwrap_or(u64::MAX);
                (len < lo || len > hi).then_some("range".into())
            },
        )
        .test("disallow", Signature::exact([ParamKind::Text]), |v, test_args| {
            (v == &test_args[0]).then_some("disallowed".into())
        })
        .message("base", "must be a string")
        .message(
            "len",
            format!("must be >= {MIN_LEN} and <= {MAX_LEN} chars in length"),
        )
        .message(
            "range",
            "{{key}} \"{{value}}\" must be between {{args.0}} and {{args.1}} chars in length",
        )
        .message("uppercase", "must be uppercase")
        .message("disallowed", "\"{{value}}\" is not an allowed value for \"{{key}}\"");
    Arc::new(TypeDefinition::compile(spec).expect("well-formed spec"))
});

fn fiddle() -> Instance {
    FIDDLE.clone().instantiate()
}

#[test]
fn required_without_a_value() {
    let verdict = fiddle().required().validate(None);
    let violation = verdict.error.expect("must fail");
    assert_eq!(violation.key, "fiddle.required");
    assert_eq!(violation.message, "\"value\" is required");
    assert_eq!(verdict.value, None);
}

#[rstest]
#[case::number(json!(1))]
#[case::boolean(json!(true))]
#[case::null(json!(null))]
#[case::array(json!(["a"]))]
fn non_strings_fail_the_base_requirement(#[case] value: Value) {
    let verdict = fiddle().validate(Some(&value));
    let violation = verdict.error.expect("must fail");
    assert_eq!(violation.key, "fiddle.base");
    assert_eq!(violation.message, "\"value\" must be a string");
}

#[test]
fn empty_string_fails_the_length_requirement() {
    let verdict = fiddle().validate(Some(&json!("")));
    let violation = verdict.error.expect("must fail");
    assert_eq!(violation.key, "fiddle.len");
    assert_eq!(
        violation.message,
        "\"value\" must be >= 1 and <= 100 chars in length"
    );
}

#[test]
fn range_reports_both_bounds() {
    let verdict = fiddle()
        .test("range", args![10, 20])
        .unwrap()
        .validate(Some(&json!("1")));
    let violation = verdict.error.expect("must fail");
    assert_eq!(violation.key, "fiddle.range");
    assert_eq!(
        violation.message,
        "value \"1\" must be between 10 and 20 chars in length"
    );
    assert_eq!(violation.context.args.as_slice(), &[json!(10), json!(20)]);
}

#[test]
fn range_uses_the_chained_label() {
    let verdict = fiddle()
        .label("range value")
        .test("range", args![10, 20])
        .unwrap()
        .validate(Some(&json!("1")));
    assert_eq!(
        verdict.message(),
        Some("range value \"1\" must be between 10 and 20 chars in length")
    );
}

#[test]
fn plain_string_passes_the_base_validator() {
    let verdict = fiddle().validate(Some(&json!("bar")));
    assert!(verdict.is_ok());
    assert_eq!(verdict.value, Some(json!("bar")));
}

#[test]
fn disallow_names_value_and_label() {
    let verdict = fiddle()
        .test("disallow", args!["bar"])
        .unwrap()
        .label("name")
        .validate(Some(&json!("bar")));
    let violation = verdict.error.expect("must fail");
    assert_eq!(violation.key, "fiddle.disallowed");
    assert_eq!(violation.message, "\"bar\" is not an allowed value for \"name\"");
}

#[test]
fn uppercase_check_fails_lowercase() {
    let verdict = fiddle()
        .required()
        .test("isUpperCase", args![])
        .unwrap()
        .validate(Some(&json!("foo")));
    assert_eq!(verdict.message(), Some("\"value\" must be uppercase"));
}

#[test]
fn full_chain_passes_a_conforming_value() {
    let verdict = fiddle()
        .test("isUpperCase", args![])
        .unwrap()
        .test("disallow", args!["BAR"])
        .unwrap()
        .required()
        .validate(Some(&json!("FOO")));
    assert!(verdict.is_ok());
    assert_eq!(verdict.value, Some(json!("FOO")));
    assert_eq!(verdict.error, None);
}

#[test]
fn requirement_failures_win_over_chained_tests() {
    // The chain queues a test that would also fail, but the value is not
    // even a string, so the base requirement reports first.
    let verdict = fiddle()
        .test("isUpperCase", args![])
        .unwrap()
        .validate(Some(&json!(7)));
    assert_eq!(verdict.error.expect("must fail").key, "fiddle.base");
}

#[test]
fn range_rejects_wrong_argument_count() {
    let err = fiddle().test("range", args![10]).unwrap_err();
    assert_eq!(
        err,
        ChainError::Arity {
            test: "range".into(),
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn disallow_rejects_non_string_argument() {
    let err = fiddle().test("disallow", args![10]).unwrap_err();
    assert_eq!(
        err,
        ChainError::Param {
            test: "disallow".into(),
            index: 0,
            expected: "a string"
        }
    );
}

#[test]
fn unknown_test_name_is_a_chain_error() {
    let err = fiddle().test("isLowerCase", args![]).unwrap_err();
    assert_eq!(
        err,
        ChainError::UnknownTest {
            type_name: "fiddle".into(),
            test: "isLowerCase".into()
        }
    );
}
