//! End-to-end walkthrough: register a market-code validator type, install
//! it into a host namespace, and validate through the installed
//! constructor.

use std::collections::HashMap;

use fluent_validator::args;
use fluent_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

/// US television market codes are three-digit strings in 500..=882.
fn is_market_code(value: &Value) -> bool {
    value.as_str().is_some_and(|s| {
        s.len() == 3
            && s.chars().all(|c| c.is_ascii_digit())
            && s.parse::<u32>().is_ok_and(|n| (500..=882).contains(&n))
    })
}

fn market_spec() -> TypeSpec {
    TypeSpec::new("market")
        .requirement("base", Value::is_string)
        .requirement("known", is_market_code)
        .test("exclude", Signature::exact([ParamKind::Text]), |value, test_args| {
            (value == &test_args[0]).then_some("excluded".into())
        })
        .message("base", "must be a string")
        .message("known", "is not a known market code")
        .message("excluded", "\"{{value}}\" is not usable for {{key}}")
}

fn installed_namespace() -> HashMap<String, Constructor> {
    let registry = Registry::new();
    registry.add(market_spec()).expect("well-formed spec");
    let mut namespace = HashMap::new();
    register_type(&mut namespace, &registry, "market").expect("registered");
    namespace
}

#[test]
fn registration_installs_a_constructor() {
    let namespace = installed_namespace();
    assert!(namespace.contains_key("market"));
    assert_eq!(namespace["market"].type_name(), "market");
}

#[test]
fn missing_value_is_required() {
    let namespace = installed_namespace();
    let verdict = namespace["market"]
        .instantiate()
        .required()
        .label("market")
        .validate(None);
    assert_eq!(verdict.message(), Some("\"market\" is required"));
}

#[test]
fn non_string_fails_base() {
    let namespace = installed_namespace();
    let verdict = namespace["market"]
        .instantiate()
        .required()
        .label("market")
        .validate(Some(&json!(1)));
    assert_eq!(verdict.message(), Some("\"market\" must be a string"));
}

#[test]
fn unknown_code_fails_known() {
    let namespace = installed_namespace();
    let verdict = namespace["market"]
        .instantiate()
        .required()
        .label("market")
        .validate(Some(&json!("100")));
    assert_eq!(verdict.message(), Some("\"market\" is not a known market code"));
}

#[test]
fn good_code_passes() {
    let namespace = installed_namespace();
    let verdict = namespace["market"]
        .instantiate()
        .required()
        .label("market")
        .validate(Some(&json!("501")));
    assert!(verdict.is_ok());
    assert_eq!(verdict.value, Some(json!("501")));
}

#[test]
fn excluded_code_reports_value_and_label() {
    let namespace = installed_namespace();
    let verdict = namespace["market"]
        .instantiate()
        .required()
        .test("exclude", args!["502"])
        .unwrap()
        .label("market")
        .validate(Some(&json!("502")));
    let violation = verdict.error.expect("must fail");
    assert_eq!(violation.key, "market.excluded");
    assert_eq!(violation.message, "\"502\" is not usable for market");
}

#[test]
fn uninstalled_instances_fall_back_to_value_label() {
    let registry = Registry::new();
    registry.add(market_spec()).expect("well-formed spec");
    let verdict = registry
        .create("market")
        .expect("registered")
        .validate(Some(&json!(1)));
    assert_eq!(verdict.message(), Some("\"value\" must be a string"));
}

#[test]
fn installing_an_unregistered_name_fails() {
    let registry = Registry::new();
    let mut namespace: HashMap<String, Constructor> = HashMap::new();
    let err = register_type(&mut namespace, &registry, "market").unwrap_err();
    assert_eq!(err.name, "market");
}

#[test]
fn global_registry_convenience_round_trip() {
    // Keep the name unique to this test: the default registry is shared
    // process-wide.
    add_validator(
        TypeSpec::new("market_global")
            .requirement("base", Value::is_string)
            .message("base", "must be a string"),
    )
    .expect("first registration");

    assert!(global().contains("market_global"));
    let verdict = create("market_global")
        .expect("registered")
        .validate(Some(&json!("ok")));
    assert!(verdict.is_ok());

    // A second registration under the same name is rejected.
    let again = add_validator(TypeSpec::new("market_global").requirement("base", Value::is_string));
    assert_eq!(again, Err(SpecError::DuplicateType("market_global".into())));
}

#[test]
fn serialized_verdict_reports_key_and_context() {
    let namespace = installed_namespace();
    let verdict = namespace["market"]
        .instantiate()
        .label("market")
        .validate(Some(&json!("100")));
    let as_json = serde_json::to_value(&verdict).expect("serializable");
    assert_eq!(as_json["error"]["key"], json!("market.known"));
    assert_eq!(as_json["error"]["context"]["label"], json!("market"));
    assert_eq!(as_json["value"], json!("100"));
}
