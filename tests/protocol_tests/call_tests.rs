//! Call Builder Tests
//!
//! Byte-exact request documents and method name validation.

use std::collections::BTreeMap;

use symphony::protocol::{build, encode_value, validate_method_name, Call};
use symphony::{SymphonyError, Value};

// =============================================================================
// Helper Functions
// =============================================================================

const PREFIX: &str =
    r#"<?xml version="1.0" ?><methodCall><methodName>sample.Method</methodName><params>"#;
const SUFFIX: &str = "</params></methodCall>";

/// Expected document for `sample.Method` with one param holding `inner`
fn single_param(inner: &str) -> String {
    format!("{}<param><value>{}</value></param>{}", PREFIX, inner, SUFFIX)
}

fn build_one(value: Value) -> String {
    build("sample.Method", &[value]).unwrap().into_string()
}

fn members(pairs: Vec<(&str, Value)>) -> Value {
    Value::Struct(
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<BTreeMap<_, _>>(),
    )
}

// =============================================================================
// Method Name Validation Tests
// =============================================================================

#[test]
fn test_valid_method_name() {
    assert!(validate_method_name("sample.ifso:/39_A"));
    assert!(validate_method_name("listener.authenticateListener"));
    assert!(validate_method_name("x"));
}

#[test]
fn test_invalid_method_name() {
    assert!(!validate_method_name("!@#$%;"));
    assert!(!validate_method_name(""));
    assert!(!validate_method_name("sample-method"));
    assert!(!validate_method_name("sample method"));
    assert!(!validate_method_name("sample#1"));
    assert!(!validate_method_name("méthode"));
}

#[test]
fn test_build_rejects_invalid_method_name() {
    let err = build("bad name", &[Value::Int(1)]).unwrap_err();
    match err {
        SymphonyError::InvalidMethodName(name) => assert_eq!(name, "bad name"),
        other => panic!("Expected InvalidMethodName, got {:?}", other),
    }
}

// =============================================================================
// Scalar Encoding Tests
// =============================================================================

#[test]
fn test_build_int() {
    assert_eq!(
        build_one(Value::Int(1)),
        r#"<?xml version="1.0" ?><methodCall><methodName>sample.Method</methodName><params><param><value><int>1</int></value></param></params></methodCall>"#
    );
}

#[test]
fn test_build_string() {
    assert_eq!(build_one(Value::from("str")), single_param("<string>str</string>"));
}

#[test]
fn test_build_double() {
    assert_eq!(build_one(Value::Double(1.0)), single_param("<double>1.0</double>"));
}

#[test]
fn test_build_booleans() {
    assert_eq!(build_one(Value::Bool(true)), single_param("<boolean>1</boolean>"));
    assert_eq!(build_one(Value::Bool(false)), single_param("<boolean>0</boolean>"));
}

#[test]
fn test_build_does_not_escape_strings() {
    assert_eq!(
        build_one(Value::from("a<b & c")),
        single_param("<string>a<b & c</string>")
    );
}

// =============================================================================
// Container Encoding Tests
// =============================================================================

#[test]
fn test_build_struct() {
    let value = members(vec![("string", Value::Int(1))]);
    assert_eq!(
        build_one(value),
        single_param("<struct><member><name>string</name><value><int>1</int></value></member></struct>")
    );
}

#[test]
fn test_build_array() {
    let value = Value::Array(vec![
        Value::Int(1),
        Value::from("str"),
        members(vec![("1", Value::Double(1.0))]),
    ]);
    assert_eq!(
        build_one(value),
        single_param(
            "<array><data><value><int>1</int></value><value><string>str</string></value>\
             <value><struct><member><name>1</name><value><double>1.0</double></value></member></struct></value>\
             </data></array>"
        )
    );
}

#[test]
fn test_build_all_scalars() {
    let value = Value::Array(vec![
        Value::Int(1),
        Value::Double(1.0),
        Value::Bool(true),
        Value::Bool(false),
        Value::from("the quick simple string"),
        members(vec![("soda", Value::from("pop"))]),
    ]);
    assert_eq!(
        build_one(value),
        single_param(
            "<array><data><value><int>1</int></value><value><double>1.0</double></value>\
             <value><boolean>1</boolean></value><value><boolean>0</boolean></value>\
             <value><string>the quick simple string</string></value>\
             <value><struct><member><name>soda</name><value><string>pop</string></value></member></struct></value>\
             </data></array>"
        )
    );
}

#[test]
fn test_build_empty_params() {
    let doc = build("sample.Method", &[]).unwrap();
    assert_eq!(doc.as_str(), format!("{}{}", PREFIX, SUFFIX));
}

#[test]
fn test_build_multiple_params_in_order() {
    let doc = Call::new("sample.Method", vec![Value::Int(2), Value::from("b")])
        .into_document()
        .unwrap();
    assert_eq!(
        doc.as_str(),
        format!(
            "{}<param><value><int>2</int></value></param><param><value><string>b</string></value></param>{}",
            PREFIX, SUFFIX
        )
    );
}

#[test]
fn test_build_is_deterministic() {
    let params = vec![members(vec![("b", Value::Int(2)), ("a", Value::Int(1))])];
    assert_eq!(
        build("sample.Method", &params).unwrap(),
        build("sample.Method", &params).unwrap()
    );
}

// =============================================================================
// Unsupported Value Tests
// =============================================================================

#[test]
fn test_encode_nil_is_unsupported() {
    let err = encode_value(&Value::Nil).unwrap_err();
    assert!(matches!(err, SymphonyError::UnsupportedValueType(_)));
}

#[test]
fn test_encode_invalid_bool_is_unsupported() {
    let err = build("sample.Method", &[Value::InvalidBool]).unwrap_err();
    assert!(matches!(err, SymphonyError::UnsupportedValueType(_)));
}

#[test]
fn test_encode_nested_nil_is_unsupported() {
    let value = members(vec![("missing", Value::Nil)]);
    assert!(matches!(
        encode_value(&value),
        Err(SymphonyError::UnsupportedValueType(_))
    ));
}
