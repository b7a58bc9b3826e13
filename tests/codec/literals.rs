//! Integration tests for C++ literal mapping
//!
//! Tests default literals and initializer rendering.

use nbtgen_codec::{cpp_literal, default_literal};
use nbtgen_foundation::{ElementKind, Type, Value};

#[test]
fn integral_defaults_are_zero() {
    for kind in [
        ElementKind::Int8,
        ElementKind::Int16,
        ElementKind::Int32,
        ElementKind::Int64,
    ] {
        assert_eq!(default_literal(&Type::Scalar(kind)), "0");
    }
}

#[test]
fn float_defaults_are_zero_point_zero() {
    assert_eq!(default_literal(&Type::Scalar(ElementKind::Float)), "0.0");
    assert_eq!(default_literal(&Type::Scalar(ElementKind::Double)), "0.0");
}

#[test]
fn string_default_is_empty_string_literal() {
    let literal = default_literal(&Type::Scalar(ElementKind::String));
    assert_eq!(literal, "\"\"");
    assert_eq!(literal.len(), 2);
}

#[test]
fn list_default_is_null_reference() {
    assert_eq!(
        default_literal(&Type::list(Type::Scalar(ElementKind::Int32))),
        "nullptr"
    );
    assert_eq!(
        default_literal(&Type::list(Type::list(Type::Scalar(ElementKind::String)))),
        "nullptr"
    );
}

#[test]
fn literals_render_values() {
    assert_eq!(cpp_literal(&Value::Int(-12)), "-12");
    assert_eq!(cpp_literal(&Value::Float(4.0)), "4.0");
    assert_eq!(cpp_literal(&Value::from("cave")), "\"cave\"");
    assert_eq!(
        cpp_literal(&Value::List(vec![Value::Int(9), Value::Int(8)])),
        "9, 8"
    );
}
