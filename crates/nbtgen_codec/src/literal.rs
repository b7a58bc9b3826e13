//! C++ literal mapping for generated headers.

use nbtgen_foundation::{ElementKind, Type, Value};

/// Zero-value literal used for declarations lacking an initializer.
#[must_use]
pub const fn default_literal(ty: &Type) -> &'static str {
    match ty {
        Type::List(_) => "nullptr",
        Type::Scalar(kind) => match kind {
            ElementKind::Int8
            | ElementKind::Int16
            | ElementKind::Int32
            | ElementKind::Int64 => "0",
            ElementKind::Float | ElementKind::Double => "0.0",
            ElementKind::String => "\"\"",
        },
    }
}

/// C++ initializer text for a concrete value.
///
/// Strings are quoted (with `"` and `\` escaped), list elements are
/// comma-joined recursively, floats always carry a decimal point.
#[must_use]
pub fn cpp_literal(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Float(n) => format!("{n:?}"),
        Value::String(s) => format!("\"{}\"", escape(s)),
        Value::List(items) => items
            .iter()
            .map(cpp_literal)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
