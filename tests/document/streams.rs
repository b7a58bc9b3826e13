//! Integration tests for stream validation
//!
//! Tests all-or-nothing stream rejection, diagnostics, and
//! cross-document references through the registry.

use nbtgen_document::load;
use nbtgen_foundation::{ElementKind, Type, Value, ValueRegistry};

fn load_with(text: &str, registry: &ValueRegistry) -> nbtgen_document::LoadedDocument {
    let tree: serde_yaml::Value = serde_yaml::from_str(text).unwrap();
    load(&tree, registry).unwrap()
}

// =============================================================================
// All-Or-Nothing Rejection
// =============================================================================

#[test]
fn stream_with_unknown_reference_is_dropped_entirely() {
    let registry = ValueRegistry::new();
    let loaded = load_with(
        "ctype: int32\nvalues:\n  a: 1\n  b: 2\nstreams:\n  broken:\n    values: [a, b, ghost]\n",
        &registry,
    );

    assert!(loaded.document.streams.is_empty());
    assert_eq!(loaded.diagnostics.len(), 1);
    assert_eq!(loaded.diagnostics[0].stream, "broken");
    assert_eq!(loaded.diagnostics[0].missing, "ghost");
}

#[test]
fn dropping_one_stream_keeps_the_others() {
    let registry = ValueRegistry::new();
    let loaded = load_with(
        "ctype: int32\nvalues:\n  a: 1\nstreams:\n  good:\n    values: [a]\n  bad:\n    values: [phantom]\n  also_good:\n    values: [a, a]\n",
        &registry,
    );

    let names: Vec<&str> = loaded.document.streams.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["good", "also_good"]);
    assert_eq!(loaded.diagnostics.len(), 1);
    assert_eq!(loaded.diagnostics[0].missing, "phantom");
}

#[test]
fn diagnostic_reports_first_missing_reference_only() {
    let registry = ValueRegistry::new();
    let loaded = load_with(
        "ctype: int8\nstreams:\n  empty_handed:\n    values: [ghost1, ghost2]\n",
        &registry,
    );

    assert_eq!(loaded.diagnostics.len(), 1);
    assert_eq!(loaded.diagnostics[0].missing, "ghost1");
}

#[test]
fn diagnostic_display_names_stream_and_value() {
    let registry = ValueRegistry::new();
    let loaded = load_with(
        "ctype: int8\nstreams:\n  s:\n    values: [nope]\n",
        &registry,
    );
    let rendered = format!("{}", loaded.diagnostics[0]);
    assert!(rendered.contains("`s`"));
    assert!(rendered.contains("`nope`"));
}

// =============================================================================
// Stream Contents
// =============================================================================

#[test]
fn valid_stream_keeps_declared_order() {
    let registry = ValueRegistry::new();
    let loaded = load_with(
        "ctype: int32\nvalues:\n  a: 1\n  b: 2\n  c: 3\nstreams:\n  payload:\n    values: [c, a, b]\n",
        &registry,
    );

    let stream = &loaded.document.streams["payload"];
    assert_eq!(stream.values, vec!["c", "a", "b"]);
    assert!(!stream.incomplete);
}

#[test]
fn incomplete_defaults_to_false_and_reads_both_shapes() {
    let registry = ValueRegistry::new();
    let loaded = load_with(
        "ctype: int8\nvalues:\n  a: 1\nstreams:\n  plain:\n    values: [a]\n  flagged:\n    incomplete: true\n    values: [a]\n  numeric:\n    incomplete: 1\n    values: [a]\n  zero:\n    incomplete: 0\n    values: [a]\n",
        &registry,
    );

    assert!(!loaded.document.streams["plain"].incomplete);
    assert!(loaded.document.streams["flagged"].incomplete);
    assert!(loaded.document.streams["numeric"].incomplete);
    assert!(!loaded.document.streams["zero"].incomplete);
}

// =============================================================================
// Cross-Document References
// =============================================================================

#[test]
fn stream_resolves_against_registry() {
    let mut registry = ValueRegistry::new();
    registry.register(
        "origin",
        Type::Scalar(ElementKind::Int32),
        Value::Int(0),
        vec![0, 0, 0, 0],
    );

    let loaded = load_with(
        "ctype: int32\nstreams:\n  spawn:\n    values: [origin]\n",
        &registry,
    );

    assert!(loaded.diagnostics.is_empty());
    assert_eq!(
        loaded.document.streams["spawn"].values,
        vec!["origin".to_string()]
    );
}

#[test]
fn local_values_and_registry_entries_mix_in_one_stream() {
    let mut registry = ValueRegistry::new();
    registry.register(
        "shared",
        Type::Scalar(ElementKind::Int16),
        Value::Int(5),
        vec![0, 5],
    );

    let loaded = load_with(
        "ctype: int16\nvalues:\n  local: 7\nstreams:\n  both:\n    values: [shared, local]\n",
        &registry,
    );

    assert!(loaded.diagnostics.is_empty());
    assert!(loaded.document.streams.contains_key("both"));
}

#[test]
fn loading_never_registers_anything() {
    let registry = ValueRegistry::new();
    let loaded = load_with("ctype: int32\nvalues:\n  a: 1\n", &registry);
    assert_eq!(loaded.document.values["a"], Value::Int(1));
    assert!(registry.is_empty());
}
