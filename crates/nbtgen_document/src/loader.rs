//! Dataset document loading.
//!
//! Converts the opaque parsed YAML tree into a [`Document`]: resolves the
//! declared element type, normalizes raw literals into typed values,
//! validates every stream reference against the document's own values and
//! the cross-document registry, and drops (with a diagnostic) any stream
//! referencing an unknown value.
//!
//! Loading is all-or-nothing per document for type and value errors, but
//! per-stream for reference errors: a stream with any unresolved
//! reference is discarded in its entirety while the rest of the document
//! loads normally.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use nbtgen_foundation::{ElementKind, Error, Result, Type, Value, ValueRegistry};

use crate::document::{Document, StreamDefinition};

/// Warning record for a dropped stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The stream that was discarded.
    pub stream: String,
    /// The referenced value name that failed to resolve.
    pub missing: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stream `{}` references unknown value `{}`",
            self.stream, self.missing
        )
    }
}

/// A loaded document together with the warnings produced while loading.
#[derive(Clone, Debug)]
pub struct LoadedDocument {
    /// The validated document.
    pub document: Document,
    /// One record per dropped stream, in declaration order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Raw shape of a dataset description, as parsed from YAML.
#[derive(Debug, Deserialize)]
struct RawDocument {
    ctype: String,
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    values: Option<IndexMap<String, serde_yaml::Value>>,
    #[serde(default)]
    streams: Option<IndexMap<String, RawStream>>,
}

/// Raw shape of one stream entry.
#[derive(Debug, Deserialize)]
struct RawStream {
    #[serde(default)]
    incomplete: Option<IncompleteFlag>,
    values: Vec<String>,
}

/// The `incomplete` flag appears in the wild both as a bool and as an
/// int; either shape parses and collapses to a bool.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IncompleteFlag {
    Bool(bool),
    Int(i64),
}

impl IncompleteFlag {
    const fn as_bool(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Int(n) => *n != 0,
        }
    }
}

/// Loads one dataset description from its parsed YAML tree.
///
/// The registry is consulted read-only while validating stream
/// references; the loader never registers anything itself, so a failed
/// load cannot corrupt cross-document state.
///
/// # Errors
///
/// Fails with [`Error::MalformedDocument`] when the tree is not a
/// mapping of the expected shape, [`Error::MalformedType`] when `ctype`
/// does not parse, and [`Error::TypeMismatch`] when a declared literal
/// cannot be coerced to the resolved type. Unresolved stream references
/// are not errors; they surface as [`Diagnostic`] records.
pub fn load(tree: &serde_yaml::Value, registry: &ValueRegistry) -> Result<LoadedDocument> {
    let raw: RawDocument = serde_yaml::from_value(tree.clone())
        .map_err(|err| Error::malformed_document(err.to_string()))?;

    let ctype = Type::from_descriptor(&raw.ctype)?;
    let mut document = Document::new(ctype);
    document.includes = raw.include;

    for (name, literal) in raw.values.unwrap_or_default() {
        let value = normalize(&literal, &document.ctype)?;
        document.values.insert(name, value);
    }

    let mut diagnostics = Vec::new();
    for (name, stream) in raw.streams.unwrap_or_default() {
        let incomplete = stream
            .incomplete
            .as_ref()
            .is_some_and(IncompleteFlag::as_bool);
        match first_unresolved(&stream.values, &document, registry) {
            None => {
                let definition = StreamDefinition {
                    incomplete,
                    values: stream.values,
                };
                document.streams.insert(name, definition);
            }
            Some(missing) => diagnostics.push(Diagnostic {
                stream: name,
                missing,
            }),
        }
    }

    Ok(LoadedDocument {
        document,
        diagnostics,
    })
}

/// First reference that resolves neither locally nor in the registry.
fn first_unresolved(
    refs: &[String],
    document: &Document,
    registry: &ValueRegistry,
) -> Option<String> {
    for name in refs {
        if !document.values.contains_key(name) && !registry.is_registered(name) {
            return Some(name.clone());
        }
    }
    None
}

/// Coerces a raw YAML literal into the in-memory form of `ty`,
/// recursively for list types.
fn normalize(raw: &serde_yaml::Value, ty: &Type) -> Result<Value> {
    match ty {
        Type::List(inner) => {
            let items = raw
                .as_sequence()
                .ok_or_else(|| Error::type_mismatch(ty, yaml_kind(raw)))?;
            let elements: Result<Vec<Value>> =
                items.iter().map(|item| normalize(item, inner)).collect();
            Ok(Value::List(elements?))
        }
        Type::Scalar(kind) => normalize_scalar(raw, *kind, ty),
    }
}

fn normalize_scalar(raw: &serde_yaml::Value, kind: ElementKind, ty: &Type) -> Result<Value> {
    let mismatch = |detail: String| Error::type_mismatch(ty, detail);
    match kind {
        ElementKind::Int8 | ElementKind::Int16 | ElementKind::Int32 | ElementKind::Int64 => {
            if let Some(n) = raw.as_i64() {
                return Ok(Value::Int(n));
            }
            if let Some(s) = raw.as_str() {
                return s
                    .trim()
                    .parse::<i64>()
                    .map(Value::Int)
                    .map_err(|_| mismatch(format!("string `{s}`")));
            }
            Err(mismatch(yaml_kind(raw).to_string()))
        }
        ElementKind::Float | ElementKind::Double => {
            if let Some(n) = raw.as_f64() {
                return Ok(Value::Float(n));
            }
            if let Some(s) = raw.as_str() {
                return s
                    .trim()
                    .parse::<f64>()
                    .map(Value::Float)
                    .map_err(|_| mismatch(format!("string `{s}`")));
            }
            Err(mismatch(yaml_kind(raw).to_string()))
        }
        ElementKind::String => match raw {
            serde_yaml::Value::String(s) => Ok(Value::from(s.as_str())),
            serde_yaml::Value::Bool(b) => Ok(Value::from(b.to_string())),
            serde_yaml::Value::Number(n) => Ok(Value::from(n.to_string())),
            other => Err(mismatch(yaml_kind(other).to_string())),
        },
    }
}

/// Short noun for a YAML node's shape, used in mismatch messages.
fn yaml_kind(raw: &serde_yaml::Value) -> &'static str {
    match raw {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}
