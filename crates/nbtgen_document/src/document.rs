//! Loaded dataset documents.

use indexmap::IndexMap;

use nbtgen_foundation::{Type, Value};

/// A named, ordered collection of value references.
///
/// Streams group already-declared values so the emitter can render them
/// as one contiguous byte image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamDefinition {
    /// Consumers must not assume every declared value is present at
    /// stream-use time.
    pub incomplete: bool,
    /// Referenced value names, in declared order. Every name resolved to
    /// a local value or a registry entry at load time.
    pub values: Vec<String>,
}

/// The fully loaded, validated in-memory form of one source unit.
///
/// Read-only once loaded. Mapping order follows declaration order, so
/// emission stays deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Element type governing the document's plain values.
    pub ctype: Type,
    /// Declared values by name.
    pub values: IndexMap<String, Value>,
    /// Validated streams by name.
    pub streams: IndexMap<String, StreamDefinition>,
    /// Passthrough include identifiers, not interpreted here.
    pub includes: Vec<String>,
}

impl Document {
    /// Creates an empty document of the given element type.
    #[must_use]
    pub fn new(ctype: Type) -> Self {
        Self {
            ctype,
            values: IndexMap::new(),
            streams: IndexMap::new(),
            includes: Vec::new(),
        }
    }
}
