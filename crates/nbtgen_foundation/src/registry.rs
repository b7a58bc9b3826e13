//! Cross-document value registry.
//!
//! A value declared while processing one document can be referenced by
//! streams of documents processed later. The registry is that bridge: a
//! run-lifetime mapping owned by the driver, populated after each document
//! encodes successfully, and handed read-only to stream validation. It is
//! not thread-safe; documents are processed sequentially.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::types::Type;
use crate::value::Value;

/// A registered value with its resolved type and encoded image.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisteredValue {
    /// Declared name.
    pub name: String,
    /// Resolved element type.
    pub ctype: Type,
    /// In-memory datum.
    pub value: Value,
    /// Big-endian encoded image of `value`.
    pub bytes: Vec<u8>,
}

/// Run-lifetime mapping from value name to its registered entry.
///
/// Iteration follows registration order.
#[derive(Clone, Debug, Default)]
pub struct ValueRegistry {
    entries: IndexMap<String, RegisteredValue>,
}

impl ValueRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `name`.
    ///
    /// Registration is unconditional: a later registration under the same
    /// name replaces the earlier one without error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        ctype: Type,
        value: Value,
        bytes: Vec<u8>,
    ) {
        let name = name.into();
        let entry = RegisteredValue {
            name: name.clone(),
            ctype,
            value,
            bytes,
        };
        self.entries.insert(name, entry);
    }

    /// Looks up the entry for `name`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotRegistered`] when absent. Callers for whom
    /// absence is a legitimate outcome should check
    /// [`is_registered`](Self::is_registered) first.
    pub fn lookup(&self, name: &str) -> Result<&RegisteredValue> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::not_registered(name))
    }

    /// Returns true when `name` has a registered entry.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredValue> {
        self.entries.values()
    }
}
