//! Error types for the nbtgen system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every variant carries the names and kinds involved, so callers can
//! produce an actionable diagnostic without source-line bookkeeping.

use thiserror::Error;

use crate::types::{ElementKind, Type};

/// The main error type for nbtgen operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A type descriptor does not parse. Fatal to the owning document.
    #[error("malformed type descriptor `{descriptor}`: {reason}")]
    MalformedType {
        /// The descriptor text as written in the source.
        descriptor: String,
        /// What the parser objected to.
        reason: String,
    },

    /// The top level of a dataset description has the wrong shape
    /// (not a mapping, missing `ctype`, a stream without `values`, ...).
    /// Fatal to the owning document.
    #[error("malformed dataset description: {reason}")]
    MalformedDocument {
        /// What was missing or misshapen.
        reason: String,
    },

    /// A declared literal cannot be coerced to the resolved type, or a
    /// value handed to the codec does not match the type it is encoded as.
    #[error("type mismatch: expected `{expected}`, got {actual}")]
    TypeMismatch {
        /// The type the document or codec expected.
        expected: Type,
        /// Description of what was actually found.
        actual: String,
    },

    /// An operation was asked to act on a kind it does not support.
    #[error("type `{kind}` is unsupported for operation `{operation}`")]
    UnsupportedType {
        /// The offending element kind.
        kind: ElementKind,
        /// The operation that rejected it.
        operation: &'static str,
    },

    /// An integral value does not fit its kind's signed width.
    /// Fatal to that encode call.
    #[error("value {value} is out of range for `{kind}`")]
    OutOfRange {
        /// The value that failed to fit.
        value: i64,
        /// The kind whose signed range it escaped.
        kind: ElementKind,
    },

    /// A registry lookup for a name that was never registered.
    /// Callers for whom absence is a legitimate outcome should check
    /// `is_registered` first.
    #[error("value `{name}` is not registered")]
    NotRegistered {
        /// The name that was looked up.
        name: String,
    },
}

impl Error {
    /// Creates a malformed-type error.
    #[must_use]
    pub fn malformed_type(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedType {
            descriptor: descriptor.into(),
            reason: reason.into(),
        }
    }

    /// Creates a malformed-document error.
    #[must_use]
    pub fn malformed_document(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: &Type, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.clone(),
            actual: actual.into(),
        }
    }

    /// Creates an unsupported-type error.
    #[must_use]
    pub const fn unsupported_type(kind: ElementKind, operation: &'static str) -> Self {
        Self::UnsupportedType { kind, operation }
    }

    /// Creates an out-of-range error.
    #[must_use]
    pub const fn out_of_range(value: i64, kind: ElementKind) -> Self {
        Self::OutOfRange { value, kind }
    }

    /// Creates a not-registered error.
    #[must_use]
    pub fn not_registered(name: impl Into<String>) -> Self {
        Self::NotRegistered { name: name.into() }
    }
}

/// Result type alias for nbtgen operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
