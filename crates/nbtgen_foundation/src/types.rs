//! Element kinds and the recursive type taxonomy.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum `list<...>` nesting depth accepted by descriptor parsing.
///
/// Nothing meaningful nests this deep; the guard keeps adversarial
/// descriptors from recursing without bound.
pub const MAX_DESCRIPTOR_DEPTH: usize = 64;

/// Primitive element kinds understood by the dataset generator.
///
/// Every kind except [`ElementKind::String`] has a fixed wire width.
/// Strings carry their length externally in whatever consumes the stream.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementKind {
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit IEEE-754 floating point.
    Float,
    /// 64-bit IEEE-754 floating point.
    Double,
    /// UTF-8 string view (no fixed width).
    String,
}

impl ElementKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float,
        Self::Double,
        Self::String,
    ];

    /// Canonical descriptor token for this kind.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
        }
    }

    /// Parses a scalar descriptor token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.token() == token)
    }

    /// C++ type name this kind maps to in generated headers.
    #[must_use]
    pub const fn cpp_name(self) -> &'static str {
        match self {
            Self::Int8 => "int8_t",
            Self::Int16 => "int16_t",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "std::string_view",
        }
    }

    /// Fixed wire width of this kind in bytes.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedType`] for [`ElementKind::String`],
    /// which has no fixed width.
    pub fn byte_width(self) -> Result<usize> {
        match self {
            Self::Int8 => Ok(1),
            Self::Int16 => Ok(2),
            Self::Int32 => Ok(4),
            Self::Int64 => Ok(8),
            Self::Float => Ok(4),
            Self::Double => Ok(8),
            Self::String => Err(Error::unsupported_type(self, "byte_width")),
        }
    }

    /// Returns true for the four signed integer kinds.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns true for the two floating point kinds.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl fmt::Debug for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Element type of a dataset: a scalar kind or a homogeneous list.
///
/// Lists nest arbitrarily but always bottom out in a scalar kind; cyclic
/// types are unrepresentable.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// A bare element kind.
    Scalar(ElementKind),
    /// A homogeneous list of the inner type.
    List(Box<Type>),
}

impl Type {
    /// Creates a list type with the given element type.
    #[must_use]
    pub fn list(element: Type) -> Self {
        Self::List(Box::new(element))
    }

    /// Parses a canonical descriptor string.
    ///
    /// The grammar is a scalar token (`int8`, `int16`, `int32`, `int64`,
    /// `float`, `double`, `string`) or a `list<inner>` wrapper around
    /// exactly one inner descriptor, nested at most
    /// [`MAX_DESCRIPTOR_DEPTH`] levels.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MalformedType`] when the wrapper is
    /// unterminated, the inner token is unrecognized, or the nesting is
    /// too deep.
    pub fn from_descriptor(text: &str) -> Result<Self> {
        let mut depth = 0usize;
        let mut rest = text;
        while let Some(inner) = rest.strip_prefix("list<") {
            depth += 1;
            if depth > MAX_DESCRIPTOR_DEPTH {
                return Err(Error::malformed_type(
                    text,
                    format!("list nesting deeper than {MAX_DESCRIPTOR_DEPTH} levels"),
                ));
            }
            rest = inner;
        }

        let mut token = rest;
        for _ in 0..depth {
            token = token.strip_suffix('>').ok_or_else(|| {
                Error::malformed_type(text, "unterminated `list<...>` wrapper")
            })?;
        }

        let kind = ElementKind::from_token(token).ok_or_else(|| {
            Error::malformed_type(text, format!("unrecognized element kind `{token}`"))
        })?;

        let mut ty = Self::Scalar(kind);
        for _ in 0..depth {
            ty = Self::list(ty);
        }
        Ok(ty)
    }

    /// Canonical descriptor string for this type.
    ///
    /// Inverse of [`Type::from_descriptor`]:
    /// `Type::from_descriptor(&t.descriptor())` reproduces `t` for every
    /// representable `t`.
    #[must_use]
    pub fn descriptor(&self) -> String {
        format!("{self:?}")
    }

    /// The scalar kind when this is a scalar type.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<ElementKind> {
        match self {
            Self::Scalar(kind) => Some(*kind),
            Self::List(_) => None,
        }
    }

    /// The innermost scalar kind this type bottoms out in.
    #[must_use]
    pub fn scalar_root(&self) -> ElementKind {
        match self {
            Self::Scalar(kind) => *kind,
            Self::List(inner) => inner.scalar_root(),
        }
    }

    /// Returns true when this is a list type.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::List(inner) => write!(f, "list<{inner:?}>"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
