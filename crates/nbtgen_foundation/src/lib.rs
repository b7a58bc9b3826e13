//! Core types, values, and the value registry for nbtgen.
//!
//! This crate provides:
//! - [`ElementKind`] and [`Type`] - the recursive type taxonomy and its
//!   canonical descriptors
//! - [`Value`] - the in-memory datum carried by dataset documents
//! - [`Error`] - the error taxonomy shared by all layers
//! - [`ValueRegistry`] - the cross-document value registry

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod registry;
pub mod types;
pub mod value;


// Re-export main types for convenience
pub use error::{Error, Result};
pub use registry::{RegisteredValue, ValueRegistry};
pub use types::{ElementKind, MAX_DESCRIPTOR_DEPTH, Type};
pub use value::Value;
