//! Dataset document model and YAML loader for nbtgen.
//!
//! This crate provides:
//! - [`Document`] / [`StreamDefinition`] - the resolved in-memory form of
//!   one dataset description
//! - [`load`] - conversion of a parsed YAML tree into a validated
//!   [`Document`], with [`Diagnostic`] records for dropped streams
//!
//! The YAML parse itself happens upstream; loading begins once the
//! opaque tree is available.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod loader;

// Re-export main types for convenience
pub use document::{Document, StreamDefinition};
pub use loader::{Diagnostic, LoadedDocument, load};
