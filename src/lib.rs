//! nbtgen - Dataset compiler for an NBT-style serialization library
//!
//! This crate re-exports all layers of the nbtgen system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: nbtgen_runtime    — driver, header emission, CLI
//! Layer 2: nbtgen_document   — document model, YAML loader
//! Layer 1: nbtgen_codec      — big-endian encoding, C++ literals
//! Layer 0: nbtgen_foundation — type taxonomy, values, errors, registry
//! ```

pub use nbtgen_codec as codec;
pub use nbtgen_document as document;
pub use nbtgen_foundation as foundation;
pub use nbtgen_runtime as runtime;
