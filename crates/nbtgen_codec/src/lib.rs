//! Big-endian byte encoding and C++ literal mapping for nbtgen.
//!
//! This crate provides:
//! - [`encode`] - deterministic conversion of a typed value to its
//!   big-endian byte image
//! - [`default_literal`] / [`cpp_literal`] - the C++ literal forms the
//!   header emitter declares values with
//!
//! Everything here is a pure function over the foundation types; the
//! codec holds no state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod encode;
pub mod literal;

// Re-export main functions for convenience
pub use encode::encode;
pub use literal::{cpp_literal, default_literal};
