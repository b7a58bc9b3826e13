//! Generation driver, header emission, and CLI for nbtgen.
//!
//! This crate provides:
//! - [`generate`] - the batch driver (discover, order, load, register,
//!   emit)
//! - [`render_header`] - C++ header rendering for one loaded document
//!
//! The `nbtgen` binary in `src/bin` is a thin wrapper around
//! [`generate`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod emit;
pub mod generate;

// Re-export main entry points for convenience
pub use emit::render_header;
pub use generate::{GenerateError, generate};
