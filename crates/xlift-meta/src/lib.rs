//! Per-opcode semantic metadata for lifting x86-64 machine code to IR.
//!
//! The decoder exposes operand layout but not the semantic role of an
//! instruction. This crate fills the gap with a curated classification table
//! (kind and memory operand size per opcode) and a precision decoder for
//! floating-point encodings.
//!
//! Lookups of opcodes outside the table are fatal: they mean the table has
//! fallen out of sync with the decoder. The `try_*` variants report the same
//! conditions as [`MetadataError`] for tests and maintenance tooling.

mod entries;
mod error;
mod kind;
mod precision;
mod query;
mod table;

pub use error::*;
pub use kind::*;
pub use precision::*;
pub use query::*;
pub use table::*;
