//! x86-64 opcode space and encoding flags.
//!
//! This crate describes what the decoder hands to the metadata layer: opcode
//! identifiers and the per-instruction encoding flags. It performs no decoding
//! itself.

mod flags;
mod opcode;

pub use flags::*;
pub use opcode::*;
