//! Metadata inconsistency errors.

use thiserror::Error;
use xlift_isa::{EncodingFlags, Opcode};

use crate::InstructionKind;

/// Mismatch between the curated metadata and the opcode space or caller usage.
///
/// Production queries treat every variant as fatal; the `try_*` variants
/// surface it so tests and maintenance tooling can inspect it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("unknown opcode {opcode}: classification table is out of sync with the decoder")]
    UnknownOpcode { opcode: Opcode },
    #[error("duplicate classification entry for {opcode}")]
    DuplicateEntry { opcode: Opcode },
    #[error("unknown precision in instruction encoding: flags {flags} do not describe a floating-point instruction")]
    NotFloatingPoint { flags: EncodingFlags },
}

pub type Result<T> = std::result::Result<T, MetadataError>;

/// Maintenance defect found by [`ClassificationTable::validate`].
///
/// [`ClassificationTable::validate`]: crate::ClassificationTable::validate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    #[error("{0} has no classification entry")]
    Missing(Opcode),
    #[error("{opcode} is classified as {kind} but has no memory operand size")]
    MemoryKindWithoutSize { opcode: Opcode, kind: InstructionKind },
    #[error("{opcode} is classified as register-only {kind} but has a {bytes}-byte memory operand")]
    RegisterKindWithSize {
        opcode: Opcode,
        kind: InstructionKind,
        bytes: u8,
    },
}
