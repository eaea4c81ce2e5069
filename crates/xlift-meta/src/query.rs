//! Queries against the built-in classification table.
//!
//! These are the entry points the lifter calls. An opcode without an entry,
//! or precision asked of a non-floating-point encoding, is fatal.

use xlift_isa::{EncodingFlags, Opcode};

use crate::{ClassificationTable, InstructionKind, precision};

/// Semantic kind of an opcode.
///
/// # Panics
///
/// Panics if the opcode has no classification entry.
#[must_use]
pub fn classify(opcode: Opcode) -> InstructionKind {
    ClassificationTable::builtin().kind(opcode)
}

/// Memory operand size in bytes: 0 for no memory operand, else 1, 2, 4 or 8.
///
/// # Panics
///
/// Panics if the opcode has no classification entry.
#[must_use]
pub fn mem_op_size(opcode: Opcode) -> u8 {
    ClassificationTable::builtin().mem_op_size(opcode)
}

/// Check if an opcode is a no-op.
///
/// # Panics
///
/// Panics if the opcode has no classification entry.
#[must_use]
pub fn is_noop(opcode: Opcode) -> bool {
    ClassificationTable::builtin().is_noop(opcode)
}

/// Check if an opcode moves, compares or converts floating-point values in
/// the SSE register file.
///
/// # Panics
///
/// Panics if the opcode has no classification entry.
#[must_use]
pub fn is_simd_float_instruction(opcode: Opcode) -> bool {
    ClassificationTable::builtin().is_simd_float_instruction(opcode)
}

/// Floating-point operand precision in bits (32 or 64).
///
/// # Panics
///
/// Panics if the flags do not describe a floating-point instruction.
#[must_use]
pub fn bit_precision(flags: EncodingFlags) -> u8 {
    precision(flags).bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xlift_isa::{
        OP_ADDSDRR, OP_CVTPS2PDRR, OP_CVTSI2SDRM, OP_LEA64R, OP_MOVSSMR, OP_NOOP, OP_NOOPL,
        OP_SETCCM, OP_UCOMISDRR, OpPrefix, SseDomain,
    };

    #[test]
    fn test_classify() {
        assert_eq!(classify(OP_CVTSI2SDRM), InstructionKind::SseConvertRm);
        assert_eq!(classify(OP_LEA64R), InstructionKind::LeaOp);
        assert_eq!(classify(OP_ADDSDRR), InstructionKind::BinaryOpRr);
    }

    #[test]
    fn test_mem_op_size() {
        assert_eq!(mem_op_size(OP_CVTSI2SDRM), 4);
        assert_eq!(mem_op_size(OP_MOVSSMR), 4);
        assert_eq!(mem_op_size(OP_SETCCM), 1);
        assert_eq!(mem_op_size(OP_LEA64R), 0);
    }

    #[test]
    fn test_is_noop() {
        assert!(is_noop(OP_NOOP));
        // Multi-byte nop carries a memory operand but is still a nop
        assert!(is_noop(OP_NOOPL));
        // Zero-size memory operand alone does not make a nop
        assert!(!is_noop(OP_LEA64R));
    }

    #[test]
    fn test_is_simd_float_instruction() {
        assert!(is_simd_float_instruction(OP_UCOMISDRR));
        assert!(is_simd_float_instruction(OP_MOVSSMR));
        // SSE arithmetic is lifted through the general binary-op path
        assert!(!is_simd_float_instruction(OP_ADDSDRR));
        assert!(!is_simd_float_instruction(OP_NOOP));
    }

    #[test]
    fn test_packed_single_conversion() {
        // CVTPS2PD: no scalar prefix, packed-single domain
        let flags = EncodingFlags::default().with_sse_domain(SseDomain::PackedSingle);
        assert_eq!(classify(OP_CVTPS2PDRR), InstructionKind::SseConvertRr);
        assert_eq!(mem_op_size(OP_CVTPS2PDRR), 0);
        assert_eq!(bit_precision(flags), 32);
    }

    #[test]
    fn test_bit_precision_scalar() {
        let flags = EncodingFlags::default()
            .with_op_prefix(OpPrefix::Xd)
            .with_sse_domain(SseDomain::PackedDouble);
        assert_eq!(bit_precision(flags), 64);
    }

    #[test]
    #[should_panic(expected = "unknown opcode")]
    fn test_classify_unknown_is_fatal() {
        let _ = classify(Opcode::new(0xFFFF));
    }

    #[test]
    #[should_panic(expected = "unknown opcode")]
    fn test_mem_op_size_unknown_is_fatal() {
        let _ = mem_op_size(Opcode::new(0));
    }
}
