//! Built-in classification entries for the supported opcode space.
//!
//! Keep in sync with `xlift_isa::ALL_OPCODES`: every opcode the decoder can
//! produce needs exactly one entry here.

#[allow(clippy::wildcard_imports)]
use xlift_isa::*;

use crate::{ClassificationRecord, InstructionKind as K, MemOpSize};

/// Build an entry from an authored byte count (evaluated at compile time).
const fn entry(opcode: Opcode, bytes: u8, kind: K) -> (Opcode, ClassificationRecord) {
    let Some(size) = MemOpSize::from_bytes(bytes) else {
        panic!("memory operand size must be 0, 1, 2, 4 or 8");
    };
    (opcode, ClassificationRecord::new(size, kind))
}

pub const BUILTIN_ENTRIES: &[(Opcode, ClassificationRecord)] = &[
    // No-ops
    entry(OP_NOOP, 0, K::Noop),
    entry(OP_NOOPW, 2, K::Noop),
    entry(OP_NOOPL, 4, K::Noop),
    entry(OP_NOOPQ, 8, K::Noop),
    // Register and immediate moves
    entry(OP_MOV8RR, 0, K::MovRr),
    entry(OP_MOV16RR, 0, K::MovRr),
    entry(OP_MOV32RR, 0, K::MovRr),
    entry(OP_MOV64RR, 0, K::MovRr),
    entry(OP_MOVZX32RR8, 0, K::MovRr),
    entry(OP_MOVZX32RR16, 0, K::MovRr),
    entry(OP_MOVSX32RR8, 0, K::MovRr),
    entry(OP_MOVSX64RR32, 0, K::MovRr),
    entry(OP_MOV8RI, 0, K::MovRi),
    entry(OP_MOV16RI, 0, K::MovRi),
    entry(OP_MOV32RI, 0, K::MovRi),
    entry(OP_MOV64RI, 0, K::MovRi),
    entry(OP_MOV64RI32, 0, K::MovRi),
    // Loads
    entry(OP_MOV8RM, 1, K::MovFromMem),
    entry(OP_MOV16RM, 2, K::MovFromMem),
    entry(OP_MOV32RM, 4, K::MovFromMem),
    entry(OP_MOV64RM, 8, K::MovFromMem),
    entry(OP_MOVZX32RM8, 1, K::MovFromMem),
    entry(OP_MOVZX32RM16, 2, K::MovFromMem),
    entry(OP_MOVSX32RM8, 1, K::MovFromMem),
    entry(OP_MOVSX64RM32, 4, K::MovFromMem),
    // Stores
    entry(OP_MOV8MR, 1, K::MovToMem),
    entry(OP_MOV16MR, 2, K::MovToMem),
    entry(OP_MOV32MR, 4, K::MovToMem),
    entry(OP_MOV64MR, 8, K::MovToMem),
    entry(OP_MOV8MI, 1, K::MovToMem),
    entry(OP_MOV16MI, 2, K::MovToMem),
    entry(OP_MOV32MI, 4, K::MovToMem),
    entry(OP_MOV64MI32, 8, K::MovToMem),
    // Register-register ALU
    entry(OP_ADD32RR, 0, K::BinaryOpRr),
    entry(OP_ADD64RR, 0, K::BinaryOpRr),
    entry(OP_SUB32RR, 0, K::BinaryOpRr),
    entry(OP_SUB64RR, 0, K::BinaryOpRr),
    entry(OP_AND32RR, 0, K::BinaryOpRr),
    entry(OP_AND64RR, 0, K::BinaryOpRr),
    entry(OP_OR32RR, 0, K::BinaryOpRr),
    entry(OP_OR64RR, 0, K::BinaryOpRr),
    entry(OP_XOR32RR, 0, K::BinaryOpRr),
    entry(OP_XOR64RR, 0, K::BinaryOpRr),
    entry(OP_IMUL32RR, 0, K::BinaryOpRr),
    entry(OP_IMUL64RR, 0, K::BinaryOpRr),
    entry(OP_SHL32RCL, 0, K::BinaryOpRr),
    entry(OP_SHR64RCL, 0, K::BinaryOpRr),
    entry(OP_SAR32RCL, 0, K::BinaryOpRr),
    // Register-memory ALU
    entry(OP_ADD32RM, 4, K::BinaryOpRm),
    entry(OP_ADD64RM, 8, K::BinaryOpRm),
    entry(OP_SUB32RM, 4, K::BinaryOpRm),
    entry(OP_SUB64RM, 8, K::BinaryOpRm),
    entry(OP_AND32RM, 4, K::BinaryOpRm),
    entry(OP_OR64RM, 8, K::BinaryOpRm),
    entry(OP_XOR32RM, 4, K::BinaryOpRm),
    entry(OP_IMUL32RM, 4, K::BinaryOpRm),
    entry(OP_IMUL64RM, 8, K::BinaryOpRm),
    // ALU with immediate
    entry(OP_ADD32RI, 0, K::BinaryOpWithImm),
    entry(OP_ADD32RI8, 0, K::BinaryOpWithImm),
    entry(OP_ADD64RI8, 0, K::BinaryOpWithImm),
    entry(OP_ADD64RI32, 0, K::BinaryOpWithImm),
    entry(OP_SUB32RI, 0, K::BinaryOpWithImm),
    entry(OP_SUB64RI8, 0, K::BinaryOpWithImm),
    entry(OP_SUB64RI32, 0, K::BinaryOpWithImm),
    entry(OP_AND32RI, 0, K::BinaryOpWithImm),
    entry(OP_AND64RI8, 0, K::BinaryOpWithImm),
    entry(OP_OR32RI8, 0, K::BinaryOpWithImm),
    entry(OP_XOR32RI8, 0, K::BinaryOpWithImm),
    entry(OP_SHL32RI, 0, K::BinaryOpWithImm),
    entry(OP_SHL64RI, 0, K::BinaryOpWithImm),
    entry(OP_SHR32RI, 0, K::BinaryOpWithImm),
    entry(OP_SHR64RI, 0, K::BinaryOpWithImm),
    entry(OP_SAR32RI, 0, K::BinaryOpWithImm),
    entry(OP_SAR64RI, 0, K::BinaryOpWithImm),
    entry(OP_IMUL32RRI, 0, K::BinaryOpWithImm),
    entry(OP_IMUL64RRI32, 0, K::BinaryOpWithImm),
    entry(OP_IMUL32RMI, 4, K::BinaryOpWithImm),
    // Double shifts (MRI/MRC encodings)
    entry(OP_SHLD32RRI8, 0, K::BinaryOpMriOrMrc),
    entry(OP_SHLD64RRI8, 0, K::BinaryOpMriOrMrc),
    entry(OP_SHRD32RRI8, 0, K::BinaryOpMriOrMrc),
    entry(OP_SHLD32RRCL, 0, K::BinaryOpMriOrMrc),
    entry(OP_SHRD64RRCL, 0, K::BinaryOpMriOrMrc),
    // Read-modify-write memory
    entry(OP_ADD32MR, 4, K::InplaceMemOp),
    entry(OP_ADD64MR, 8, K::InplaceMemOp),
    entry(OP_ADD32MI8, 4, K::InplaceMemOp),
    entry(OP_ADD64MI32, 8, K::InplaceMemOp),
    entry(OP_SUB32MI8, 4, K::InplaceMemOp),
    entry(OP_AND8MI, 1, K::InplaceMemOp),
    entry(OP_OR32MR, 4, K::InplaceMemOp),
    entry(OP_INC32M, 4, K::InplaceMemOp),
    entry(OP_INC64M, 8, K::InplaceMemOp),
    entry(OP_DEC32M, 4, K::InplaceMemOp),
    entry(OP_NEG32M, 4, K::InplaceMemOp),
    entry(OP_NOT64M, 8, K::InplaceMemOp),
    entry(OP_SHL32MI, 4, K::InplaceMemOp),
    // Compares and tests
    entry(OP_CMP8RR, 0, K::Compare),
    entry(OP_CMP32RR, 0, K::Compare),
    entry(OP_CMP64RR, 0, K::Compare),
    entry(OP_CMP8RI, 0, K::Compare),
    entry(OP_CMP32RI8, 0, K::Compare),
    entry(OP_CMP64RI8, 0, K::Compare),
    entry(OP_CMP64RI32, 0, K::Compare),
    entry(OP_TEST8RR, 0, K::Compare),
    entry(OP_TEST32RR, 0, K::Compare),
    entry(OP_TEST64RR, 0, K::Compare),
    entry(OP_TEST8RI, 0, K::Compare),
    entry(OP_CMP8RM, 1, K::Compare),
    entry(OP_CMP32RM, 4, K::Compare),
    entry(OP_CMP64RM, 8, K::Compare),
    entry(OP_CMP8MI, 1, K::Compare),
    entry(OP_CMP32MI8, 4, K::Compare),
    entry(OP_CMP64MI8, 8, K::Compare),
    entry(OP_CMP32MR, 4, K::Compare),
    entry(OP_TEST8MI, 1, K::Compare),
    // Conditional set
    entry(OP_SETCCR, 0, K::Setcc),
    entry(OP_SETCCM, 1, K::Setcc),
    // Bit tests
    entry(OP_BT32RR, 0, K::BitTestOp),
    entry(OP_BT64RR, 0, K::BitTestOp),
    entry(OP_BT32RI8, 0, K::BitTestOp),
    entry(OP_BT64RI8, 0, K::BitTestOp),
    entry(OP_BT32MI8, 4, K::BitTestOp),
    // Accumulator sign extensions
    entry(OP_CBW, 0, K::ConvertBwWdDq),
    entry(OP_CWDE, 0, K::ConvertBwWdDq),
    entry(OP_CDQE, 0, K::ConvertBwWdDq),
    entry(OP_CWD, 0, K::ConvertWdDqQo),
    entry(OP_CDQ, 0, K::ConvertWdDqQo),
    entry(OP_CQO, 0, K::ConvertWdDqQo),
    // Divides
    entry(OP_DIV32R, 0, K::DivideRegOp),
    entry(OP_DIV64R, 0, K::DivideRegOp),
    entry(OP_IDIV32R, 0, K::DivideRegOp),
    entry(OP_IDIV64R, 0, K::DivideRegOp),
    entry(OP_DIV32M, 4, K::DivideMemOp),
    entry(OP_DIV64M, 8, K::DivideMemOp),
    entry(OP_IDIV32M, 4, K::DivideMemOp),
    entry(OP_IDIV64M, 8, K::DivideMemOp),
    // Address computation and frame teardown
    entry(OP_LEA32R, 0, K::LeaOp),
    entry(OP_LEA64R, 0, K::LeaOp),
    entry(OP_LEA64_32R, 0, K::LeaOp),
    entry(OP_LEAVE64, 0, K::LeaveOp),
    // Indirect branches through memory
    entry(OP_JMP64M, 8, K::BranchMemOp),
    entry(OP_CALL64M, 8, K::BranchMemOp),
    // x87
    entry(OP_LD_F32M, 4, K::LoadFpuReg),
    entry(OP_LD_F64M, 8, K::LoadFpuReg),
    entry(OP_ILD_F32M, 4, K::LoadFpuReg),
    entry(OP_ILD_F64M, 8, K::LoadFpuReg),
    entry(OP_ST_F32M, 4, K::StoreFpuReg),
    entry(OP_ST_F64M, 8, K::StoreFpuReg),
    entry(OP_ST_FP32M, 4, K::StoreFpuReg),
    entry(OP_ST_FP64M, 8, K::StoreFpuReg),
    entry(OP_IST_FP64M, 8, K::StoreFpuReg),
    entry(OP_LD_F0, 0, K::FpuRegOp),
    entry(OP_LD_F1, 0, K::FpuRegOp),
    entry(OP_ADD_FRST0, 0, K::FpuRegOp),
    entry(OP_ADD_FPRST0, 0, K::FpuRegOp),
    entry(OP_SUB_FRST0, 0, K::FpuRegOp),
    entry(OP_MUL_FRST0, 0, K::FpuRegOp),
    entry(OP_DIV_FRST0, 0, K::FpuRegOp),
    entry(OP_CHS_F, 0, K::FpuRegOp),
    entry(OP_ABS_F, 0, K::FpuRegOp),
    // SSE arithmetic (lifted through the general ALU paths)
    entry(OP_ADDSSRR, 0, K::BinaryOpRr),
    entry(OP_ADDSDRR, 0, K::BinaryOpRr),
    entry(OP_SUBSSRR, 0, K::BinaryOpRr),
    entry(OP_SUBSDRR, 0, K::BinaryOpRr),
    entry(OP_MULSSRR, 0, K::BinaryOpRr),
    entry(OP_MULSDRR, 0, K::BinaryOpRr),
    entry(OP_DIVSSRR, 0, K::BinaryOpRr),
    entry(OP_DIVSDRR, 0, K::BinaryOpRr),
    entry(OP_ADDPSRR, 0, K::BinaryOpRr),
    entry(OP_MULPDRR, 0, K::BinaryOpRr),
    entry(OP_XORPSRR, 0, K::BinaryOpRr),
    entry(OP_ANDPDRR, 0, K::BinaryOpRr),
    entry(OP_PXORRR, 0, K::BinaryOpRr),
    entry(OP_ADDSSRM, 4, K::BinaryOpRm),
    entry(OP_ADDSDRM, 8, K::BinaryOpRm),
    entry(OP_MULSSRM, 4, K::BinaryOpRm),
    entry(OP_MULSDRM, 8, K::BinaryOpRm),
    entry(OP_DIVSDRM, 8, K::BinaryOpRm),
    // SSE moves
    entry(OP_MOVSSRM, 4, K::SseMovFromMem),
    entry(OP_MOVSDRM, 8, K::SseMovFromMem),
    entry(OP_MOVDI2PDIRM, 4, K::SseMovFromMem),
    entry(OP_MOVQI2PQIRM, 8, K::SseMovFromMem),
    entry(OP_MOVSSMR, 4, K::SseMovToMem),
    entry(OP_MOVSDMR, 8, K::SseMovToMem),
    entry(OP_MOVPDI2DIMR, 4, K::SseMovToMem),
    entry(OP_MOVPQI2QIMR, 8, K::SseMovToMem),
    entry(OP_MOVSSRR, 0, K::SseMovRr),
    entry(OP_MOVSDRR, 0, K::SseMovRr),
    entry(OP_MOVAPSRR, 0, K::SseMovRr),
    entry(OP_MOVAPDRR, 0, K::SseMovRr),
    entry(OP_MOV64TOSDRR, 0, K::SseMovRr),
    entry(OP_MOVSDTO64RR, 0, K::SseMovRr),
    entry(OP_MOVDI2SSRR, 0, K::SseMovRr),
    entry(OP_MOVSS2DIRR, 0, K::SseMovRr),
    // SSE compares
    entry(OP_UCOMISSRR, 0, K::SseCompareRr),
    entry(OP_UCOMISDRR, 0, K::SseCompareRr),
    entry(OP_COMISSRR, 0, K::SseCompareRr),
    entry(OP_COMISDRR, 0, K::SseCompareRr),
    entry(OP_CMPSSRRI, 0, K::SseCompareRr),
    entry(OP_CMPSDRRI, 0, K::SseCompareRr),
    entry(OP_UCOMISSRM, 4, K::SseCompareRm),
    entry(OP_UCOMISDRM, 8, K::SseCompareRm),
    entry(OP_COMISDRM, 8, K::SseCompareRm),
    entry(OP_CMPSSRMI, 4, K::SseCompareRm),
    entry(OP_CMPSDRMI, 8, K::SseCompareRm),
    // SSE conversions
    entry(OP_CVTSI2SSRR, 0, K::SseConvertRr),
    entry(OP_CVTSI2SDRR, 0, K::SseConvertRr),
    entry(OP_CVTSI642SSRR, 0, K::SseConvertRr),
    entry(OP_CVTSI642SDRR, 0, K::SseConvertRr),
    entry(OP_CVTSS2SDRR, 0, K::SseConvertRr),
    entry(OP_CVTSD2SSRR, 0, K::SseConvertRr),
    entry(OP_CVTTSS2SIRR, 0, K::SseConvertRr),
    entry(OP_CVTTSD2SIRR, 0, K::SseConvertRr),
    entry(OP_CVTTSD2SI64RR, 0, K::SseConvertRr),
    entry(OP_CVTPS2PDRR, 0, K::SseConvertRr),
    entry(OP_CVTPD2PSRR, 0, K::SseConvertRr),
    entry(OP_CVTDQ2PSRR, 0, K::SseConvertRr),
    entry(OP_CVTSI2SSRM, 4, K::SseConvertRm),
    entry(OP_CVTSI2SDRM, 4, K::SseConvertRm),
    entry(OP_CVTSI642SDRM, 8, K::SseConvertRm),
    entry(OP_CVTSS2SDRM, 4, K::SseConvertRm),
    entry(OP_CVTSD2SSRM, 8, K::SseConvertRm),
    entry(OP_CVTTSS2SIRM, 4, K::SseConvertRm),
    entry(OP_CVTTSD2SIRM, 8, K::SseConvertRm),
    // System instructions with no semantic role in lifting
    entry(OP_CPUID, 0, K::Unknown),
    entry(OP_RDTSC, 0, K::Unknown),
    entry(OP_UD2, 0, K::Unknown),
];
