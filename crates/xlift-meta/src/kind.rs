//! Semantic instruction kinds and classification records.

use std::fmt::{self, Display};

/// Semantic category of an instruction, as seen by the lifter.
///
/// Variant order carries no meaning. Category membership (SIMD-float, memory
/// form) is spelled out per variant in the methods below.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InstructionKind {
    /// No semantic role in lifting.
    Unknown,
    BinaryOpRm,
    BinaryOpRr,
    BinaryOpWithImm,
    /// Binary operation with MRI/MRC encoding (double shifts).
    BinaryOpMriOrMrc,
    BranchMemOp,
    Compare,
    /// CBW/CWDE/CDQE: sign-extend within the accumulator.
    ConvertBwWdDq,
    /// CWD/CDQ/CQO: sign-extend the accumulator into the data register.
    ConvertWdDqQo,
    DivideMemOp,
    DivideRegOp,
    FpuRegOp,
    LeaOp,
    LeaveOp,
    LoadFpuReg,
    MovRr,
    MovRi,
    MovToMem,
    MovFromMem,
    Noop,
    /// Read-modify-write on a memory operand.
    InplaceMemOp,
    Setcc,
    BitTestOp,
    StoreFpuReg,
    SseMovToMem,
    SseMovFromMem,
    SseMovRr,
    SseCompareRr,
    SseCompareRm,
    SseConvertRr,
    SseConvertRm,
}

/// Whether a kind implies a memory operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MemoryForm {
    /// Always accesses memory.
    Memory,
    /// Never accesses memory.
    Register,
    /// Comes in both register and memory forms.
    Either,
}

impl InstructionKind {
    /// Check if this kind operates on floating-point values in the SSE
    /// register file.
    ///
    /// Scalar and packed SSE arithmetic is classified under the general
    /// binary-op kinds and is not included here.
    #[must_use]
    pub const fn is_simd_float(self) -> bool {
        match self {
            Self::SseMovToMem
            | Self::SseMovFromMem
            | Self::SseMovRr
            | Self::SseCompareRr
            | Self::SseCompareRm
            | Self::SseConvertRr
            | Self::SseConvertRm => true,
            Self::Unknown
            | Self::BinaryOpRm
            | Self::BinaryOpRr
            | Self::BinaryOpWithImm
            | Self::BinaryOpMriOrMrc
            | Self::BranchMemOp
            | Self::Compare
            | Self::ConvertBwWdDq
            | Self::ConvertWdDqQo
            | Self::DivideMemOp
            | Self::DivideRegOp
            | Self::FpuRegOp
            | Self::LeaOp
            | Self::LeaveOp
            | Self::LoadFpuReg
            | Self::MovRr
            | Self::MovRi
            | Self::MovToMem
            | Self::MovFromMem
            | Self::Noop
            | Self::InplaceMemOp
            | Self::Setcc
            | Self::BitTestOp
            | Self::StoreFpuReg => false,
        }
    }

    /// Memory form implied by this kind.
    #[must_use]
    pub const fn memory_form(self) -> MemoryForm {
        match self {
            Self::BinaryOpRm
            | Self::BranchMemOp
            | Self::DivideMemOp
            | Self::LoadFpuReg
            | Self::MovToMem
            | Self::MovFromMem
            | Self::InplaceMemOp
            | Self::StoreFpuReg
            | Self::SseMovToMem
            | Self::SseMovFromMem
            | Self::SseCompareRm
            | Self::SseConvertRm => MemoryForm::Memory,
            Self::BinaryOpRr
            | Self::ConvertBwWdDq
            | Self::ConvertWdDqQo
            | Self::DivideRegOp
            | Self::LeaOp
            | Self::LeaveOp
            | Self::MovRr
            | Self::MovRi
            | Self::SseMovRr
            | Self::SseCompareRr
            | Self::SseConvertRr => MemoryForm::Register,
            Self::Unknown
            | Self::BinaryOpWithImm
            | Self::BinaryOpMriOrMrc
            | Self::Compare
            | Self::FpuRegOp
            | Self::Noop
            | Self::Setcc
            | Self::BitTestOp => MemoryForm::Either,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::BinaryOpRm => "binary_op_rm",
            Self::BinaryOpRr => "binary_op_rr",
            Self::BinaryOpWithImm => "binary_op_with_imm",
            Self::BinaryOpMriOrMrc => "binary_op_mri_or_mrc",
            Self::BranchMemOp => "branch_mem_op",
            Self::Compare => "compare",
            Self::ConvertBwWdDq => "convert_bw_wd_dq",
            Self::ConvertWdDqQo => "convert_wd_dq_qo",
            Self::DivideMemOp => "divide_mem_op",
            Self::DivideRegOp => "divide_reg_op",
            Self::FpuRegOp => "fpu_reg_op",
            Self::LeaOp => "lea_op",
            Self::LeaveOp => "leave_op",
            Self::LoadFpuReg => "load_fpu_reg",
            Self::MovRr => "mov_rr",
            Self::MovRi => "mov_ri",
            Self::MovToMem => "mov_to_mem",
            Self::MovFromMem => "mov_from_mem",
            Self::Noop => "noop",
            Self::InplaceMemOp => "inplace_mem_op",
            Self::Setcc => "setcc",
            Self::BitTestOp => "bit_test_op",
            Self::StoreFpuReg => "store_fpu_reg",
            Self::SseMovToMem => "sse_mov_to_mem",
            Self::SseMovFromMem => "sse_mov_from_mem",
            Self::SseMovRr => "sse_mov_rr",
            Self::SseCompareRr => "sse_compare_rr",
            Self::SseCompareRm => "sse_compare_rm",
            Self::SseConvertRr => "sse_convert_rr",
            Self::SseConvertRm => "sse_convert_rm",
        }
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Size of the memory operand an instruction reads or writes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum MemOpSize {
    /// No memory operand.
    #[default]
    None,
    Byte,
    Word,
    Dword,
    Qword,
}

impl MemOpSize {
    /// Size in bytes (0 when there is no memory operand).
    #[must_use]
    pub const fn bytes(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Byte => 1,
            Self::Word => 2,
            Self::Dword => 4,
            Self::Qword => 8,
        }
    }

    #[must_use]
    pub const fn from_bytes(bytes: u8) -> Option<Self> {
        match bytes {
            0 => Some(Self::None),
            1 => Some(Self::Byte),
            2 => Some(Self::Word),
            4 => Some(Self::Dword),
            8 => Some(Self::Qword),
            _ => None,
        }
    }
}

/// Metadata for one opcode.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ClassificationRecord {
    /// Memory operand size.
    pub mem_op_size: MemOpSize,
    /// Semantic kind.
    pub kind: InstructionKind,
}

impl ClassificationRecord {
    #[must_use]
    pub const fn new(mem_op_size: MemOpSize, kind: InstructionKind) -> Self {
        Self { mem_op_size, kind }
    }

    #[must_use]
    pub const fn has_memory_operand(self) -> bool {
        !matches!(self.mem_op_size, MemOpSize::None)
    }

    #[must_use]
    pub const fn is_simd_float(self) -> bool {
        self.kind.is_simd_float()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_op_size_bytes() {
        for bytes in [0, 1, 2, 4, 8] {
            let size = MemOpSize::from_bytes(bytes).unwrap();
            assert_eq!(size.bytes(), bytes);
        }
        assert_eq!(MemOpSize::from_bytes(3), None);
        assert_eq!(MemOpSize::from_bytes(16), None);
        assert_eq!(MemOpSize::default().bytes(), 0);
    }

    #[test]
    fn test_simd_float_kinds() {
        assert!(InstructionKind::SseConvertRr.is_simd_float());
        assert!(InstructionKind::SseMovFromMem.is_simd_float());
        assert!(!InstructionKind::BinaryOpRr.is_simd_float());
        assert!(!InstructionKind::StoreFpuReg.is_simd_float());
        assert!(!InstructionKind::Noop.is_simd_float());
    }

    #[test]
    fn test_memory_form() {
        assert_eq!(InstructionKind::MovFromMem.memory_form(), MemoryForm::Memory);
        assert_eq!(InstructionKind::SseConvertRr.memory_form(), MemoryForm::Register);
        assert_eq!(InstructionKind::Compare.memory_form(), MemoryForm::Either);
    }

    #[test]
    fn test_record() {
        let rec = ClassificationRecord::new(MemOpSize::Qword, InstructionKind::SseMovFromMem);
        assert!(rec.has_memory_operand());
        assert!(rec.is_simd_float());

        let rec = ClassificationRecord::new(MemOpSize::None, InstructionKind::Noop);
        assert!(!rec.has_memory_operand());
        assert!(!rec.is_simd_float());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(InstructionKind::SseConvertRm.to_string(), "sse_convert_rm");
        assert_eq!(InstructionKind::BinaryOpMriOrMrc.to_string(), "binary_op_mri_or_mrc");
    }
}
