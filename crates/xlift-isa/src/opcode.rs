//! x86-64 opcode identifiers.
//!
//! Opcode numbers follow the decoder's instruction enumeration. Mnemonics use
//! the target description naming: operand forms are suffixed `rr` (register,
//! register), `rm` (register, memory), `mr` (memory, register), `ri`/`mi`
//! (immediate source) and so on.

use std::fmt::{self, Display};

/// Opcode identifier handed out by the decoder (fits in 16 bits).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Opcode(u16);

impl Opcode {
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw opcode number.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Target description mnemonic, or `"<unknown>"` for ids outside the
    /// supported opcode space.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        opcode_mnemonic(self)
    }

    /// Check if this opcode belongs to the supported opcode space.
    #[must_use]
    pub fn is_known(self) -> bool {
        ALL_OPCODES.contains(&self)
    }
}

impl From<u16> for Opcode {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Opcode> for u16 {
    fn from(opcode: Opcode) -> Self {
        opcode.0
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(#{})", self.mnemonic(), self.0)
    }
}

// ===== Opcode Constants =====

// No-ops
pub const OP_NOOP: Opcode = Opcode::new(1);
pub const OP_NOOPW: Opcode = Opcode::new(2);
pub const OP_NOOPL: Opcode = Opcode::new(3);
pub const OP_NOOPQ: Opcode = Opcode::new(4);

// Register and immediate moves
pub const OP_MOV8RR: Opcode = Opcode::new(5);
pub const OP_MOV16RR: Opcode = Opcode::new(6);
pub const OP_MOV32RR: Opcode = Opcode::new(7);
pub const OP_MOV64RR: Opcode = Opcode::new(8);
pub const OP_MOVZX32RR8: Opcode = Opcode::new(9);
pub const OP_MOVZX32RR16: Opcode = Opcode::new(10);
pub const OP_MOVSX32RR8: Opcode = Opcode::new(11);
pub const OP_MOVSX64RR32: Opcode = Opcode::new(12);
pub const OP_MOV8RI: Opcode = Opcode::new(13);
pub const OP_MOV16RI: Opcode = Opcode::new(14);
pub const OP_MOV32RI: Opcode = Opcode::new(15);
pub const OP_MOV64RI: Opcode = Opcode::new(16);
pub const OP_MOV64RI32: Opcode = Opcode::new(17);

// Loads
pub const OP_MOV8RM: Opcode = Opcode::new(18);
pub const OP_MOV16RM: Opcode = Opcode::new(19);
pub const OP_MOV32RM: Opcode = Opcode::new(20);
pub const OP_MOV64RM: Opcode = Opcode::new(21);
pub const OP_MOVZX32RM8: Opcode = Opcode::new(22);
pub const OP_MOVZX32RM16: Opcode = Opcode::new(23);
pub const OP_MOVSX32RM8: Opcode = Opcode::new(24);
pub const OP_MOVSX64RM32: Opcode = Opcode::new(25);

// Stores
pub const OP_MOV8MR: Opcode = Opcode::new(26);
pub const OP_MOV16MR: Opcode = Opcode::new(27);
pub const OP_MOV32MR: Opcode = Opcode::new(28);
pub const OP_MOV64MR: Opcode = Opcode::new(29);
pub const OP_MOV8MI: Opcode = Opcode::new(30);
pub const OP_MOV16MI: Opcode = Opcode::new(31);
pub const OP_MOV32MI: Opcode = Opcode::new(32);
pub const OP_MOV64MI32: Opcode = Opcode::new(33);

// Register-register ALU
pub const OP_ADD32RR: Opcode = Opcode::new(34);
pub const OP_ADD64RR: Opcode = Opcode::new(35);
pub const OP_SUB32RR: Opcode = Opcode::new(36);
pub const OP_SUB64RR: Opcode = Opcode::new(37);
pub const OP_AND32RR: Opcode = Opcode::new(38);
pub const OP_AND64RR: Opcode = Opcode::new(39);
pub const OP_OR32RR: Opcode = Opcode::new(40);
pub const OP_OR64RR: Opcode = Opcode::new(41);
pub const OP_XOR32RR: Opcode = Opcode::new(42);
pub const OP_XOR64RR: Opcode = Opcode::new(43);
pub const OP_IMUL32RR: Opcode = Opcode::new(44);
pub const OP_IMUL64RR: Opcode = Opcode::new(45);
pub const OP_SHL32RCL: Opcode = Opcode::new(46);
pub const OP_SHR64RCL: Opcode = Opcode::new(47);
pub const OP_SAR32RCL: Opcode = Opcode::new(48);

// Register-memory ALU
pub const OP_ADD32RM: Opcode = Opcode::new(49);
pub const OP_ADD64RM: Opcode = Opcode::new(50);
pub const OP_SUB32RM: Opcode = Opcode::new(51);
pub const OP_SUB64RM: Opcode = Opcode::new(52);
pub const OP_AND32RM: Opcode = Opcode::new(53);
pub const OP_OR64RM: Opcode = Opcode::new(54);
pub const OP_XOR32RM: Opcode = Opcode::new(55);
pub const OP_IMUL32RM: Opcode = Opcode::new(56);
pub const OP_IMUL64RM: Opcode = Opcode::new(57);

// ALU with immediate
pub const OP_ADD32RI: Opcode = Opcode::new(58);
pub const OP_ADD32RI8: Opcode = Opcode::new(59);
pub const OP_ADD64RI8: Opcode = Opcode::new(60);
pub const OP_ADD64RI32: Opcode = Opcode::new(61);
pub const OP_SUB32RI: Opcode = Opcode::new(62);
pub const OP_SUB64RI8: Opcode = Opcode::new(63);
pub const OP_SUB64RI32: Opcode = Opcode::new(64);
pub const OP_AND32RI: Opcode = Opcode::new(65);
pub const OP_AND64RI8: Opcode = Opcode::new(66);
pub const OP_OR32RI8: Opcode = Opcode::new(67);
pub const OP_XOR32RI8: Opcode = Opcode::new(68);
pub const OP_SHL32RI: Opcode = Opcode::new(69);
pub const OP_SHL64RI: Opcode = Opcode::new(70);
pub const OP_SHR32RI: Opcode = Opcode::new(71);
pub const OP_SHR64RI: Opcode = Opcode::new(72);
pub const OP_SAR32RI: Opcode = Opcode::new(73);
pub const OP_SAR64RI: Opcode = Opcode::new(74);
pub const OP_IMUL32RRI: Opcode = Opcode::new(75);
pub const OP_IMUL64RRI32: Opcode = Opcode::new(76);
pub const OP_IMUL32RMI: Opcode = Opcode::new(77);

// Double shifts (MRI/MRC encodings)
pub const OP_SHLD32RRI8: Opcode = Opcode::new(78);
pub const OP_SHLD64RRI8: Opcode = Opcode::new(79);
pub const OP_SHRD32RRI8: Opcode = Opcode::new(80);
pub const OP_SHLD32RRCL: Opcode = Opcode::new(81);
pub const OP_SHRD64RRCL: Opcode = Opcode::new(82);

// Read-modify-write memory
pub const OP_ADD32MR: Opcode = Opcode::new(83);
pub const OP_ADD64MR: Opcode = Opcode::new(84);
pub const OP_ADD32MI8: Opcode = Opcode::new(85);
pub const OP_ADD64MI32: Opcode = Opcode::new(86);
pub const OP_SUB32MI8: Opcode = Opcode::new(87);
pub const OP_AND8MI: Opcode = Opcode::new(88);
pub const OP_OR32MR: Opcode = Opcode::new(89);
pub const OP_INC32M: Opcode = Opcode::new(90);
pub const OP_INC64M: Opcode = Opcode::new(91);
pub const OP_DEC32M: Opcode = Opcode::new(92);
pub const OP_NEG32M: Opcode = Opcode::new(93);
pub const OP_NOT64M: Opcode = Opcode::new(94);
pub const OP_SHL32MI: Opcode = Opcode::new(95);

// Compares and tests
pub const OP_CMP8RR: Opcode = Opcode::new(96);
pub const OP_CMP32RR: Opcode = Opcode::new(97);
pub const OP_CMP64RR: Opcode = Opcode::new(98);
pub const OP_CMP8RI: Opcode = Opcode::new(99);
pub const OP_CMP32RI8: Opcode = Opcode::new(100);
pub const OP_CMP64RI8: Opcode = Opcode::new(101);
pub const OP_CMP64RI32: Opcode = Opcode::new(102);
pub const OP_TEST8RR: Opcode = Opcode::new(103);
pub const OP_TEST32RR: Opcode = Opcode::new(104);
pub const OP_TEST64RR: Opcode = Opcode::new(105);
pub const OP_TEST8RI: Opcode = Opcode::new(106);
pub const OP_CMP8RM: Opcode = Opcode::new(107);
pub const OP_CMP32RM: Opcode = Opcode::new(108);
pub const OP_CMP64RM: Opcode = Opcode::new(109);
pub const OP_CMP8MI: Opcode = Opcode::new(110);
pub const OP_CMP32MI8: Opcode = Opcode::new(111);
pub const OP_CMP64MI8: Opcode = Opcode::new(112);
pub const OP_CMP32MR: Opcode = Opcode::new(113);
pub const OP_TEST8MI: Opcode = Opcode::new(114);

// Conditional set
pub const OP_SETCCR: Opcode = Opcode::new(115);
pub const OP_SETCCM: Opcode = Opcode::new(116);

// Bit tests
pub const OP_BT32RR: Opcode = Opcode::new(117);
pub const OP_BT64RR: Opcode = Opcode::new(118);
pub const OP_BT32RI8: Opcode = Opcode::new(119);
pub const OP_BT64RI8: Opcode = Opcode::new(120);
pub const OP_BT32MI8: Opcode = Opcode::new(121);

// Accumulator sign extensions
pub const OP_CBW: Opcode = Opcode::new(122);
pub const OP_CWDE: Opcode = Opcode::new(123);
pub const OP_CDQE: Opcode = Opcode::new(124);
pub const OP_CWD: Opcode = Opcode::new(125);
pub const OP_CDQ: Opcode = Opcode::new(126);
pub const OP_CQO: Opcode = Opcode::new(127);

// Divides
pub const OP_DIV32R: Opcode = Opcode::new(128);
pub const OP_DIV64R: Opcode = Opcode::new(129);
pub const OP_IDIV32R: Opcode = Opcode::new(130);
pub const OP_IDIV64R: Opcode = Opcode::new(131);
pub const OP_DIV32M: Opcode = Opcode::new(132);
pub const OP_DIV64M: Opcode = Opcode::new(133);
pub const OP_IDIV32M: Opcode = Opcode::new(134);
pub const OP_IDIV64M: Opcode = Opcode::new(135);

// Address computation and frame teardown
pub const OP_LEA32R: Opcode = Opcode::new(136);
pub const OP_LEA64R: Opcode = Opcode::new(137);
pub const OP_LEA64_32R: Opcode = Opcode::new(138);
pub const OP_LEAVE64: Opcode = Opcode::new(139);

// Indirect branches through memory
pub const OP_JMP64M: Opcode = Opcode::new(140);
pub const OP_CALL64M: Opcode = Opcode::new(141);

// x87
pub const OP_LD_F32M: Opcode = Opcode::new(142);
pub const OP_LD_F64M: Opcode = Opcode::new(143);
pub const OP_ILD_F32M: Opcode = Opcode::new(144);
pub const OP_ILD_F64M: Opcode = Opcode::new(145);
pub const OP_ST_F32M: Opcode = Opcode::new(146);
pub const OP_ST_F64M: Opcode = Opcode::new(147);
pub const OP_ST_FP32M: Opcode = Opcode::new(148);
pub const OP_ST_FP64M: Opcode = Opcode::new(149);
pub const OP_IST_FP64M: Opcode = Opcode::new(150);
pub const OP_LD_F0: Opcode = Opcode::new(151);
pub const OP_LD_F1: Opcode = Opcode::new(152);
pub const OP_ADD_FRST0: Opcode = Opcode::new(153);
pub const OP_ADD_FPRST0: Opcode = Opcode::new(154);
pub const OP_SUB_FRST0: Opcode = Opcode::new(155);
pub const OP_MUL_FRST0: Opcode = Opcode::new(156);
pub const OP_DIV_FRST0: Opcode = Opcode::new(157);
pub const OP_CHS_F: Opcode = Opcode::new(158);
pub const OP_ABS_F: Opcode = Opcode::new(159);

// SSE arithmetic (lifted through the general ALU paths)
pub const OP_ADDSSRR: Opcode = Opcode::new(160);
pub const OP_ADDSDRR: Opcode = Opcode::new(161);
pub const OP_SUBSSRR: Opcode = Opcode::new(162);
pub const OP_SUBSDRR: Opcode = Opcode::new(163);
pub const OP_MULSSRR: Opcode = Opcode::new(164);
pub const OP_MULSDRR: Opcode = Opcode::new(165);
pub const OP_DIVSSRR: Opcode = Opcode::new(166);
pub const OP_DIVSDRR: Opcode = Opcode::new(167);
pub const OP_ADDPSRR: Opcode = Opcode::new(168);
pub const OP_MULPDRR: Opcode = Opcode::new(169);
pub const OP_XORPSRR: Opcode = Opcode::new(170);
pub const OP_ANDPDRR: Opcode = Opcode::new(171);
pub const OP_PXORRR: Opcode = Opcode::new(172);
pub const OP_ADDSSRM: Opcode = Opcode::new(173);
pub const OP_ADDSDRM: Opcode = Opcode::new(174);
pub const OP_MULSSRM: Opcode = Opcode::new(175);
pub const OP_MULSDRM: Opcode = Opcode::new(176);
pub const OP_DIVSDRM: Opcode = Opcode::new(177);

// SSE moves
pub const OP_MOVSSRM: Opcode = Opcode::new(178);
pub const OP_MOVSDRM: Opcode = Opcode::new(179);
pub const OP_MOVDI2PDIRM: Opcode = Opcode::new(180);
pub const OP_MOVQI2PQIRM: Opcode = Opcode::new(181);
pub const OP_MOVSSMR: Opcode = Opcode::new(182);
pub const OP_MOVSDMR: Opcode = Opcode::new(183);
pub const OP_MOVPDI2DIMR: Opcode = Opcode::new(184);
pub const OP_MOVPQI2QIMR: Opcode = Opcode::new(185);
pub const OP_MOVSSRR: Opcode = Opcode::new(186);
pub const OP_MOVSDRR: Opcode = Opcode::new(187);
pub const OP_MOVAPSRR: Opcode = Opcode::new(188);
pub const OP_MOVAPDRR: Opcode = Opcode::new(189);
pub const OP_MOV64TOSDRR: Opcode = Opcode::new(190);
pub const OP_MOVSDTO64RR: Opcode = Opcode::new(191);
pub const OP_MOVDI2SSRR: Opcode = Opcode::new(192);
pub const OP_MOVSS2DIRR: Opcode = Opcode::new(193);

// SSE compares
pub const OP_UCOMISSRR: Opcode = Opcode::new(194);
pub const OP_UCOMISDRR: Opcode = Opcode::new(195);
pub const OP_COMISSRR: Opcode = Opcode::new(196);
pub const OP_COMISDRR: Opcode = Opcode::new(197);
pub const OP_CMPSSRRI: Opcode = Opcode::new(198);
pub const OP_CMPSDRRI: Opcode = Opcode::new(199);
pub const OP_UCOMISSRM: Opcode = Opcode::new(200);
pub const OP_UCOMISDRM: Opcode = Opcode::new(201);
pub const OP_COMISDRM: Opcode = Opcode::new(202);
pub const OP_CMPSSRMI: Opcode = Opcode::new(203);
pub const OP_CMPSDRMI: Opcode = Opcode::new(204);

// SSE conversions
pub const OP_CVTSI2SSRR: Opcode = Opcode::new(205);
pub const OP_CVTSI2SDRR: Opcode = Opcode::new(206);
pub const OP_CVTSI642SSRR: Opcode = Opcode::new(207);
pub const OP_CVTSI642SDRR: Opcode = Opcode::new(208);
pub const OP_CVTSS2SDRR: Opcode = Opcode::new(209);
pub const OP_CVTSD2SSRR: Opcode = Opcode::new(210);
pub const OP_CVTTSS2SIRR: Opcode = Opcode::new(211);
pub const OP_CVTTSD2SIRR: Opcode = Opcode::new(212);
pub const OP_CVTTSD2SI64RR: Opcode = Opcode::new(213);
pub const OP_CVTPS2PDRR: Opcode = Opcode::new(214);
pub const OP_CVTPD2PSRR: Opcode = Opcode::new(215);
pub const OP_CVTDQ2PSRR: Opcode = Opcode::new(216);
pub const OP_CVTSI2SSRM: Opcode = Opcode::new(217);
pub const OP_CVTSI2SDRM: Opcode = Opcode::new(218);
pub const OP_CVTSI642SDRM: Opcode = Opcode::new(219);
pub const OP_CVTSS2SDRM: Opcode = Opcode::new(220);
pub const OP_CVTSD2SSRM: Opcode = Opcode::new(221);
pub const OP_CVTTSS2SIRM: Opcode = Opcode::new(222);
pub const OP_CVTTSD2SIRM: Opcode = Opcode::new(223);

// System instructions with no semantic role in lifting
pub const OP_CPUID: Opcode = Opcode::new(224);
pub const OP_RDTSC: Opcode = Opcode::new(225);
pub const OP_UD2: Opcode = Opcode::new(226);

/// Every opcode the decoder can produce, in opcode order.
pub const ALL_OPCODES: &[Opcode] = &[
    // No-ops
    OP_NOOP, OP_NOOPW, OP_NOOPL, OP_NOOPQ,
    // Register and immediate moves
    OP_MOV8RR, OP_MOV16RR, OP_MOV32RR, OP_MOV64RR, OP_MOVZX32RR8, OP_MOVZX32RR16, OP_MOVSX32RR8,
    OP_MOVSX64RR32, OP_MOV8RI, OP_MOV16RI, OP_MOV32RI, OP_MOV64RI, OP_MOV64RI32,
    // Loads
    OP_MOV8RM, OP_MOV16RM, OP_MOV32RM, OP_MOV64RM, OP_MOVZX32RM8, OP_MOVZX32RM16, OP_MOVSX32RM8,
    OP_MOVSX64RM32,
    // Stores
    OP_MOV8MR, OP_MOV16MR, OP_MOV32MR, OP_MOV64MR, OP_MOV8MI, OP_MOV16MI, OP_MOV32MI,
    OP_MOV64MI32,
    // Register-register ALU
    OP_ADD32RR, OP_ADD64RR, OP_SUB32RR, OP_SUB64RR, OP_AND32RR, OP_AND64RR, OP_OR32RR,
    OP_OR64RR, OP_XOR32RR, OP_XOR64RR, OP_IMUL32RR, OP_IMUL64RR, OP_SHL32RCL, OP_SHR64RCL,
    OP_SAR32RCL,
    // Register-memory ALU
    OP_ADD32RM, OP_ADD64RM, OP_SUB32RM, OP_SUB64RM, OP_AND32RM, OP_OR64RM, OP_XOR32RM,
    OP_IMUL32RM, OP_IMUL64RM,
    // ALU with immediate
    OP_ADD32RI, OP_ADD32RI8, OP_ADD64RI8, OP_ADD64RI32, OP_SUB32RI, OP_SUB64RI8, OP_SUB64RI32,
    OP_AND32RI, OP_AND64RI8, OP_OR32RI8, OP_XOR32RI8, OP_SHL32RI, OP_SHL64RI, OP_SHR32RI,
    OP_SHR64RI, OP_SAR32RI, OP_SAR64RI, OP_IMUL32RRI, OP_IMUL64RRI32, OP_IMUL32RMI,
    // Double shifts (MRI/MRC encodings)
    OP_SHLD32RRI8, OP_SHLD64RRI8, OP_SHRD32RRI8, OP_SHLD32RRCL, OP_SHRD64RRCL,
    // Read-modify-write memory
    OP_ADD32MR, OP_ADD64MR, OP_ADD32MI8, OP_ADD64MI32, OP_SUB32MI8, OP_AND8MI, OP_OR32MR,
    OP_INC32M, OP_INC64M, OP_DEC32M, OP_NEG32M, OP_NOT64M, OP_SHL32MI,
    // Compares and tests
    OP_CMP8RR, OP_CMP32RR, OP_CMP64RR, OP_CMP8RI, OP_CMP32RI8, OP_CMP64RI8, OP_CMP64RI32,
    OP_TEST8RR, OP_TEST32RR, OP_TEST64RR, OP_TEST8RI, OP_CMP8RM, OP_CMP32RM, OP_CMP64RM,
    OP_CMP8MI, OP_CMP32MI8, OP_CMP64MI8, OP_CMP32MR, OP_TEST8MI,
    // Conditional set
    OP_SETCCR, OP_SETCCM,
    // Bit tests
    OP_BT32RR, OP_BT64RR, OP_BT32RI8, OP_BT64RI8, OP_BT32MI8,
    // Accumulator sign extensions
    OP_CBW, OP_CWDE, OP_CDQE, OP_CWD, OP_CDQ, OP_CQO,
    // Divides
    OP_DIV32R, OP_DIV64R, OP_IDIV32R, OP_IDIV64R, OP_DIV32M, OP_DIV64M, OP_IDIV32M, OP_IDIV64M,
    // Address computation and frame teardown
    OP_LEA32R, OP_LEA64R, OP_LEA64_32R, OP_LEAVE64,
    // Indirect branches through memory
    OP_JMP64M, OP_CALL64M,
    // x87
    OP_LD_F32M, OP_LD_F64M, OP_ILD_F32M, OP_ILD_F64M, OP_ST_F32M, OP_ST_F64M, OP_ST_FP32M,
    OP_ST_FP64M, OP_IST_FP64M, OP_LD_F0, OP_LD_F1, OP_ADD_FRST0, OP_ADD_FPRST0, OP_SUB_FRST0,
    OP_MUL_FRST0, OP_DIV_FRST0, OP_CHS_F, OP_ABS_F,
    // SSE arithmetic (lifted through the general ALU paths)
    OP_ADDSSRR, OP_ADDSDRR, OP_SUBSSRR, OP_SUBSDRR, OP_MULSSRR, OP_MULSDRR, OP_DIVSSRR,
    OP_DIVSDRR, OP_ADDPSRR, OP_MULPDRR, OP_XORPSRR, OP_ANDPDRR, OP_PXORRR, OP_ADDSSRM,
    OP_ADDSDRM, OP_MULSSRM, OP_MULSDRM, OP_DIVSDRM,
    // SSE moves
    OP_MOVSSRM, OP_MOVSDRM, OP_MOVDI2PDIRM, OP_MOVQI2PQIRM, OP_MOVSSMR, OP_MOVSDMR,
    OP_MOVPDI2DIMR, OP_MOVPQI2QIMR, OP_MOVSSRR, OP_MOVSDRR, OP_MOVAPSRR, OP_MOVAPDRR,
    OP_MOV64TOSDRR, OP_MOVSDTO64RR, OP_MOVDI2SSRR, OP_MOVSS2DIRR,
    // SSE compares
    OP_UCOMISSRR, OP_UCOMISDRR, OP_COMISSRR, OP_COMISDRR, OP_CMPSSRRI, OP_CMPSDRRI,
    OP_UCOMISSRM, OP_UCOMISDRM, OP_COMISDRM, OP_CMPSSRMI, OP_CMPSDRMI,
    // SSE conversions
    OP_CVTSI2SSRR, OP_CVTSI2SDRR, OP_CVTSI642SSRR, OP_CVTSI642SDRR, OP_CVTSS2SDRR,
    OP_CVTSD2SSRR, OP_CVTTSS2SIRR, OP_CVTTSD2SIRR, OP_CVTTSD2SI64RR, OP_CVTPS2PDRR,
    OP_CVTPD2PSRR, OP_CVTDQ2PSRR, OP_CVTSI2SSRM, OP_CVTSI2SDRM, OP_CVTSI642SDRM, OP_CVTSS2SDRM,
    OP_CVTSD2SSRM, OP_CVTTSS2SIRM, OP_CVTTSD2SIRM,
    // System instructions with no semantic role in lifting
    OP_CPUID, OP_RDTSC, OP_UD2,
];

/// Get mnemonic for an opcode.
#[must_use]
pub const fn opcode_mnemonic(opcode: Opcode) -> &'static str {
    match opcode {
        // No-ops
        OP_NOOP => "NOOP",
        OP_NOOPW => "NOOPW",
        OP_NOOPL => "NOOPL",
        OP_NOOPQ => "NOOPQ",
        // Register and immediate moves
        OP_MOV8RR => "MOV8rr",
        OP_MOV16RR => "MOV16rr",
        OP_MOV32RR => "MOV32rr",
        OP_MOV64RR => "MOV64rr",
        OP_MOVZX32RR8 => "MOVZX32rr8",
        OP_MOVZX32RR16 => "MOVZX32rr16",
        OP_MOVSX32RR8 => "MOVSX32rr8",
        OP_MOVSX64RR32 => "MOVSX64rr32",
        OP_MOV8RI => "MOV8ri",
        OP_MOV16RI => "MOV16ri",
        OP_MOV32RI => "MOV32ri",
        OP_MOV64RI => "MOV64ri",
        OP_MOV64RI32 => "MOV64ri32",
        // Loads
        OP_MOV8RM => "MOV8rm",
        OP_MOV16RM => "MOV16rm",
        OP_MOV32RM => "MOV32rm",
        OP_MOV64RM => "MOV64rm",
        OP_MOVZX32RM8 => "MOVZX32rm8",
        OP_MOVZX32RM16 => "MOVZX32rm16",
        OP_MOVSX32RM8 => "MOVSX32rm8",
        OP_MOVSX64RM32 => "MOVSX64rm32",
        // Stores
        OP_MOV8MR => "MOV8mr",
        OP_MOV16MR => "MOV16mr",
        OP_MOV32MR => "MOV32mr",
        OP_MOV64MR => "MOV64mr",
        OP_MOV8MI => "MOV8mi",
        OP_MOV16MI => "MOV16mi",
        OP_MOV32MI => "MOV32mi",
        OP_MOV64MI32 => "MOV64mi32",
        // Register-register ALU
        OP_ADD32RR => "ADD32rr",
        OP_ADD64RR => "ADD64rr",
        OP_SUB32RR => "SUB32rr",
        OP_SUB64RR => "SUB64rr",
        OP_AND32RR => "AND32rr",
        OP_AND64RR => "AND64rr",
        OP_OR32RR => "OR32rr",
        OP_OR64RR => "OR64rr",
        OP_XOR32RR => "XOR32rr",
        OP_XOR64RR => "XOR64rr",
        OP_IMUL32RR => "IMUL32rr",
        OP_IMUL64RR => "IMUL64rr",
        OP_SHL32RCL => "SHL32rCL",
        OP_SHR64RCL => "SHR64rCL",
        OP_SAR32RCL => "SAR32rCL",
        // Register-memory ALU
        OP_ADD32RM => "ADD32rm",
        OP_ADD64RM => "ADD64rm",
        OP_SUB32RM => "SUB32rm",
        OP_SUB64RM => "SUB64rm",
        OP_AND32RM => "AND32rm",
        OP_OR64RM => "OR64rm",
        OP_XOR32RM => "XOR32rm",
        OP_IMUL32RM => "IMUL32rm",
        OP_IMUL64RM => "IMUL64rm",
        // ALU with immediate
        OP_ADD32RI => "ADD32ri",
        OP_ADD32RI8 => "ADD32ri8",
        OP_ADD64RI8 => "ADD64ri8",
        OP_ADD64RI32 => "ADD64ri32",
        OP_SUB32RI => "SUB32ri",
        OP_SUB64RI8 => "SUB64ri8",
        OP_SUB64RI32 => "SUB64ri32",
        OP_AND32RI => "AND32ri",
        OP_AND64RI8 => "AND64ri8",
        OP_OR32RI8 => "OR32ri8",
        OP_XOR32RI8 => "XOR32ri8",
        OP_SHL32RI => "SHL32ri",
        OP_SHL64RI => "SHL64ri",
        OP_SHR32RI => "SHR32ri",
        OP_SHR64RI => "SHR64ri",
        OP_SAR32RI => "SAR32ri",
        OP_SAR64RI => "SAR64ri",
        OP_IMUL32RRI => "IMUL32rri",
        OP_IMUL64RRI32 => "IMUL64rri32",
        OP_IMUL32RMI => "IMUL32rmi",
        // Double shifts (MRI/MRC encodings)
        OP_SHLD32RRI8 => "SHLD32rri8",
        OP_SHLD64RRI8 => "SHLD64rri8",
        OP_SHRD32RRI8 => "SHRD32rri8",
        OP_SHLD32RRCL => "SHLD32rrCL",
        OP_SHRD64RRCL => "SHRD64rrCL",
        // Read-modify-write memory
        OP_ADD32MR => "ADD32mr",
        OP_ADD64MR => "ADD64mr",
        OP_ADD32MI8 => "ADD32mi8",
        OP_ADD64MI32 => "ADD64mi32",
        OP_SUB32MI8 => "SUB32mi8",
        OP_AND8MI => "AND8mi",
        OP_OR32MR => "OR32mr",
        OP_INC32M => "INC32m",
        OP_INC64M => "INC64m",
        OP_DEC32M => "DEC32m",
        OP_NEG32M => "NEG32m",
        OP_NOT64M => "NOT64m",
        OP_SHL32MI => "SHL32mi",
        // Compares and tests
        OP_CMP8RR => "CMP8rr",
        OP_CMP32RR => "CMP32rr",
        OP_CMP64RR => "CMP64rr",
        OP_CMP8RI => "CMP8ri",
        OP_CMP32RI8 => "CMP32ri8",
        OP_CMP64RI8 => "CMP64ri8",
        OP_CMP64RI32 => "CMP64ri32",
        OP_TEST8RR => "TEST8rr",
        OP_TEST32RR => "TEST32rr",
        OP_TEST64RR => "TEST64rr",
        OP_TEST8RI => "TEST8ri",
        OP_CMP8RM => "CMP8rm",
        OP_CMP32RM => "CMP32rm",
        OP_CMP64RM => "CMP64rm",
        OP_CMP8MI => "CMP8mi",
        OP_CMP32MI8 => "CMP32mi8",
        OP_CMP64MI8 => "CMP64mi8",
        OP_CMP32MR => "CMP32mr",
        OP_TEST8MI => "TEST8mi",
        // Conditional set
        OP_SETCCR => "SETCCr",
        OP_SETCCM => "SETCCm",
        // Bit tests
        OP_BT32RR => "BT32rr",
        OP_BT64RR => "BT64rr",
        OP_BT32RI8 => "BT32ri8",
        OP_BT64RI8 => "BT64ri8",
        OP_BT32MI8 => "BT32mi8",
        // Accumulator sign extensions
        OP_CBW => "CBW",
        OP_CWDE => "CWDE",
        OP_CDQE => "CDQE",
        OP_CWD => "CWD",
        OP_CDQ => "CDQ",
        OP_CQO => "CQO",
        // Divides
        OP_DIV32R => "DIV32r",
        OP_DIV64R => "DIV64r",
        OP_IDIV32R => "IDIV32r",
        OP_IDIV64R => "IDIV64r",
        OP_DIV32M => "DIV32m",
        OP_DIV64M => "DIV64m",
        OP_IDIV32M => "IDIV32m",
        OP_IDIV64M => "IDIV64m",
        // Address computation and frame teardown
        OP_LEA32R => "LEA32r",
        OP_LEA64R => "LEA64r",
        OP_LEA64_32R => "LEA64_32r",
        OP_LEAVE64 => "LEAVE64",
        // Indirect branches through memory
        OP_JMP64M => "JMP64m",
        OP_CALL64M => "CALL64m",
        // x87
        OP_LD_F32M => "LD_F32m",
        OP_LD_F64M => "LD_F64m",
        OP_ILD_F32M => "ILD_F32m",
        OP_ILD_F64M => "ILD_F64m",
        OP_ST_F32M => "ST_F32m",
        OP_ST_F64M => "ST_F64m",
        OP_ST_FP32M => "ST_FP32m",
        OP_ST_FP64M => "ST_FP64m",
        OP_IST_FP64M => "IST_FP64m",
        OP_LD_F0 => "LD_F0",
        OP_LD_F1 => "LD_F1",
        OP_ADD_FRST0 => "ADD_FrST0",
        OP_ADD_FPRST0 => "ADD_FPrST0",
        OP_SUB_FRST0 => "SUB_FrST0",
        OP_MUL_FRST0 => "MUL_FrST0",
        OP_DIV_FRST0 => "DIV_FrST0",
        OP_CHS_F => "CHS_F",
        OP_ABS_F => "ABS_F",
        // SSE arithmetic (lifted through the general ALU paths)
        OP_ADDSSRR => "ADDSSrr",
        OP_ADDSDRR => "ADDSDrr",
        OP_SUBSSRR => "SUBSSrr",
        OP_SUBSDRR => "SUBSDrr",
        OP_MULSSRR => "MULSSrr",
        OP_MULSDRR => "MULSDrr",
        OP_DIVSSRR => "DIVSSrr",
        OP_DIVSDRR => "DIVSDrr",
        OP_ADDPSRR => "ADDPSrr",
        OP_MULPDRR => "MULPDrr",
        OP_XORPSRR => "XORPSrr",
        OP_ANDPDRR => "ANDPDrr",
        OP_PXORRR => "PXORrr",
        OP_ADDSSRM => "ADDSSrm",
        OP_ADDSDRM => "ADDSDrm",
        OP_MULSSRM => "MULSSrm",
        OP_MULSDRM => "MULSDrm",
        OP_DIVSDRM => "DIVSDrm",
        // SSE moves
        OP_MOVSSRM => "MOVSSrm",
        OP_MOVSDRM => "MOVSDrm",
        OP_MOVDI2PDIRM => "MOVDI2PDIrm",
        OP_MOVQI2PQIRM => "MOVQI2PQIrm",
        OP_MOVSSMR => "MOVSSmr",
        OP_MOVSDMR => "MOVSDmr",
        OP_MOVPDI2DIMR => "MOVPDI2DImr",
        OP_MOVPQI2QIMR => "MOVPQI2QImr",
        OP_MOVSSRR => "MOVSSrr",
        OP_MOVSDRR => "MOVSDrr",
        OP_MOVAPSRR => "MOVAPSrr",
        OP_MOVAPDRR => "MOVAPDrr",
        OP_MOV64TOSDRR => "MOV64toSDrr",
        OP_MOVSDTO64RR => "MOVSDto64rr",
        OP_MOVDI2SSRR => "MOVDI2SSrr",
        OP_MOVSS2DIRR => "MOVSS2DIrr",
        // SSE compares
        OP_UCOMISSRR => "UCOMISSrr",
        OP_UCOMISDRR => "UCOMISDrr",
        OP_COMISSRR => "COMISSrr",
        OP_COMISDRR => "COMISDrr",
        OP_CMPSSRRI => "CMPSSrri",
        OP_CMPSDRRI => "CMPSDrri",
        OP_UCOMISSRM => "UCOMISSrm",
        OP_UCOMISDRM => "UCOMISDrm",
        OP_COMISDRM => "COMISDrm",
        OP_CMPSSRMI => "CMPSSrmi",
        OP_CMPSDRMI => "CMPSDrmi",
        // SSE conversions
        OP_CVTSI2SSRR => "CVTSI2SSrr",
        OP_CVTSI2SDRR => "CVTSI2SDrr",
        OP_CVTSI642SSRR => "CVTSI642SSrr",
        OP_CVTSI642SDRR => "CVTSI642SDrr",
        OP_CVTSS2SDRR => "CVTSS2SDrr",
        OP_CVTSD2SSRR => "CVTSD2SSrr",
        OP_CVTTSS2SIRR => "CVTTSS2SIrr",
        OP_CVTTSD2SIRR => "CVTTSD2SIrr",
        OP_CVTTSD2SI64RR => "CVTTSD2SI64rr",
        OP_CVTPS2PDRR => "CVTPS2PDrr",
        OP_CVTPD2PSRR => "CVTPD2PSrr",
        OP_CVTDQ2PSRR => "CVTDQ2PSrr",
        OP_CVTSI2SSRM => "CVTSI2SSrm",
        OP_CVTSI2SDRM => "CVTSI2SDrm",
        OP_CVTSI642SDRM => "CVTSI642SDrm",
        OP_CVTSS2SDRM => "CVTSS2SDrm",
        OP_CVTSD2SSRM => "CVTSD2SSrm",
        OP_CVTTSS2SIRM => "CVTTSS2SIrm",
        OP_CVTTSD2SIRM => "CVTTSD2SIrm",
        // System instructions with no semantic role in lifting
        OP_CPUID => "CPUID",
        OP_RDTSC => "RDTSC",
        OP_UD2 => "UD2",
        _ => "<unknown>",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_raw_roundtrip() {
        let op = Opcode::from(21u16);
        assert_eq!(op, OP_MOV64RM);
        assert_eq!(u16::from(op), 21);
        assert_eq!(op.raw(), 21);
    }

    #[test]
    fn test_mnemonic() {
        assert_eq!(OP_MOV64RM.mnemonic(), "MOV64rm");
        assert_eq!(OP_CVTSI2SDRR.mnemonic(), "CVTSI2SDrr");
        assert_eq!(OP_ADD_FPRST0.mnemonic(), "ADD_FPrST0");
        assert_eq!(Opcode::new(0).mnemonic(), "<unknown>");
    }

    #[test]
    fn test_display() {
        assert_eq!(OP_MOV64RM.to_string(), "MOV64rm(#21)");
        assert_eq!(Opcode::new(0xFFFF).to_string(), "<unknown>(#65535)");
    }

    #[test]
    fn test_all_opcodes_sorted_and_unique() {
        assert!(ALL_OPCODES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_all_opcodes_named() {
        for &op in ALL_OPCODES {
            assert!(op.is_known());
            assert_ne!(op.mnemonic(), "<unknown>", "opcode #{} has no mnemonic", op.raw());
        }
        assert!(!Opcode::new(0).is_known());
    }
}
