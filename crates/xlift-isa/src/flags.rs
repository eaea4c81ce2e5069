//! Per-instruction encoding flags (`TSFlags` layout of the target description).
//!
//! Only the two sub-fields needed to recover floating-point precision are
//! given typed accessors. All other bits are carried through untouched.

use std::fmt::{self, Display};

/// Mandatory prefix sub-field (bits [12:11]).
pub const OP_PREFIX_SHIFT: u32 = 11;
pub const OP_PREFIX_MASK: u64 = 0b11 << OP_PREFIX_SHIFT;

/// Packed-operand domain sub-field (bits [28:27]).
pub const SSE_DOMAIN_SHIFT: u32 = 27;
pub const SSE_DOMAIN_MASK: u64 = 0b11 << SSE_DOMAIN_SHIFT;

/// Mandatory opcode prefix recorded in the encoding flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum OpPrefix {
    /// No mandatory prefix.
    None,
    /// 0x66
    Pd,
    /// 0xF3, scalar single-precision forms.
    Xs,
    /// 0xF2, scalar double-precision forms.
    Xd,
}

impl OpPrefix {
    const fn field(self) -> u64 {
        match self {
            Self::None => 0,
            Self::Pd => 1,
            Self::Xs => 2,
            Self::Xd => 3,
        }
    }
}

/// Packed-operand execution domain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SseDomain {
    /// Not an SSE instruction.
    Generic,
    PackedSingle,
    PackedDouble,
    PackedInt,
}

impl SseDomain {
    const fn field(self) -> u64 {
        match self {
            Self::Generic => 0,
            Self::PackedSingle => 1,
            Self::PackedDouble => 2,
            Self::PackedInt => 3,
        }
    }
}

/// Encoding flags from the decoder's instruction descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct EncodingFlags(u64);

impl EncodingFlags {
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Extract the mandatory prefix sub-field.
    #[must_use]
    pub const fn op_prefix(self) -> OpPrefix {
        match (self.0 & OP_PREFIX_MASK) >> OP_PREFIX_SHIFT {
            0 => OpPrefix::None,
            1 => OpPrefix::Pd,
            2 => OpPrefix::Xs,
            _ => OpPrefix::Xd,
        }
    }

    /// Extract the packed-operand domain sub-field.
    #[must_use]
    pub const fn sse_domain(self) -> SseDomain {
        match (self.0 & SSE_DOMAIN_MASK) >> SSE_DOMAIN_SHIFT {
            0 => SseDomain::Generic,
            1 => SseDomain::PackedSingle,
            2 => SseDomain::PackedDouble,
            _ => SseDomain::PackedInt,
        }
    }

    /// Replace the mandatory prefix sub-field, keeping all other bits.
    #[must_use]
    pub const fn with_op_prefix(self, prefix: OpPrefix) -> Self {
        Self((self.0 & !OP_PREFIX_MASK) | (prefix.field() << OP_PREFIX_SHIFT))
    }

    /// Replace the packed-operand domain sub-field, keeping all other bits.
    #[must_use]
    pub const fn with_sse_domain(self, domain: SseDomain) -> Self {
        Self((self.0 & !SSE_DOMAIN_MASK) | (domain.field() << SSE_DOMAIN_SHIFT))
    }
}

impl From<u64> for EncodingFlags {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl Display for EncodingFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#x} (prefix={:?}, domain={:?})",
            self.0,
            self.op_prefix(),
            self.sse_domain()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_extraction() {
        // XS prefix with packed-single domain
        let flags = EncodingFlags::from_bits((2 << 11) | (1 << 27));
        assert_eq!(flags.op_prefix(), OpPrefix::Xs);
        assert_eq!(flags.sse_domain(), SseDomain::PackedSingle);

        let flags = EncodingFlags::from_bits(0);
        assert_eq!(flags.op_prefix(), OpPrefix::None);
        assert_eq!(flags.sse_domain(), SseDomain::Generic);
    }

    #[test]
    fn test_builders_preserve_other_bits() {
        // Form and REX.W bits set
        let base = EncodingFlags::from_bits(0x45 | (1 << 17));
        let flags = base
            .with_op_prefix(OpPrefix::Xd)
            .with_sse_domain(SseDomain::PackedDouble);
        assert_eq!(flags.op_prefix(), OpPrefix::Xd);
        assert_eq!(flags.sse_domain(), SseDomain::PackedDouble);
        assert_eq!(flags.bits() & !(OP_PREFIX_MASK | SSE_DOMAIN_MASK), base.bits());

        let cleared = flags
            .with_op_prefix(OpPrefix::None)
            .with_sse_domain(SseDomain::Generic);
        assert_eq!(cleared, base);
    }

    #[test]
    fn test_neighbouring_bits_ignored() {
        // OpSize (bits 8:7) and OpMap (bits 16:13) surround the prefix field,
        // REP (bit 26) and encoding (bits 30:29) surround the domain field.
        let noise = (0b11 << 7) | (0xF << 13) | (1 << 26) | (0b11 << 29);
        let flags = EncodingFlags::from_bits(noise);
        assert_eq!(flags.op_prefix(), OpPrefix::None);
        assert_eq!(flags.sse_domain(), SseDomain::Generic);
    }

    #[test]
    fn test_display() {
        let flags = EncodingFlags::default().with_op_prefix(OpPrefix::Xs);
        assert_eq!(flags.to_string(), "0x1000 (prefix=Xs, domain=Generic)");
    }
}
