//! Floating-point operand precision from encoding flags.

use tracing::error;
use xlift_isa::{EncodingFlags, OpPrefix, SseDomain};

use crate::{MetadataError, Result};

/// Floating-point operand precision.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Precision {
    /// 32-bit.
    Single,
    /// 64-bit.
    Double,
}

impl Precision {
    /// Precision in bits (32 or 64).
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Single => 32,
            Self::Double => 64,
        }
    }
}

/// Determine operand precision, or report that the flags do not describe a
/// floating-point instruction.
///
/// Scalar prefixes win over the domain field, since some encodings set both.
/// Packed-integer instructions report [`Precision::Single`] (32-bit lanes).
///
/// # Errors
///
/// Returns [`MetadataError::NotFloatingPoint`] when neither scalar prefix is
/// present and the domain is [`SseDomain::Generic`].
pub const fn try_precision(flags: EncodingFlags) -> Result<Precision> {
    match flags.op_prefix() {
        OpPrefix::Xs => return Ok(Precision::Single),
        OpPrefix::Xd => return Ok(Precision::Double),
        OpPrefix::None | OpPrefix::Pd => {}
    }
    // TODO: confirm with the target maintainers whether packed-integer should
    // keep sharing the packed-single answer.
    match flags.sse_domain() {
        SseDomain::PackedSingle | SseDomain::PackedInt => Ok(Precision::Single),
        SseDomain::PackedDouble => Ok(Precision::Double),
        SseDomain::Generic => Err(MetadataError::NotFloatingPoint { flags }),
    }
}

/// Determine operand precision of a floating-point instruction.
///
/// # Panics
///
/// Panics if the flags do not describe a floating-point instruction; callers
/// must only ask for instructions already known to carry FP operands.
#[must_use]
pub fn precision(flags: EncodingFlags) -> Precision {
    try_precision(flags).unwrap_or_else(|err| {
        error!(flags = flags.bits(), "{err}");
        panic!("{err}");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(prefix: OpPrefix, domain: SseDomain) -> EncodingFlags {
        EncodingFlags::default()
            .with_op_prefix(prefix)
            .with_sse_domain(domain)
    }

    #[test]
    fn test_scalar_prefix() {
        assert_eq!(precision(flags(OpPrefix::Xs, SseDomain::Generic)), Precision::Single);
        assert_eq!(precision(flags(OpPrefix::Xd, SseDomain::Generic)), Precision::Double);
    }

    #[test]
    fn test_prefix_beats_domain() {
        // CVTSS2SD-style: XS prefix, packed-double domain
        assert_eq!(precision(flags(OpPrefix::Xs, SseDomain::PackedDouble)), Precision::Single);
        assert_eq!(precision(flags(OpPrefix::Xd, SseDomain::PackedSingle)), Precision::Double);
        assert_eq!(precision(flags(OpPrefix::Xd, SseDomain::PackedInt)), Precision::Double);
    }

    #[test]
    fn test_packed_domain() {
        assert_eq!(precision(flags(OpPrefix::None, SseDomain::PackedSingle)), Precision::Single);
        assert_eq!(precision(flags(OpPrefix::None, SseDomain::PackedDouble)), Precision::Double);
        assert_eq!(precision(flags(OpPrefix::None, SseDomain::PackedInt)), Precision::Single);
        // 0x66 is not a scalar marker, the domain decides
        assert_eq!(precision(flags(OpPrefix::Pd, SseDomain::PackedDouble)), Precision::Double);
        assert_eq!(precision(flags(OpPrefix::Pd, SseDomain::PackedInt)), Precision::Single);
    }

    #[test]
    fn test_bits() {
        assert_eq!(Precision::Single.bits(), 32);
        assert_eq!(Precision::Double.bits(), 64);
    }

    #[test]
    fn test_try_precision_generic() {
        let generic = flags(OpPrefix::Pd, SseDomain::Generic);
        assert_eq!(
            try_precision(generic),
            Err(MetadataError::NotFloatingPoint { flags: generic })
        );
        assert!(try_precision(EncodingFlags::default()).is_err());
    }

    #[test]
    #[should_panic(expected = "unknown precision in instruction encoding")]
    fn test_precision_generic_is_fatal() {
        let _ = precision(flags(OpPrefix::None, SseDomain::Generic));
    }
}
