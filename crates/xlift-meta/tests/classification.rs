//! Whole-opcode-space checks of the built-in classification table.

use std::thread;

use xlift_isa::{ALL_OPCODES, EncodingFlags, OpPrefix, Opcode, SseDomain};
use xlift_meta::{
    ClassificationTable, InstructionKind, MetadataError, Precision, classify, is_noop,
    is_simd_float_instruction, mem_op_size, try_precision,
};

const SIMD_FLOAT_KINDS: &[InstructionKind] = &[
    InstructionKind::SseMovToMem,
    InstructionKind::SseMovFromMem,
    InstructionKind::SseMovRr,
    InstructionKind::SseCompareRr,
    InstructionKind::SseCompareRm,
    InstructionKind::SseConvertRr,
    InstructionKind::SseConvertRm,
];

#[test]
fn every_opcode_is_classified() {
    let table = ClassificationTable::builtin();
    for &opcode in ALL_OPCODES {
        assert!(table.try_lookup(opcode).is_ok(), "{opcode} missing");
    }
    assert_eq!(table.len(), ALL_OPCODES.len());
}

#[test]
fn answers_are_stable() {
    for &opcode in ALL_OPCODES {
        let first = (classify(opcode), mem_op_size(opcode));
        for _ in 0..3 {
            assert_eq!((classify(opcode), mem_op_size(opcode)), first);
        }
    }
}

#[test]
fn mem_op_size_is_well_formed() {
    for &opcode in ALL_OPCODES {
        let size = mem_op_size(opcode);
        assert!(matches!(size, 0 | 1 | 2 | 4 | 8), "{opcode}: {size}");
        let record = ClassificationTable::builtin().lookup(opcode);
        assert_eq!(size == 0, !record.has_memory_operand());
    }
}

#[test]
fn simd_float_iff_sse_kind() {
    for &opcode in ALL_OPCODES {
        let kind = classify(opcode);
        assert_eq!(
            is_simd_float_instruction(opcode),
            SIMD_FLOAT_KINDS.contains(&kind),
            "{opcode} classified as {kind}"
        );
    }
}

#[test]
fn noop_iff_noop_kind() {
    let mut noops = 0;
    for &opcode in ALL_OPCODES {
        let kind = classify(opcode);
        assert_eq!(is_noop(opcode), kind == InstructionKind::Noop);
        if is_noop(opcode) {
            noops += 1;
        }
    }
    assert_eq!(noops, 4);
}

#[test]
fn unknown_opcode_is_recoverable_through_try_lookup() {
    let opcode = Opcode::new(0xFFFF);
    assert_eq!(
        ClassificationTable::builtin().try_lookup(opcode),
        Err(MetadataError::UnknownOpcode { opcode })
    );
}

#[test]
#[should_panic(expected = "out of sync with the decoder")]
fn unknown_opcode_is_fatal() {
    let _ = is_noop(Opcode::new(0xFFFF));
}

#[test]
#[should_panic(expected = "unknown opcode")]
fn unknown_opcode_is_fatal_for_simd_query() {
    let _ = is_simd_float_instruction(Opcode::new(0));
}

#[test]
fn precision_is_pure() {
    let cases = [
        (OpPrefix::Xs, SseDomain::Generic, Precision::Single),
        (OpPrefix::Xd, SseDomain::Generic, Precision::Double),
        (OpPrefix::None, SseDomain::PackedSingle, Precision::Single),
        (OpPrefix::None, SseDomain::PackedInt, Precision::Single),
        (OpPrefix::None, SseDomain::PackedDouble, Precision::Double),
        (OpPrefix::Pd, SseDomain::PackedDouble, Precision::Double),
    ];
    for (prefix, domain, expected) in cases {
        // Unrelated bits must not change the answer
        for noise in [0u64, 0x7F, 1 << 17, u64::MAX << 31] {
            let flags = EncodingFlags::from_bits(noise)
                .with_op_prefix(prefix)
                .with_sse_domain(domain);
            assert_eq!(try_precision(flags), Ok(expected), "{flags}");
        }
    }
}

#[test]
fn concurrent_queries_agree() {
    let expected: Vec<(InstructionKind, u8)> = ALL_OPCODES
        .iter()
        .map(|&op| (classify(op), mem_op_size(op)))
        .collect();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                let table = ClassificationTable::builtin();
                for (opcode, want) in ALL_OPCODES.iter().zip(&expected) {
                    let rec = table.lookup(*opcode);
                    assert_eq!((rec.kind, rec.mem_op_size.bytes()), *want);
                }
            });
        }
    });
}
