//! Opcode classification table.
//!
//! The built-in table is assembled once, on first use, from the authored
//! entry list and is read-only afterwards. Queries never take a lock.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::{debug, debug_span, error, warn};
use xlift_isa::Opcode;

use crate::entries::BUILTIN_ENTRIES;
use crate::{
    ClassificationRecord, Inconsistency, InstructionKind, MemOpSize, MemoryForm, MetadataError,
    Result,
};

static BUILTIN: OnceLock<ClassificationTable> = OnceLock::new();

/// Immutable mapping from opcode to classification record.
#[derive(Clone, Debug, Default)]
pub struct ClassificationTable {
    records: FxHashMap<Opcode, ClassificationRecord>,
}

impl ClassificationTable {
    /// Assemble a table from an authored entry list.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::DuplicateEntry`] if an opcode appears twice.
    pub fn build(entries: &[(Opcode, ClassificationRecord)]) -> Result<Self> {
        let mut records: FxHashMap<Opcode, ClassificationRecord> = FxHashMap::default();
        records.reserve(entries.len());
        for &(opcode, record) in entries {
            if records.insert(opcode, record).is_some() {
                return Err(MetadataError::DuplicateEntry { opcode });
            }
        }
        Ok(Self { records })
    }

    /// The process-wide table for the supported opcode space.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in entry list is inconsistent.
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| {
            let _span = debug_span!("classification_table").entered();
            let table = Self::build(BUILTIN_ENTRIES).unwrap_or_else(|err| {
                error!("{err}");
                panic!("{err}");
            });
            debug!(entries = table.len(), "classification table initialized");
            table
        })
    }

    /// Look up the record for an opcode.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownOpcode`] if the opcode has no entry.
    pub fn try_lookup(&self, opcode: Opcode) -> Result<ClassificationRecord> {
        self.records
            .get(&opcode)
            .copied()
            .ok_or(MetadataError::UnknownOpcode { opcode })
    }

    /// Look up the record for an opcode.
    ///
    /// # Panics
    ///
    /// Panics if the opcode has no entry: the table is out of sync with the
    /// decoder and any answer would misclassify the instruction.
    #[must_use]
    pub fn lookup(&self, opcode: Opcode) -> ClassificationRecord {
        self.try_lookup(opcode).unwrap_or_else(|err| {
            error!(opcode = opcode.raw(), mnemonic = opcode.mnemonic(), "{err}");
            panic!("{err}");
        })
    }

    /// Semantic kind of an opcode. Fatal if absent.
    #[must_use]
    pub fn kind(&self, opcode: Opcode) -> InstructionKind {
        self.lookup(opcode).kind
    }

    /// Memory operand size in bytes (0, 1, 2, 4 or 8). Fatal if absent.
    #[must_use]
    pub fn mem_op_size(&self, opcode: Opcode) -> u8 {
        self.lookup(opcode).mem_op_size.bytes()
    }

    #[must_use]
    pub fn is_noop(&self, opcode: Opcode) -> bool {
        self.kind(opcode) == InstructionKind::Noop
    }

    #[must_use]
    pub fn is_simd_float_instruction(&self, opcode: Opcode) -> bool {
        self.kind(opcode).is_simd_float()
    }

    #[must_use]
    pub fn contains(&self, opcode: Opcode) -> bool {
        self.records.contains_key(&opcode)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all entries in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = (Opcode, ClassificationRecord)> + '_ {
        let mut opcodes: Vec<Opcode> = self.records.keys().copied().collect();
        opcodes.sort_unstable();
        opcodes
            .into_iter()
            .filter_map(move |opcode| self.records.get(&opcode).map(|rec| (opcode, *rec)))
    }

    /// Check the table against the decoder's opcode space and the memory form
    /// each kind implies.
    ///
    /// # Errors
    ///
    /// Returns every inconsistency found, missing opcodes first.
    pub fn validate(&self, opcode_space: &[Opcode]) -> std::result::Result<(), Vec<Inconsistency>> {
        let mut problems: Vec<Inconsistency> = opcode_space
            .iter()
            .filter(|opcode| !self.contains(**opcode))
            .map(|&opcode| Inconsistency::Missing(opcode))
            .collect();

        for (opcode, record) in self.iter() {
            let kind = record.kind;
            match (kind.memory_form(), record.mem_op_size) {
                (MemoryForm::Memory, MemOpSize::None) => {
                    problems.push(Inconsistency::MemoryKindWithoutSize { opcode, kind });
                }
                (MemoryForm::Register, size) if size != MemOpSize::None => {
                    problems.push(Inconsistency::RegisterKindWithSize {
                        opcode,
                        kind,
                        bytes: size.bytes(),
                    });
                }
                _ => {}
            }
        }

        for problem in &problems {
            warn!("{problem}");
        }
        debug!(
            entries = self.len(),
            opcodes = opcode_space.len(),
            problems = problems.len(),
            "classification table validated"
        );

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xlift_isa::{ALL_OPCODES, OP_ADD32RR, OP_MOV64RM, OP_MOVSDRR, OP_NOOP};

    fn rec(size: MemOpSize, kind: InstructionKind) -> ClassificationRecord {
        ClassificationRecord::new(size, kind)
    }

    #[test]
    fn test_build_and_lookup() {
        let table = ClassificationTable::build(&[
            (OP_NOOP, rec(MemOpSize::None, InstructionKind::Noop)),
            (OP_MOV64RM, rec(MemOpSize::Qword, InstructionKind::MovFromMem)),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.contains(OP_NOOP));
        assert!(!table.contains(OP_ADD32RR));
        assert_eq!(table.mem_op_size(OP_MOV64RM), 8);
        assert_eq!(table.kind(OP_MOV64RM), InstructionKind::MovFromMem);
        assert!(table.is_noop(OP_NOOP));
        assert!(!table.is_noop(OP_MOV64RM));
    }

    #[test]
    fn test_build_rejects_duplicates() {
        let err = ClassificationTable::build(&[
            (OP_NOOP, rec(MemOpSize::None, InstructionKind::Noop)),
            (OP_NOOP, rec(MemOpSize::Word, InstructionKind::Noop)),
        ])
        .unwrap_err();
        assert_eq!(err, MetadataError::DuplicateEntry { opcode: OP_NOOP });
    }

    #[test]
    fn test_try_lookup_missing() {
        let table = ClassificationTable::default();
        assert!(table.is_empty());
        assert_eq!(
            table.try_lookup(OP_ADD32RR),
            Err(MetadataError::UnknownOpcode { opcode: OP_ADD32RR })
        );
    }

    #[test]
    #[should_panic(expected = "unknown opcode ADD32rr")]
    fn test_lookup_missing_is_fatal() {
        let _ = ClassificationTable::default().lookup(OP_ADD32RR);
    }

    #[test]
    fn test_iter_in_opcode_order() {
        let table = ClassificationTable::builtin();
        let opcodes: Vec<Opcode> = table.iter().map(|(opcode, _)| opcode).collect();
        assert_eq!(opcodes.len(), table.len());
        assert!(opcodes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(
            ClassificationTable::builtin(),
            ClassificationTable::builtin()
        ));
    }

    #[test]
    fn test_builtin_validates() {
        assert_eq!(ClassificationTable::builtin().validate(ALL_OPCODES), Ok(()));
    }

    #[test]
    fn test_validate_reports_problems() {
        let table = ClassificationTable::build(&[
            (OP_NOOP, rec(MemOpSize::None, InstructionKind::Noop)),
            (OP_MOV64RM, rec(MemOpSize::None, InstructionKind::MovFromMem)),
            (OP_MOVSDRR, rec(MemOpSize::Dword, InstructionKind::SseMovRr)),
        ])
        .unwrap();

        let problems = table
            .validate(&[OP_NOOP, OP_ADD32RR, OP_MOV64RM, OP_MOVSDRR])
            .unwrap_err();
        assert_eq!(
            problems,
            vec![
                Inconsistency::Missing(OP_ADD32RR),
                Inconsistency::MemoryKindWithoutSize {
                    opcode: OP_MOV64RM,
                    kind: InstructionKind::MovFromMem,
                },
                Inconsistency::RegisterKindWithSize {
                    opcode: OP_MOVSDRR,
                    kind: InstructionKind::SseMovRr,
                    bytes: 4,
                },
            ]
        );
    }
}
