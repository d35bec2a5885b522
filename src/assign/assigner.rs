use crate::{
    assign::{Collision, Opcode, UniquenessError},
    common::{List, OpcodeRepr},
    isa::{Bucket, BucketSet, Instruction, Isa},
};
use rustc_hash::FxHashMap;

impl Isa<'_> {
    /// Tests `instruction` against every bucket in index order.
    #[must_use]
    pub fn bucket_set(&self, instruction: Instruction) -> BucketSet {
        Bucket::ALL
            .into_iter()
            .filter(|&bucket| self.in_bucket(bucket, instruction))
            .fold(BucketSet::EMPTY, |set, bucket| set | bucket.flag())
    }

    /// The rank of `instruction` among the listed instructions that share its
    /// bucket set and have a lower ordinal.
    #[must_use]
    pub fn class_index(&self, instruction: Instruction) -> OpcodeRepr {
        let buckets = self.bucket_set(instruction);
        let preceding = self
            .instructions()
            .iter()
            .filter(|&&other| other < instruction && self.bucket_set(other) == buckets)
            .count();
        OpcodeRepr::try_from(preceding).unwrap_or(OpcodeRepr::MAX)
    }

    #[must_use]
    pub fn opcode(&self, instruction: Instruction) -> Opcode {
        Opcode::new(self.class_index(instruction), self.bucket_set(instruction))
    }

    /// The highest opcode of any listed instruction; zero for an empty list.
    #[must_use]
    pub fn max_opcode(&self) -> Opcode {
        self.instructions()
            .iter()
            .map(|&instr| self.opcode(instr))
            .max()
            .unwrap_or(Opcode::from_raw(0))
    }

    /// Bits needed to encode every opcode of this instruction set.
    #[must_use]
    pub fn opcode_bit_width(&self) -> u32 {
        self.max_opcode().bit_length()
    }

    /// Derives every opcode from scratch and rejects any duplicates.
    ///
    /// # Errors
    /// Lists every opcode that was handed out more than once, together with
    /// the instructions that received it.
    pub fn verify_uniqueness(&self) -> Result<(), UniquenessError> {
        let assigned = self
            .instructions()
            .iter()
            .map(|&instr| (self.opcode(instr), instr));
        check_collisions(assigned)
    }

    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.verify_uniqueness().is_ok()
    }
}

pub(super) fn check_collisions(
    assigned: impl Iterator<Item = (Opcode, Instruction)>,
) -> Result<(), UniquenessError> {
    let mut by_opcode = FxHashMap::<Opcode, List<Instruction>>::default();
    for (opcode, instr) in assigned {
        by_opcode.entry(opcode).or_default().push(instr);
    }

    let mut collisions: Vec<_> = by_opcode
        .into_iter()
        .filter(|(_, instructions)| instructions.len() > 1)
        .map(|(opcode, instructions)| Collision {
            opcode,
            instructions,
        })
        .collect();
    if collisions.is_empty() {
        return Ok(());
    }

    collisions.sort_unstable_by_key(|collision| collision.opcode);
    tracing::error!(count = collisions.len(), "opcode collisions detected");
    Err(UniquenessError { collisions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::{BucketMembers, BUCKET_TABLE};
    use Instruction::*;

    #[test]
    fn bucket_sets() {
        let isa = Isa::DEFAULT;
        assert_eq!(isa.bucket_set(Halt), BucketSet::EMPTY);
        assert_eq!(isa.bucket_set(Push), BucketSet::HAS_ARG);
        assert_eq!(isa.bucket_set(WriteIo), BucketSet::SHRINK_STACK);
        assert_eq!(isa.bucket_set(Split), BucketSet::U32);
    }

    #[test]
    fn fifth_bucketless_instruction() {
        // halt, divine, nop, return, recurse
        let isa = Isa::DEFAULT;
        assert_eq!(isa.bucket_set(Recurse), BucketSet::EMPTY);
        assert_eq!(isa.class_index(Recurse), 4);
        assert_eq!(isa.opcode(Recurse).value(), 4 * 8);
    }

    #[test]
    fn max_opcode() {
        let isa = Isa::DEFAULT;
        assert_eq!(isa.max_opcode().value(), 112);
        assert_eq!(isa.opcode(ReadIo).value(), 112);
        assert_eq!(isa.opcode_bit_width(), 7);
    }

    #[test]
    fn empty_instruction_list() {
        let isa = Isa::new(&[], BUCKET_TABLE);
        assert_eq!(isa.max_opcode().value(), 0);
        assert_eq!(isa.opcode_bit_width(), 1);
        assert!(isa.is_unique());
    }

    #[test]
    fn default_set_is_unique() {
        assert_eq!(Isa::DEFAULT.verify_uniqueness(), Ok(()));
    }

    #[test]
    fn repeated_instruction_collides() {
        let isa = Isa::new(&[Halt, Push, Push, Dup], BUCKET_TABLE);
        let err = isa.verify_uniqueness().unwrap_err();
        assert_eq!(err.collisions.len(), 1);
        assert_eq!(err.collisions[0].opcode.value(), 1);
        assert_eq!(err.collisions[0].instructions.as_slice(), [Push, Push]);
        // Both copies of `push` precede `dup`.
        assert_eq!(isa.opcode(Dup), Opcode::new(2, BucketSet::HAS_ARG));
    }

    #[test]
    fn class_index_ignores_list_position() {
        let table = [BucketMembers {
            bucket: Bucket::U32,
            members: &[Lt, Div],
        }];
        let isa = Isa::new(&[Div, Halt, Lt], &table);
        assert_eq!(isa.opcode(Lt), Opcode::new(0, BucketSet::U32));
        assert_eq!(isa.opcode(Div), Opcode::new(1, BucketSet::U32));
        assert_eq!(isa.opcode(Halt).value(), 0);
    }
}
