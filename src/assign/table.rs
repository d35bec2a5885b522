use crate::{
    assign::{assigner::check_collisions, Opcode, UniquenessError},
    common::OpcodeRepr,
    isa::{BucketSet, Instruction, Isa},
};
use rustc_hash::FxHashMap;

lazy_static::lazy_static! {
    static ref STANDARD: OpcodeTable = OpcodeTable::new(&Isa::DEFAULT)
        .unwrap_or_else(|err| panic!("the standard instruction set is misconfigured: {err}"));
}

/// Opcodes for a whole instruction list, assigned in a single pass.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    entries: Vec<(Instruction, Opcode)>,
    lookup: FxHashMap<Instruction, Opcode>,
}

#[derive(Default)]
struct ClassCursor {
    seen: OpcodeRepr,
    last: Option<(Instruction, OpcodeRepr)>,
}

impl ClassCursor {
    /// Repeats of the same instruction share an index; each still counts
    /// towards the instructions that follow.
    fn advance(&mut self, instr: Instruction) -> OpcodeRepr {
        let index = match self.last {
            Some((last, index)) if last == instr => index,
            _ => self.seen,
        };
        self.last = Some((instr, index));
        self.seen += 1;
        index
    }
}

impl OpcodeTable {
    /// The table for [`Isa::DEFAULT`], built and checked on first use.
    ///
    /// # Panics
    /// If the standard instruction set does not yield unique opcodes.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// # Errors
    /// Fails if two instructions end up with the same opcode.
    pub fn new(isa: &Isa) -> Result<Self, UniquenessError> {
        let mut sorted = isa.instructions().to_vec();
        sorted.sort();

        let mut classes = FxHashMap::<BucketSet, ClassCursor>::default();
        let entries: Vec<_> = sorted
            .into_iter()
            .map(|instr| {
                let buckets = isa.bucket_set(instr);
                let class_index = classes.entry(buckets).or_default().advance(instr);
                let opcode = Opcode::new(class_index, buckets);
                #[cfg(feature = "trace-assignment")]
                println!("{instr:<16} #{class_index:<3} {opcode:>4}  [{buckets}]");
                (instr, opcode)
            })
            .collect();

        for (buckets, cursor) in &classes {
            tracing::debug!(buckets = %buckets, members = cursor.seen, "bucket class");
        }

        check_collisions(entries.iter().map(|&(instr, opcode)| (opcode, instr)))?;
        tracing::info!(
            instructions = entries.len(),
            classes = classes.len(),
            "opcodes assigned"
        );

        let lookup = entries.iter().copied().collect();
        Ok(Self { entries, lookup })
    }

    #[must_use]
    pub fn opcode(&self, instruction: Instruction) -> Option<Opcode> {
        self.lookup.get(&instruction).copied()
    }

    /// Every instruction with its opcode, in ordinal order.
    #[must_use]
    pub fn entries(&self) -> &[(Instruction, Opcode)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn max_opcode(&self) -> Opcode {
        self.entries
            .iter()
            .map(|&(_, opcode)| opcode)
            .max()
            .unwrap_or(Opcode::from_raw(0))
    }

    #[must_use]
    pub fn bit_width(&self) -> u32 {
        self.max_opcode().bit_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::BUCKET_TABLE;
    use Instruction::*;

    #[test]
    fn agrees_with_assigner() {
        let table = OpcodeTable::standard();
        assert_eq!(table.len(), Instruction::ALL.len());
        for &instr in Instruction::ALL {
            assert_eq!(table.opcode(instr), Some(Isa::DEFAULT.opcode(instr)), "{instr}");
        }
        assert_eq!(table.max_opcode(), Isa::DEFAULT.max_opcode());
        assert_eq!(table.bit_width(), 7);
    }

    #[test]
    fn entries_are_in_ordinal_order() {
        let isa = Isa::new(&[XbMul, Push, Halt, Pop], BUCKET_TABLE);
        let table = OpcodeTable::new(&isa).unwrap();
        let order: Vec<_> = table.entries().iter().map(|&(instr, _)| instr).collect();
        assert_eq!(order, [Halt, Pop, Push, XbMul]);
        assert_eq!(table.opcode(XbMul), Some(Opcode::new(1, BucketSet::SHRINK_STACK)));
        assert_eq!(table.opcode(Dup), None);
    }

    #[test]
    fn repeats_are_rejected() {
        let isa = Isa::new(&[Nop, Halt, Nop, Divine], BUCKET_TABLE);
        let err = OpcodeTable::new(&isa).unwrap_err();
        assert_eq!(err, isa.verify_uniqueness().unwrap_err());
    }
}
