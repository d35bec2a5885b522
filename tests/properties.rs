//! Properties of the opcode assignment over arbitrary instructions and
//! arbitrary sub-lists of the standard instruction set.

use proptest::prelude::*;
use stack_opcodes::{Instruction, Isa, OpcodeTable, BUCKET_TABLE};

fn instruction() -> impl Strategy<Value = Instruction> {
    prop::sample::select(Instruction::ALL)
}

fn sub_list() -> impl Strategy<Value = Vec<Instruction>> {
    prop::sample::subsequence(Instruction::ALL.to_vec(), 0..=Instruction::ALL.len())
}

proptest! {
    #[test]
    fn same_class_follows_ordinal(a in instruction(), pick in any::<prop::sample::Index>()) {
        let isa = Isa::DEFAULT;
        let class: Vec<_> = Instruction::ALL
            .iter()
            .copied()
            .filter(|&other| isa.bucket_set(other) == isa.bucket_set(a))
            .collect();
        let b = *pick.get(&class);
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        if first == second {
            prop_assert_eq!(isa.opcode(first), isa.opcode(second));
        } else {
            prop_assert!(isa.opcode(first) < isa.opcode(second));
            prop_assert!(isa.opcode(first).class_index() < isa.opcode(second).class_index());
        }
    }

    #[test]
    fn low_bits_are_the_bucket_set(instr in instruction()) {
        let opcode = Isa::DEFAULT.opcode(instr);
        prop_assert_eq!(opcode.bucket_set(), Isa::DEFAULT.bucket_set(instr));
    }

    #[test]
    fn any_sub_list_is_unique(list in sub_list()) {
        let isa = Isa::new(&list, BUCKET_TABLE);
        prop_assert!(isa.is_unique());

        let table = OpcodeTable::new(&isa).unwrap();
        prop_assert_eq!(table.len(), list.len());
        for &instr in &list {
            prop_assert_eq!(table.opcode(instr), Some(isa.opcode(instr)));
        }
        prop_assert_eq!(table.max_opcode(), isa.max_opcode());
    }

    #[test]
    fn shuffled_list_gets_the_same_opcodes(list in sub_list().prop_shuffle()) {
        let isa = Isa::new(&list, BUCKET_TABLE);
        let mut sorted = list.clone();
        sorted.sort();
        let reference = Isa::new(&sorted, BUCKET_TABLE);
        for &instr in &list {
            prop_assert_eq!(isa.opcode(instr), reference.opcode(instr));
        }
    }

    #[test]
    fn repeats_always_collide(list in sub_list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!list.is_empty());
        let repeated = *pick.get(&list);
        let mut with_repeat = list.clone();
        with_repeat.push(repeated);

        let isa = Isa::new(&with_repeat, BUCKET_TABLE);
        let err = isa.verify_uniqueness().unwrap_err();
        prop_assert!(err
            .collisions
            .iter()
            .any(|c| c.instructions.iter().filter(|&&i| i == repeated).count() == 2));
        prop_assert!(OpcodeTable::new(&isa).is_err());
    }
}
