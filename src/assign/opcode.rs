use crate::{
    common::{List, OpcodeRepr},
    isa::{Bucket, BucketSet},
};
use std::fmt;

// Layout of an opcode:
// cccc...cbbb
//          ^^^ bucket set, one bit per bucket
// ^^^^^^^^     index of the instruction within its bucket class

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Opcode(OpcodeRepr);

impl Opcode {
    #[must_use]
    pub const fn new(class_index: OpcodeRepr, buckets: BucketSet) -> Self {
        Self((class_index << Bucket::COUNT) | buckets.bits())
    }

    #[must_use]
    pub const fn from_raw(raw: OpcodeRepr) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> OpcodeRepr {
        self.0
    }

    /// Recovers the bucket set by masking, without consulting any table.
    #[must_use]
    pub const fn bucket_set(self) -> BucketSet {
        BucketSet::from_bits_truncate(self.0 & BucketSet::MASK)
    }

    #[must_use]
    pub const fn class_index(self) -> OpcodeRepr {
        self.0 >> Bucket::COUNT
    }

    #[must_use]
    pub const fn in_bucket(self, bucket: Bucket) -> bool {
        self.0 & bucket.flag().bits() != 0
    }

    /// Instruction bit `ib{index}`.
    #[must_use]
    pub const fn instruction_bit(self, index: u32) -> bool {
        index < OpcodeRepr::BITS && (self.0 >> index) & 1 == 1
    }

    /// `ib0` through `ib{width - 1}`, lowest bit first.
    #[must_use]
    pub fn instruction_bits(self, width: u32) -> List<bool> {
        (0..width).map(|i| self.instruction_bit(i)).collect()
    }

    /// Number of bits needed to write this opcode down; zero still takes one.
    #[must_use]
    pub const fn bit_length(self) -> u32 {
        if self.0 == 0 {
            1
        } else {
            OpcodeRepr::BITS - self.0.leading_zeros()
        }
    }
}

impl From<Opcode> for OpcodeRepr {
    fn from(opcode: Opcode) -> Self {
        opcode.0
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Binary for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
