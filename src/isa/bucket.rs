use crate::isa::Instruction;
use std::fmt;

bitflags::bitflags! {
    /// The buckets an instruction belongs to. Bit `i` is bucket `i`.
    pub struct BucketSet: u32 {
        /// The instruction carries an immediate argument.
        const HAS_ARG      = 0b001;
        /// The instruction shrinks the operational stack.
        const SHRINK_STACK = 0b010;
        /// The instruction belongs to the u32 operation group.
        const U32          = 0b100;
    }
}

impl BucketSet {
    pub const EMPTY: Self = Self::empty();

    /// Selects the bucket bits out of a raw opcode.
    pub const MASK: u32 = (1 << Bucket::COUNT) - 1;

    pub fn buckets(self) -> impl Iterator<Item = Bucket> {
        Bucket::ALL.into_iter().filter(move |b| self.contains(b.flag()))
    }
}

impl fmt::Display for BucketSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (i, bucket) in self.buckets().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(bucket.name())?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Bucket {
    HasArg = 0,
    ShrinkStack = 1,
    U32 = 2,
}

impl Bucket {
    /// Every bucket, in index order.
    pub const ALL: [Bucket; 3] = [Bucket::HasArg, Bucket::ShrinkStack, Bucket::U32];
    pub const COUNT: u32 = Self::ALL.len() as u32;

    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn flag(self) -> BucketSet {
        match self {
            Self::HasArg => BucketSet::HAS_ARG,
            Self::ShrinkStack => BucketSet::SHRINK_STACK,
            Self::U32 => BucketSet::U32,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HasArg => "has_arg",
            Self::ShrinkStack => "shrink_stack",
            Self::U32 => "u32",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One row of a bucket membership table.
#[derive(Debug, Copy, Clone)]
pub struct BucketMembers<'a> {
    pub bucket: Bucket,
    pub members: &'a [Instruction],
}

/// Membership of the standard instruction set.
pub const BUCKET_TABLE: &[BucketMembers<'static>] = {
    use Instruction::*;

    &[
        BucketMembers {
            bucket: Bucket::HasArg,
            members: &[Push, Dup, Swap, Call],
        },
        BucketMembers {
            bucket: Bucket::ShrinkStack,
            members: &[Pop, Skiz, Assert, WriteIo, Add, Mul, Eq, XbMul],
        },
        BucketMembers {
            bucket: Bucket::U32,
            members: &[Lt, And, Xor, Log2Floor, Pow, Div, Split],
        },
    ]
};
