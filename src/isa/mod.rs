mod bucket;
mod instruction;

pub use bucket::{Bucket, BucketMembers, BucketSet, BUCKET_TABLE};
pub use instruction::{Instruction, UnknownMnemonic};

/// An instruction list together with the bucket table that classifies it.
#[derive(Debug, Copy, Clone)]
pub struct Isa<'a> {
    instructions: &'a [Instruction],
    buckets: &'a [BucketMembers<'a>],
}

impl Isa<'static> {
    pub const DEFAULT: Self = Self::new(Instruction::ALL, BUCKET_TABLE);
}

impl<'a> Isa<'a> {
    #[must_use]
    pub const fn new(instructions: &'a [Instruction], buckets: &'a [BucketMembers<'a>]) -> Self {
        Self {
            instructions,
            buckets,
        }
    }

    #[must_use]
    pub fn instructions(&self) -> &'a [Instruction] {
        self.instructions
    }

    #[must_use]
    pub fn bucket_table(&self) -> &'a [BucketMembers<'a>] {
        self.buckets
    }

    /// Whether `bucket`'s membership list names `instruction`.
    #[must_use]
    pub fn in_bucket(&self, bucket: Bucket, instruction: Instruction) -> bool {
        self.buckets
            .iter()
            .filter(|row| row.bucket == bucket)
            .any(|row| row.members.contains(&instruction))
    }

    /// All listed members of `bucket`, in ordinal order and without repeats.
    #[must_use]
    pub fn members(&self, bucket: Bucket) -> Vec<Instruction> {
        let mut members: Vec<_> = self
            .buckets
            .iter()
            .filter(|row| row.bucket == bucket)
            .flat_map(|row| row.members.iter().copied())
            .collect();
        members.sort_unstable();
        members.dedup();
        members
    }
}
