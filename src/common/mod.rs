#[macro_use]
mod macros;
pub mod config;

/// Raw integer representation of an opcode.
pub type OpcodeRepr = u32;

pub type List<T> = smallvec::SmallVec<[T; 3]>;
