mod assigner;
mod error;
mod opcode;
mod table;

pub use error::{Collision, UniquenessError};
pub use opcode::Opcode;
pub use table::OpcodeTable;
