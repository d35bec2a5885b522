#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::match_same_arms,
    clippy::enum_glob_use
)]

#[macro_use]
mod common;
mod assign;
mod isa;
mod parse;
pub mod report;

pub use assign::{Collision, Opcode, OpcodeTable, UniquenessError};
pub use common::config::{self, Diagnostic, ReportConfig, ToDiagnostic};
pub use common::OpcodeRepr;
pub use isa::{
    Bucket, BucketMembers, BucketSet, Instruction, Isa, UnknownMnemonic, BUCKET_TABLE,
};
pub use parse::{lex, parse_mnemonics, LexError, LexErrorKind, TokenKind};

/// Runs the uniqueness gate over the standard instruction set and returns its
/// opcode table.
///
/// # Errors
/// Fails if the instruction list and the bucket table produce duplicate
/// opcodes.
pub fn check_standard() -> Result<&'static OpcodeTable, UniquenessError> {
    Isa::DEFAULT.verify_uniqueness()?;
    Ok(OpcodeTable::standard())
}
