use crate::{
    assign::Opcode,
    common::{
        config::{Diagnostic, ToDiagnostic},
        List,
    },
    isa::Instruction,
};
use std::fmt;

/// Two or more instructions were given the same opcode.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Collision {
    pub opcode: Opcode,
    pub instructions: List<Instruction>,
}

/// The instruction list and the bucket table do not produce distinct opcodes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UniquenessError {
    pub collisions: Vec<Collision>,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opcode {} is shared by ", self.opcode)?;
        for (i, instr) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{instr}`")?;
        }
        Ok(())
    }
}

impl fmt::Display for UniquenessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opcodes are not unique")?;
        for collision in &self.collisions {
            write!(f, "\n  {collision}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UniquenessError {}

impl ToDiagnostic for UniquenessError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error()
            .with_message("opcodes are not unique")
            .with_notes(
                self.collisions
                    .iter()
                    .map(ToString::to_string)
                    .chain(std::iter::once(
                        "adjust the bucket table or the instruction list".to_string(),
                    ))
                    .collect(),
            )
    }
}
