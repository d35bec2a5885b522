mod error;
mod lexer;

use crate::isa::Instruction;

pub use error::{LexError, LexErrorKind};
pub use lexer::{lex, TokenKind};

/// Reads a list of mnemonics separated by whitespace, commas or line breaks.
///
/// # Errors
/// One error per word that is not a mnemonic and per stray character.
pub fn parse_mnemonics(source: &str) -> Result<Vec<Instruction>, Vec<LexError>> {
    let mut instructions = Vec::new();
    let mut errors = Vec::new();

    for (range, kind) in lex(source) {
        let text = &source[range];
        match kind {
            TokenKind::Mnemonic => match Instruction::from_mnemonic(text) {
                Some(instr) => instructions.push(instr),
                None => errors.push(LexError {
                    range,
                    kind: LexErrorKind::UnknownMnemonic(text.to_string()),
                }),
            },
            TokenKind::Error => errors.push(LexError {
                range,
                kind: LexErrorKind::UnexpectedCharacter(text.to_string()),
            }),
            _ => debug_assert!(kind.is_trivia()),
        }
    }

    if errors.is_empty() {
        Ok(instructions)
    } else {
        Err(errors)
    }
}
