use crate::common::config::{Diagnostic, ToDiagnostic};
use codespan_reporting::diagnostic::Label;
use std::fmt;
use text_size::TextRange;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LexError {
    pub range: TextRange,
    pub kind: LexErrorKind,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LexErrorKind {
    UnknownMnemonic(String),
    UnexpectedCharacter(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = (u32::from(self.range.start()), u32::from(self.range.end()));
        match &self.kind {
            LexErrorKind::UnknownMnemonic(word) => {
                write!(f, "error at {start}..{end}: unknown instruction `{word}`")
            }
            LexErrorKind::UnexpectedCharacter(text) => {
                write!(f, "error at {start}..{end}: unexpected `{text}`")
            }
        }
    }
}

impl std::error::Error for LexError {}

impl ToDiagnostic for LexError {
    fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            LexErrorKind::UnknownMnemonic(word) => Diagnostic::error()
                .with_message(format!("unknown instruction `{word}`"))
                .with_labels(vec![
                    Label::primary((), self.range).with_message("not a mnemonic")
                ])
                .with_notes(vec!["mnemonics are lower case, e.g. `read_mem`".to_string()]),
            LexErrorKind::UnexpectedCharacter(text) => Diagnostic::error()
                .with_message(format!("unexpected `{text}`"))
                .with_labels(vec![Label::primary((), self.range)
                    .with_message("separate mnemonics with spaces or commas")]),
        }
    }
}
