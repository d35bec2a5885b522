use codespan_reporting::files::SimpleFile;

pub type Diagnostic = codespan_reporting::diagnostic::Diagnostic<()>;
pub type File<'a> = SimpleFile<&'a str, &'a str>;

pub trait ToDiagnostic {
    fn to_diagnostic(&self) -> Diagnostic;
}

/// A piece of user input that diagnostics can point into.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    pub source: &'a str,
    pub name: &'a str,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(source: &'a str, name: &'a str) -> Self {
        Self { source, name }
    }

    #[must_use]
    pub fn file(&self) -> File<'a> {
        SimpleFile::new(self.name, self.source)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ReportConfig {
    /// Print each opcode in binary, padded to the table's bit width.
    pub binary: bool,
    /// Print the individual instruction bits, `ib0` first.
    pub instruction_bits: bool,
    /// Print the highest opcode and the number of instruction bits.
    pub summary: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            binary: true,
            instruction_bits: false,
            summary: true,
        }
    }
}
