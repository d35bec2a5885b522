use std::{cmp::Ordering, fmt, str::FromStr};

instruction_set![
    // === Control flow and stack manipulation ===
    Halt = 0 => "halt",
    Pop = 1 => "pop",
    Push = 2 => "push",
    Divine = 3 => "divine",
    Dup = 4 => "dup",
    Swap = 5 => "swap",
    Nop = 6 => "nop",
    Skiz = 7 => "skiz",
    Call = 8 => "call",
    Return = 9 => "return",
    Recurse = 10 => "recurse",
    Assert = 11 => "assert",

    // === Memory and hashing ===
    ReadMem = 12 => "read_mem",
    WriteMem = 13 => "write_mem",
    Hash = 14 => "hash",
    DivineSibling = 15 => "divine_sibling",
    AssertVector = 16 => "assert_vector",

    // === Base field arithmetic ===
    Add = 17 => "add",
    Mul = 18 => "mul",
    Invert = 19 => "invert",
    Eq = 20 => "eq",

    // === u32 operations ===
    Split = 21 => "split",
    Lt = 22 => "lt",
    And = 23 => "and",
    Xor = 24 => "xor",
    Log2Floor = 25 => "log_2_floor",
    Pow = 26 => "pow",
    Div = 27 => "div",

    // === Extension field arithmetic ===
    XxAdd = 28 => "xxadd",
    XxMul = 29 => "xxmul",
    XInvert = 30 => "xinvert",
    XbMul = 31 => "xbmul",

    // === I/O ===
    ReadIo = 32 => "read_io",
    WriteIo = 33 => "write_io",
];

// Ordered by ordinal, never by where an instruction happens to sit in a list.
impl Ord for Instruction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for Instruction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnknownMnemonic(pub String);

impl fmt::Display for UnknownMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown instruction `{}`", self.0)
    }
}

impl std::error::Error for UnknownMnemonic {}

impl FromStr for Instruction {
    type Err = UnknownMnemonic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s).ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}
