use crate::{assign::OpcodeTable, common::config::ReportConfig};
use std::fmt::Write;

/// Renders one line per instruction, then the highest opcode and the number
/// of instruction bits needed to hold it.
#[must_use]
pub fn render(table: &OpcodeTable, config: &ReportConfig) -> String {
    let mut buf = String::new();
    let width = table.bit_width() as usize;

    for &(instr, opcode) in table.entries() {
        write!(buf, "{opcode:>3}").unwrap();
        if config.binary {
            write!(buf, " {opcode:0width$b}").unwrap();
        }
        write!(buf, " {instr}").unwrap();
        if config.instruction_bits {
            let bits = opcode.instruction_bits(table.bit_width());
            let padding = " ".repeat(16_usize.saturating_sub(instr.as_str().len()));
            write!(buf, "{padding}").unwrap();
            for (i, bit) in bits.iter().enumerate() {
                write!(buf, " ib{i}={}", u8::from(*bit)).unwrap();
            }
        }
        buf.push('\n');
    }

    if config.summary {
        if !table.is_empty() {
            buf.push('\n');
        }
        writeln!(buf, "highest opcode: {}", table.max_opcode()).unwrap();
        writeln!(buf, "#ibs:           {width}").unwrap();
    }
    buf
}
