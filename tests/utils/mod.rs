#![allow(dead_code)]

use expect_test::Expect;
use stack_opcodes::{
    config::{ReportConfig, Session},
    OpcodeTable, ToDiagnostic,
};

pub fn check_report(config: ReportConfig, expected: Expect) {
    let report = stack_opcodes::report::render(OpcodeTable::standard(), &config);
    expected.assert_eq(report.trim_end());
}

pub fn check_lookup(source: &str, expected: Expect) {
    expected.assert_eq(&lookup_to_string(source));
}

pub fn lookup_to_string(source: &str) -> String {
    let session = Session::new(source, "input");
    match stack_opcodes::parse_mnemonics(source) {
        Ok(instructions) => instructions
            .iter()
            .map(|&instr| {
                let opcode = OpcodeTable::standard().opcode(instr).unwrap();
                format!("{instr} {opcode}\n")
            })
            .collect(),
        Err(errors) => {
            let mut buf = Vec::<u8>::new();
            let mut writer = codespan_reporting::term::termcolor::NoColor::new(&mut buf);
            let config = codespan_reporting::term::Config::default();

            for err in errors {
                codespan_reporting::term::emit(
                    &mut writer,
                    &config,
                    &session.file(),
                    &err.to_diagnostic(),
                )
                .unwrap();
            }

            String::from_utf8(buf).unwrap()
        }
    }
}
