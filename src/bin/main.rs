use clap::{Parser, Subcommand};
use codespan_reporting::term::{
    self,
    termcolor::{ColorChoice, StandardStream},
};
use stack_opcodes::{
    config::{ReportConfig, Session},
    Diagnostic, Isa, OpcodeTable, ToDiagnostic,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(about = "Assigns bucketed opcodes to the stack machine's instructions")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print every instruction with its opcode (the default)
    Table {
        #[clap(long)]
        no_binary: bool,
        /// Also print the individual instruction bits
        #[clap(long)]
        bits: bool,
        #[clap(long)]
        no_summary: bool,
    },
    /// Print the opcode and buckets of the named instructions
    Lookup {
        #[clap(value_parser, required = true)]
        mnemonics: Vec<String>,
    },
    /// Only run the uniqueness check
    Check,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn emit(session: &Session, diagnostics: &[Diagnostic]) -> Result<(), Box<dyn std::error::Error>> {
    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = term::Config::default();
    let file = session.file();
    for diagnostic in diagnostics {
        term::emit(&mut writer.lock(), &config, &file, diagnostic)?;
    }
    Ok(())
}

/// Runs the uniqueness gate; every command goes through it first.
fn checked_table() -> Result<&'static OpcodeTable, Box<dyn std::error::Error>> {
    match stack_opcodes::check_standard() {
        Ok(table) => Ok(table),
        Err(err) => {
            emit(&Session::new("", "<instruction set>"), &[err.to_diagnostic()])?;
            Err(err.into())
        }
    }
}

fn lookup(table: &OpcodeTable, mnemonics: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let source = mnemonics.join(" ");
    let session = Session::new(&source, "<arguments>");
    let instructions = match stack_opcodes::parse_mnemonics(&source) {
        Ok(instructions) => instructions,
        Err(errors) => {
            let diagnostics: Vec<_> = errors.iter().map(ToDiagnostic::to_diagnostic).collect();
            emit(&session, &diagnostics)?;
            return Err(format!("{} unknown instruction(s)", errors.len()).into());
        }
    };

    let width = table.bit_width() as usize;
    for instr in instructions {
        let Some(opcode) = table.opcode(instr) else {
            continue;
        };
        println!(
            "{instr:<16} {opcode:>3} {opcode:0width$b}  {}",
            Isa::DEFAULT.bucket_set(instr)
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args: Cli = Parser::parse();
    let table = checked_table()?;

    match args.command.unwrap_or(Command::Table {
        no_binary: false,
        bits: false,
        no_summary: false,
    }) {
        Command::Table {
            no_binary,
            bits,
            no_summary,
        } => {
            let config = ReportConfig {
                binary: !no_binary,
                instruction_bits: bits,
                summary: !no_summary,
            };
            print!("{}", stack_opcodes::report::render(table, &config));
        }
        Command::Lookup { mnemonics } => lookup(table, &mnemonics)?,
        Command::Check => {
            tracing::info!(instructions = table.len(), "opcodes are unique");
            println!(
                "{} instructions, all opcodes distinct, {} instruction bits",
                table.len(),
                table.bit_width()
            );
        }
    }
    Ok(())
}
