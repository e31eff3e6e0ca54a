//! `trino-type` command-line entry point.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use trino_cli::args::{parse_args, Command, USAGE};
use trino_cli::commands::{explain_code, run_parse};
use trino_cli::output::read_descriptors;
use trino_cli::tracing_setup::init_tracing;
use trino_cli::CliError;
use trino_diagnostic::emitter::TerminalEmitter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_usage() {
                eprintln!();
                eprint!("{USAGE}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<u8, CliError> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            Ok(0)
        }
        Command::Explain(code) => {
            explain_code(&code, &mut io::stdout().lock())?;
            Ok(0)
        }
        Command::Parse(args) => {
            let descriptors = if args.reads_stdin() {
                read_descriptors(io::stdin().lock())?
            } else {
                args.descriptors.clone()
            };

            let stderr = io::stderr();
            let mut emitter = TerminalEmitter::stderr(args.color, stderr.is_terminal());
            let summary = run_parse(&args, descriptors, &mut io::stdout().lock(), &mut emitter)?;
            Ok(summary.exit_code())
        }
    }
}
