//! Command-line argument parsing.
//!
//! Hand-written: flags use the `--name=value` form, everything that does not
//! start with `-` is a descriptor, and a lone `-` means standard input.

use trino_diagnostic::emitter::ColorMode;
use trino_diagnostic::DiagnosticConfig;
use trino_parse::ParseOptions;

use crate::output::OutputFormat;
use crate::CliError;

pub const USAGE: &str = "\
Usage: trino-type [options] [DESCRIPTOR...]

Parse catalog type descriptors and print their structure.
With no descriptors, or with `-`, one descriptor is read per line from stdin.

Options:
  --format=tree|text|json    Output shape (default: tree)
  --temporal-precision       Keep time/timestamp precision arguments
  --error-limit=N            Report at most N errors per descriptor (0 = unlimited)
  --color=auto|always|never  Diagnostic colors (default: auto)
  --explain=CODE             Describe a diagnostic code, e.g. E0002
  -h, --help                 Show this help

Logging: set TRINO_TYPES_LOG (or RUST_LOG), e.g. TRINO_TYPES_LOG=trino_parse=debug
";

/// What the invocation asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Explain(String),
    Parse(ParseArgs),
}

/// Settings for parsing descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseArgs {
    pub format: OutputFormat,
    pub temporal_precision: bool,
    pub error_limit: usize,
    pub color: ColorMode,
    /// Descriptors from the command line. Empty, or just `-`, means stdin.
    pub descriptors: Vec<String>,
}

impl Default for ParseArgs {
    fn default() -> Self {
        ParseArgs {
            format: OutputFormat::Tree,
            temporal_precision: false,
            error_limit: 0,
            color: ColorMode::Auto,
            descriptors: Vec::new(),
        }
    }
}

impl ParseArgs {
    pub fn reads_stdin(&self) -> bool {
        match self.descriptors.as_slice() {
            [] => true,
            [only] => only == "-",
            _ => false,
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_temporal_precision(self.temporal_precision)
            .with_diagnostics(DiagnosticConfig::default().with_error_limit(self.error_limit))
    }
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = ParseArgs::default();
    let mut explain = None;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if let Some(value) = arg.strip_prefix("--format=") {
            parsed.format = value.parse().map_err(|reason| CliError::InvalidValue {
                flag: "--format",
                value: value.to_owned(),
                reason,
            })?;
        } else if arg == "--temporal-precision" {
            parsed.temporal_precision = true;
        } else if let Some(value) = arg.strip_prefix("--error-limit=") {
            parsed.error_limit = value.parse().map_err(|_| CliError::InvalidValue {
                flag: "--error-limit",
                value: value.to_owned(),
                reason: "expected a non-negative integer".to_owned(),
            })?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            parsed.color = value.parse().map_err(|reason| CliError::InvalidValue {
                flag: "--color",
                value: value.to_owned(),
                reason,
            })?;
        } else if let Some(code) = arg.strip_prefix("--explain=") {
            explain = Some(code.to_owned());
        } else if arg == "--explain" {
            return Err(CliError::MissingExplainCode);
        } else if arg.starts_with('-') && arg != "-" {
            return Err(CliError::UnknownOption(arg));
        } else {
            parsed.descriptors.push(arg);
        }
    }

    Ok(match explain {
        Some(code) => Command::Explain(code),
        None => Command::Parse(parsed),
    })
}
