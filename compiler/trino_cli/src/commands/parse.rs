//! Parse descriptors and report the results.

use std::io::Write;

use tracing::debug;
use trino_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use trino_diagnostic::Severity;
use trino_parse::TypeParser;
use trino_types::Registry;

use crate::args::ParseArgs;
use crate::output::{write_output, OutputFormat};
use crate::CliError;

/// Totals over one invocation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub descriptors: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    /// 1 when any descriptor produced an error, 0 otherwise.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.errors > 0)
    }
}

/// Parse every descriptor, writing results to `out` and diagnostics to
/// `emitter`.
pub fn run_parse<W, E>(
    args: &ParseArgs,
    descriptors: impl IntoIterator<Item = String>,
    out: &mut W,
    emitter: &mut TerminalEmitter<E>,
) -> Result<Summary, CliError>
where
    W: Write,
    E: Write,
{
    let parser = TypeParser::new(Registry::builtin()).with_options(args.parse_options());
    let mut summary = Summary::default();

    for descriptor in descriptors {
        let output = parser.parse(&descriptor);
        debug!(
            input = descriptor.as_str(),
            diagnostics = output.diagnostics.len(),
            "parsed descriptor"
        );

        if args.format == OutputFormat::Tree && summary.descriptors > 0 {
            writeln!(out)?;
        }
        write_output(out, args.format, &descriptor, &output)?;

        for diagnostic in &output.diagnostics {
            match diagnostic.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Note | Severity::Help => {}
            }
        }
        if !output.diagnostics.is_empty() {
            emitter.set_source(output.source);
            emitter.emit_all(&output.diagnostics);
        }
        summary.descriptors += 1;
    }

    out.flush()?;
    emitter.emit_summary(summary.errors, summary.warnings);
    emitter.flush();
    Ok(summary)
}
