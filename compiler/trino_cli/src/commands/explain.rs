//! `--explain`: long-form documentation for a diagnostic code.

use std::io::Write;

use trino_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Write the documentation for `code_str` to `out`.
pub fn explain_code<W: Write>(code_str: &str, out: &mut W) -> Result<(), CliError> {
    let code: ErrorCode = code_str.parse()?;
    match ErrorDocs::get(code) {
        Some(doc) => writeln!(out, "{doc}")?,
        None => writeln!(out, "{code}: {}", code.summary())?,
    }
    Ok(())
}
