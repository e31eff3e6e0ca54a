//! Parser for catalog type descriptors.
//!
//! Turns strings such as `map(varchar, array(row(a integer, b decimal(20,3))))`
//! into a [`TypeNode`] tree. Parsing never fails: anything the parser cannot
//! classify becomes an `Unknown` node and is reported as a [`Diagnostic`].
//!
//! ```text
//! let output = trino_parse::parse_type("ARRAY(ARRAY(varchar(10)))");
//! assert!(!output.has_errors());
//! assert_eq!(output.ty.to_string(), "array(array(varchar(10)))");
//! ```
//!
//! Input is trimmed and lowercased before parsing. Diagnostic spans index into
//! that normalized text, available as [`ParseOutput::source`].

mod grammar;
mod head;
mod options;
mod parser;
mod segment;
mod stack;

pub use options::ParseOptions;
pub use parser::TypeParser;

use trino_diagnostic::Diagnostic;
use trino_types::TypeNode;

/// The normalized form of a descriptor: trimmed and lowercased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Result of parsing one descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub ty: TypeNode,
    /// Diagnostics ordered by position.
    pub diagnostics: Vec<Diagnostic>,
    /// Normalized input; diagnostic spans index into this.
    pub source: String,
}

impl ParseOutput {
    /// Whether any error-severity diagnostic was produced. Warnings do not
    /// count.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The tree if no errors were reported.
    pub fn into_result(self) -> Result<TypeNode, ParseError> {
        if self.has_errors() {
            Err(ParseError {
                input: self.source,
                diagnostics: self.diagnostics,
            })
        } else {
            Ok(self.ty)
        }
    }
}

/// A descriptor that produced error diagnostics in strict parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid type descriptor `{input}`: {}", first_error(.diagnostics))]
pub struct ParseError {
    /// Normalized input.
    pub input: String,
    /// Every diagnostic produced, warnings included.
    pub diagnostics: Vec<Diagnostic>,
}

fn first_error(diagnostics: &[Diagnostic]) -> &str {
    diagnostics
        .iter()
        .find(|d| d.is_error())
        .map_or("unknown error", |d| d.message.as_str())
}

/// Parse `text` against the built-in registry with default options.
pub fn parse_type(text: &str) -> ParseOutput {
    TypeParser::default().parse(text)
}

/// Parse `text`, failing if any error diagnostic was produced.
pub fn parse_type_strict(text: &str) -> Result<TypeNode, ParseError> {
    parse_type(text).into_result()
}
