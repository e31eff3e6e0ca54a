//! Rendering parse results on stdout.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::str::FromStr;

use trino_parse::ParseOutput;
use trino_types::TypeNode;

use crate::CliError;

/// Shape of the per-descriptor output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented tree, one node per line.
    #[default]
    Tree,
    /// Canonical descriptor text.
    Text,
    /// One JSON object per descriptor.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(OutputFormat::Tree),
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format `{other}`; expected tree, text or json"
            )),
        }
    }
}

#[derive(serde::Serialize)]
struct JsonRecord<'a> {
    input: &'a str,
    #[serde(rename = "type")]
    ty: &'a TypeNode,
    diagnostics: &'a [trino_diagnostic::Diagnostic],
}

/// Write one parse result in `format`.
pub fn write_output<W: Write>(
    out: &mut W,
    format: OutputFormat,
    input: &str,
    output: &ParseOutput,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Tree => out.write_all(render_tree(&output.ty).as_bytes())?,
        OutputFormat::Text => writeln!(out, "{}", output.ty)?,
        OutputFormat::Json => {
            let record = JsonRecord {
                input,
                ty: &output.ty,
                diagnostics: &output.diagnostics,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Indented tree rendering of `ty`, newline-terminated.
///
/// ```text
/// map
///   key: varchar
///   value: array (2 dimensions)
///     element: decimal(20,3)
/// ```
pub fn render_tree(ty: &TypeNode) -> String {
    let mut buf = String::new();
    tree_node(&mut buf, ty, 0, None);
    buf
}

fn tree_node(buf: &mut String, ty: &TypeNode, depth: usize, label: Option<&str>) {
    for _ in 0..depth {
        buf.push_str("  ");
    }
    if let Some(label) = label {
        buf.push_str(label);
        buf.push_str(": ");
    }

    match ty {
        TypeNode::Scalar(scalar) => {
            let _ = writeln!(buf, "{scalar}");
        }
        TypeNode::Unknown(raw) => {
            let _ = writeln!(buf, "unknown {raw:?}");
        }
        TypeNode::Array {
            element,
            dimensions,
        } => {
            if dimensions.get() == 1 {
                buf.push_str("array\n");
            } else {
                let _ = writeln!(buf, "array ({dimensions} dimensions)");
            }
            tree_node(buf, element, depth + 1, Some("element"));
        }
        TypeNode::Map { key, value } => {
            buf.push_str("map\n");
            tree_node(buf, key, depth + 1, Some("key"));
            tree_node(buf, value, depth + 1, Some("value"));
        }
        TypeNode::Row(fields) => {
            if fields.is_empty() {
                buf.push_str("row (no fields)\n");
            } else {
                buf.push_str("row\n");
            }
            for field in fields {
                tree_node(buf, &field.ty, depth + 1, Some(field.name.as_str()));
            }
        }
    }
}

/// Read descriptors, one per line. Blank lines are skipped.
pub fn read_descriptors<R: io::BufRead>(input: R) -> Result<Vec<String>, CliError> {
    let mut descriptors = Vec::new();
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            descriptors.push(line);
        }
    }
    Ok(descriptors)
}
