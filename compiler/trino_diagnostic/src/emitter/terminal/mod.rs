//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! When the descriptor text is known (see [`TerminalEmitter::set_source`]),
//! each label is rendered under the line it points into:
//!
//! ```text
//! error[E0002]: did not recognize type `foobar`
//!   --> 4..10
//!    |
//!    | map(foobar, integer)
//!    |     ^^^^^^ unknown type name
//!    |
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI styles the emitter writes.
#[derive(Copy, Clone, Debug)]
enum Style {
    /// Errors and primary underlines.
    Error,
    Warning,
    /// Notes and help.
    Info,
    /// Codes and the `note` tag.
    Bold,
    /// Gutter and secondary underlines.
    Gutter,
}

impl Style {
    const RESET: &'static str = "\x1b[0m";

    const fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Info => "\x1b[1;36m",
            Style::Bold => "\x1b[1m",
            Style::Gutter => "\x1b[1;34m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
            Severity::Note | Severity::Help => Style::Info,
        }
    }
}

/// `1 warning`, `2 warnings`.
fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// When to colour output. Parsed from `auto`, `always` or `never`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether to colour, given whether the target is a terminal.
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}`; expected auto, always or never"
            )),
        }
    }
}

/// The part of `source` a label points at.
struct Snippet<'s> {
    line: &'s str,
    /// Column of the span start, in chars.
    column: usize,
    /// Underline width in chars, at least 1.
    width: usize,
}

impl<'s> Snippet<'s> {
    /// Locate `label` in `source`. `None` when the span does not fall on char
    /// boundaries of `source`.
    fn locate(source: &'s str, label: &Label) -> Option<Self> {
        let start = (label.span.start as usize).min(source.len());
        if !source.is_char_boundary(start) {
            return None;
        }
        let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);
        let end = (label.span.end as usize).clamp(start, line_end);

        let width = source
            .get(start..end)
            .map_or(1, |covered| covered.chars().count().max(1));

        Some(Snippet {
            line: &source[line_start..line_end],
            column: source[line_start..start].chars().count(),
            width,
        })
    }
}

/// Renders diagnostics as text, optionally with ANSI colour.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.enabled(is_tty),
            source: None,
        }
    }

    /// Descriptor text that label spans index into.
    ///
    /// Without a source, labels are rendered as bare spans.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    pub fn clear_source(&mut self) {
        self.source = None;
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_styled(&mut self, text: &str, style: Style) {
        if self.colors {
            let _ = write!(self.writer, "{}{text}{}", style.ansi(), Style::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_gutter(&mut self) {
        self.write_styled("   |", Style::Gutter);
    }

    fn write_label(&mut self, label: &Label) {
        let style = if label.is_primary {
            Style::Error
        } else {
            Style::Gutter
        };

        let snippet = self
            .source
            .as_deref()
            .and_then(|source| Snippet::locate(source, label))
            .map(|s| (s.line.to_owned(), s.column, s.width));

        let Some((line, column, width)) = snippet else {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_styled(&label.message, style);
            let _ = writeln!(self.writer);
            return;
        };

        if label.is_primary {
            let _ = writeln!(self.writer, "  --> {:?}", label.span);
        }
        self.write_gutter();
        let _ = writeln!(self.writer);
        self.write_gutter();
        let _ = writeln!(self.writer, " {line}");
        self.write_gutter();
        let marker = if label.is_primary { '^' } else { '-' };
        let underline: String = std::iter::repeat(marker).take(width).collect();
        let _ = write!(self.writer, " {}", " ".repeat(column));
        self.write_styled(&underline, style);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_styled(&label.message, style);
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_styled(
            &diagnostic.severity.to_string(),
            Style::for_severity(diagnostic.severity),
        );
        self.write_styled(&format!("[{}]", diagnostic.code), Style::Bold);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_styled("note", Style::Bold);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let warnings = counted(warning_count, "warning");
        match (error_count, warning_count) {
            (0, 0) => return,
            (0, _) => {
                self.write_styled("warning", Style::Warning);
                let _ = write!(self.writer, ": {warnings}");
            }
            (_, 0) => {
                self.write_styled("error", Style::Error);
                let _ = write!(self.writer, ": {}", counted(error_count, "descriptor error"));
            }
            _ => {
                self.write_styled("error", Style::Error);
                let _ = write!(
                    self.writer,
                    ": {}; {warnings}",
                    counted(error_count, "descriptor error")
                );
            }
        }
        let _ = writeln!(self.writer, " emitted");
    }
}

#[cfg(test)]
mod tests;
