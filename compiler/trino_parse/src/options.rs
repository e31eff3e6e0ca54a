//! Parser configuration.

use trino_diagnostic::DiagnosticConfig;

/// Knobs for [`TypeParser`](crate::TypeParser).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep `time(p)`/`timestamp(p)` precision in the scalar arguments.
    /// Off by default: precision is dropped and only the timezone flag kept.
    pub temporal_precision: bool,
    /// Limits and deduplication for the diagnostics collected by
    /// [`TypeParser::parse`](crate::TypeParser::parse).
    pub diagnostics: DiagnosticConfig,
}

impl ParseOptions {
    #[must_use]
    pub fn with_temporal_precision(mut self, keep: bool) -> Self {
        self.temporal_precision = keep;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, config: DiagnosticConfig) -> Self {
        self.diagnostics = config;
        self
    }
}
