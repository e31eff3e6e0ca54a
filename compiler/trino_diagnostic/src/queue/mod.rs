//! Diagnostic queue for collecting, deduplicating, and ordering diagnostics.
//!
//! Features:
//! - Error limits, so a descriptor with hundreds of broken fields does not
//!   bury the first problem
//! - Deduplication of identical reports (same code, location and message)
//! - Position-ordered output

use std::collections::HashSet;

use crate::{Diagnostic, ErrorCode, Span};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before further errors are dropped (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic when one with the same code, primary span and
    /// message exists.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits and no filtering.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }

    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }
}

/// Queue for collecting, deduplicating, and ordering diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic);
/// // ... add more diagnostics
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Count of errors (not warnings/notes).
    error_count: usize,
    /// Number of diagnostics rejected by the limit or deduplication.
    dropped: usize,
    /// (code, primary span, message) triples already queued.
    seen: HashSet<(ErrorCode, Option<Span>, String)>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was queued, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();

        if is_error && self.limit_reached() {
            self.dropped += 1;
            return false;
        }

        if self.config.deduplicate
            && !self
                .seen
                .insert((diag.code, diag.primary_span(), diag.message.clone()))
        {
            self.dropped += 1;
            return false;
        }

        if is_error {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of diagnostics filtered out so far.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all queued diagnostics ordered by primary span start.
    ///
    /// Diagnostics without a location come first. Equal positions keep their
    /// insertion order. The queue is empty afterwards but keeps its
    /// configuration.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| d.primary_span().map(|s| s.start));
        self.error_count = 0;
        self.dropped = 0;
        self.seen.clear();
        out
    }
}
