//! Receivers for diagnostics.

use crate::{Diagnostic, DiagnosticQueue, Severity};

/// Anything that accepts diagnostics while a descriptor is parsed.
///
/// The parser never inspects the sink after emitting, so a sink is free to
/// drop, buffer, or forward what it receives.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    #[inline]
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl DiagnosticSink for DiagnosticQueue {
    #[inline]
    fn emit(&mut self, diagnostic: Diagnostic) {
        let _ = self.add(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    #[inline]
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Sink that forwards every diagnostic to `tracing` and keeps nothing.
///
/// Errors and warnings are logged at `WARN`, notes and help at `INFO`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let location = diagnostic.primary_span().unwrap_or_default();
        match diagnostic.severity {
            Severity::Error | Severity::Warning => tracing::warn!(
                code = diagnostic.code.as_str(),
                %location,
                "{}",
                diagnostic.message
            ),
            Severity::Note | Severity::Help => tracing::info!(
                code = diagnostic.code.as_str(),
                %location,
                "{}",
                diagnostic.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorCode, Span};

    fn emit_into(sink: &mut impl DiagnosticSink) {
        sink.emit(Diagnostic::new(ErrorCode::E0002).with_label(Span::new(0, 3), "here"));
        sink.emit(Diagnostic::new(ErrorCode::W0001));
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut sink = Vec::new();
        emit_into(&mut sink);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].code, ErrorCode::E0002);
        assert_eq!(sink[1].code, ErrorCode::W0001);
    }

    #[test]
    fn test_mut_ref_sink_forwards() {
        let mut inner = Vec::new();
        {
            let mut by_ref = &mut inner;
            emit_into(&mut by_ref);
        }
        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn test_queue_sink() {
        let mut queue = DiagnosticQueue::new();
        emit_into(&mut queue);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.error_count(), 1);
    }

    #[test]
    fn test_tracing_sink_accepts_everything() {
        let mut sink = TracingSink;
        emit_into(&mut sink);
        sink.emit(Diagnostic::new(ErrorCode::E0001).with_severity(Severity::Note));
    }
}
