//! Parser entry point.

use trino_diagnostic::{DiagnosticQueue, DiagnosticSink};
use trino_types::{Registry, TypeNode};

use crate::grammar::Descent;
use crate::segment::Segment;
use crate::{normalize, ParseOptions, ParseOutput};

/// Parses descriptors against a borrowed [`Registry`].
///
/// The parser holds no per-descriptor state and can be reused (and shared
/// across threads) freely.
#[derive(Clone, Debug)]
pub struct TypeParser<'r> {
    registry: &'r Registry,
    options: ParseOptions,
}

impl<'r> TypeParser<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        TypeParser {
            registry,
            options: ParseOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse `text`, collecting diagnostics through a [`DiagnosticQueue`]
    /// configured by [`ParseOptions::diagnostics`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse(&self, text: &str) -> ParseOutput {
        let source = normalize(text);
        let mut queue = DiagnosticQueue::with_config(self.options.diagnostics.clone());
        let ty = self.descend(&source, &mut queue);
        ParseOutput {
            ty,
            diagnostics: queue.flush(),
            source,
        }
    }

    /// Parse `text`, handing every diagnostic to `sink` as it is produced.
    ///
    /// Spans index into [`normalize`]`(text)`.
    pub fn parse_into<S: DiagnosticSink + ?Sized>(&self, text: &str, sink: &mut S) -> TypeNode {
        let source = normalize(text);
        self.descend(&source, sink)
    }

    fn descend<S: DiagnosticSink + ?Sized>(&self, source: &str, sink: &mut S) -> TypeNode {
        Descent::new(self.registry, &self.options, sink).parse_type(Segment::new(source, 0))
    }
}

impl Default for TypeParser<'static> {
    fn default() -> Self {
        TypeParser::new(Registry::builtin())
    }
}
