//! Recursive descent over type descriptors.
//!
//! One call of [`Descent::parse_type`] handles one nesting level: scan the
//! head, dispatch on the name, recurse into the options. Problems never
//! abort the descent. The affected node becomes `Unknown` (or loses the
//! offending part) and a diagnostic goes to the sink.

use std::num::IntErrorKind;

use tracing::debug;
use trino_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use trino_split::Splitter;
use trino_types::{Registry, RowFields, ScalarArgs, ScalarKind, ScalarType, TypeNode};

use crate::head::{self, Head};
use crate::segment::Segment;
use crate::stack::ensure_sufficient_stack;
use crate::ParseOptions;

/// Splits a row field definition into its name and type.
const FIELD_SPLITTER: Splitter<'static> = Splitter::new().with_delimiter(b' ');

/// Suffixes that belong to `time`/`timestamp` rather than trailing text.
const ZONE_SUFFIXES: [&str; 2] = ["with time zone", "without time zone"];

/// Parser state for one descriptor.
pub(crate) struct Descent<'p, S: ?Sized> {
    registry: &'p Registry,
    options: &'p ParseOptions,
    sink: &'p mut S,
}

impl<'p, S: DiagnosticSink + ?Sized> Descent<'p, S> {
    pub(crate) fn new(registry: &'p Registry, options: &'p ParseOptions, sink: &'p mut S) -> Self {
        Descent {
            registry,
            options,
            sink,
        }
    }

    /// Parse one (possibly nested) type.
    #[tracing::instrument(level = "trace", skip_all, fields(text = seg.text, at = seg.start))]
    pub(crate) fn parse_type(&mut self, seg: Segment<'_>) -> TypeNode {
        ensure_sufficient_stack(|| self.parse_type_inner(seg))
    }

    fn parse_type_inner(&mut self, seg: Segment<'_>) -> TypeNode {
        let seg = seg.trim();
        let Some(head) = head::scan(seg) else {
            return self.no_type_name(seg);
        };

        let node = match head.name.text {
            "array" => self.parse_array(&head),
            "map" => self.parse_map(&head),
            "row" => self.parse_row(&head),
            name => match self.registry.lookup(name) {
                Some(kind) => self.parse_scalar(seg, &head, kind),
                None => return self.unrecognized(seg, &head),
            },
        };

        if !node.is_unknown() {
            let zoned = node.as_scalar().is_some_and(|s| s.kind.has_timezone());
            self.check_trailing(head.rest, zoned);
        }
        node
    }

    fn parse_array(&mut self, head: &Head<'_>) -> TypeNode {
        let element = match head.options {
            Some(options) => self.parse_type(options),
            None => {
                self.missing_options(head, "`array` expects an element type, as in `array(integer)`");
                TypeNode::unknown("")
            }
        };
        TypeNode::array_of(element)
    }

    fn parse_map(&mut self, head: &Head<'_>) -> TypeNode {
        let Some(options) = head.options else {
            self.missing_options(head, "`map` expects a key and a value type, as in `map(varchar, integer)`");
            return TypeNode::map(TypeNode::unknown(""), TypeNode::unknown(""));
        };

        let parts: Vec<Segment<'_>> = options.split(Splitter::new()).collect();
        let (key, value, extra) = match parts.as_slice() {
            [key, value, extra @ ..] => (*key, Some(*value), extra),
            [key] => (*key, None, &[][..]),
            [] => (options, None, &[][..]),
        };

        let key = self.parse_type(key);
        let value = match value {
            Some(value) => self.parse_type(value),
            None => {
                debug!(options = options.text, "map without value type");
                self.sink.emit(
                    Diagnostic::new(ErrorCode::E0003)
                        .with_message("`map` expects a key and a value type, found only one")
                        .with_label(options.span_after(), "expected `, <value type>`")
                        .with_secondary_label(head.name.span(), "in this map"),
                );
                TypeNode::unknown("")
            }
        };

        if let (Some(first), Some(last)) = (extra.first(), extra.last()) {
            debug!(extra = extra.len(), "map with extra arguments");
            self.sink.emit(
                Diagnostic::new(ErrorCode::E0003)
                    .with_message(format!(
                        "`map` expects 2 types, found {}",
                        2 + extra.len()
                    ))
                    .with_label(first.span_through(*last), "ignored")
                    .with_secondary_label(head.name.span(), "in this map"),
            );
        }

        TypeNode::map(key, value)
    }

    fn parse_row(&mut self, head: &Head<'_>) -> TypeNode {
        let Some(options) = head.options else {
            self.missing_options(head, "`row` expects field definitions, as in `row(a integer)`");
            return TypeNode::Row(RowFields::new());
        };

        let mut fields = RowFields::new();
        for field in options.split(Splitter::new()) {
            let field = field.trim();
            let mut tokens = field.split(FIELD_SPLITTER);
            let name = tokens.next().unwrap_or(field);

            let ty = match tokens.next() {
                Some(first) => self.parse_type(field.tail_from(first)),
                None => {
                    self.field_without_type(field, name);
                    TypeNode::unknown("")
                }
            };

            if fields.insert(name.text, ty).is_some() {
                debug!(field = name.text, "duplicate row field replaces earlier type");
            }
        }
        TypeNode::Row(fields)
    }

    fn parse_scalar(&mut self, seg: Segment<'_>, head: &Head<'_>, kind: ScalarKind) -> TypeNode {
        let mut args = ScalarArgs::new();
        let zoned = kind.has_timezone();
        let options = head.options.filter(|options| !options.is_empty());
        if zoned && !self.options.temporal_precision {
            if let Some(options) = options {
                debug!(kind = %kind, options = options.text, "dropping temporal precision");
            }
        } else if let Some(options) = options {
            for arg in options.split(Splitter::new()) {
                let arg = arg.trim();
                match arg.text.parse::<u32>() {
                    Ok(value) => args.push(value),
                    Err(err) => return self.malformed_argument(seg, arg, kind, err.kind()),
                }
            }
        }

        let mut scalar = ScalarType::new(kind);
        if zoned {
            scalar.timezone = Some(seg.text.ends_with(ZONE_SUFFIXES[0]));
        }
        scalar.args = args;
        TypeNode::Scalar(scalar)
    }

    fn check_trailing(&mut self, rest: Segment<'_>, zoned: bool) {
        let rest = rest.trim();
        if rest.is_empty() || (zoned && ZONE_SUFFIXES.contains(&rest.text)) {
            return;
        }
        debug!(rest = rest.text, "trailing text after type");
        self.sink.emit(
            Diagnostic::new(ErrorCode::W0001)
                .with_message(format!("unexpected text `{}` after type", rest.text))
                .with_label(rest.span(), "ignored"),
        );
    }

    #[cold]
    fn no_type_name(&mut self, seg: Segment<'_>) -> TypeNode {
        debug!(text = seg.text, "no type name");
        let message = if seg.is_empty() {
            "expected a type name, found nothing".to_owned()
        } else {
            format!("could not parse type name in `{}`", seg.text)
        };
        self.sink.emit(
            Diagnostic::new(ErrorCode::E0001)
                .with_message(message)
                .with_label(seg.span(), "expected a type name"),
        );
        TypeNode::unknown(seg.text)
    }

    #[cold]
    fn unrecognized(&mut self, seg: Segment<'_>, head: &Head<'_>) -> TypeNode {
        let name = head.name.text;
        debug!(name, "unrecognized type name");
        let mut diagnostic = Diagnostic::new(ErrorCode::E0002)
            .with_message(format!("did not recognize type `{name}`"))
            .with_label(head.name.span(), "unknown type name");
        if Registry::is_known_unsupported(name) {
            diagnostic = diagnostic.with_note(format!(
                "`{name}` is a catalog type without a structured representation; it is kept as raw text"
            ));
        }
        self.sink.emit(diagnostic);
        TypeNode::unknown(seg.text)
    }

    #[cold]
    fn missing_options(&mut self, head: &Head<'_>, message: &str) {
        debug!(name = head.name.text, "composite type without arguments");
        self.sink.emit(
            Diagnostic::new(ErrorCode::E0003)
                .with_message(message)
                .with_label(head.name.span_after(), "expected `(...)`"),
        );
    }

    #[cold]
    fn field_without_type(&mut self, field: Segment<'_>, name: Segment<'_>) {
        debug!(field = name.text, "row field without type");
        let message = if name.is_empty() {
            "empty row field definition".to_owned()
        } else {
            format!("row field `{}` has no type", name.text)
        };
        self.sink.emit(
            Diagnostic::new(ErrorCode::E0003)
                .with_message(message)
                .with_label(field.span_after(), "expected a type"),
        );
    }

    #[cold]
    fn malformed_argument(
        &mut self,
        seg: Segment<'_>,
        arg: Segment<'_>,
        kind: ScalarKind,
        error: &IntErrorKind,
    ) -> TypeNode {
        debug!(kind = %kind, arg = arg.text, "malformed type argument");
        let reason = match error {
            IntErrorKind::Empty => "missing parameter",
            IntErrorKind::PosOverflow => "does not fit in 32 bits",
            _ => "not a non-negative integer",
        };
        self.sink.emit(
            Diagnostic::new(ErrorCode::E0003)
                .with_message(format!("`{kind}` expects integer parameters, found `{}`", arg.text))
                .with_label(arg.span(), reason)
                .with_secondary_label(seg.span(), "in this type"),
        );
        TypeNode::unknown(seg.text)
    }
}
