//! Diagnostics for catalog type descriptor parsing.
//!
//! Parsing a descriptor never fails outright. Anything the parser cannot
//! classify becomes an `Unknown` node in the result tree, and the reason is
//! reported here as a [`Diagnostic`]:
//! - Error codes for searchability (`E0002`, `--explain`)
//! - Clear messages (what went wrong)
//! - Primary span into the normalized descriptor (where it went wrong)
//! - Notes (why, and what the engine calls the type)
//!
//! Diagnostics reach the caller either as a returned list or through a
//! caller-supplied [`DiagnosticSink`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod queue;
mod sink;
mod span;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, ErrorKind, UnknownErrorCode};
pub use errors::ErrorDocs;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::{DiagnosticSink, TracingSink};
pub use span::{Span, SpanError};
