use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorCode, Span};

fn render(emitter: TerminalEmitter<Vec<u8>>) -> String {
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

fn unknown_in_map() -> Diagnostic {
    Diagnostic::new(ErrorCode::E0002)
        .with_message("did not recognize type `foobar`")
        .with_label(Span::new(4, 10), "unknown type name")
        .with_note("names are matched case-insensitively")
}

// Fallback (no source) tests

#[test]
fn test_without_source_renders_bare_span() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit(&unknown_in_map());

    assert_eq!(
        render(emitter),
        "error[E0002]: did not recognize type `foobar`\n\
         \x20 --> 4..10: unknown type name\n\
         \x20 = note: names are matched case-insensitively\n\
         \n"
    );
}

// Source-aware tests

#[test]
fn test_with_source_underlines_span() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.set_source("map(foobar, integer)");
    emitter.emit(&unknown_in_map());

    assert_eq!(
        render(emitter),
        "error[E0002]: did not recognize type `foobar`\n\
         \x20 --> 4..10\n\
         \x20  |\n\
         \x20  | map(foobar, integer)\n\
         \x20  |     ^^^^^^ unknown type name\n\
         \x20 = note: names are matched case-insensitively\n\
         \n"
    );
}

#[test]
fn test_empty_span_gets_one_caret() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.set_source("array");
    emitter.emit(
        &Diagnostic::new(ErrorCode::E0003)
            .with_message("array expects an element type")
            .with_label(Span::new(5, 5), "missing `(...)`"),
    );

    let text = render(emitter);
    assert!(text.contains("   | array\n"), "{text}");
    assert!(text.contains("   |      ^ missing `(...)`\n"), "{text}");
}

#[test]
fn test_secondary_label_uses_dashes() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.set_source("map(integer)");
    emitter.emit(
        &Diagnostic::new(ErrorCode::E0003)
            .with_label(Span::new(4, 11), "only one type")
            .with_secondary_label(Span::new(0, 12), "in this map"),
    );

    let text = render(emitter);
    assert!(text.contains("   |     ^^^^^^^ only one type\n"), "{text}");
    assert!(text.contains("   | ------------ in this map\n"), "{text}");
}

#[test]
fn test_multiline_source_shows_only_the_spanned_line() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.set_source("row(a integer,\nb foo)");
    emitter.emit(&Diagnostic::new(ErrorCode::E0002).with_label(Span::new(17, 20), "here"));

    let text = render(emitter);
    assert!(text.contains("   | b foo)\n"), "{text}");
    assert!(text.contains("   |   ^^^ here\n"), "{text}");
    assert!(!text.contains("row(a integer"), "{text}");
}

#[test]
fn test_columns_count_chars_not_bytes() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let source = "row(größe foo)";
    let start = u32::try_from(source.find("foo").unwrap_or(0)).unwrap_or(0);
    emitter.set_source(source);
    emitter.emit(&Diagnostic::new(ErrorCode::E0002).with_label(Span::new(start, start + 3), "x"));

    let text = render(emitter);
    assert!(text.contains("   |           ^^^ x\n"), "{text}");
}

#[test]
fn test_cleared_source_falls_back() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.set_source("map(foobar, integer)");
    emitter.clear_source();
    emitter.emit(&unknown_in_map());

    assert!(render(emitter).contains("--> 4..10: unknown type name"));
}

#[test]
fn test_with_color() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&unknown_in_map());

    let text = render(emitter);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E0002"));
}

#[test]
fn test_auto_color_follows_tty() {
    assert!(ColorMode::Auto.enabled(true));
    assert!(!ColorMode::Auto.enabled(false));
    assert!(ColorMode::Always.enabled(false));
    assert!(!ColorMode::Never.enabled(true));
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
}

#[test]
fn test_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(0, 0);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(0, 3);

    assert_eq!(
        render(emitter),
        "error: 1 descriptor error emitted\n\
         error: 2 descriptor errors; 1 warning emitted\n\
         warning: 3 warnings emitted\n"
    );
}

#[test]
fn test_emit_all() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_all(&[
        Diagnostic::new(ErrorCode::E0001).with_message("error 1"),
        Diagnostic::new(ErrorCode::W0001).with_message("warning 1"),
    ]);
    emitter.flush();

    let text = render(emitter);
    assert!(text.contains("error[E0001]: error 1"));
    assert!(text.contains("warning[W0001]: warning 1"));
}
