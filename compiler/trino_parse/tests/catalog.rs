#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Descriptors as catalogs report them.
//!
//! Every case here must parse without diagnostics.

use pretty_assertions::assert_eq;
use trino_parse::{parse_type, parse_type_strict};
use trino_types::{Registry, ScalarKind, ScalarType, TypeNode};

fn clean(text: &str) -> TypeNode {
    let output = parse_type(text);
    assert!(
        output.diagnostics.is_empty(),
        "{text}: unexpected diagnostics {:#?}",
        output.diagnostics
    );
    output.ty
}

fn scalar(kind: ScalarKind) -> TypeNode {
    TypeNode::scalar(kind)
}

fn with_args(kind: ScalarKind, args: &[u32]) -> TypeNode {
    TypeNode::Scalar(ScalarType::new(kind).with_args(args.iter().copied()))
}

fn varchar10() -> TypeNode {
    with_args(ScalarKind::Varchar, &[10])
}

fn decimal20_3() -> TypeNode {
    with_args(ScalarKind::Decimal, &[20, 3])
}

fn zoned(kind: ScalarKind) -> TypeNode {
    TypeNode::Scalar(ScalarType::new(kind).with_timezone(true))
}

#[test]
fn simple_types() {
    for &(name, kind) in Registry::BUILTIN {
        assert_eq!(clean(name), scalar(kind), "{name}");
        assert_eq!(clean(&name.to_uppercase()), scalar(kind), "{name}");
    }
}

#[test]
fn type_options() {
    assert_eq!(clean("VARCHAR(10)"), varchar10());
    assert_eq!(clean("VARCHAR(10)"), clean("varchar(10)"));
    assert_eq!(clean("DECIMAL(20)"), with_args(ScalarKind::Decimal, &[20]));
    assert_eq!(clean("DECIMAL(20, 3)"), decimal20_3());
}

#[test]
fn arrays() {
    let cases = [
        ("array(integer)", TypeNode::array(scalar(ScalarKind::Integer), 1)),
        ("array(varchar(10))", TypeNode::array(varchar10(), 1)),
        ("array(decimal(20,3))", TypeNode::array(decimal20_3(), 1)),
        ("array(array(varchar(10)))", TypeNode::array(varchar10(), 2)),
    ];
    for (text, expected) in cases {
        assert_eq!(clean(text), expected, "{text}");
    }
}

#[test]
fn maps() {
    let cases = [
        (
            "map(char, integer)",
            TypeNode::map(scalar(ScalarKind::Char), scalar(ScalarKind::Integer)),
        ),
        (
            "map(varchar(10), varchar(10))",
            TypeNode::map(varchar10(), varchar10()),
        ),
        (
            "map(varchar(10), decimal(20,3))",
            TypeNode::map(varchar10(), decimal20_3()),
        ),
        (
            "map(char, array(varchar(10)))",
            TypeNode::map(scalar(ScalarKind::Char), TypeNode::array(varchar10(), 1)),
        ),
        (
            "map(varchar(10), array(varchar(10)))",
            TypeNode::map(varchar10(), TypeNode::array(varchar10(), 1)),
        ),
        (
            "map(varchar(10), array(array(varchar(10))))",
            TypeNode::map(varchar10(), TypeNode::array(varchar10(), 2)),
        ),
    ];
    for (text, expected) in cases {
        assert_eq!(clean(text), expected, "{text}");
    }
}

#[test]
fn rows() {
    let cases = [
        (
            "row(a integer, b varchar)",
            TypeNode::row([
                ("a", scalar(ScalarKind::Integer)),
                ("b", scalar(ScalarKind::Varchar)),
            ]),
        ),
        (
            "row(a varchar(20), b decimal(20,3))",
            TypeNode::row([
                ("a", with_args(ScalarKind::Varchar, &[20])),
                ("b", decimal20_3()),
            ]),
        ),
        (
            "row(x array(varchar(10)), y array(array(varchar(10))), z decimal(20,3))",
            TypeNode::row([
                ("x", TypeNode::array(varchar10(), 1)),
                ("y", TypeNode::array(varchar10(), 2)),
                ("z", decimal20_3()),
            ]),
        ),
        (
            "row(min timestamp(6) with time zone, max timestamp(6) with time zone, null_count bigint)",
            TypeNode::row([
                ("min", zoned(ScalarKind::Timestamp)),
                ("max", zoned(ScalarKind::Timestamp)),
                ("null_count", scalar(ScalarKind::BigInt)),
            ]),
        ),
    ];
    for (text, expected) in cases {
        assert_eq!(clean(text), expected, "{text}");
    }
}

#[test]
fn row_field_order_and_duplicates() {
    let ty = clean("row(b integer, a varchar, b double)");
    let TypeNode::Row(fields) = ty else {
        panic!("expected a row, got {ty:?}");
    };
    assert_eq!(fields.names().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(fields.get("b"), Some(&scalar(ScalarKind::Double)));
}

#[test]
fn row_field_spacing() {
    assert_eq!(
        clean("row(  a   integer ,b  varchar(3)  )"),
        TypeNode::row([
            ("a", scalar(ScalarKind::Integer)),
            ("b", with_args(ScalarKind::Varchar, &[3])),
        ])
    );
}

#[test]
fn quoted_row_fields() {
    let ty = clean(r#"row("first, name" varchar, "x ""y""" integer)"#);
    let TypeNode::Row(fields) = ty else {
        panic!("expected a row, got {ty:?}");
    };
    let names: Vec<String> = fields.iter().map(|f| f.unquoted_name().into_owned()).collect();
    assert_eq!(names, vec!["first, name", "x \"y\""]);
    assert_eq!(fields.get("\"first, name\""), Some(&scalar(ScalarKind::Varchar)));
}

#[test]
fn datetimes() {
    let cases = [
        ("date", scalar(ScalarKind::Date)),
        ("time", scalar(ScalarKind::Time)),
        ("time with time zone", zoned(ScalarKind::Time)),
        ("timestamp", scalar(ScalarKind::Timestamp)),
        ("timestamp with time zone", zoned(ScalarKind::Timestamp)),
        ("TIMESTAMP(3) WITH TIME ZONE", zoned(ScalarKind::Timestamp)),
        ("timestamp(3)", scalar(ScalarKind::Timestamp)),
    ];
    for (text, expected) in cases {
        assert_eq!(clean(text), expected, "{text}");
    }
}

#[test]
fn unknown_types() {
    for text in ["foobar", "hyperloglog", "ipaddress", "uuid"] {
        let output = parse_type(text);
        assert_eq!(output.ty, TypeNode::unknown(text));
        assert_eq!(output.diagnostics.len(), 1, "{text}");
        assert!(output.has_errors());
    }
}

#[test]
fn strict_parsing() {
    assert_eq!(
        parse_type_strict("array(bigint)").unwrap(),
        TypeNode::array(scalar(ScalarKind::BigInt), 1)
    );
    // Warnings do not fail strict parsing.
    assert_eq!(
        parse_type_strict("bigint unsigned").unwrap(),
        scalar(ScalarKind::BigInt)
    );

    let err = parse_type_strict("map(varchar, foobar)").unwrap_err();
    assert_eq!(err.input, "map(varchar, foobar)");
    assert_eq!(
        err.to_string(),
        "invalid type descriptor `map(varchar, foobar)`: did not recognize type `foobar`"
    );
}

#[test]
fn canonical_rendering_round_trips() {
    let cases = [
        "integer",
        "VARCHAR(10)",
        "decimal( 20 , 3 )",
        "array(array(array(date)))",
        "map(varchar, array(row(a integer, b timestamp(6) with time zone)))",
        "row(x array(varchar(10)), y map(char, json), z decimal(20,3))",
        "time with time zone",
    ];
    for text in cases {
        let ty = clean(text);
        let rendered = ty.to_string();
        assert_eq!(clean(&rendered), ty, "{text} -> {rendered}");
    }
    assert_eq!(
        clean("ARRAY(MAP(VARCHAR, DECIMAL(20, 3)))").to_string(),
        "array(map(varchar, decimal(20,3)))"
    );
}

#[test]
fn deep_array_nesting() {
    let depth = 10_000;
    let text = format!("{}integer{}", "array(".repeat(depth), ")".repeat(depth));
    let ty = clean(&text);
    assert_eq!(
        ty,
        TypeNode::array(scalar(ScalarKind::Integer), u32::try_from(depth).unwrap())
    );
    assert_eq!(ty.depth(), 2);
}

#[test]
fn deep_map_nesting() {
    let depth = 1_000;
    let text = format!(
        "{}integer{}",
        "map(varchar, ".repeat(depth),
        ")".repeat(depth)
    );
    let ty = clean(&text);
    assert_eq!(ty.depth(), depth + 1);
}
