//! Long-form documentation for `--explain`.

use crate::ErrorCode;

/// Registry of explanations, one per [`ErrorCode`].
pub struct ErrorDocs;

impl ErrorDocs {
    /// The explanation for `code`, if one exists.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// All documented codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (
        ErrorCode::E0001,
        "\
# E0001: could not parse type name

A descriptor must start with a type name made of letters, digits and `_`.
Anything else, including an empty string or a bare `(`, cannot be classified.

    (varchar)        -- no name before the parenthesis
    ''               -- empty descriptor

The node becomes `Unknown` and carries the text that was rejected. Inside a
composite such as `map(, integer)` only the offending slot is affected.
",
    ),
    (
        ErrorCode::E0002,
        "\
# E0002: did not recognize type

The name is not `array`, `map` or `row` and is not registered as a scalar.

    foobar
    uuid             -- exists in the engine, no structured representation

Engine types without a structured representation (interval, ipaddress, uuid,
hyperloglog, p4hyperloglog, qdigest, tdigest) are reported here with an extra
note. Hosts that can map a name onto an existing scalar kind can register an
alias before parsing.
",
    ),
    (
        ErrorCode::E0003,
        "\
# E0003: malformed type arguments

The parentheses after a type name do not fit that type:

    map(varchar)            -- map needs a key and a value
    map(a, b, c)            -- extra parts are ignored
    array                   -- element type missing
    row(a integer, b)       -- field `b` has no type
    varchar(ten)            -- parameters must be non-negative integers

Only the malformed part degrades: a missing map value or field type becomes
`Unknown`, a scalar with unreadable parameters becomes `Unknown` as a whole,
and the enclosing type is still built.
",
    ),
    (
        ErrorCode::W0001,
        "\
# W0001: unexpected text after type

Text followed a complete type and was ignored:

    integer not null
    array(integer) foo

`with time zone` and `without time zone` after `time` or `timestamp` are part
of the type and never reported.
",
    ),
];
