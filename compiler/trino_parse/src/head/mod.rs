//! Head scanner: the type name and its parenthesized options.
//!
//! A descriptor starts with a name made of word characters, optionally
//! followed by whitespace and `(options)`. The options run up to the last
//! `)` on the line of the opening parenthesis, so `row(a integer) x)` has the
//! options `a integer) x`. Whatever follows the head is returned as `rest`;
//! the caller decides whether it is acceptable.

use crate::segment::Segment;

/// Name, options and trailing text of one descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Head<'a> {
    pub name: Segment<'a>,
    /// Text between the parentheses, `None` when there are none.
    pub options: Option<Segment<'a>>,
    /// Everything after the head, untrimmed.
    pub rest: Segment<'a>,
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scan the head of `seg`. `None` when `seg` does not start with a name.
pub(crate) fn scan(seg: Segment<'_>) -> Option<Head<'_>> {
    let text = seg.text;
    let name_len = text
        .find(|c: char| !is_word_char(c))
        .unwrap_or(text.len());
    if name_len == 0 {
        return None;
    }

    let after_name = &text[name_len..];
    let open = name_len + (after_name.len() - after_name.trim_start().len());
    let close = text[open..].strip_prefix('(').and_then(|inner| {
        let line = inner.find('\n').map_or(inner, |nl| &inner[..nl]);
        line.rfind(')')
    });

    let name = seg.slice(0..name_len);
    Some(match close {
        Some(close) => {
            let body_start = open + 1;
            let body_end = body_start + close;
            Head {
                name,
                options: Some(seg.slice(body_start..body_end)),
                rest: seg.slice(body_end + 1..text.len()),
            }
        }
        None => Head {
            name,
            options: None,
            rest: seg.slice(name_len..text.len()),
        },
    })
}
