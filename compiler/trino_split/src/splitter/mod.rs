//! Depth and quote tracking scanner behind [`Splitter`].
//!
//! The scanner never looks at every byte. It jumps between the four bytes it
//! cares about (delimiter, open bracket, close bracket, quote) with `memchr`,
//! so the cost is proportional to the number of structural bytes rather than
//! the length of the text.
//!
//! All configured bytes are ASCII. ASCII bytes never occur inside a multi-byte
//! UTF-8 sequence, so every split position is a char boundary and slicing
//! `text` at it cannot panic.

use std::iter::FusedIterator;

/// Returns the earliest (minimum) of two optional positions.
///
/// `memchr3` handles at most three needles; the quote byte is searched
/// separately and the two results are combined here.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Configuration for bracket and quote aware splitting.
///
/// The defaults match catalog type descriptors: split on `,`, quote with `"`,
/// treat `\"` as an escaped quote, nest with `(` and `)`.
///
/// A delimiter splits only at bracket depth zero and outside quotes. Brackets
/// are counted even inside a quoted region, and a closing bracket that drives
/// the depth negative is not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Splitter<'e> {
    delimiter: u8,
    quote: u8,
    escaped_quote: &'e str,
    open_bracket: u8,
    close_bracket: u8,
}

impl Default for Splitter<'static> {
    fn default() -> Self {
        Splitter::new()
    }
}

impl Splitter<'static> {
    /// Splitter with the descriptor defaults.
    pub const fn new() -> Self {
        Splitter {
            delimiter: b',',
            quote: b'"',
            escaped_quote: "\\\"",
            open_bracket: b'(',
            close_bracket: b')',
        }
    }
}

impl<'e> Splitter<'e> {
    /// Use `delimiter` as the split byte.
    ///
    /// # Panics
    ///
    /// Panics if `delimiter` is not ASCII.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        assert!(delimiter.is_ascii(), "delimiter must be an ASCII byte");
        self.delimiter = delimiter;
        self
    }

    /// Use `quote` to open and close quoted regions.
    ///
    /// # Panics
    ///
    /// Panics if `quote` is not ASCII.
    #[must_use]
    pub const fn with_quote(mut self, quote: u8) -> Self {
        assert!(quote.is_ascii(), "quote must be an ASCII byte");
        self.quote = quote;
        self
    }

    /// Sequence that, when it ends at a quote byte, keeps the region open.
    ///
    /// An empty sequence means a quoted region never closes.
    #[must_use]
    pub fn with_escaped_quote<'n>(self, escaped_quote: &'n str) -> Splitter<'n> {
        Splitter {
            delimiter: self.delimiter,
            quote: self.quote,
            escaped_quote,
            open_bracket: self.open_bracket,
            close_bracket: self.close_bracket,
        }
    }

    /// Use `open` / `close` as the nesting pair, e.g. `b'['` and `b']'`.
    ///
    /// # Panics
    ///
    /// Panics if either byte is not ASCII.
    #[must_use]
    pub const fn with_brackets(mut self, open: u8, close: u8) -> Self {
        assert!(
            open.is_ascii() && close.is_ascii(),
            "brackets must be ASCII bytes"
        );
        self.open_bracket = open;
        self.close_bracket = close;
        self
    }

    /// The configured delimiter byte.
    #[inline]
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Split `text` into borrowed segments.
    #[inline]
    pub fn split<'a>(self, text: &'a str) -> Split<'a>
    where
        'e: 'a,
    {
        Split {
            inner: self.split_indices(text),
        }
    }

    /// Split `text` into `(byte_offset, segment)` pairs.
    ///
    /// The offset is where the segment starts inside `text`.
    #[inline]
    pub fn split_indices<'a>(self, text: &'a str) -> SplitIndices<'a>
    where
        'e: 'a,
    {
        SplitIndices {
            text,
            config: self,
            segment_start: 0,
            pos: 0,
            depth: 0,
            in_quotes: false,
            finished: false,
        }
    }
}

/// Iterator over `(offset, segment)` pairs. See [`Splitter::split_indices`].
#[derive(Clone, Debug)]
pub struct SplitIndices<'a> {
    text: &'a str,
    config: Splitter<'a>,
    segment_start: usize,
    pos: usize,
    depth: i64,
    in_quotes: bool,
    finished: bool,
}

impl<'a> SplitIndices<'a> {
    /// Position of the next structural byte at or after `self.pos`.
    #[inline]
    fn next_structural(&self) -> Option<usize> {
        let remaining = self.text.as_bytes().get(self.pos..)?;
        let c = &self.config;
        let primary = memchr::memchr3(c.delimiter, c.open_bracket, c.close_bracket, remaining);
        let quote = memchr::memchr(c.quote, remaining);
        earliest_of(primary, quote).map(|offset| self.pos + offset)
    }

    /// Whether the quote byte at `idx` is the tail of an escaped quote.
    #[inline]
    fn is_escaped_quote(&self, idx: usize) -> bool {
        self.text.as_bytes()[..=idx].ends_with(self.config.escaped_quote.as_bytes())
    }
}

impl<'a> Iterator for SplitIndices<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(idx) = self.next_structural() {
            let byte = self.text.as_bytes()[idx];
            self.pos = idx + 1;

            // The delimiter wins over every other role the byte could play.
            if byte == self.config.delimiter && self.depth == 0 && !self.in_quotes {
                let start = self.segment_start;
                self.segment_start = idx + 1;
                return Some((start, &self.text[start..idx]));
            } else if byte == self.config.open_bracket {
                self.depth += 1;
            } else if byte == self.config.close_bracket {
                self.depth -= 1;
            } else if byte == self.config.quote {
                if !self.in_quotes {
                    self.in_quotes = true;
                } else if !self.is_escaped_quote(idx) {
                    self.in_quotes = false;
                }
            }
        }

        // The remainder is always yielded, even when empty.
        self.finished = true;
        self.pos = self.text.len();
        let start = self.segment_start;
        Some((start, &self.text[start..]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(self.text.len().saturating_sub(self.pos) + 1))
        }
    }
}

impl FusedIterator for SplitIndices<'_> {}

/// Iterator over borrowed segments. See [`Splitter::split`].
#[derive(Clone, Debug)]
pub struct Split<'a> {
    inner: SplitIndices<'a>,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, segment)| segment)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Split<'_> {}
