//! Positioned slices of the normalized source.

use std::ops::Range;

use trino_diagnostic::Span;
use trino_split::Splitter;

/// A slice of the normalized descriptor together with its byte offset.
///
/// Every sub-parse works on a `Segment`, so diagnostics can point back into
/// the full source without any bookkeeping at the call sites.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl<'a> Segment<'a> {
    #[inline]
    pub fn new(text: &'a str, start: usize) -> Self {
        Segment { text, start }
    }

    #[inline]
    pub fn end(self) -> usize {
        self.start + self.text.len()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.text.is_empty()
    }

    /// Strip surrounding whitespace, keeping the offset in step.
    pub fn trim(self) -> Self {
        let trimmed = self.text.trim_start();
        let lead = self.text.len() - trimmed.len();
        Segment::new(trimmed.trim_end(), self.start + lead)
    }

    /// Sub-slice by byte range relative to this segment.
    pub fn slice(self, range: Range<usize>) -> Self {
        Segment::new(&self.text[range.clone()], self.start + range.start)
    }

    /// The rest of this segment starting where `inner` starts.
    pub fn tail_from(self, inner: Segment<'_>) -> Self {
        self.slice(inner.start - self.start..self.text.len())
    }

    /// Top-level pieces of this segment.
    pub fn split(self, splitter: Splitter<'static>) -> impl Iterator<Item = Segment<'a>> {
        let start = self.start;
        splitter
            .split_indices(self.text)
            .map(move |(offset, piece)| Segment::new(piece, start + offset))
    }

    #[inline]
    pub fn span(self) -> Span {
        Span::saturating(self.start..self.end())
    }

    /// Empty span just past the end of this segment.
    #[inline]
    pub fn span_after(self) -> Span {
        Span::saturating(self.end()..self.end())
    }

    /// Span from the start of `self` to the end of `last`.
    #[inline]
    pub fn span_through(self, last: Segment<'_>) -> Span {
        Span::saturating(self.start..last.end())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_trim_tracks_offset() {
        let seg = Segment::new("  varchar(10) ", 4).trim();
        assert_eq!(seg, Segment::new("varchar(10)", 6));
        assert_eq!(seg.span(), Span::new(6, 17));
    }

    #[test]
    fn test_split_offsets_are_absolute() {
        let seg = Segment::new("varchar, integer", 4);
        let pieces: Vec<Segment<'_>> = seg.split(Splitter::new()).collect();
        assert_eq!(
            pieces,
            vec![Segment::new("varchar", 4), Segment::new(" integer", 12)]
        );
        assert_eq!(pieces[1].trim().span(), Span::new(13, 20));
    }

    #[test]
    fn test_tail_from() {
        let field = Segment::new("min timestamp(6) with time zone", 4);
        let mut tokens = field.split(Splitter::new().with_delimiter(b' '));
        let _name = tokens.next();
        let first = tokens.next().unwrap_or(field);
        assert_eq!(
            field.tail_from(first),
            Segment::new("timestamp(6) with time zone", 8)
        );
    }

    #[test]
    fn test_spans() {
        let a = Segment::new("a", 2);
        let b = Segment::new("bcd", 6);
        assert_eq!(a.span_through(b), Span::new(2, 9));
        assert_eq!(b.span_after(), Span::new(9, 9));
    }
}
