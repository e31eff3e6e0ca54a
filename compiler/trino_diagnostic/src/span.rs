//! Byte spans into a normalized descriptor.

use std::fmt;

/// Error when creating a span from a range that exceeds `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    #[error("span start {0} (0x{0:X}) exceeds u32::MAX")]
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    #[error("span end {0} (0x{0:X}) exceeds u32::MAX")]
    EndTooLarge(usize),
}

/// Byte range `start..end` (end exclusive).
///
/// Offsets index into the normalized text the parser worked on (trimmed and
/// lowercased), which is returned alongside the diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span used when there is no meaningful location.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Try to create a span from a byte range.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Create a span from a byte range, clamping offsets to `u32::MAX`.
    ///
    /// Descriptors larger than 4 GiB still get (imprecise) locations instead
    /// of a panic.
    #[inline]
    pub fn saturating(range: std::ops::Range<usize>) -> Self {
        Self::try_from_range(range.clone()).unwrap_or_else(|_| Span {
            start: u32::try_from(range.start).unwrap_or(u32::MAX),
            end: u32::try_from(range.end).unwrap_or(u32::MAX),
        })
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if another span is fully contained within this span.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert_eq!(span.to_range(), 10..20);
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(20, 30).merge(Span::new(10, 25));
        assert_eq!(merged, Span::new(10, 30));
    }

    #[test]
    fn test_span_contains_span() {
        let outer = Span::new(4, 20);
        assert!(outer.contains_span(Span::new(4, 20)));
        assert!(outer.contains_span(Span::new(8, 9)));
        assert!(!outer.contains_span(Span::new(3, 9)));
        assert!(!outer.contains_span(Span::new(8, 21)));
    }

    #[test]
    fn test_span_try_from_range() {
        assert_eq!(Span::try_from_range(50..100), Ok(Span::new(50, 100)));

        let large = u32::MAX as usize + 1;
        assert_eq!(
            Span::try_from_range(large..large + 1),
            Err(SpanError::StartTooLarge(large))
        );
        assert_eq!(
            Span::try_from_range(0..large),
            Err(SpanError::EndTooLarge(large))
        );
    }

    #[test]
    fn test_span_saturating() {
        assert_eq!(Span::saturating(3..7), Span::new(3, 7));

        let large = u32::MAX as usize + 10;
        assert_eq!(Span::saturating(5..large), Span::new(5, u32::MAX));
    }

    #[test]
    fn test_span_error_display() {
        let msg = SpanError::StartTooLarge(0x1_0000_0000).to_string();
        assert!(msg.contains("start"));
        assert!(msg.contains("0x100000000"));
    }

    #[test]
    fn test_span_debug_display() {
        let span = Span::new(100, 200);
        assert_eq!(format!("{span:?}"), "100..200");
        assert_eq!(format!("{span}"), "100..200");
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
