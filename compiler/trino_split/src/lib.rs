//! Bracket and quote aware splitting.
//!
//! Catalog type descriptors nest comma lists inside parentheses
//! (`map(varchar(10), decimal(20,3))`) and may quote field names that contain
//! reserved characters (`row("a,b" integer)`). A plain `str::split` cuts
//! through both. [`Splitter`] only splits at delimiters that sit at bracket
//! depth zero and outside a quoted region.
//!
//! ```text
//! use trino_split::split;
//!
//! let parts: Vec<&str> = split("a,(b,c),d").collect();
//! assert_eq!(parts, ["a", "(b,c)", "d"]);
//! ```
//!
//! The iterators borrow from the input and never allocate.

mod splitter;

pub use splitter::{Split, SplitIndices, Splitter};

/// Split `text` on top-level commas using the default [`Splitter`].
#[inline]
pub fn split(text: &str) -> Split<'_> {
    Splitter::new().split(text)
}

/// Split `text` on a top-level `delimiter` byte, defaults otherwise.
///
/// # Panics
///
/// Panics if `delimiter` is not ASCII.
#[inline]
pub fn split_on(text: &str, delimiter: u8) -> Split<'_> {
    Splitter::new().with_delimiter(delimiter).split(text)
}
