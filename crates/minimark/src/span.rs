//! Span type for resolved text runs.

use std::ops::Range;

use crate::style::Style;

/// A text run together with the style resolved for it.
///
/// `start` and `end` are byte offsets into the original markup, exactly
/// as recorded on the text node the run came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Style inherited from every enclosing tag.
    pub style: Style,
}

impl Span {
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if this span covers a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if this span contains a given byte offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// The slice of `source` this span covers, if the offsets fit it.
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.range())
    }
}
