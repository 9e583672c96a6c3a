//! Byte offset to line/column conversion.

use line_index::{LineCol, TextSize, WideEncoding};

/// A zero-based line/column position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Line table for one document.
///
/// Lookups go through [`line_index::LineIndex`]; this wrapper keeps the
/// text so offsets can be clamped onto character boundaries first.
///
/// # Examples
///
/// ```
/// use minimessage_highlighter::{LineIndex, Position};
///
/// let index = LineIndex::new("ab\nçd");
/// assert_eq!(index.position(5), Position::new(1, 1));
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    text: &'a str,
    lines: line_index::LineIndex,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: line_index::LineIndex::new(text),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_col(self.text.len()).line as usize + 1
    }

    /// Position of byte `offset`; `character` counts `char`s.
    ///
    /// Offsets past the end clamp to the end, offsets inside a character
    /// resolve to that character.
    pub fn position(&self, offset: usize) -> Position {
        self.wide(offset, WideEncoding::Utf32)
    }

    /// Position of byte `offset` with `character` counted in UTF-16 code
    /// units, as editors using LSP conventions expect.
    pub fn position_utf16(&self, offset: usize) -> Position {
        self.wide(offset, WideEncoding::Utf16)
    }

    fn wide(&self, offset: usize, encoding: WideEncoding) -> Position {
        let line_col = self.line_col(offset);
        let character = self
            .lines
            .to_wide(encoding, line_col)
            .map_or(line_col.col, |wide| wide.col);
        Position::new(line_col.line as usize, character as usize)
    }

    /// UTF-8 line/column of `offset`, floored onto a char boundary.
    fn line_col(&self, offset: usize) -> LineCol {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let size = TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX));
        self.lines
            .try_line_col(size)
            .unwrap_or(LineCol { line: 0, col: 0 })
    }
}
