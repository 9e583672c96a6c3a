//! The highlighting pipeline: extract literals, run each one through the
//! markup engine, and map the results back onto document coordinates.

use std::fs;
use std::ops::Range;
use std::path::Path;

use minimark::{Appearance, Markup, Segment};

use crate::document::{DocumentKind, Literal};
use crate::error::{DocumentError, Result};
use crate::position::{LineIndex, Position};

/// A styled byte range of a document.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    /// Absolute byte range in the document.
    pub range: Range<usize>,
    pub start: Position,
    pub end: Position,
    pub appearance: Appearance,
}

/// Highlight one literal. Offsets are absolute document offsets.
///
/// Literals are independent: nothing carries over from one to the next.
pub fn highlight_literal(literal: &Literal<'_>) -> Vec<Segment> {
    let base = literal.range.start;
    Markup::parse(literal.content)
        .segments()
        .map(|segment| Segment {
            start: base + segment.start,
            end: base + segment.end,
            ..segment
        })
        .collect()
}

/// Highlight every value string literal of `text`.
///
/// A malformed document yields an error and no highlights at all.
///
/// # Examples
///
/// ```
/// use minimessage_highlighter::{DocumentKind, highlight_document};
///
/// let text = r#"{"motd": "<red>Hi</red>"}"#;
/// let highlights = highlight_document(text, DocumentKind::Json).unwrap();
/// assert_eq!(highlights.len(), 1);
/// assert_eq!(&text[highlights[0].range.clone()], "Hi");
/// ```
pub fn highlight_document(text: &str, kind: DocumentKind) -> Result<Vec<Highlight>> {
    let literals = kind.extract(text).inspect_err(|err| {
        log::warn!("{kind} document content unavailable: {err}");
    })?;

    let index = LineIndex::new(text);
    let highlights: Vec<Highlight> = literals
        .iter()
        .flat_map(highlight_literal)
        .map(|segment| Highlight {
            range: segment.start..segment.end,
            start: index.position(segment.start),
            end: index.position(segment.end),
            appearance: segment.appearance,
        })
        .collect();

    log::debug!(
        "{kind} document: {} literals, {} highlights",
        literals.len(),
        highlights.len()
    );
    Ok(highlights)
}

/// A document loaded from disk.
#[derive(Clone, Debug)]
pub struct Document {
    kind: DocumentKind,
    text: String,
}

impl Document {
    pub fn new(kind: DocumentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Read `path`, picking the format from its extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let kind = DocumentKind::from_path(path)
            .ok_or_else(|| DocumentError::Unsupported(path.display().to_string()))?;
        let text = fs::read_to_string(path)?;
        Ok(Self::new(kind, text))
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn literals(&self) -> Result<Vec<Literal<'_>>> {
        self.kind.extract(&self.text)
    }

    pub fn highlights(&self) -> Result<Vec<Highlight>> {
        highlight_document(&self.text, self.kind)
    }
}
