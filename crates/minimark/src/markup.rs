//! Parsed markup result type.

use crate::effect::{Segment, expand};
use crate::node::Node;
use crate::resolve::resolve;
use crate::span::Span;
use crate::style::Style;

/// A parsed piece of markup: the tag tree plus the resolved runs.
///
/// Borrows the source; every offset it hands out is a byte offset into it.
///
/// # Examples
///
/// ```
/// use minimark::Markup;
///
/// let markup = Markup::parse("<bold>Hello</bold> World");
/// assert_eq!(markup.text(), "Hello World");
/// assert_eq!(markup.spans().len(), 2);
/// assert_eq!(markup.style_at(1).bold, Some(true));
/// ```
#[derive(Clone, Debug)]
pub struct Markup<'a> {
    source: &'a str,
    nodes: Vec<Node<'a>>,
    spans: Vec<Span>,
}

impl<'a> Markup<'a> {
    /// Parse and resolve `source` from an empty style.
    pub fn parse(source: &'a str) -> Self {
        let nodes = crate::parser::parse(source);
        let spans = resolve(&nodes, &Style::default());
        Self {
            source,
            nodes,
            spans,
        }
    }

    /// The markup this was parsed from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Top-level nodes of the tag tree.
    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }

    /// One span per text run, in document order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The visible text: every run concatenated, tags removed.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .filter_map(|span| span.text(self.source))
            .collect()
    }

    /// Iterate over rendered segments, expanding rainbow and gradient runs
    /// one character at a time.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.spans.iter().flat_map(|span| {
            let text = span.text(self.source).unwrap_or_default();
            expand(text, span.start, &span.style)
        })
    }

    /// Style of the run covering byte `offset`, or the empty style when
    /// the offset falls on a tag.
    pub fn style_at(&self, offset: usize) -> Style {
        self.spans
            .iter()
            .find(|span| span.contains(offset))
            .map(|span| span.style.clone())
            .unwrap_or_default()
    }

    /// Returns true if no tag was consumed: the visible text is the whole
    /// source. Self-closing tags and resets count as consumed.
    pub fn is_plain(&self) -> bool {
        let visible: Option<usize> = self
            .nodes
            .iter()
            .map(|node| node.as_text().map(|text| text.content.len()))
            .sum();
        visible == Some(self.source.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_markup() {
        let markup = Markup::parse("just text");
        assert!(markup.is_plain());
        assert_eq!(markup.text(), "just text");
        assert_eq!(markup.segments().count(), 1);
    }

    #[test]
    fn plain_counts_consumed_tags() {
        assert!(Markup::parse("").is_plain());
        assert!(Markup::parse("a < b </nope> <in valid>").is_plain());
        assert!(!Markup::parse("a<bold/>b").is_plain());
        assert!(!Markup::parse("<reset>x").is_plain());
        assert!(!Markup::parse("<red>x</red>").is_plain());
    }

    #[test]
    fn style_at_tag_is_empty() {
        let markup = Markup::parse("<red>a</red>");
        assert!(markup.style_at(0).is_empty());
        assert!(markup.style_at(5).color.is_some());
        assert!(markup.style_at(6).is_empty());
    }

    #[test]
    fn segments_expand_effects() {
        let markup = Markup::parse("x<rainbow>abc</rainbow>y");
        let ranges: Vec<_> = markup.segments().map(|s| s.start..s.end).collect();
        assert_eq!(ranges, vec![0..1, 10..11, 11..12, 12..13, 23..24]);
    }
}
