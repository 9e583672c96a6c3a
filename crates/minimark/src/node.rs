//! Tag tree nodes.
//!
//! Nodes borrow from the parsed input: every text run is a contiguous slice
//! of it, and tag names and arguments are trimmed slices of the tag markup.
//! Offsets are byte offsets into the original input.

use std::ops::Range;

/// A node of the tag tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<'a> {
    Text(TextNode<'a>),
    Tag(TagNode<'a>),
}

impl<'a> Node<'a> {
    /// Start offset (inclusive).
    pub fn start(&self) -> usize {
        match self {
            Node::Text(text) => text.start,
            Node::Tag(tag) => tag.start,
        }
    }

    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        match self {
            Node::Text(text) => text.end,
            Node::Tag(tag) => tag.end,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    pub fn as_text(&self) -> Option<&TextNode<'a>> {
        match self {
            Node::Text(text) => Some(text),
            Node::Tag(_) => None,
        }
    }

    pub fn as_tag(&self) -> Option<&TagNode<'a>> {
        match self {
            Node::Tag(tag) => Some(tag),
            Node::Text(_) => None,
        }
    }
}

/// A literal run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode<'a> {
    /// The run, exactly as it appears in the input.
    pub content: &'a str,
    pub start: usize,
    pub end: usize,
}

/// An opened tag and everything nested inside it.
///
/// `start` is the offset of the `<`. `end` covers the closing tag when one
/// was found, otherwise the furthest descendant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagNode<'a> {
    /// Tag name. Negation tags keep their `!` prefix (`!bold`).
    pub name: &'a str,
    /// Positional arguments (the `:`-separated parts after the name).
    pub args: Vec<&'a str>,
    pub children: Vec<Node<'a>>,
    pub start: usize,
    pub end: usize,
}

impl<'a> TagNode<'a> {
    pub(crate) fn new(name: &'a str, args: Vec<&'a str>, start: usize, end: usize) -> Self {
        Self {
            name,
            args,
            children: Vec::new(),
            start,
            end,
        }
    }

    /// Returns true for `!`-prefixed negation tags.
    pub fn is_negated(&self) -> bool {
        self.name.starts_with('!')
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Widen `end` so it covers every direct child.
    ///
    /// Run on each tag once its children are complete; done innermost
    /// first, the whole subtree ends up covered.
    pub(crate) fn cover_children(&mut self) {
        if let Some(max) = self.children.iter().map(Node::end).max() {
            self.end = self.end.max(max);
        }
    }
}

impl Drop for TagNode<'_> {
    // Flatten the subtree so deeply nested markup does not recurse.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Tag(mut tag) = node {
                pending.append(&mut tag.children);
            }
        }
    }
}
