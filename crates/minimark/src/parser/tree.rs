//! Tag tree builder.
//!
//! A single left-to-right pass over the input with an explicit stack of open
//! tags. The bottom of the stack is a synthetic root that never leaves the
//! builder; callers receive its children.

use crate::node::{Node, TagNode, TextNode};

use super::tag::TagContent;

/// Parses markup into a tag tree.
///
/// Never fails: malformed markup stays in the tree as literal text.
///
/// # Examples
///
/// ```
/// use minimark::parser::parse;
///
/// let nodes = parse("<red>Hello</red> World");
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[0].as_tag().unwrap().name, "red");
/// assert_eq!(nodes[1].as_text().unwrap().content, " World");
/// ```
pub fn parse(input: &str) -> Vec<Node<'_>> {
    let mut builder = TreeBuilder::new(input);
    builder.run();
    builder.finish()
}

/// The builder state. Everything is local to one `parse` call.
struct TreeBuilder<'a> {
    input: &'a str,
    /// Open tags; index 0 is the synthetic root.
    stack: Vec<TagNode<'a>>,
    /// Start of the pending text run. The run always ends at the cursor.
    text_start: Option<usize>,
}

impl<'a> TreeBuilder<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            stack: vec![TagNode::new("", Vec::new(), 0, input.len())],
            text_start: None,
        }
    }

    fn run(&mut self) {
        let mut pos = 0;

        while let Some(offset) = self.input[pos..].find('<') {
            let lt = pos + offset;
            if lt > pos {
                self.mark_text(pos);
            }

            pos = match self.consume_tag(lt) {
                Some(next) => next,
                None => {
                    self.mark_text(lt);
                    lt + 1
                }
            };
        }

        if pos < self.input.len() {
            self.mark_text(pos);
        }
        self.flush_text(self.input.len());
    }

    /// Try to consume a tag whose `<` is at `lt`.
    ///
    /// Returns the offset just past the consumed `>`, or `None` if the `<`
    /// must be kept as literal text.
    fn consume_tag(&mut self, lt: usize) -> Option<usize> {
        let Some(gt) = self.input[lt + 1..].find('>').map(|i| lt + 1 + i) else {
            log::trace!("no `>` after `<` at {lt}, keeping it as text");
            return None;
        };

        let content = &self.input[lt + 1..gt];
        let Some(tag) = TagContent::parse(content) else {
            log::trace!("invalid tag content {content:?} at {lt}, keeping `<` as text");
            return None;
        };

        let end = gt + 1;
        match tag {
            TagContent::Reset => {
                self.flush_text(lt);
                self.unwind_to(1);
            }
            TagContent::Close(name) => match self.find_open(name) {
                Some(depth) => {
                    self.flush_text(lt);
                    self.close(depth, end);
                }
                None => {
                    log::trace!("unmatched closing tag </{name}> at {lt}, keeping it as text");
                    self.mark_text(lt);
                }
            },
            TagContent::Open {
                name,
                args,
                self_closing,
            } => {
                self.flush_text(lt);
                if !self_closing {
                    self.open(TagNode::new(name, args, lt, end));
                }
            }
        }

        Some(end)
    }

    fn mark_text(&mut self, at: usize) {
        self.text_start.get_or_insert(at);
    }

    /// Attach the pending text run, ending at `end`, to the top of the stack.
    fn flush_text(&mut self, end: usize) {
        let Some(start) = self.text_start.take() else {
            return;
        };
        if end <= start {
            return;
        }

        let text = TextNode {
            content: &self.input[start..end],
            start,
            end,
        };
        if let Some(top) = self.stack.last_mut() {
            top.end = top.end.max(end);
            top.children.push(Node::Text(text));
        }
    }

    fn open(&mut self, tag: TagNode<'a>) {
        if let Some(top) = self.stack.last_mut() {
            top.end = top.end.max(tag.end);
        }
        self.stack.push(tag);
    }

    /// Stack index of the innermost open tag called `name`. Never the root.
    fn find_open(&self, name: &str) -> Option<usize> {
        self.stack
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, tag)| tag.name == name)
            .map(|(depth, _)| depth)
    }

    /// Close the tag at `depth`, implicitly closing everything above it.
    fn close(&mut self, depth: usize, end: usize) {
        self.unwind_to(depth + 1);
        if let Some(tag) = self.stack.get_mut(depth) {
            tag.end = end;
        }
        self.unwind_to(depth);
    }

    /// Pop tags until only `len` entries remain, attaching each popped tag
    /// to its parent. The root is never popped.
    fn unwind_to(&mut self, len: usize) {
        let len = len.max(1);
        while self.stack.len() > len {
            let Some(mut tag) = self.stack.pop() else {
                break;
            };
            tag.cover_children();
            if let Some(parent) = self.stack.last_mut() {
                parent.end = parent.end.max(tag.end);
                parent.children.push(Node::Tag(tag));
            }
        }
    }

    fn finish(mut self) -> Vec<Node<'a>> {
        self.unwind_to(1);
        let Some(mut root) = self.stack.pop() else {
            return Vec::new();
        };
        std::mem::take(&mut root.children)
    }
}
