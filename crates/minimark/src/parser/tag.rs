//! Tag content classifier.
//!
//! Classifies the text between `<` and `>`.

/// What a piece of tag markup means.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagContent<'a> {
    /// `<reset>`: discard every open scope.
    Reset,
    /// `</name>`: close the nearest open tag called `name`.
    Close(&'a str),
    /// `<name:arg:arg>` or the inert self-closing form `<name/>`.
    Open {
        name: &'a str,
        args: Vec<&'a str>,
        self_closing: bool,
    },
}

impl<'a> TagContent<'a> {
    /// Classify tag content (the text inside `<...>`).
    ///
    /// Returns `None` when the content is not a well-formed tag, in which
    /// case the caller keeps the `<` as literal text.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimark::parser::TagContent;
    ///
    /// assert_eq!(TagContent::parse("RESET"), Some(TagContent::Reset));
    /// assert_eq!(TagContent::parse("/red"), Some(TagContent::Close("red")));
    /// assert!(matches!(
    ///     TagContent::parse("gradient:red:blue"),
    ///     Some(TagContent::Open { name: "gradient", .. })
    /// ));
    /// assert_eq!(TagContent::parse("not a tag"), None);
    /// ```
    pub fn parse(content: &'a str) -> Option<Self> {
        if !is_valid(content) {
            return None;
        }

        let trimmed = content.trim();
        let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if normalized.eq_ignore_ascii_case("reset") {
            return Some(TagContent::Reset);
        }

        if content.starts_with('/') {
            let name = trimmed.strip_prefix('/').unwrap_or(trimmed);
            return Some(TagContent::Close(name));
        }

        let mut parts = normalized.split(':').map(str::trim);
        let name = parts.next().unwrap_or_default();
        Some(TagContent::Open {
            name,
            args: parts.collect(),
            self_closing: normalized.len() != trimmed.len(),
        })
    }
}

/// Check tag content against the tag grammar.
///
/// After trimming: the first character is an ASCII letter, `/`, `!` or
/// `#`; the rest are ASCII letters, digits, `:`, `#`, `-`, `_` or `!`,
/// optionally followed by a single `/` (self-closing form). The content may
/// not contain `<`.
pub fn is_valid(content: &str) -> bool {
    if content.contains('<') {
        return false;
    }

    let trimmed = content.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || matches!(first, '/' | '!' | '#')) {
        return false;
    }

    let rest = chars.as_str();
    let body = rest.strip_suffix('/').unwrap_or(rest);
    body.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ':' | '#' | '-' | '_' | '!'))
}
