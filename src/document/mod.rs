//! String literal extraction from structured documents.
//!
//! Only value strings are extracted; keys, table headers and comments are
//! never treated as markup.

mod json;
mod toml;

use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

use crate::error::{DocumentError, Result};

/// The document formats literals can be extracted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Json,
    Toml,
}

impl DocumentKind {
    /// Resolve an editor language id (`json`, `toml`).
    pub fn from_language_id(id: &str) -> Option<Self> {
        match id {
            "json" => Some(DocumentKind::Json),
            "toml" => Some(DocumentKind::Toml),
            _ => None,
        }
    }

    /// Resolve a file extension, without the dot. Case-insensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("json") {
            Some(DocumentKind::Json)
        } else if extension.eq_ignore_ascii_case("toml") {
            Some(DocumentKind::Toml)
        } else {
            None
        }
    }

    /// Resolve from the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Extract every value string literal of `text`.
    pub fn extract(self, text: &str) -> Result<Vec<Literal<'_>>> {
        match self {
            DocumentKind::Json => json::extract(text),
            DocumentKind::Toml => toml::extract(text),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_language_id(s)
            .or_else(|| Self::from_extension(s))
            .ok_or_else(|| DocumentError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Json => f.write_str("json"),
            DocumentKind::Toml => f.write_str("toml"),
        }
    }
}

/// One step of a key path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member or table key. JSON keys are kept raw, TOML keys are
    /// decoded.
    Key(String),
    /// Array element.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A string literal found in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal<'a> {
    /// Raw text between the quotes; escape sequences are kept verbatim.
    pub content: &'a str,
    /// Byte range of `content` in the document.
    pub range: Range<usize>,
    /// Where the literal sits in the document's data.
    pub path: Vec<PathSegment>,
}

impl Literal<'_> {
    /// The path joined with dots, e.g. `server.motd.0`.
    pub fn dotted_path(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}
