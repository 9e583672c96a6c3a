//! Highlights MiniMessage markup inside JSON and TOML documents.
//!
//! Every value string of a document is treated as an independent piece of
//! markup. The markup engine lives in the [`minimark`] crate; this crate
//! finds the string literals, feeds them through it and maps the results
//! back onto document offsets and line/column positions.
//!
//! ```
//! use minimessage_highlighter::{DocumentKind, highlight_document};
//!
//! let text = "[server]\nmotd = \"<gold>Welcome <bold>home</bold>\"\n";
//! let highlights = highlight_document(text, DocumentKind::Toml).unwrap();
//!
//! let home = &highlights[1];
//! assert_eq!(&text[home.range.clone()], "home");
//! assert_eq!(home.appearance.bold, Some(true));
//! assert_eq!(home.start.line, 1);
//! ```

pub mod document;
pub mod error;
pub mod highlight;
pub mod position;

pub use document::{DocumentKind, Literal, PathSegment};
pub use error::{DocumentError, Result};
pub use highlight::{Document, Highlight, highlight_document, highlight_literal};
pub use position::{LineIndex, Position};

pub use minimark;
