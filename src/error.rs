use thiserror::Error;

/// Errors raised while extracting literals from a document.
///
/// Any of these makes the whole document "content unavailable": no literal
/// is highlighted.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported document type: {0}")]
    Unsupported(String),

    #[error("invalid JSON: expected {expected} at byte {offset}")]
    Json {
        expected: &'static str,
        offset: usize,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml_edit::TomlError),
}

impl DocumentError {
    /// Byte offset the error points at, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DocumentError::Json { offset, .. } => Some(*offset),
            DocumentError::Toml(err) => err.span().map(|span| span.start),
            DocumentError::Io(_) | DocumentError::Unsupported(_) => None,
        }
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, DocumentError>;
