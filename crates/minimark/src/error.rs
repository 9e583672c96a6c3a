//! Error types for color parsing.
//!
//! Markup parsing itself never fails: malformed tags degrade to literal
//! text. These errors only surface from the standalone color helpers, and
//! the style resolver turns them into no-ops.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Input is not a `#RRGGBB` token.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}
