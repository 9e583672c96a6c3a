//! Parser for MiniMessage markup.
//!
//! This module contains the tag content classifier and the tree builder.

mod tag;
mod tree;

pub use tag::{TagContent, is_valid};
pub use tree::parse;
