//! MiniMessage-style markup for editor highlighting.
//!
//! This crate turns markup like `<red>Hello <bold>World</bold></red>` into
//! a tag tree, resolves the inherited style of every text run, and expands
//! `<rainbow>` and `<gradient>` runs into per-character colors.
//!
//! # Overview
//!
//! - `<red>`, `<#FF5555>`, `<color:#FF5555>` - set the text color
//! - `<bold>`, `<italic>`, `<underline>`, `<strikethrough>` (and their
//!   short aliases) - switch a modifier on
//! - `<!bold>` - cancel a modifier inherited from an enclosing tag
//! - `<rainbow>`, `<rainbow:!2>` - cycle the hue across the run
//! - `<gradient:red:#0000FF:1>` - interpolate between color stops
//! - `<reset>` - discard every open tag
//!
//! Parsing never fails. Anything that is not a well-formed tag stays in the
//! output as literal text, and tags the resolver does not recognize leave
//! the style unchanged.
//!
//! # Usage
//!
//! ```
//! use minimark::{Rgb, highlight, strip};
//!
//! let input = "<red>Hello</red> World";
//! assert_eq!(strip(input), "Hello World");
//!
//! let segments = highlight(input);
//! assert_eq!(segments[0].start..segments[0].end, 5..10);
//! assert_eq!(
//!     segments[0].appearance.color.map(|c| c.to_rgb()),
//!     Some(Rgb::new(0xFF, 0x55, 0x55))
//! );
//! ```
//!
//! The stages are also usable on their own: [`parser::parse`] builds the
//! tree, [`resolve()`] produces one [`Span`] per text run and [`expand`]
//! renders a run.

pub mod color;
pub mod effect;
pub mod error;
pub mod markup;
pub mod node;
pub mod parser;
pub mod resolve;
pub mod span;
pub mod style;

// Re-export main types at crate root
pub use color::{Color, Hsl, NAMED_COLORS, Rgb};
pub use effect::{Expansion, Segment, expand, gradient_color, rainbow_hue};
pub use error::ColorParseError;
pub use markup::Markup;
pub use node::{Node, TagNode, TextNode};
pub use resolve::{apply, resolve};
pub use span::Span;
pub use style::{Appearance, Decoration, Effect, Gradient, Modifier, Rainbow, Style};

/// Parse, resolve and expand `input` in one go.
///
/// Returns one segment per uniform run and one per character of every
/// rainbow or gradient run, in document order. Offsets are byte offsets
/// into `input`.
pub fn highlight(input: &str) -> Vec<Segment> {
    Markup::parse(input).segments().collect()
}

/// The visible text of `input` with every recognized tag removed.
pub fn strip(input: &str) -> String {
    Markup::parse(input).text()
}
