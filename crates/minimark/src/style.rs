//! Style types for MiniMessage markup.
//!
//! A [`Style`] is the inherited record threaded through the tag tree. It
//! carries scalar attributes plus two optional directives (rainbow and
//! gradient) that the effect expander turns into per-character colors.
//! [`Appearance`] is the flattened, directive-free view handed to renderers.

use std::fmt;

use bitflags::bitflags;

use crate::color::{Color, Rgb};

bitflags! {
    /// Line decorations. Underline and strikethrough toggle independently
    /// and may coexist.
    ///
    /// # Example
    ///
    /// ```
    /// use minimark::Decoration;
    ///
    /// let deco = Decoration::UNDERLINE | Decoration::LINE_THROUGH;
    /// assert_eq!(deco.to_string(), "underline line-through");
    /// assert_eq!((deco - Decoration::UNDERLINE).to_string(), "line-through");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decoration: u8 {
        const UNDERLINE    = 0b01;
        const LINE_THROUGH = 0b10;
    }
}

impl Decoration {
    /// CSS `text-decoration` value, or `None` when no line is drawn.
    pub fn css(self) -> Option<&'static str> {
        match (
            self.contains(Decoration::UNDERLINE),
            self.contains(Decoration::LINE_THROUGH),
        ) {
            (false, false) => None,
            (true, false) => Some("underline"),
            (false, true) => Some("line-through"),
            (true, true) => Some("underline line-through"),
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css().unwrap_or(""))
    }
}

/// A text modifier that can be switched on by a tag and cancelled by its
/// `!`-prefixed negation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl Modifier {
    /// Map a tag name (without any `!` prefix) to a modifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bold" | "b" => Some(Modifier::Bold),
            "italic" | "i" | "em" => Some(Modifier::Italic),
            "underline" | "u" => Some(Modifier::Underline),
            "strikethrough" | "st" => Some(Modifier::Strikethrough),
            _ => None,
        }
    }
}

/// Rainbow directive: cycle the hue once across the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rainbow {
    /// Character index at which the hue is 0°.
    pub start_index: i64,
    /// Walk the hue wheel right-to-left.
    pub reverse: bool,
}

/// Gradient directive: interpolate between two or more color stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    colors: Vec<Rgb>,
    start_color_index: i64,
}

impl Gradient {
    /// Build a gradient. Returns `None` with fewer than two stops.
    pub fn new(colors: Vec<Rgb>, start_color_index: i64) -> Option<Self> {
        if colors.len() < 2 {
            return None;
        }
        Some(Self {
            colors,
            start_color_index,
        })
    }

    /// The color stops, in order. Always at least two.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Offset applied to stop indices (wraps modulo the stop count).
    pub fn start_color_index(&self) -> i64 {
        self.start_color_index
    }
}

/// The per-character effect a style asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect<'a> {
    Rainbow(&'a Rainbow),
    Gradient(&'a Gradient),
}

/// Accumulated, inheritable style.
///
/// `bold` and `italic` are tri-state: `None` means "not specified",
/// `Some(false)` is an explicit cancel from a negation tag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Text color.
    pub color: Option<Rgb>,
    /// Font weight: bold or explicitly normal.
    pub bold: Option<bool>,
    /// Font style: italic or explicitly normal.
    pub italic: Option<bool>,
    /// Underline / strikethrough.
    pub decoration: Decoration,
    /// Rainbow directive.
    pub rainbow: Option<Rainbow>,
    /// Gradient directive.
    pub gradient: Option<Gradient>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no attribute or directive is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.decoration.is_empty()
            && self.rainbow.is_none()
            && self.gradient.is_none()
    }

    /// The effect to expand, if any. Rainbow wins when both are present.
    pub fn effect(&self) -> Option<Effect<'_>> {
        if let Some(rainbow) = &self.rainbow {
            return Some(Effect::Rainbow(rainbow));
        }
        self.gradient.as_ref().map(Effect::Gradient)
    }

    /// The uniform appearance of this style, ignoring directives.
    pub fn appearance(&self) -> Appearance {
        Appearance {
            color: self.color.map(Color::Rgb),
            bold: self.bold,
            italic: self.italic,
            decoration: self.decoration,
        }
    }

    /// Set or clear a modifier.
    pub(crate) fn set_modifier(&mut self, modifier: Modifier, on: bool) {
        match modifier {
            Modifier::Bold => self.bold = Some(on),
            Modifier::Italic => self.italic = Some(on),
            Modifier::Underline => self.decoration.set(Decoration::UNDERLINE, on),
            Modifier::Strikethrough => self.decoration.set(Decoration::LINE_THROUGH, on),
        }
    }
}

/// What a renderer draws for a run or a single character.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Appearance {
    pub color: Option<Color>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub decoration: Decoration,
}

impl Appearance {
    /// Same appearance with a different color.
    pub fn with_color(self, color: impl Into<Color>) -> Self {
        Self {
            color: Some(color.into()),
            ..self
        }
    }

    /// CSS `font-weight` value, if specified.
    pub fn font_weight(&self) -> Option<&'static str> {
        self.bold.map(|bold| if bold { "bold" } else { "normal" })
    }

    /// CSS `font-style` value, if specified.
    pub fn font_style(&self) -> Option<&'static str> {
        self.italic
            .map(|italic| if italic { "italic" } else { "normal" })
    }
}
