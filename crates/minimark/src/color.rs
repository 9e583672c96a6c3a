//! Color types for MiniMessage markup.
//!
//! Tags only ever produce RGB colors (named colors and `#RRGGBB` tokens).
//! The effect expander additionally produces HSL colors for rainbow runs,
//! which is why per-character output carries a [`Color`] rather than an
//! [`Rgb`].

use std::fmt;

use phf::phf_map;

use crate::error::ColorParseError;

/// The fixed named-color table.
///
/// Lookup is case-sensitive: `red` is a color tag, `RED` is not.
pub static NAMED_COLORS: phf::Map<&'static str, Rgb> = phf_map! {
    "black" => Rgb::new(0x00, 0x00, 0x00),
    "dark_blue" => Rgb::new(0x00, 0x00, 0xAA),
    "dark_green" => Rgb::new(0x00, 0xAA, 0x00),
    "dark_aqua" => Rgb::new(0x00, 0xAA, 0xAA),
    "dark_red" => Rgb::new(0xAA, 0x00, 0x00),
    "dark_purple" => Rgb::new(0xAA, 0x00, 0xAA),
    "gold" => Rgb::new(0xFF, 0xAA, 0x00),
    "gray" => Rgb::new(0xAA, 0xAA, 0xAA),
    "dark_gray" => Rgb::new(0x55, 0x55, 0x55),
    "blue" => Rgb::new(0x55, 0x55, 0xFF),
    "green" => Rgb::new(0x55, 0xFF, 0x55),
    "aqua" => Rgb::new(0x55, 0xFF, 0xFF),
    "red" => Rgb::new(0xFF, 0x55, 0x55),
    "light_purple" => Rgb::new(0xFF, 0x55, 0xFF),
    "yellow" => Rgb::new(0xFF, 0xFF, 0x55),
    "white" => Rgb::new(0xFF, 0xFF, 0xFF),
};

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a bare `#RRGGBB` token.
    ///
    /// The token must be exactly seven bytes long. Hex digits are
    /// case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimark::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FF5555").unwrap(), Rgb::new(255, 85, 85));
    /// assert!(Rgb::from_hex("#F55").is_err());
    /// ```
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(input.to_string());

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Look up a color in the named-color table.
    pub fn named(name: &str) -> Result<Self, ColorParseError> {
        NAMED_COLORS
            .get(name)
            .copied()
            .ok_or_else(|| ColorParseError::UnknownName(name.to_string()))
    }

    /// Resolve a gradient stop: a named color or a bare `#RRGGBB` token.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        if input.starts_with('#') {
            Self::from_hex(input)
        } else {
            Self::named(input)
        }
    }

    /// Linearly interpolate each channel towards `other`.
    ///
    /// `t` is clamped to `0.0..=1.0`; channels are rounded half away from
    /// zero.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| {
            let a = f64::from(a);
            (a + (f64::from(b) - a) * t).round() as u8
        };
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A color in HSL space.
///
/// `hue` is in degrees (`0.0..360.0`); saturation and lightness are
/// percentages (`0.0..=100.0`), matching CSS `hsl()` notation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// A fully saturated, mid-lightness color of the given hue.
    pub fn vivid(hue: f64) -> Self {
        Self {
            hue,
            saturation: 100.0,
            lightness: 50.0,
        }
    }

    /// Convert to sRGB.
    pub fn to_rgb(self) -> Rgb {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        if s == 0.0 {
            let gray = (l * 255.0).round() as u8;
            return Rgb::new(gray, gray, gray);
        }

        let h = self.hue.rem_euclid(360.0) / 360.0;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
        let g = hue_to_rgb(p, q, h);
        let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

        Rgb::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// The color of a rendered character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
}

impl Color {
    /// Convert to sRGB, whatever the source space.
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::Rgb(rgb) => rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::Hsl(hsl)
    }
}

/// Formats as CSS: `#RRGGBB` or `hsl(H, S%, L%)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Color::Hsl(hsl) => fmt::Display::fmt(hsl, f),
        }
    }
}
