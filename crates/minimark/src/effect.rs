//! Per-character expansion of rainbow and gradient runs.
//!
//! A run whose style carries no directive comes out as a single
//! [`Segment`]. A run with a directive comes out as one segment per
//! character, produced lazily, each colored by a deterministic formula of
//! the character's index and the run length.

use std::str::CharIndices;

use crate::color::{Hsl, Rgb};
use crate::style::{Appearance, Effect, Gradient, Rainbow, Style};

/// A rendered piece of a run: a byte range and how to draw it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub appearance: Appearance,
}

/// Hue in degrees (`0.0..360.0`) of character `index` in a rainbow run of
/// `len` characters.
///
/// Both the index and `start_index` are reduced modulo the run length
/// first, so any `i64` start index is accepted.
pub fn rainbow_hue(index: usize, len: usize, start_index: i64) -> f64 {
    let len = len.max(1) as i64;
    let offset = (index as i64).rem_euclid(len) - start_index.rem_euclid(len);
    (offset as f64 * 360.0 / len as f64).rem_euclid(360.0)
}

/// Color of character `index` in a gradient run of `len` characters.
pub fn gradient_color(gradient: &Gradient, index: usize, len: usize) -> Rgb {
    let colors = gradient.colors();
    let count = colors.len();
    let position = (index as f64 / len as f64) * (count - 1) as f64;
    let low = position.floor() as usize;
    let high = (low + 1).min(count - 1);
    let t = position - low as f64;

    let first = gradient.start_color_index().rem_euclid(count as i64) as usize;
    let stop = |i: usize| colors[(first + i) % count];
    stop(low).lerp(stop(high), t)
}

/// Expand the run `text`, which starts at byte `offset` of the markup.
///
/// # Examples
///
/// ```
/// use minimark::{Color, Rgb, Style, expand, parser::parse, resolve};
///
/// let input = "<gradient:#FF0000:#0000FF>AB</gradient>";
/// let spans = resolve(&parse(input), &Style::default());
/// let span = &spans[0];
/// let colors: Vec<_> = expand(&input[span.range()], span.start, &span.style)
///     .map(|segment| segment.appearance.color)
///     .collect();
/// assert_eq!(
///     colors,
///     vec![
///         Some(Color::Rgb(Rgb::new(0xFF, 0x00, 0x00))),
///         Some(Color::Rgb(Rgb::new(0x80, 0x00, 0x80))),
///     ]
/// );
/// ```
pub fn expand<'a>(text: &'a str, offset: usize, style: &'a Style) -> Expansion<'a> {
    let effect = style.effect();
    let len = match effect {
        Some(_) => text.chars().count(),
        None => 0,
    };

    Expansion {
        chars: text.char_indices(),
        text_len: text.len(),
        offset,
        len,
        index: 0,
        base: style.appearance(),
        effect,
        uniform_done: text.is_empty(),
    }
}

/// Lazy iterator returned by [`expand`].
#[derive(Clone, Debug)]
pub struct Expansion<'a> {
    chars: CharIndices<'a>,
    text_len: usize,
    offset: usize,
    /// Run length in characters; only counted when there is an effect.
    len: usize,
    index: usize,
    base: Appearance,
    effect: Option<Effect<'a>>,
    uniform_done: bool,
}

impl Expansion<'_> {
    fn color_at(&self, effect: Effect<'_>, index: usize) -> Appearance {
        match effect {
            Effect::Rainbow(Rainbow {
                start_index,
                reverse,
            }) => {
                let hue_index = if *reverse {
                    self.len - 1 - index
                } else {
                    index
                };
                let hue = rainbow_hue(hue_index, self.len, *start_index);
                self.base.with_color(Hsl::vivid(hue))
            }
            Effect::Gradient(gradient) => {
                self.base
                    .with_color(gradient_color(gradient, index, self.len))
            }
        }
    }
}

impl Iterator for Expansion<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let Some(effect) = self.effect else {
            if self.uniform_done {
                return None;
            }
            self.uniform_done = true;
            return Some(Segment {
                start: self.offset,
                end: self.offset + self.text_len,
                appearance: self.base,
            });
        };

        let (at, ch) = self.chars.next()?;
        let appearance = self.color_at(effect, self.index);
        self.index += 1;

        Some(Segment {
            start: self.offset + at,
            end: self.offset + at + ch.len_utf8(),
            appearance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.effect {
            Some(_) => {
                let remaining = self.len - self.index;
                (remaining, Some(remaining))
            }
            None => {
                let remaining = usize::from(!self.uniform_done);
                (remaining, Some(remaining))
            }
        }
    }
}

impl ExactSizeIterator for Expansion<'_> {}
