//! Style resolution over the tag tree.
//!
//! Walks the tree top-down, deriving a fresh [`Style`] for every tag from the
//! style of its parent, and emits one [`Span`] per text node.

use crate::color::{NAMED_COLORS, Rgb};
use crate::node::{Node, TagNode};
use crate::span::Span;
use crate::style::{Gradient, Modifier, Rainbow, Style};

/// Resolve the style of every text run under `nodes`.
///
/// Spans come out in document order. Tags contribute no span of their own.
///
/// # Examples
///
/// ```
/// use minimark::{Rgb, Style, parser::parse, resolve};
///
/// let nodes = parse("<red><bold>hi</bold></red>");
/// let spans = resolve(&nodes, &Style::default());
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].style.color, Some(Rgb::new(0xFF, 0x55, 0x55)));
/// assert_eq!(spans[0].style.bold, Some(true));
/// ```
pub fn resolve(nodes: &[Node<'_>], inherited: &Style) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut stack = vec![(nodes.iter(), inherited.clone())];

    while let Some((children, style)) = stack.last_mut() {
        let Some(node) = children.next() else {
            stack.pop();
            continue;
        };
        match node {
            Node::Text(text) => spans.push(Span::new(text.start, text.end, style.clone())),
            Node::Tag(tag) => {
                let style = apply(tag, style);
                stack.push((tag.children.iter(), style));
            }
        }
    }

    spans
}

/// Derive the style for the children of `tag`.
///
/// Negation tags only cancel a modifier. For every other tag each matching
/// rule applies in turn; unknown tags leave the style unchanged.
pub fn apply(tag: &TagNode<'_>, parent: &Style) -> Style {
    let mut style = parent.clone();

    if let Some(base) = tag.name.strip_prefix('!') {
        match Modifier::from_name(base) {
            Some(modifier) => style.set_modifier(modifier, false),
            None => log::debug!("negation of `{base}` has no effect"),
        }
        return style;
    }

    let name = tag.name;

    if let Some(color) = NAMED_COLORS.get(name) {
        style.color = Some(*color);
    }
    if name.starts_with('#') && name.len() == 7 {
        set_hex_color(&mut style, name);
    }
    if matches!(name, "color" | "c" | "colour") {
        if let [arg] = tag.args.as_slice() {
            if arg.starts_with('#') && arg.len() == 7 {
                set_hex_color(&mut style, arg);
            }
        }
    }
    if let Some(modifier) = Modifier::from_name(name) {
        style.set_modifier(modifier, true);
    }
    if name == "rainbow" {
        style.rainbow = Some(rainbow_directive(&tag.args));
    }
    if name == "gradient" && tag.args.len() >= 2 {
        match gradient_directive(&tag.args) {
            Some(gradient) => style.gradient = Some(gradient),
            None => log::debug!("gradient {:?} has fewer than two colors", tag.args),
        }
    }

    style
}

fn set_hex_color(style: &mut Style, token: &str) {
    match Rgb::from_hex(token) {
        Ok(color) => style.color = Some(color),
        Err(err) => log::debug!("ignoring color: {err}"),
    }
}

/// `<rainbow>`, `<rainbow:N>` or `<rainbow:!N>` (reversed).
fn rainbow_directive(args: &[&str]) -> Rainbow {
    let Some(arg) = args.first() else {
        return Rainbow::default();
    };

    match arg.strip_prefix('!') {
        Some(rest) => Rainbow {
            start_index: parse_int(rest).unwrap_or(0),
            reverse: true,
        },
        None => Rainbow {
            start_index: parse_int(arg).unwrap_or(0),
            reverse: false,
        },
    }
}

/// `<gradient:c1:c2[:...][:N]>`. A trailing integer is the start stop
/// index; unresolvable stops are skipped.
fn gradient_directive(args: &[&str]) -> Option<Gradient> {
    let mut colors = Vec::with_capacity(args.len());
    let mut start_color_index = 0;

    for (i, arg) in args.iter().enumerate() {
        if i == args.len() - 1 {
            if let Some(index) = parse_int(arg) {
                start_color_index = index;
                break;
            }
        }

        match Rgb::parse(arg) {
            Ok(color) => colors.push(color),
            Err(err) => log::debug!("skipping gradient stop: {err}"),
        }
    }

    Gradient::new(colors, start_color_index)
}

/// Parse a leading integer: optional whitespace, optional sign, at least
/// one ASCII digit. Anything after the digits is ignored and values outside
/// the `i64` range saturate.
fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, sign_len) = match s.as_bytes().first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let len = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    match s[..sign_len + len].parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Decoration;

    fn tag<'a>(name: &'a str, args: &[&'a str]) -> TagNode<'a> {
        TagNode::new(name, args.to_vec(), 0, 0)
    }

    const RED: Rgb = Rgb::new(0xFF, 0x55, 0x55);
    const BLUE: Rgb = Rgb::new(0x55, 0x55, 0xFF);

    #[test]
    fn named_color() {
        let style = apply(&tag("red", &[]), &Style::default());
        assert_eq!(style.color, Some(RED));
    }

    #[test]
    fn hex_tag_color() {
        let style = apply(&tag("#12aB34", &[]), &Style::default());
        assert_eq!(style.color, Some(Rgb::new(0x12, 0xAB, 0x34)));
    }

    #[test]
    fn malformed_hex_tag_is_ignored() {
        let parent = Style {
            color: Some(RED),
            ..Style::default()
        };
        let style = apply(&tag("#GGGGGG", &[]), &parent);
        assert_eq!(style.color, Some(RED));
    }

    #[test]
    fn color_tag_aliases() {
        for name in ["color", "c", "colour"] {
            let style = apply(&tag(name, &["#00FF00"]), &Style::default());
            assert_eq!(style.color, Some(Rgb::new(0, 255, 0)), "{name}");
        }
    }

    #[test]
    fn color_tag_needs_exactly_one_hex_arg() {
        let none = Style::default();
        assert_eq!(apply(&tag("color", &[]), &none).color, None);
        assert_eq!(apply(&tag("color", &["red"]), &none).color, None);
        assert_eq!(
            apply(&tag("color", &["#00FF00", "#0000FF"]), &none).color,
            None
        );
    }

    #[test]
    fn modifiers() {
        let none = Style::default();
        assert_eq!(apply(&tag("b", &[]), &none).bold, Some(true));
        assert_eq!(apply(&tag("em", &[]), &none).italic, Some(true));
        assert_eq!(
            apply(&tag("u", &[]), &none).decoration,
            Decoration::UNDERLINE
        );
        assert_eq!(
            apply(&tag("st", &[]), &none).decoration,
            Decoration::LINE_THROUGH
        );
    }

    #[test]
    fn decorations_coexist() {
        let underlined = apply(&tag("underline", &[]), &Style::default());
        let both = apply(&tag("strikethrough", &[]), &underlined);
        assert_eq!(both.decoration, Decoration::all());

        let struck = apply(&tag("!underline", &[]), &both);
        assert_eq!(struck.decoration, Decoration::LINE_THROUGH);
    }

    #[test]
    fn negation_overrides_and_returns_early() {
        let parent = Style {
            bold: Some(true),
            italic: Some(true),
            ..Style::default()
        };
        let style = apply(&tag("!b", &[]), &parent);
        assert_eq!(style.bold, Some(false));
        assert_eq!(style.italic, Some(true));

        let style = apply(&tag("!i", &[]), &parent);
        assert_eq!(style.italic, Some(false));
    }

    #[test]
    fn negated_unknown_or_color_is_noop() {
        let parent = Style {
            color: Some(BLUE),
            ..Style::default()
        };
        assert_eq!(apply(&tag("!red", &[]), &parent), parent);
        assert_eq!(apply(&tag("!rainbow", &[]), &parent), parent);
    }

    #[test]
    fn unknown_tag_is_noop() {
        let parent = Style {
            bold: Some(true),
            ..Style::default()
        };
        assert_eq!(apply(&tag("sparkle", &["1"]), &parent), parent);
        assert_eq!(apply(&tag("RED", &[]), &parent), parent);
    }

    #[test]
    fn rainbow_args() {
        let none = Style::default();
        let cases: [(&[&str], i64, bool); 6] = [
            (&[], 0, false),
            (&["3"], 3, false),
            (&["!2"], 2, true),
            (&["!"], 0, true),
            (&["x"], 0, false),
            (&["-4"], -4, false),
        ];
        for (args, start_index, reverse) in cases {
            let style = apply(&tag("rainbow", args), &none);
            assert_eq!(
                style.rainbow,
                Some(Rainbow {
                    start_index,
                    reverse
                }),
                "{args:?}"
            );
        }
    }

    #[test]
    fn gradient_named_and_hex() {
        let style = apply(&tag("gradient", &["red", "#0000FF"]), &Style::default());
        let gradient = style.gradient.expect("gradient set");
        assert_eq!(gradient.colors(), &[RED, Rgb::new(0, 0, 255)]);
        assert_eq!(gradient.start_color_index(), 0);
    }

    #[test]
    fn gradient_trailing_index() {
        let style = apply(&tag("gradient", &["red", "blue", "gold", "1"]), &Style::default());
        let gradient = style.gradient.expect("gradient set");
        assert_eq!(gradient.colors().len(), 3);
        assert_eq!(gradient.start_color_index(), 1);
    }

    #[test]
    fn gradient_skips_unresolvable_stops() {
        let style = apply(
            &tag("gradient", &["red", "nope", "#12", "blue"]),
            &Style::default(),
        );
        assert_eq!(style.gradient.expect("gradient set").colors(), &[RED, BLUE]);
    }

    #[test]
    fn gradient_needs_two_colors() {
        let none = Style::default();
        assert!(apply(&tag("gradient", &["red"]), &none).gradient.is_none());
        assert!(apply(&tag("gradient", &["red", "2"]), &none).gradient.is_none());
        assert!(apply(&tag("gradient", &["red", "nope"]), &none).gradient.is_none());
    }

    #[test]
    fn gradient_index_only_when_last() {
        let style = apply(&tag("gradient", &["1", "red", "blue"]), &Style::default());
        let gradient = style.gradient.expect("gradient set");
        assert_eq!(gradient.colors(), &[RED, BLUE]);
        assert_eq!(gradient.start_color_index(), 0);
    }

    #[test]
    fn parent_is_untouched() {
        let parent = Style::default();
        let _ = apply(&tag("bold", &[]), &parent);
        assert!(parent.is_empty());
    }

    #[test]
    fn parse_int_leading_digits() {
        assert_eq!(parse_int("12"), Some(12));
        assert_eq!(parse_int(" 7"), Some(7));
        assert_eq!(parse_int("3abc"), Some(3));
        assert_eq!(parse_int("-1"), Some(-1));
        assert_eq!(parse_int("+5"), Some(5));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn parse_int_saturates() {
        assert_eq!(parse_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999x"), Some(i64::MIN));
        assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn gradient_oversized_index_is_an_index() {
        let style = apply(
            &tag("gradient", &["red", "blue", "99999999999999999999"]),
            &Style::default(),
        );
        let gradient = style.gradient.expect("gradient set");
        assert_eq!(gradient.colors(), &[RED, BLUE]);
        assert_eq!(gradient.start_color_index(), i64::MAX);
    }
}
