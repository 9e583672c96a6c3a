//! Rainbow and gradient expansion through the public entry points.

use minimark::{Color, Decoration, Hsl, Rgb, Segment, highlight};

fn colors(segments: &[Segment]) -> Vec<String> {
    segments
        .iter()
        .map(|segment| {
            segment
                .appearance
                .color
                .map(|color| color.to_string())
                .unwrap_or_default()
        })
        .collect()
}

// ============================================================================
// Gradient
// ============================================================================

#[test]
fn gradient_is_deterministic() {
    let segments = highlight("<gradient:#FF0000:#0000FF>AB</gradient>");
    assert_eq!(colors(&segments), vec!["#FF0000", "#800080"]);
}

#[test]
fn gradient_with_named_stops() {
    let segments = highlight("<gradient:black:white>ab</gradient>");
    assert_eq!(colors(&segments), vec!["#000000", "#808080"]);
}

#[test]
fn gradient_single_char_takes_first_stop() {
    let segments = highlight("<gradient:gold:aqua>x");
    assert_eq!(colors(&segments), vec!["#FFAA00"]);
}

#[test]
fn gradient_extreme_start_index() {
    let expected = vec!["#5555FF", "#AA55AA"];
    let segments = highlight("<gradient:red:blue:9223372036854775807>ab</gradient>");
    assert_eq!(colors(&segments), expected);

    // Out-of-range indices saturate to i64::MAX.
    let segments = highlight("<gradient:red:blue:99999999999999999999>ab</gradient>");
    assert_eq!(colors(&segments), expected);
}

#[test]
fn gradient_with_one_color_is_plain() {
    let segments = highlight("<gradient:red>abc");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].appearance.color, None);
}

// ============================================================================
// Rainbow
// ============================================================================

#[test]
fn rainbow_wraps_within_360() {
    let segments = highlight("<rainbow>abcdefghijkl</rainbow>");
    let hues: Vec<f64> = segments
        .iter()
        .map(|segment| match segment.appearance.color {
            Some(Color::Hsl(Hsl { hue, .. })) => hue,
            other => panic!("unexpected color {other:?}"),
        })
        .collect();
    assert_eq!(hues.len(), 12);
    for (i, hue) in hues.iter().enumerate() {
        assert_eq!(*hue, i as f64 * 30.0);
        assert!(*hue < 360.0);
    }
}

#[test]
fn rainbow_formats_as_css_hsl() {
    let segments = highlight("<rainbow>ab");
    assert_eq!(
        colors(&segments),
        vec!["hsl(0, 100%, 50%)", "hsl(180, 100%, 50%)"]
    );
}

#[test]
fn rainbow_beats_gradient() {
    let segments = highlight("<gradient:red:blue><rainbow>ab");
    assert!(
        segments
            .iter()
            .all(|s| matches!(s.appearance.color, Some(Color::Hsl(_))))
    );
}

#[test]
fn rainbow_large_start_index_stays_in_range() {
    let segments = highlight("<rainbow:100>abc");
    for segment in &segments {
        let Some(Color::Hsl(hsl)) = segment.appearance.color else {
            panic!("expected hsl");
        };
        assert!((0.0..360.0).contains(&hsl.hue));
    }
}

#[test]
fn rainbow_extreme_start_index() {
    let segments = highlight("<rainbow:-9223372036854775807>ab</rainbow>");
    assert_eq!(
        colors(&segments),
        vec!["hsl(180, 100%, 50%)", "hsl(0, 100%, 50%)"]
    );

    let segments = highlight("<rainbow:!9223372036854775807>abc</rainbow>");
    assert_eq!(segments.len(), 3);
}

// ============================================================================
// Runs
// ============================================================================

#[test]
fn each_run_expands_independently() {
    let segments = highlight("<rainbow>ab<bold>cd</bold></rainbow>");
    let hues: Vec<_> = segments
        .iter()
        .filter_map(|s| match s.appearance.color {
            Some(Color::Hsl(hsl)) => Some(hsl.hue),
            _ => None,
        })
        .collect();
    assert_eq!(hues, vec![0.0, 180.0, 0.0, 180.0]);
    assert_eq!(segments[2].appearance.bold, Some(true));
}

#[test]
fn uniform_runs_keep_their_span() {
    let segments = highlight("plain <u>under</u>");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].start..segments[0].end, 0..6);
    assert_eq!(segments[1].start..segments[1].end, 9..14);
    assert_eq!(segments[1].appearance.decoration, Decoration::UNDERLINE);
}

#[test]
fn hsl_converts_back_to_rgb() {
    let segments = highlight("<rainbow>abc");
    let rgb: Vec<Rgb> = segments
        .iter()
        .filter_map(|s| s.appearance.color.map(Color::to_rgb))
        .collect();
    assert_eq!(
        rgb,
        vec![
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255)
        ]
    );
}
