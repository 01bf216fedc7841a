use super::*;

fn config(variant: TextVariant) -> TextConfig {
    TextConfig {
        variant,
        ..TextConfig::default()
    }
}

#[test]
fn words_split_on_single_spaces() {
    let words: Vec<_> = segment_text("Hello big world", TextVariant::FadeIn)
        .into_iter()
        .map(|s| s.text)
        .collect();
    assert_eq!(words, vec!["Hello", "big", "world"]);

    assert_eq!(segment_text("a  b", TextVariant::FadeIn).len(), 3);
    assert_eq!(segment_text("whole text", TextVariant::Highlight).len(), 1);
}

#[test]
fn characters_are_scalar_values_with_nbsp_for_spaces() {
    let chars = segment_text("hé y", TextVariant::Wave);
    assert_eq!(chars.len(), 4);
    assert_eq!(chars[1].text, "é");
    assert_eq!(chars[2].text, "\u{00A0}");
    assert_eq!(chars[3].index, 3);
}

#[test]
fn fade_in_words_stagger_after_start() {
    let mut text = AnimatedText::new(
        "one two three",
        &TextConfig {
            delay: 0.1,
            ..config(TextVariant::FadeIn)
        },
    )
    .unwrap();
    let idle = text.frame(0.0);
    assert_eq!(idle.segments.len(), 3);
    assert!(idle.cursor.is_none());
    assert_eq!(idle.segments[0].style.get(Property::Opacity), Some(0.0));
    assert_eq!(idle.segments[0].style.get(Property::Y), Some(20.0));

    text.start(0.0);
    assert!(text.is_started());
    let early = text.frame(0.12);
    assert!(early.segments[0].style.get(Property::Opacity).unwrap() > 0.0);
    assert_eq!(early.segments[1].style.get(Property::Opacity), Some(0.0));

    let done = text.frame(1.0);
    for s in &done.segments {
        assert_eq!(s.style.get(Property::Opacity), Some(1.0));
        assert_eq!(s.style.get(Property::Y), Some(0.0));
    }
    assert!(!text.is_animating(1.0));
}

#[test]
fn typewriter_reveals_over_double_duration_with_blinking_cursor() {
    let mut text = AnimatedText::new("typed", &config(TextVariant::Typewriter)).unwrap();
    text.start(0.0);

    let half = text.frame(0.5);
    assert_eq!(half.segments.len(), 1);
    assert!((half.segments[0].style.get(Property::Width).unwrap() - 50.0).abs() < 1e-9);
    let full = text.frame(1.0);
    assert_eq!(full.segments[0].style.get(Property::Width), Some(100.0));
    assert_eq!(full.segments[0].style.get(Property::Opacity), Some(1.0));

    let blink = |t: f64| text.frame(t).cursor.unwrap().get(Property::Opacity).unwrap();
    assert!((blink(0.0) - 1.0).abs() < 1e-9);
    assert!(blink(0.4).abs() < 1e-9);
    assert!(blink(1.2).abs() < 1e-9);
    assert!(!text.is_animating(5.0));
}

#[test]
fn highlight_grows_background_and_names_gradient() {
    let mut text = AnimatedText::new("key idea", &config(TextVariant::Highlight)).unwrap();
    let (from, to) = text.highlight_gradient().unwrap();
    assert_eq!(from.css_var(), "var(--color-primary-200)");
    assert_eq!(to.css_var(), "var(--color-primary-100)");

    assert_eq!(
        text.frame(0.0).segments[0].style.get(Property::BackgroundSize),
        Some(0.0)
    );
    text.start(0.0);
    assert_eq!(
        text.frame(0.5).segments[0].style.get(Property::BackgroundSize),
        Some(100.0)
    );

    let plain = AnimatedText::new("x", &config(TextVariant::FadeIn)).unwrap();
    assert!(plain.highlight_gradient().is_none());
}

#[test]
fn wave_lifts_each_character_and_settles() {
    let mut text = AnimatedText::new("ab", &config(TextVariant::Wave)).unwrap();
    text.start(0.0);
    let peak = text.frame(0.03 + 0.25);
    assert!((peak.segments[1].style.get(Property::Y).unwrap() + 10.0).abs() < 1e-6);
    let done = text.frame(2.0);
    for s in &done.segments {
        assert!(s.style.get(Property::Y).unwrap().abs() < 1e-12);
    }
}
