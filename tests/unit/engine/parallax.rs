use super::*;

fn section(direction: ParallaxDirection) -> ParallaxSection {
    ParallaxSection::new(&ParallaxConfig {
        direction,
        ..ParallaxConfig::default()
    })
}

#[test]
fn up_moves_from_below_to_above() {
    let p = section(ParallaxDirection::Up);
    assert!((p.distance() - 20.0).abs() < 1e-12);
    assert!((p.sample(0.0).get(Property::Y).unwrap() - 20.0).abs() < 1e-12);
    assert!(p.sample(0.5).get(Property::Y).unwrap().abs() < 1e-12);
    assert!((p.sample(1.0).get(Property::Y).unwrap() + 20.0).abs() < 1e-12);
    assert_eq!(p.sample(0.5).get(Property::X), None);
}

#[test]
fn up_and_down_are_mirror_images() {
    let up = section(ParallaxDirection::Up);
    let down = section(ParallaxDirection::Down);
    for i in 0..=20 {
        let p = i as f64 / 20.0;
        let u = up.sample(p).get(Property::Y).unwrap();
        let d = down.sample(p).get(Property::Y).unwrap();
        assert!((u + d).abs() < 1e-12, "asymmetric at {p}");
    }
}

#[test]
fn horizontal_directions_use_x() {
    let left = section(ParallaxDirection::Left);
    let right = section(ParallaxDirection::Right);
    assert!(left.sample(0.0).get(Property::X).unwrap() > 0.0);
    assert!(right.sample(0.0).get(Property::X).unwrap() < 0.0);
    assert_eq!(left.sample(0.0).get(Property::Y), None);
}

#[test]
fn axis_follows_direction_orientation() {
    for direction in [
        ParallaxDirection::Up,
        ParallaxDirection::Down,
        ParallaxDirection::Left,
        ParallaxDirection::Right,
    ] {
        let style = section(direction).sample(0.25);
        assert_eq!(style.get(Property::X).is_some(), direction.is_horizontal());
        assert_eq!(style.get(Property::Y).is_some(), !direction.is_horizontal());
    }
}

#[test]
fn opacity_swells_mid_scroll_and_scale_is_off_by_default() {
    let p = section(ParallaxDirection::Up);
    assert!((p.sample(0.0).get(Property::Opacity).unwrap() - 0.4).abs() < 1e-12);
    assert!((p.sample(0.5).get(Property::Opacity).unwrap() - 1.0).abs() < 1e-12);
    assert!((p.sample(1.0).get(Property::Opacity).unwrap() - 0.4).abs() < 1e-12);
    for progress in [0.0, 0.3, 1.0] {
        assert_eq!(p.sample(progress).get(Property::Scale), Some(1.0));
    }
}

#[test]
fn optional_channels_can_be_toggled() {
    let p = ParallaxSection::new(&ParallaxConfig {
        opacity: false,
        scale: true,
        ..ParallaxConfig::default()
    });
    assert_eq!(p.sample(0.0).get(Property::Opacity), Some(1.0));
    assert!((p.sample(0.0).get(Property::Scale).unwrap() - 0.8).abs() < 1e-12);
    assert!((p.sample(0.5).get(Property::Scale).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn scroll_updates_progress_and_missing_geometry_is_ignored() {
    let mut p = section(ParallaxDirection::Up);
    let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
    assert!(p.on_scroll(Some(Rect::new(0.0, 200.0, 1000.0, 600.0)), viewport));
    assert_eq!(p.progress(), 0.5);
    assert!(!p.on_scroll(None, viewport));
    assert_eq!(p.progress(), 0.5);
    assert!(p.style().get(Property::Y).unwrap().abs() < 1e-12);

    assert!(p.set_progress(7.0));
    assert_eq!(p.progress(), 1.0);
    assert!(!p.set_progress(f64::NAN));
}
