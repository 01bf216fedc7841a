use super::*;

fn bounds() -> Option<Rect> {
    Some(Rect::new(0.0, 0.0, 200.0, 100.0))
}

fn card() -> TiltCard {
    TiltCard::new(&TiltConfig::default(), SpringConfig::tilt()).unwrap()
}

/// Run frames at 60 Hz from `start` for `secs`, returning the last frame.
fn run(card: &mut TiltCard, start: f64, secs: f64) -> TiltFrame {
    let steps = (secs * 60.0).round() as usize;
    let mut frame = card.frame(start);
    for i in 1..=steps {
        frame = card.frame(start + i as f64 / 60.0);
    }
    frame
}

#[test]
fn pointer_at_center_targets_no_rotation() {
    let mut card = card();
    assert!(card.on_pointer_move(Point::new(100.0, 50.0), bounds(), 0.0));
    assert_eq!(card.targets(), (0.0, 0.0));
    let frame = run(&mut card, 0.0, 1.0);
    assert_eq!(frame.rotate_x, 0.0);
    assert_eq!(frame.rotate_y, 0.0);
}

#[test]
fn top_left_corner_converges_to_full_depth() {
    let mut card = card();
    card.frame(0.0);
    assert!(card.on_pointer_move(Point::new(0.0, 0.0), bounds(), 0.0));
    assert_eq!(card.offset(), Vec2::new(-0.5, -0.5));
    assert_eq!(card.targets(), (20.0, -20.0));

    let early = run(&mut card, 0.0, 0.05);
    assert!(early.rotate_x > 0.0 && early.rotate_x < 20.0);

    let frame = run(&mut card, 0.05, 2.0);
    assert!((frame.rotate_x - 20.0).abs() < 1e-6);
    assert!((frame.rotate_y + 20.0).abs() < 1e-6);
    assert!(frame.settled);
}

#[test]
fn pointer_outside_card_is_clamped() {
    let mut card = card();
    assert!(card.on_pointer_move(Point::new(-500.0, 900.0), bounds(), 0.0));
    assert_eq!(card.offset(), Vec2::new(-0.5, 0.5));
    assert_eq!(card.targets(), (-20.0, -20.0));
}

#[test]
fn leave_relaxes_without_snapping() {
    let mut card = card();
    card.on_pointer_move(Point::new(0.0, 0.0), bounds(), 0.0);
    let held = run(&mut card, 0.0, 2.0);
    assert!((held.rotate_x - 20.0).abs() < 1e-6);

    card.on_pointer_leave(2.0);
    assert_eq!(card.targets(), (0.0, 0.0));
    let next = card.frame(2.0 + 1.0 / 60.0);
    assert!(next.rotate_x > 10.0, "snapped to {}", next.rotate_x);
    assert!(next.rotate_y < -10.0);

    let rested = run(&mut card, 2.0 + 1.0 / 60.0, 2.0);
    assert!(rested.rotate_x.abs() < 1e-6);
    assert!(rested.rotate_y.abs() < 1e-6);
}

#[test]
fn hover_scale_follows_pointer_presence() {
    let mut card = card();
    assert!(!card.is_hovered());
    card.on_pointer_move(Point::new(100.0, 50.0), bounds(), 1.0);
    assert!(card.is_hovered());
    assert_eq!(card.frame(1.0).scale, 1.0);
    assert!((card.frame(1.3).scale - 1.05).abs() < 1e-9);

    card.on_pointer_leave(2.0);
    assert!(!card.is_hovered());
    let mid = card.frame(2.15).scale;
    assert!(mid > 1.0 && mid < 1.05);
    assert!((card.frame(2.3).scale - 1.0).abs() < 1e-9);
}

#[test]
fn missing_or_empty_bounds_is_a_no_op() {
    let mut card = card();
    assert!(!card.on_pointer_move(Point::new(0.0, 0.0), None, 0.0));
    let empty = Rect::new(10.0, 10.0, 10.0, 40.0);
    assert!(!card.on_pointer_move(Point::new(0.0, 0.0), Some(empty), 0.0));
    assert_eq!(card.targets(), (0.0, 0.0));
    assert!(!card.is_hovered());
}

#[test]
fn frame_style_carries_rotation_and_scale() {
    let mut card = card();
    let style = card.frame(0.0).style();
    assert_eq!(style.get(Property::RotateX), Some(0.0));
    assert_eq!(style.get(Property::RotateY), Some(0.0));
    assert_eq!(style.get(Property::Scale), Some(1.0));
}
