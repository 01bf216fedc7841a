use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn fade_set() -> VariantSet {
    VariantSet::new(
        Variant::new().with(Property::Opacity, 0.0).with(Property::Y, 20.0),
        Variant::new().with(Property::Opacity, 1.0).with(Property::Y, 0.0),
    )
    .unwrap()
    .with_default_transition(Transition::new(0.0, 1.0).with_ease(Ease::Linear))
}

#[test]
fn set_rejects_mismatched_keys() {
    let err = VariantSet::new(
        Variant::new().with(Property::Opacity, 0.0),
        Variant::new().with(Property::Opacity, 1.0).with(Property::X, 0.0),
    );
    assert!(err.is_err());

    let set = fade_set();
    assert!(
        set.clone()
            .with_variant(
                VariantName::custom("dim"),
                Variant::new().with(Property::Opacity, 0.5)
            )
            .is_err()
    );
    let set = set
        .with_variant(
            VariantName::custom("dim"),
            Variant::new()
                .with(Property::Opacity, 0.5)
                .with(Property::Y, 10.0),
        )
        .unwrap();
    assert_eq!(set.names().count(), 3);
}

#[test]
fn starts_hidden_and_tweens_to_visible() {
    let mut m = VariantMachine::new(fade_set());
    assert_eq!(m.current(), &VariantName::Hidden);
    assert_eq!(m.sample(0.0).get(Property::Opacity), Some(0.0));

    assert!(m.transition_to(&VariantName::Visible, 10.0));
    let mid = m.sample(10.5);
    assert!(approx(mid.get(Property::Opacity).unwrap(), 0.5));
    assert!(approx(mid.get(Property::Y).unwrap(), 10.0));
    assert!(m.is_animating(10.5));

    let end = m.sample(11.0);
    assert!(approx(end.get(Property::Opacity).unwrap(), 1.0));
    assert!(!m.is_animating(11.0));
    assert!(!m.transition_to(&VariantName::Visible, 12.0));
}

#[test]
fn delay_holds_start_values() {
    let set = fade_set()
        .with_variant(
            VariantName::Visible,
            Variant::new()
                .with(Property::Opacity, 1.0)
                .with(Property::Y, 0.0)
                .with_transition(Transition::new(0.5, 1.0).with_ease(Ease::Linear)),
        )
        .unwrap();
    let mut m = VariantMachine::new(set);
    m.transition_to(&VariantName::Visible, 0.0);
    assert_eq!(m.sample(0.25).get(Property::Opacity), Some(0.0));
    assert!(approx(m.sample(1.0).get(Property::Opacity).unwrap(), 0.5));
}

#[test]
fn from_source_restarts_from_source_values() {
    let mut m = VariantMachine::new(fade_set());
    m.transition_to(&VariantName::Visible, 0.0);
    m.transition_to(&VariantName::Hidden, 0.5);
    // Starts from visible's resting values, not the mid-tween 0.5.
    assert!(approx(m.sample(0.5).get(Property::Opacity).unwrap(), 1.0));
    m.transition_to(&VariantName::Visible, 0.75);
    assert!(approx(m.sample(0.75).get(Property::Opacity).unwrap(), 0.0));
}

#[test]
fn from_current_continues_from_screen() {
    let mut m = VariantMachine::new(fade_set()).with_policy(StartPolicy::FromCurrent);
    m.transition_to(&VariantName::Visible, 0.0);
    m.transition_to(&VariantName::Hidden, 0.5);
    assert!(approx(m.sample(0.5).get(Property::Opacity).unwrap(), 0.5));
    assert!(approx(m.sample(1.0).get(Property::Opacity).unwrap(), 0.25));
}

#[test]
fn unknown_variant_falls_back_to_hidden() {
    let mut m = VariantMachine::resting_at(fade_set(), &VariantName::Visible);
    assert_eq!(m.current(), &VariantName::Visible);
    assert!(m.transition_to(&VariantName::custom("nope"), 0.0));
    assert_eq!(m.current(), &VariantName::Hidden);
}

#[test]
fn toggle_alternates() {
    let mut m = VariantMachine::new(fade_set());
    m.toggle(0.0);
    assert_eq!(m.current(), &VariantName::Visible);
    m.toggle(1.0);
    assert_eq!(m.current(), &VariantName::Hidden);
}

#[test]
fn keyframes_pass_through_each_value() {
    let set = VariantSet::new(
        Variant::new().with(Property::Y, 0.0),
        Variant::new().with_keyframes(Property::Y, vec![0.0, -10.0, 0.0]),
    )
    .unwrap()
    .with_default_transition(Transition::new(0.0, 1.0).with_ease(Ease::Linear));
    let mut m = VariantMachine::new(set);
    m.transition_to(&VariantName::Visible, 0.0);
    assert!(approx(m.sample(0.25).get(Property::Y).unwrap(), -5.0));
    assert!(approx(m.sample(0.5).get(Property::Y).unwrap(), -10.0));
    assert!(approx(m.sample(2.0).get(Property::Y).unwrap(), 0.0));
}

#[test]
fn forever_repeat_loops() {
    let t = Transition::new(1.0, 2.0).with_repeat(Repeat::Forever);
    assert_eq!(t.progress(0.5), None);
    assert!(approx(t.progress(2.0).unwrap(), 0.5));
    assert!(approx(t.progress(5.0).unwrap(), 0.0));
    assert!(approx(t.progress(101.5).unwrap(), 0.25));
    assert!(!t.is_finished(1e9));

    let twice = Transition::new(0.0, 1.0).with_repeat(Repeat::Times(1));
    assert!(approx(twice.progress(1.5).unwrap(), 0.5));
    assert_eq!(twice.progress(2.0), Some(1.0));
    assert!(twice.is_finished(2.0));
}

#[test]
fn nonsensical_timing_is_clamped() {
    let t = Transition::new(-3.0, -1.0);
    assert_eq!(t.delay, 0.0);
    assert_eq!(t.duration, 0.0);
    assert_eq!(t.progress(0.0), Some(1.0));
    let t = Transition::new(f64::NAN, f64::INFINITY);
    assert_eq!(t.delay, 0.0);
    assert_eq!(t.duration, 0.0);
}

#[test]
fn variant_name_parse() {
    assert_eq!(VariantName::parse(" Visible "), VariantName::Visible);
    assert_eq!(VariantName::parse("hidden"), VariantName::Hidden);
    assert_eq!(VariantName::parse("hover"), VariantName::custom("hover"));
    assert_eq!(VariantName::custom("hover").to_string(), "hover");
}
