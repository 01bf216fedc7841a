use super::*;

const DT: f64 = 1.0 / 60.0;

fn run(spring: &mut Spring, steps: usize) {
    for _ in 0..steps {
        spring.step(DT);
    }
}

#[test]
fn settles_to_target() {
    let mut spring = Spring::new(SpringConfig::tilt(), 0.0);
    spring.set_target(100.0);
    run(&mut spring, 120);
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 100.0);
    assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn converges_from_any_start_for_assorted_configs() {
    let configs = [
        SpringConfig::new(300.0, 30.0),
        SpringConfig::new(120.0, 14.0),
        SpringConfig::new(100.0, 20.0),
        SpringConfig::new(50.0, 60.0),
        SpringConfig::new(5000.0, 5.0),
        SpringConfig::new(1.0, 0.5),
    ];
    for config in configs {
        for start in [-500.0, -1.0, 0.0, 3.5, 1e4] {
            let mut spring = Spring::new(config, start);
            spring.set_target(42.0);
            let mut steps = 0;
            while !spring.is_settled() {
                spring.step(DT);
                steps += 1;
                assert!(steps < 60 * 600, "{config:?} from {start} never settled");
            }
            assert!((spring.value() - 42.0).abs() < REST_DELTA);
        }
    }
}

#[test]
fn never_overshoots_at_or_above_critical_damping() {
    for config in [SpringConfig::molasses(), SpringConfig::new(100.0, 45.0)] {
        assert!(config.damping >= config.critical_damping() - 1e-9);
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(10.0);
        for _ in 0..600 {
            spring.step(DT);
            assert!(spring.value() <= 10.0 + 1e-9, "{config:?}");
        }
    }
}

#[test]
fn retarget_keeps_value_and_velocity() {
    let mut spring = Spring::new(SpringConfig::gentle(), 0.0);
    spring.set_target(100.0);
    run(&mut spring, 10);

    let value = spring.value();
    let velocity = spring.velocity();
    assert!(velocity > 0.0);

    spring.set_target(-50.0);
    assert_eq!(spring.value(), value);
    assert_eq!(spring.velocity(), velocity);

    // Output stays continuous across the abrupt retarget.
    spring.step(1e-4);
    assert!((spring.value() - value).abs() < 0.1);
}

#[test]
fn huge_steps_do_not_diverge() {
    let mut spring = Spring::new(SpringConfig::new(1e6, 1.0), 0.0);
    spring.set_target(1000.0);
    for _ in 0..100 {
        spring.step(0.5);
        assert!(spring.value().is_finite());
        assert!(spring.value().abs() < 2001.0);
    }
}

#[test]
fn garbage_input_is_inert() {
    let config = SpringConfig::new(f64::NAN, -3.0);
    assert!(config.stiffness > 0.0);
    assert!(config.damping > 0.0);

    let mut spring = Spring::new(SpringConfig::tilt(), 5.0);
    spring.set_target(f64::NAN);
    assert_eq!(spring.target(), 5.0);
    spring.step(f64::INFINITY);
    spring.step(-1.0);
    assert_eq!(spring.value(), 5.0);
}

#[test]
fn jump_to_discards_motion() {
    let mut spring = Spring::new(SpringConfig::tilt(), 0.0);
    spring.set_target(10.0);
    run(&mut spring, 3);
    spring.jump_to(-2.0);
    assert_eq!(spring.value(), -2.0);
    assert_eq!(spring.target(), -2.0);
    assert!(spring.is_settled());
}

#[test]
fn presets_have_expected_regimes() {
    assert!(SpringConfig::tilt().is_underdamped());
    assert!(SpringConfig::gentle().is_underdamped());
    assert!(!SpringConfig::molasses().is_underdamped());
}
