use super::*;

struct Fixed(f64);

impl RandomSource for Fixed {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

#[test]
fn rng_is_deterministic_and_in_unit_range() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..1000 {
        let v = a.next_f64();
        assert_eq!(v, b.next_f64());
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn huge_density_is_capped() {
    let field = ParticleField::generate(usize::MAX, &mut Fixed(0.5));
    assert_eq!(field.len(), MAX_PARTICLES);
    assert_eq!(field.particles().last().map(|p| p.id), Some(MAX_PARTICLES - 1));
}

#[test]
fn particle_count_matches_density_and_stays_in_bounds() {
    for density in [0usize, 1, 20, 137] {
        let mut rng = Rng64::new(density as u64);
        let field = ParticleField::generate(density, &mut rng);
        assert_eq!(field.len(), density);
        for p in field.particles() {
            assert!(PARTICLE_SIZE.contains(p.size));
            assert!(PARTICLE_POSITION.contains(p.x_pct));
            assert!(PARTICLE_POSITION.contains(p.y_pct));
            assert!(PARTICLE_DELAY.contains(p.delay));
            assert!(PARTICLE_DURATION.contains(p.duration));
            assert!(PARTICLE_DRIFT.contains(p.drift.x));
            assert!(PARTICLE_DRIFT.contains(p.drift.y));
            assert!(PARTICLE_PEAK_SCALE.contains(p.peak_scale));
        }
    }
}

#[test]
fn same_seed_same_field() {
    let a = ParticleField::generate(10, &mut Rng64::new(7));
    let b = ParticleField::generate(10, &mut Rng64::new(7));
    let c = ParticleField::generate(10, &mut Rng64::new(8));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn particle_loops_out_and_back() {
    let mut rng = Fixed(0.5);
    let field = ParticleField::generate(1, &mut rng);
    let p = field.particles()[0];
    assert_eq!(p.delay, 2.5);
    assert_eq!(p.duration, 15.0);
    assert_eq!(p.peak_scale, 1.0);

    let before = p.sample(1.0);
    assert_eq!(before.offset, Vec2::ZERO);
    assert_eq!(before.opacity, 0.05);

    let peak = p.sample(2.5 + 7.5);
    assert!((peak.opacity - 0.2).abs() < 1e-9);
    assert!((peak.offset.x - p.drift.x).abs() < 1e-9);

    let next_loop = p.sample(2.5 + 15.0 + 7.5);
    assert!((next_loop.opacity - 0.2).abs() < 1e-9);

    for i in 0..200 {
        let f = p.sample(i as f64 * 0.37);
        assert!(f.opacity >= 0.05 - 1e-12 && f.opacity <= 0.2 + 1e-12);
    }
}

#[test]
fn wave_field_bounds_and_period() {
    let field = WaveField::generate(WAVE_COUNT, &mut Rng64::new(99));
    assert_eq!(field.len(), 3);
    for w in field.waves() {
        assert!(WAVE_AMPLITUDE.contains(w.amplitude));
        assert!(WAVE_FREQUENCY.contains(w.frequency));
        assert!(WAVE_PHASE.contains(w.phase));
        assert!(WAVE_SPEED.contains(w.speed));
        assert!((w.period() * w.speed - 10.0).abs() < 1e-9);
    }
}

#[test]
fn wave_amplitude_flips_sign_mid_period() {
    let wave = Wave {
        id: 0,
        amplitude: 20.0,
        frequency: 0.02,
        phase: 0.0,
        speed: 0.5,
    };
    assert_eq!(wave.period(), 20.0);
    assert!((wave.signed_amplitude(0.0) - 20.0).abs() < 1e-9);
    assert!((wave.signed_amplitude(10.0) + 20.0).abs() < 1e-9);
    assert!((wave.signed_amplitude(5.0)).abs() < 1e-9);
    assert!((wave.signed_amplitude(20.0) - 20.0).abs() < 1e-9);
}

#[test]
fn wave_path_shape() {
    let path = wave_path(800.0, 20.0);
    assert_eq!(
        path.to_svg(),
        "M0,100 Q200,120 400,100 Q600,80 800,100 L800,200 L0,200 Z"
    );
}
