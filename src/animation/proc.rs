//! Procedural background fields.
//!
//! Fields are generated once from an injected [`RandomSource`] and then sampled
//! as pure functions of time.

use crate::{
    animation::ease::Ease,
    animation::variant::{Repeat, Target, Transition},
    foundation::core::{BezPath, Domain, Point, Vec2},
    foundation::math::SplitMix64,
};

/// Source of uniform randomness in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in `[domain.min, domain.max)`.
    fn sample(&mut self, domain: Domain) -> f64 {
        domain.min + self.next_f64() * domain.span()
    }
}

/// Seedable SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    inner: SplitMix64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SplitMix64::new(seed),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

impl RandomSource for Rng64 {
    fn next_f64(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

pub const PARTICLE_SIZE: Domain = Domain {
    min: 10.0,
    max: 40.0,
};
pub const PARTICLE_POSITION: Domain = Domain {
    min: 0.0,
    max: 100.0,
};
pub const PARTICLE_DELAY: Domain = Domain { min: 0.0, max: 5.0 };
pub const PARTICLE_DURATION: Domain = Domain {
    min: 10.0,
    max: 20.0,
};
pub const PARTICLE_DRIFT: Domain = Domain {
    min: -50.0,
    max: 50.0,
};
pub const PARTICLE_PEAK_SCALE: Domain = Domain { min: 0.5, max: 1.5 };
const PARTICLE_OPACITY: [f64; 3] = [0.05, 0.2, 0.05];
/// Upper bound on particles per field.
pub const MAX_PARTICLES: usize = 500;

/// One generated particle. Positions are percentages of the container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub id: usize,
    pub size: f64,
    pub x_pct: f64,
    pub y_pct: f64,
    pub delay: f64,
    pub duration: f64,
    pub drift: Vec2,
    pub peak_scale: f64,
}

/// A particle's animated state at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleFrame {
    pub id: usize,
    pub size: f64,
    pub x_pct: f64,
    pub y_pct: f64,
    pub offset: Vec2,
    pub scale: f64,
    pub opacity: f64,
}

impl Particle {
    fn transition(&self) -> Transition {
        Transition::new(self.delay, self.duration)
            .with_ease(Ease::InOutCubic)
            .with_repeat(Repeat::Forever)
    }

    /// State `elapsed` seconds after mount. Each loop drifts out and back, swells
    /// and shrinks, and fades in and out.
    pub fn sample(&self, elapsed: f64) -> ParticleFrame {
        let out_and_back = |peak: f64, rest: f64, p: Option<f64>| match p {
            None => rest,
            Some(p) => Target::Keyframes(vec![rest, peak, rest]).sample(rest, p, Ease::InOutCubic),
        };
        let p = self.transition().progress(elapsed);
        let opacity = match p {
            None => PARTICLE_OPACITY[0],
            Some(p) => Target::Keyframes(PARTICLE_OPACITY.to_vec()).sample(
                PARTICLE_OPACITY[0],
                p,
                Ease::InOutCubic,
            ),
        };

        ParticleFrame {
            id: self.id,
            size: self.size,
            x_pct: self.x_pct,
            y_pct: self.y_pct,
            offset: Vec2::new(
                out_and_back(self.drift.x, 0.0, p),
                out_and_back(self.drift.y, 0.0, p),
            ),
            scale: out_and_back(self.peak_scale, 1.0, p),
            opacity,
        }
    }
}

/// Particles generated once for a component's lifetime.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// `density` above [`MAX_PARTICLES`] is capped.
    pub fn generate(density: usize, rng: &mut dyn RandomSource) -> Self {
        if density > MAX_PARTICLES {
            tracing::warn!(density, cap = MAX_PARTICLES, "particle density capped");
        }
        let particles = (0..density.min(MAX_PARTICLES))
            .map(|id| Particle {
                id,
                size: rng.sample(PARTICLE_SIZE),
                x_pct: rng.sample(PARTICLE_POSITION),
                y_pct: rng.sample(PARTICLE_POSITION),
                delay: rng.sample(PARTICLE_DELAY),
                duration: rng.sample(PARTICLE_DURATION),
                drift: Vec2::new(rng.sample(PARTICLE_DRIFT), rng.sample(PARTICLE_DRIFT)),
                peak_scale: rng.sample(PARTICLE_PEAK_SCALE),
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn sample(&self, elapsed: f64) -> Vec<ParticleFrame> {
        self.particles.iter().map(|p| p.sample(elapsed)).collect()
    }
}

pub const WAVE_COUNT: usize = 3;
pub const WAVE_AMPLITUDE: Domain = Domain {
    min: 10.0,
    max: 30.0,
};
pub const WAVE_FREQUENCY: Domain = Domain {
    min: 0.01,
    max: 0.03,
};
pub const WAVE_PHASE: Domain = Domain {
    min: 0.0,
    max: std::f64::consts::TAU,
};
pub const WAVE_SPEED: Domain = Domain { min: 0.1, max: 0.6 };

/// Height of the band a wave path is drawn in.
pub const WAVE_BAND_HEIGHT: f64 = 200.0;
const WAVE_BASELINE: f64 = 100.0;
const WAVE_CYCLE_SECS: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Wave {
    pub id: usize,
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub speed: f64,
}

impl Wave {
    /// Seconds for one full morph cycle; slower waves take longer.
    pub fn period(&self) -> f64 {
        WAVE_CYCLE_SECS / self.speed
    }

    fn transition(&self) -> Transition {
        Transition::new(0.0, self.period())
            .with_ease(Ease::InOutCubic)
            .with_repeat(Repeat::Forever)
    }

    /// Signed amplitude at `elapsed`: `+a -> -a -> +a` each period.
    pub fn signed_amplitude(&self, elapsed: f64) -> f64 {
        let a = self.amplitude;
        match self.transition().progress(elapsed) {
            None => a,
            Some(p) => Target::Keyframes(vec![a, -a, a]).sample(a, p, Ease::InOutCubic),
        }
    }

    /// Closed path across `width` with two quadratic humps of opposite sign.
    pub fn path(&self, width: f64, elapsed: f64) -> BezPath {
        wave_path(width, self.signed_amplitude(elapsed))
    }
}

pub(crate) fn wave_path(width: f64, amplitude: f64) -> BezPath {
    let w = if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    };
    let y = WAVE_BASELINE;
    let mut path = BezPath::new();
    path.move_to(Point::new(0.0, y));
    path.quad_to(Point::new(w / 4.0, y + amplitude), Point::new(w / 2.0, y));
    path.quad_to(
        Point::new(w * 0.75, y - amplitude),
        Point::new(w, y),
    );
    path.line_to(Point::new(w, WAVE_BAND_HEIGHT));
    path.line_to(Point::new(0.0, WAVE_BAND_HEIGHT));
    path.close_path();
    path
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct WaveField {
    waves: Vec<Wave>,
}

impl WaveField {
    pub fn generate(count: usize, rng: &mut dyn RandomSource) -> Self {
        let waves = (0..count)
            .map(|id| Wave {
                id,
                amplitude: rng.sample(WAVE_AMPLITUDE),
                frequency: rng.sample(WAVE_FREQUENCY),
                phase: rng.sample(WAVE_PHASE),
                speed: rng.sample(WAVE_SPEED),
            })
            .collect();
        Self { waves }
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/proc.rs"]
mod tests;
