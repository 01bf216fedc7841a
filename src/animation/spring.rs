//! Spring smoothing.
//!
//! A mass-1 damped harmonic oscillator that chases a target value. Each step uses
//! the closed-form solution of the oscillator, so large or irregular frame deltas
//! cannot make the output diverge.

const MIN_STIFFNESS: f64 = 1e-3;
const MIN_DAMPING: f64 = 1e-3;

/// Distance from target under which a slow spring snaps to rest.
pub const REST_DELTA: f64 = 1e-3;
/// Speed under which a spring close to its target snaps to rest.
pub const REST_SPEED: f64 = 1e-2;

/// Spring parameters. Mass is fixed at 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringConfig {
    /// Build a config; non-finite or non-positive values clamp to a small positive
    /// minimum.
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
        }
        .sanitized()
    }

    /// The pointer-tilt response: quick, lightly underdamped.
    pub fn tilt() -> Self {
        Self::new(300.0, 30.0)
    }

    /// A gentle spring with a little overshoot.
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0)
    }

    /// Critically damped spring, no overshoot.
    pub fn molasses() -> Self {
        Self::new(100.0, 20.0)
    }

    pub fn sanitized(self) -> Self {
        fn positive(v: f64, min: f64) -> f64 {
            if v.is_finite() && v > min { v } else { min }
        }
        Self {
            stiffness: positive(self.stiffness, MIN_STIFFNESS),
            damping: positive(self.damping, MIN_DAMPING),
        }
    }

    pub fn natural_frequency(&self) -> f64 {
        self.stiffness.sqrt()
    }

    pub fn critical_damping(&self) -> f64 {
        2.0 * self.stiffness.sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / self.critical_damping()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::tilt()
    }
}

/// Stateful spring follower.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        let initial = if initial.is_finite() { initial } else { 0.0 };
        Self {
            config: config.sanitized(),
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget without touching value or velocity. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Place the spring at rest on `value`, discarding any motion.
    pub fn jump_to(&mut self, value: f64) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance by `dt` seconds. Non-finite or non-positive deltas are ignored.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let x0 = self.value - self.target;
        let v0 = self.velocity;
        let (x, v) = oscillate(self.config, x0, v0, dt);

        if !x.is_finite() || !v.is_finite() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }
        self.value = self.target + x;
        self.velocity = v;

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Displacement and velocity after `t` seconds, starting from `(x0, v0)` around 0.
fn oscillate(config: SpringConfig, x0: f64, v0: f64, t: f64) -> (f64, f64) {
    let w0 = config.natural_frequency();
    let zeta = config.damping_ratio();

    if (zeta - 1.0).abs() < 1e-6 {
        let decay = (-w0 * t).exp();
        let b = v0 + w0 * x0;
        let x = decay * (x0 + b * t);
        let v = decay * (v0 - w0 * b * t);
        (x, v)
    } else if zeta < 1.0 {
        let a = zeta * w0;
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let decay = (-a * t).exp();
        let (sin, cos) = (wd * t).sin_cos();
        let b = (v0 + a * x0) / wd;
        let x = decay * (x0 * cos + b * sin);
        let v = decay * (v0 * cos - ((a * v0 + w0 * w0 * x0) / wd) * sin);
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
