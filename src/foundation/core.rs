use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// Closed interval a signal value is constrained to.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Domain {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl Domain {
    /// `[0, 1]`, used for progress and visibility fractions.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// `[-0.5, 0.5]`, used for pointer offsets relative to an element center.
    pub const CENTERED: Self = Self {
        min: -0.5,
        max: 0.5,
    };

    /// Build a domain, rejecting non-finite or inverted bounds.
    pub fn new(min: f64, max: f64) -> MotionResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(MotionError::validation("Domain bounds must be finite"));
        }
        if min > max {
            return Err(MotionError::validation("Domain min must be <= max"));
        }
        Ok(Self { min, max })
    }

    pub fn span(self) -> f64 {
        self.max - self.min
    }

    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Clamp `v` into the domain. Non-finite input yields `None`.
    pub fn clamp(self, v: f64) -> Option<f64> {
        if v.is_nan() {
            return None;
        }
        Some(v.clamp(self.min, self.max))
    }
}

/// Palette token as used by the site's theme: a color family name plus a shade.
///
/// The engine never resolves tokens to colors; it only passes them through.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PaletteToken {
    pub name: String,
    pub shade: u16,
}

impl PaletteToken {
    pub fn new(name: impl Into<String>, shade: u16) -> Self {
        Self {
            name: name.into(),
            shade,
        }
    }

    /// CSS custom property reference, e.g. `var(--color-primary-500)`.
    pub fn css_var(&self) -> String {
        format!("var(--color-{}-{})", self.name, self.shade)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
