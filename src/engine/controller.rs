//! Threshold crossing detection for visibility-triggered playback.

use crate::foundation::math::unit;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Crossing {
    Enter,
    Exit,
}

/// Turns a stream of visible fractions into enter/exit crossings.
///
/// With `once`, the controller freezes after its first `Enter`: later fractions
/// are ignored and [`VisibilityController::wants_updates`] turns false so the
/// owner can drop its intersection subscription.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityController {
    threshold: f64,
    once: bool,
    inside: bool,
    frozen: bool,
}

impl VisibilityController {
    /// `threshold` is clamped into `[0, 1]`; NaN becomes `0`.
    pub fn new(threshold: f64, once: bool) -> Self {
        Self {
            threshold: unit(threshold),
            once,
            inside: false,
            frozen: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn once(&self) -> bool {
        self.once
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn wants_updates(&self) -> bool {
        !self.frozen
    }

    /// Record a reveal that happened without a crossing. A `once` controller
    /// freezes exactly as if it had seen an `Enter`.
    pub fn mark_shown(&mut self) {
        if self.once && !self.frozen {
            self.frozen = true;
            tracing::debug!("visibility frozen by explicit reveal");
        }
    }

    /// A zero threshold still needs some part of the element on screen.
    pub fn meets_threshold(&self, fraction: f64) -> bool {
        if self.threshold <= 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.threshold
        }
    }

    /// Feed the latest visible fraction. Non-finite fractions are ignored.
    pub fn observe(&mut self, fraction: f64) -> Option<Crossing> {
        if self.frozen || fraction.is_nan() {
            return None;
        }
        let now_inside = self.meets_threshold(fraction);
        let crossing = match (self.inside, now_inside) {
            (false, true) => Crossing::Enter,
            (true, false) => Crossing::Exit,
            _ => return None,
        };

        self.inside = now_inside;
        if crossing == Crossing::Enter && self.once {
            self.frozen = true;
        }
        tracing::debug!(?crossing, fraction, threshold = self.threshold, "visibility crossing");
        Some(crossing)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/controller.rs"]
mod tests;
