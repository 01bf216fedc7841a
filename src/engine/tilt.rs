//! Pointer-driven 3-D tilt for cards.

use crate::{
    animation::ease::Ease,
    animation::spring::{Spring, SpringConfig},
    animation::style::{Property, Style},
    animation::transform::TransformMapping,
    animation::variant::{StartPolicy, Transition, Variant, VariantMachine, VariantName, VariantSet},
    config::model::TiltConfig,
    foundation::core::{Domain, Point, Rect, Vec2},
    foundation::error::MotionResult,
    foundation::math::finite_or,
    signal::value::{Signal2, pointer_offset},
};

const HOVER_SECS: f64 = 0.3;

/// Tilt state at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TiltFrame {
    /// Degrees around the x axis; positive tips the top edge away.
    pub rotate_x: f64,
    /// Degrees around the y axis.
    pub rotate_y: f64,
    pub scale: f64,
    /// Both springs at rest and no hover tween running.
    pub settled: bool,
}

impl TiltFrame {
    pub fn style(&self) -> Style {
        Style::new()
            .with(Property::RotateX, self.rotate_x)
            .with(Property::RotateY, self.rotate_y)
            .with(Property::Scale, self.scale)
    }
}

/// Maps the pointer's offset from a card's center to spring-smoothed rotations.
///
/// The pointer's vertical offset drives `rotate_x` (`[-0.5, 0.5] -> [depth, -depth]`)
/// and its horizontal offset drives `rotate_y` (`[-0.5, 0.5] -> [-depth, depth]`).
#[derive(Clone, Debug)]
pub struct TiltCard {
    depth: f64,
    offset: Signal2,
    rotate_x_map: TransformMapping,
    rotate_y_map: TransformMapping,
    rotate_x: Spring,
    rotate_y: Spring,
    hover: VariantMachine,
    last_frame: Option<f64>,
}

impl TiltCard {
    pub fn new(config: &TiltConfig, spring: SpringConfig) -> MotionResult<Self> {
        let depth = finite_or(config.depth, TiltConfig::default().depth);
        let hover_scale = finite_or(config.hover_scale, TiltConfig::default().hover_scale);

        let hover = VariantSet::new(
            Variant::new().with(Property::Scale, 1.0),
            Variant::new().with(Property::Scale, hover_scale),
        )?
        .with_default_transition(Transition::new(0.0, HOVER_SECS).with_ease(Ease::OutCubic));

        Ok(Self {
            depth,
            offset: Signal2::new(Domain::CENTERED),
            rotate_x_map: TransformMapping::span(-0.5, 0.5, depth, -depth),
            rotate_y_map: TransformMapping::span(-0.5, 0.5, -depth, depth),
            rotate_x: Spring::new(spring, 0.0),
            rotate_y: Spring::new(spring, 0.0),
            hover: VariantMachine::new(hover).with_policy(StartPolicy::FromCurrent),
            last_frame: None,
        })
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Current clamped pointer offset; `(0, 0)` when the pointer is away.
    pub fn offset(&self) -> Vec2 {
        self.offset.get()
    }

    pub fn is_hovered(&self) -> bool {
        *self.hover.current() == VariantName::Visible
    }

    /// Retarget the springs for a pointer at `client`. Returns `false` (and changes
    /// nothing) when `bounds` is missing or empty.
    pub fn on_pointer_move(&mut self, client: Point, bounds: Option<Rect>, now: f64) -> bool {
        let Some(offset) = bounds.and_then(|b| pointer_offset(client, b)) else {
            return false;
        };
        self.offset.set(offset);
        self.retarget();
        self.hover.transition_to(&VariantName::Visible, now);
        true
    }

    /// Recenter. The springs relax toward zero from wherever they are.
    pub fn on_pointer_leave(&mut self, now: f64) {
        self.offset.set(Vec2::ZERO);
        self.retarget();
        self.hover.transition_to(&VariantName::Hidden, now);
    }

    fn retarget(&mut self) {
        let offset = self.offset.get();
        self.rotate_x.set_target(self.rotate_x_map.eval(offset.y));
        self.rotate_y.set_target(self.rotate_y_map.eval(offset.x));
    }

    /// Rotation targets the springs are chasing.
    pub fn targets(&self) -> (f64, f64) {
        (self.rotate_x.target(), self.rotate_y.target())
    }

    /// Advance the springs to `now` and sample. The first call only establishes
    /// the clock.
    pub fn frame(&mut self, now: f64) -> TiltFrame {
        if let Some(last) = self.last_frame {
            let dt = now - last;
            self.rotate_x.step(dt);
            self.rotate_y.step(dt);
        }
        if now.is_finite() {
            self.last_frame = Some(now);
        }

        TiltFrame {
            rotate_x: self.rotate_x.value(),
            rotate_y: self.rotate_y.value(),
            scale: self.hover.sample(now).get_or_neutral(Property::Scale),
            settled: self.rotate_x.is_settled()
                && self.rotate_y.is_settled()
                && !self.hover.is_animating(now),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/tilt.rs"]
mod tests;
