//! Reveal-on-scroll: a visibility controller driving one element, or a staggered
//! group of children, between `hidden` and `visible`.

use crate::{
    animation::ease::Ease,
    animation::stagger::Stagger,
    animation::style::{Property, Style},
    animation::variant::{Transition, Variant, VariantMachine, VariantName, VariantSet},
    config::model::{RevealConfig, RevealVariant},
    engine::controller::{Crossing, VisibilityController},
    foundation::error::MotionResult,
    foundation::math::non_negative,
};

/// Vertical offset staggered children rise from.
const CHILD_RISE: f64 = 20.0;

/// `(hidden, visible)` pair for a reveal variant. `distance` is the slide length in
/// pixels for the slide variants.
pub fn reveal_variants(variant: RevealVariant, distance: f64) -> (Variant, Variant) {
    let hidden = Variant::new().with(Property::Opacity, 0.0);
    let visible = Variant::new().with(Property::Opacity, 1.0);
    match variant {
        RevealVariant::FadeIn => (hidden, visible),
        RevealVariant::SlideUp => (
            hidden.with(Property::Y, distance),
            visible.with(Property::Y, 0.0),
        ),
        RevealVariant::SlideLeft => (
            hidden.with(Property::X, -distance),
            visible.with(Property::X, 0.0),
        ),
        RevealVariant::SlideRight => (
            hidden.with(Property::X, distance),
            visible.with(Property::X, 0.0),
        ),
        RevealVariant::Scale => (
            hidden.with(Property::Scale, 0.8),
            visible.with(Property::Scale, 1.0),
        ),
        RevealVariant::Rotate => (
            hidden
                .with(Property::Rotate, -10.0)
                .with(Property::Scale, 0.9),
            visible
                .with(Property::Rotate, 0.0)
                .with(Property::Scale, 1.0),
        ),
    }
}

#[derive(Clone, Debug)]
pub struct ScrollReveal {
    controller: VisibilityController,
    staggered: bool,
    /// The element itself, or one machine per child when staggered.
    machines: Vec<VariantMachine>,
}

impl ScrollReveal {
    /// `child_count` only matters with `stagger_children`; a group with no
    /// sequence of children animates as a single child at index 0.
    pub fn new(config: &RevealConfig, child_count: usize) -> MotionResult<Self> {
        let delay = non_negative(config.delay);
        let duration = non_negative(config.duration);
        let distance = if config.distance.is_finite() {
            config.distance
        } else {
            RevealConfig::default().distance
        };

        let machines = if config.stagger_children {
            let hidden = Variant::new()
                .with(Property::Opacity, 0.0)
                .with(Property::Y, CHILD_RISE);
            let visible = Variant::new()
                .with(Property::Opacity, 1.0)
                .with(Property::Y, 0.0);
            let timing = Transition::new(0.0, duration).with_ease(Ease::OutCubic);
            let stagger = Stagger::new(delay, config.stagger_delay);
            let child = stagger.variants(&visible, timing);

            (0..child_count.max(1))
                .map(|i| {
                    let set = VariantSet::new(hidden.clone(), child(i))?
                        .with_default_transition(timing);
                    Ok(VariantMachine::new(set))
                })
                .collect::<MotionResult<Vec<_>>>()?
        } else {
            let (hidden, visible) = reveal_variants(config.variant, distance);
            let set = VariantSet::new(hidden, visible)?.with_default_transition(
                Transition::new(delay, duration).with_ease(Ease::OutCubic),
            );
            vec![VariantMachine::new(set)]
        };

        Ok(Self {
            controller: VisibilityController::new(config.threshold, config.once),
            staggered: config.stagger_children,
            machines,
        })
    }

    pub fn is_staggered(&self) -> bool {
        self.staggered
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    pub fn controller(&self) -> &VisibilityController {
        &self.controller
    }

    /// Whether intersection updates can still change anything.
    pub fn wants_updates(&self) -> bool {
        self.controller.wants_updates()
    }

    pub fn is_revealed(&self) -> bool {
        self.machines
            .first()
            .is_some_and(|m| *m.current() == VariantName::Visible)
    }

    /// Feed a visible fraction. Entering animates every target to `visible`;
    /// leaving (repeatable reveals only) animates back to `hidden`. Re-entry starts
    /// over from the hidden values.
    pub fn on_visibility(&mut self, fraction: f64, now: f64) -> Option<Crossing> {
        let crossing = self.controller.observe(fraction)?;
        let dest = match crossing {
            Crossing::Enter => VariantName::Visible,
            Crossing::Exit => VariantName::Hidden,
        };
        for machine in &mut self.machines {
            machine.transition_to(&dest, now);
        }
        Some(crossing)
    }

    /// Flip every target between `hidden` and `visible` without waiting for a
    /// crossing. A frozen `once` reveal stays visible and this returns `false`;
    /// showing a `once` reveal freezes it.
    pub fn toggle(&mut self, now: f64) -> bool {
        if !self.controller.wants_updates() && self.is_revealed() {
            return false;
        }
        for machine in &mut self.machines {
            machine.toggle(now);
        }
        if self.is_revealed() {
            self.controller.mark_shown();
        }
        true
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.machines.iter().any(|m| m.is_animating(now))
    }

    /// One style per target, in child order.
    pub fn frame(&self, now: f64) -> Vec<Style> {
        self.machines.iter().map(|m| m.sample(now)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/reveal.rs"]
mod tests;
