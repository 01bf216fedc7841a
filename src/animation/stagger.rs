use crate::{
    animation::variant::{Transition, Variant},
    foundation::math::non_negative,
};

/// Per-index delay rule: `delay(i) = base_delay + i * interval`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    pub base_delay: f64,
    pub interval: f64,
}

impl Stagger {
    /// Negative or non-finite inputs clamp to zero.
    pub fn new(base_delay: f64, interval: f64) -> Self {
        Self {
            base_delay: non_negative(base_delay),
            interval: non_negative(interval),
        }
    }

    pub fn delay(&self, index: usize) -> f64 {
        self.base_delay + index as f64 * self.interval
    }

    pub fn plan(&self, count: usize) -> StaggerPlan {
        StaggerPlan {
            delays: (0..count).map(|i| self.delay(i)).collect(),
        }
    }

    /// Index-specific copy of `base`: same targets, delay replaced by `delay(index)`.
    ///
    /// `fallback` supplies the timing when `base` declares none.
    pub fn variant_for(&self, base: &Variant, fallback: Transition, index: usize) -> Variant {
        let transition = base.transition().unwrap_or(fallback);
        base.clone()
            .with_transition(transition.with_delay(self.delay(index)))
    }

    /// `(index) -> Variant` over a shared base, for handing to per-child machines.
    pub fn variants<'a>(
        &'a self,
        base: &'a Variant,
        fallback: Transition,
    ) -> impl Fn(usize) -> Variant + 'a {
        move |index| self.variant_for(base, fallback, index)
    }
}

/// Ordered per-child delays for one shared trigger.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct StaggerPlan {
    delays: Vec<f64>,
}

impl StaggerPlan {
    pub fn new(count: usize, base_delay: f64, interval: f64) -> Self {
        Stagger::new(base_delay, interval).plan(count)
    }

    pub fn delays(&self) -> &[f64] {
        &self.delays
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.delays.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
