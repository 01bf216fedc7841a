//! Named style snapshots and the state machine that moves between them.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::ease::Ease,
    animation::style::{Property, Style},
    foundation::error::{MotionError, MotionResult},
    foundation::math::{lerp, non_negative},
};

static HIDDEN: VariantName = VariantName::Hidden;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariantName {
    Hidden,
    Visible,
    Custom(String),
}

impl VariantName {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    pub fn parse(name: &str) -> Self {
        match name.trim() {
            n if n.eq_ignore_ascii_case("hidden") => Self::Hidden,
            n if n.eq_ignore_ascii_case("visible") => Self::Visible,
            n => Self::Custom(n.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
            Self::Custom(n) => n,
        }
    }
}

impl std::fmt::Display for VariantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination of one property inside a variant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Target {
    /// Tween from the start value to this value.
    Value(f64),
    /// Pass through these values, evenly spaced over the transition. The first
    /// keyframe replaces the start value.
    Keyframes(Vec<f64>),
}

impl Target {
    /// Value held once the transition has completed.
    pub fn resting(&self, prop: Property) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Keyframes(ks) => ks.last().copied().unwrap_or_else(|| prop.neutral()),
        }
    }

    /// Sample at linear progress `p` in `[0, 1]`. Easing applies per segment.
    pub fn sample(&self, from: f64, p: f64, ease: Ease) -> f64 {
        match self {
            Self::Value(v) => lerp(from, *v, ease.apply(p)),
            Self::Keyframes(ks) => match ks.len() {
                0 => from,
                1 => lerp(from, ks[0], ease.apply(p)),
                n => {
                    let pos = p.clamp(0.0, 1.0) * (n - 1) as f64;
                    let i = (pos.floor() as usize).min(n - 2);
                    lerp(ks[i], ks[i + 1], ease.apply(pos - i as f64))
                }
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    #[default]
    Never,
    /// Play `1 + n` iterations in total.
    Times(u32),
    Forever,
}

/// Timing of a transition into a variant. Times are in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 0.3,
            ease: Ease::default(),
            repeat: Repeat::Never,
        }
    }
}

impl Transition {
    pub fn new(delay: f64, duration: f64) -> Self {
        Self {
            delay,
            duration,
            ..Self::default()
        }
        .sanitized()
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = non_negative(delay);
        self
    }

    /// Negative or non-finite delay/duration become zero. A zero duration is an
    /// instant jump once the delay has elapsed.
    pub fn sanitized(self) -> Self {
        Self {
            delay: non_negative(self.delay),
            duration: non_negative(self.duration),
            ..self
        }
    }

    fn iterations(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Never => Some(1.0),
            Repeat::Times(n) => Some(f64::from(n) + 1.0),
            Repeat::Forever => None,
        }
    }

    /// Linear progress of the running iteration, `None` while the delay is pending.
    pub fn progress(&self, elapsed: f64) -> Option<f64> {
        let t = elapsed - self.delay;
        if !(t >= 0.0) {
            return None;
        }
        if self.duration <= 0.0 {
            return Some(1.0);
        }
        let cycles = t / self.duration;
        match self.iterations() {
            Some(total) if cycles >= total => Some(1.0),
            _ => Some(cycles.fract()),
        }
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        match self.iterations() {
            None => false,
            Some(total) => elapsed - self.delay >= self.duration * total,
        }
    }
}

/// A named, complete set of property targets plus optional timing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variant {
    targets: BTreeMap<Property, Target>,
    transition: Option<Transition>,
}

impl Variant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Property, value: f64) -> Self {
        self.targets.insert(prop, Target::Value(value));
        self
    }

    pub fn with_keyframes(mut self, prop: Property, keys: Vec<f64>) -> Self {
        let target = if keys.is_empty() {
            Target::Value(prop.neutral())
        } else {
            Target::Keyframes(keys)
        };
        self.targets.insert(prop, target);
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition.sanitized());
        self
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn target(&self, prop: Property) -> Option<&Target> {
        self.targets.get(&prop)
    }

    pub fn keys(&self) -> BTreeSet<Property> {
        self.targets.keys().copied().collect()
    }

    pub fn resting_style(&self) -> Style {
        self.targets
            .iter()
            .map(|(prop, t)| (*prop, t.resting(*prop)))
            .collect()
    }
}

/// Variants keyed by name, all sharing one property key set.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantSet {
    keys: BTreeSet<Property>,
    hidden: Variant,
    others: BTreeMap<VariantName, Variant>,
    default_transition: Transition,
}

impl VariantSet {
    /// Build the mandatory `hidden`/`visible` pair.
    pub fn new(hidden: Variant, visible: Variant) -> MotionResult<Self> {
        let mut set = Self {
            keys: hidden.keys(),
            hidden,
            others: BTreeMap::new(),
            default_transition: Transition::default(),
        };
        set.insert(VariantName::Visible, visible)?;
        Ok(set)
    }

    pub fn with_variant(mut self, name: VariantName, variant: Variant) -> MotionResult<Self> {
        self.insert(name, variant)?;
        Ok(self)
    }

    pub fn insert(&mut self, name: VariantName, variant: Variant) -> MotionResult<()> {
        if variant.keys() != self.keys {
            return Err(MotionError::validation(format!(
                "variant '{name}' must declare exactly the properties {:?}",
                self.keys
            )));
        }
        match name {
            VariantName::Hidden => self.hidden = variant,
            name => {
                self.others.insert(name, variant);
            }
        }
        Ok(())
    }

    pub fn with_default_transition(mut self, transition: Transition) -> Self {
        self.default_transition = transition.sanitized();
        self
    }

    pub fn default_transition(&self) -> Transition {
        self.default_transition
    }

    pub fn keys(&self) -> &BTreeSet<Property> {
        &self.keys
    }

    pub fn get(&self, name: &VariantName) -> Option<&Variant> {
        match name {
            VariantName::Hidden => Some(&self.hidden),
            name => self.others.get(name),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &VariantName> {
        std::iter::once(&HIDDEN).chain(self.others.keys())
    }

    /// Timing used when entering `name`.
    pub fn transition_for(&self, name: &VariantName) -> Transition {
        self.get(name)
            .and_then(Variant::transition)
            .unwrap_or(self.default_transition)
    }

    /// Look up `name`, falling back to `hidden` for unknown names.
    fn resolve(&self, name: &VariantName) -> (VariantName, &Variant) {
        match self.get(name) {
            Some(variant) => (name.clone(), variant),
            None => {
                tracing::warn!(variant = %name, "unknown variant, falling back to hidden");
                (VariantName::Hidden, &self.hidden)
            }
        }
    }
}

/// Where a transition starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartPolicy {
    /// Start from the source variant's resting values. Re-entering a variant
    /// therefore restarts cleanly instead of resuming a half-finished tween.
    #[default]
    FromSource,
    /// Start from whatever is currently on screen.
    FromCurrent,
}

#[derive(Clone, Debug)]
struct Run {
    from: Style,
    started_at: f64,
    transition: Transition,
}

/// Drives one element between the variants of a [`VariantSet`].
#[derive(Clone, Debug)]
pub struct VariantMachine {
    set: VariantSet,
    current: VariantName,
    run: Option<Run>,
    policy: StartPolicy,
}

impl VariantMachine {
    /// Machine resting at `hidden`.
    pub fn new(set: VariantSet) -> Self {
        Self {
            set,
            current: VariantName::Hidden,
            run: None,
            policy: StartPolicy::default(),
        }
    }

    /// Machine resting at `name` without animating there.
    pub fn resting_at(set: VariantSet, name: &VariantName) -> Self {
        let current = set.resolve(name).0;
        Self {
            set,
            current,
            run: None,
            policy: StartPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StartPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn variants(&self) -> &VariantSet {
        &self.set
    }

    pub fn current(&self) -> &VariantName {
        &self.current
    }

    /// Start animating toward `name`. Returns `false` when already there.
    pub fn transition_to(&mut self, name: &VariantName, now: f64) -> bool {
        let dest = self.set.resolve(name).0;
        if dest == self.current {
            return false;
        }

        let now = if now.is_finite() { now } else { 0.0 };
        let from = match self.policy {
            StartPolicy::FromSource => self.resting_style(&self.current),
            StartPolicy::FromCurrent => self.sample(now),
        };
        let transition = self.set.transition_for(&dest);
        tracing::debug!(from = %self.current, to = %dest, at = now, "variant transition");

        self.run = Some(Run {
            from,
            started_at: now,
            transition,
        });
        self.current = dest;
        true
    }

    /// Flip between `hidden` and `visible`; any custom variant goes to `hidden`.
    pub fn toggle(&mut self, now: f64) -> bool {
        let next = match self.current {
            VariantName::Hidden => VariantName::Visible,
            _ => VariantName::Hidden,
        };
        self.transition_to(&next, now)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.run
            .as_ref()
            .is_some_and(|run| !run.transition.is_finished(now - run.started_at))
    }

    pub fn sample(&self, now: f64) -> Style {
        let (_, dest) = self.set.resolve(&self.current);
        let Some(run) = &self.run else {
            return dest.resting_style();
        };
        let Some(p) = run.transition.progress(now - run.started_at) else {
            return run.from.clone();
        };

        self.set
            .keys()
            .iter()
            .map(|&prop| {
                let from = run.from.get_or_neutral(prop);
                let value = dest
                    .target(prop)
                    .map(|t| t.sample(from, p, run.transition.ease))
                    .unwrap_or(from);
                (prop, value)
            })
            .collect()
    }

    fn resting_style(&self, name: &VariantName) -> Style {
        self.set.resolve(name).1.resting_style()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/variant.rs"]
mod tests;
