//! Scroll-linked parallax: translation, opacity and scale derived from how far a
//! section has travelled through the viewport.

use crate::{
    animation::style::{Property, Style},
    animation::transform::{ChannelMap, TransformMapping},
    config::model::{ParallaxConfig, ParallaxDirection},
    foundation::core::{Domain, Rect},
    foundation::math::finite_or,
    signal::value::{Signal, scroll_progress},
};

/// Pixels of travel per unit of `speed`.
const DISTANCE_PER_SPEED: f64 = 100.0;

#[derive(Clone, Debug)]
pub struct ParallaxSection {
    direction: ParallaxDirection,
    distance: f64,
    channels: ChannelMap,
    progress: Signal,
}

impl ParallaxSection {
    pub fn new(config: &ParallaxConfig) -> Self {
        let speed = finite_or(config.speed, ParallaxConfig::default().speed);
        let distance = DISTANCE_PER_SPEED * speed;
        let axis = if config.direction.is_horizontal() {
            Property::X
        } else {
            Property::Y
        };
        // Up and left travel toward negative offsets as the section scrolls past.
        let (from, to) = match config.direction {
            ParallaxDirection::Up | ParallaxDirection::Left => (distance, -distance),
            ParallaxDirection::Down | ParallaxDirection::Right => (-distance, distance),
        };

        let swell = |enabled: bool, edge: f64| {
            if enabled {
                TransformMapping::fixed(&[(0.0, edge), (0.5, 1.0), (1.0, edge)])
            } else {
                TransformMapping::fixed(&[(0.0, 1.0)])
            }
        };

        let channels = ChannelMap::new()
            .with(axis, TransformMapping::span(0.0, 1.0, from, to))
            .with(Property::Opacity, swell(config.opacity, 0.4))
            .with(Property::Scale, swell(config.scale, 0.8));

        Self {
            direction: config.direction,
            distance,
            channels,
            progress: Signal::new(Domain::UNIT, 0.0),
        }
    }

    pub fn direction(&self) -> ParallaxDirection {
        self.direction
    }

    /// Maximum translation either side of rest, in pixels.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    /// Recompute progress from layout. `None` geometry leaves state untouched and
    /// returns `false`.
    pub fn on_scroll(&mut self, element: Option<Rect>, viewport: Rect) -> bool {
        let Some(element) = element else {
            return false;
        };
        self.progress.set(scroll_progress(element, viewport));
        true
    }

    /// Returns whether the stored progress changed.
    pub fn set_progress(&mut self, progress: f64) -> bool {
        self.progress.set(progress)
    }

    pub fn style(&self) -> Style {
        self.sample(self.progress.get())
    }

    /// Style at an arbitrary progress, without touching state.
    pub fn sample(&self, progress: f64) -> Style {
        self.channels.eval(progress)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/parallax.rs"]
mod tests;
