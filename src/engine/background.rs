//! Decorative backgrounds: static blobs, a drifting gradient, particles, or waves.

use crate::{
    animation::ease::Ease,
    animation::proc::{ParticleField, ParticleFrame, RandomSource, WAVE_COUNT, WaveField},
    animation::variant::{Repeat, Target, Transition},
    config::model::{BackgroundConfig, BackgroundVariant},
    foundation::core::{BezPath, PaletteToken, Size},
};

const GRADIENT_CYCLE_SECS: f64 = 20.0;
const GRADIENT_POSITION: [f64; 3] = [0.0, 100.0, 0.0];

/// A soft blurred disc anchored to one corner or band of the container.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Blob {
    pub anchor: BlobAnchor,
    /// Diameter in CSS pixels.
    pub diameter: f64,
    pub color: PaletteToken,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum BlobAnchor {
    TopRight,
    BottomLeft,
    UpperThird,
    LowerThird,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WaveFrame {
    pub id: usize,
    pub path: BezPath,
    pub fill: PaletteToken,
    pub fill_opacity: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum BackgroundFrame {
    Blobs(Vec<Blob>),
    /// Background position in percent along the gradient's diagonal.
    Gradient {
        position: f64,
        stops: [PaletteToken; 3],
    },
    Particles(Vec<ParticleFrame>),
    Waves(Vec<WaveFrame>),
}

#[derive(Clone, Debug, PartialEq)]
enum Field {
    Blobs,
    Gradient,
    Particles(ParticleField),
    Waves(WaveField),
}

/// A mounted background. Only the selected variant's field is generated, once.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedBackground {
    primary: String,
    secondary: String,
    field: Field,
    mounted_at: f64,
    width: f64,
}

impl AnimatedBackground {
    pub fn mount(
        config: &BackgroundConfig,
        rng: &mut dyn RandomSource,
        viewport: Size,
        now: f64,
    ) -> Self {
        let field = match config.variant {
            BackgroundVariant::Default => Field::Blobs,
            BackgroundVariant::Gradient => Field::Gradient,
            BackgroundVariant::Particles => {
                Field::Particles(ParticleField::generate(config.density, rng))
            }
            BackgroundVariant::Waves => Field::Waves(WaveField::generate(WAVE_COUNT, rng)),
        };
        tracing::debug!(variant = config.variant.as_str(), "background mounted");
        Self {
            primary: config.primary_color.clone(),
            secondary: config.secondary_color.clone(),
            field,
            mounted_at: if now.is_finite() { now } else { 0.0 },
            width: sanitize_width(viewport.width),
        }
    }

    pub fn variant(&self) -> BackgroundVariant {
        match self.field {
            Field::Blobs => BackgroundVariant::Default,
            Field::Gradient => BackgroundVariant::Gradient,
            Field::Particles(_) => BackgroundVariant::Particles,
            Field::Waves(_) => BackgroundVariant::Waves,
        }
    }

    pub fn particles(&self) -> Option<&ParticleField> {
        match &self.field {
            Field::Particles(p) => Some(p),
            _ => None,
        }
    }

    pub fn waves(&self) -> Option<&WaveField> {
        match &self.field {
            Field::Waves(w) => Some(w),
            _ => None,
        }
    }

    /// Width wave paths span.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Follow a viewport resize. Generated fields are kept.
    pub fn on_resize(&mut self, viewport: Size) {
        self.width = sanitize_width(viewport.width);
    }

    pub fn frame(&self, now: f64) -> BackgroundFrame {
        let elapsed = (now - self.mounted_at).max(0.0);
        let token = |name: &str, shade: u16| PaletteToken::new(name, shade);
        match &self.field {
            Field::Blobs => BackgroundFrame::Blobs(vec![
                Blob {
                    anchor: BlobAnchor::TopRight,
                    diameter: 384.0,
                    color: token(self.primary.as_str(), 100),
                    opacity: 0.5,
                },
                Blob {
                    anchor: BlobAnchor::BottomLeft,
                    diameter: 384.0,
                    color: token(self.secondary.as_str(), 100),
                    opacity: 0.5,
                },
                Blob {
                    anchor: BlobAnchor::UpperThird,
                    diameter: 288.0,
                    color: token(self.primary.as_str(), 200),
                    opacity: 0.3,
                },
                Blob {
                    anchor: BlobAnchor::LowerThird,
                    diameter: 288.0,
                    color: token(self.secondary.as_str(), 200),
                    opacity: 0.3,
                },
            ]),
            Field::Gradient => {
                let cycle = Transition::new(0.0, GRADIENT_CYCLE_SECS)
                    .with_ease(Ease::Linear)
                    .with_repeat(Repeat::Forever);
                let position = cycle.progress(elapsed).map_or(0.0, |p| {
                    Target::Keyframes(GRADIENT_POSITION.to_vec()).sample(0.0, p, Ease::Linear)
                });
                BackgroundFrame::Gradient {
                    position,
                    stops: [
                        token(self.primary.as_str(), 500),
                        token(self.primary.as_str(), 600),
                        token(self.secondary.as_str(), 600),
                    ],
                }
            }
            Field::Particles(field) => BackgroundFrame::Particles(field.sample(elapsed)),
            Field::Waves(field) => BackgroundFrame::Waves(
                field
                    .waves()
                    .iter()
                    .enumerate()
                    .map(|(i, wave)| {
                        let (name, shade) = match i {
                            0 => (self.primary.as_str(), 500),
                            _ => (self.secondary.as_str(), 500u16.saturating_sub(100 * i as u16)),
                        };
                        WaveFrame {
                            id: wave.id,
                            path: wave.path(self.width, elapsed),
                            fill: token(name, shade),
                            fill_opacity: (0.6 - 0.2 * i as f64).max(0.0),
                        }
                    })
                    .collect(),
            ),
        }
    }
}

fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 { width } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/background.rs"]
mod tests;
