//! Component options as supplied by the host, with the site's defaults.
//!
//! Every field is optional on the wire. Name-valued options (variants, directions)
//! are matched loosely and fall back to their default with a warning instead of
//! failing deserialization.

use std::path::Path;

use crate::{
    animation::spring::SpringConfig,
    foundation::error::{MotionError, MotionResult},
};

/// Lower-cased key with `-`, `_` and whitespace removed, so `slide-up`, `slide_up`
/// and `slideUp` all resolve the same way.
fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn lenient<T: Default>(kind: &'static str, name: &str, parsed: Option<T>) -> T {
    parsed.unwrap_or_else(|| {
        tracing::warn!(option = kind, value = name, "unknown name, using default");
        T::default()
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackgroundVariant {
    #[default]
    Default,
    Particles,
    Gradient,
    Waves,
}

impl BackgroundVariant {
    pub fn parse(name: &str) -> Option<Self> {
        match name_key(name).as_str() {
            "default" => Some(Self::Default),
            "particles" => Some(Self::Particles),
            "gradient" => Some(Self::Gradient),
            "waves" => Some(Self::Waves),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Particles => "particles",
            Self::Gradient => "gradient",
            Self::Waves => "waves",
        }
    }
}

impl From<String> for BackgroundVariant {
    fn from(s: String) -> Self {
        lenient("background.variant", &s, Self::parse(&s))
    }
}

impl From<BackgroundVariant> for String {
    fn from(v: BackgroundVariant) -> Self {
        v.as_str().to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TextVariant {
    #[default]
    FadeIn,
    Typewriter,
    Highlight,
    Wave,
}

impl TextVariant {
    pub fn parse(name: &str) -> Option<Self> {
        match name_key(name).as_str() {
            "fadein" => Some(Self::FadeIn),
            "typewriter" => Some(Self::Typewriter),
            "highlight" => Some(Self::Highlight),
            "wave" => Some(Self::Wave),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FadeIn => "fadeIn",
            Self::Typewriter => "typewriter",
            Self::Highlight => "highlight",
            Self::Wave => "wave",
        }
    }
}

impl From<String> for TextVariant {
    fn from(s: String) -> Self {
        lenient("text.variant", &s, Self::parse(&s))
    }
}

impl From<TextVariant> for String {
    fn from(v: TextVariant) -> Self {
        v.as_str().to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RevealVariant {
    #[default]
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    Scale,
    Rotate,
}

impl RevealVariant {
    pub fn parse(name: &str) -> Option<Self> {
        match name_key(name).as_str() {
            "fadein" => Some(Self::FadeIn),
            "slideup" => Some(Self::SlideUp),
            "slideleft" => Some(Self::SlideLeft),
            "slideright" => Some(Self::SlideRight),
            "scale" => Some(Self::Scale),
            "rotate" => Some(Self::Rotate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FadeIn => "fadeIn",
            Self::SlideUp => "slideUp",
            Self::SlideLeft => "slideLeft",
            Self::SlideRight => "slideRight",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
        }
    }
}

impl From<String> for RevealVariant {
    fn from(s: String) -> Self {
        lenient("reveal.variant", &s, Self::parse(&s))
    }
}

impl From<RevealVariant> for String {
    fn from(v: RevealVariant) -> Self {
        v.as_str().to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParallaxDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl ParallaxDirection {
    pub fn parse(name: &str) -> Option<Self> {
        match name_key(name).as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Whether translation runs along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl From<String> for ParallaxDirection {
    fn from(s: String) -> Self {
        lenient("parallax.direction", &s, Self::parse(&s))
    }
}

impl From<ParallaxDirection> for String {
    fn from(v: ParallaxDirection) -> Self {
        v.as_str().to_string()
    }
}

/// Pointer-tilt card options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Maximum rotation in degrees at the card's edges.
    pub depth: f64,
    pub hover_scale: f64,
    pub border_gradient: bool,
    pub border_color: String,
    pub shadow: bool,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            depth: 20.0,
            hover_scale: 1.05,
            border_gradient: false,
            border_color: "primary".to_string(),
            shadow: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Translation distance is `100 * speed` pixels either side of rest.
    pub speed: f64,
    pub direction: ParallaxDirection,
    pub opacity: bool,
    pub scale: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed: 0.2,
            direction: ParallaxDirection::Up,
            opacity: true,
            scale: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub variant: RevealVariant,
    pub delay: f64,
    pub duration: f64,
    /// Visible fraction at which the element counts as revealed.
    pub threshold: f64,
    pub once: bool,
    /// Slide distance in pixels.
    pub distance: f64,
    pub stagger_children: bool,
    pub stagger_delay: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            variant: RevealVariant::FadeIn,
            delay: 0.0,
            duration: 0.5,
            threshold: 0.2,
            once: true,
            distance: 50.0,
            stagger_children: false,
            stagger_delay: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub variant: TextVariant,
    pub delay: f64,
    pub duration: f64,
    /// Delay between consecutive words or characters.
    pub stagger_children: f64,
    pub highlight_color: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            variant: TextVariant::FadeIn,
            delay: 0.0,
            duration: 0.5,
            stagger_children: 0.03,
            highlight_color: "primary".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub variant: BackgroundVariant,
    pub primary_color: String,
    pub secondary_color: String,
    /// Particle count for the `particles` variant.
    pub density: usize,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            variant: BackgroundVariant::Default,
            primary_color: "primary".to_string(),
            secondary_color: "secondary".to_string(),
            density: 20,
        }
    }
}

pub const DEFAULT_SEED: u64 = 0x5EED;

/// Options for every component, as loaded from one JSON document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Seed for procedural fields.
    pub seed: u64,
    /// Spring used by the tilt engine.
    pub spring: SpringConfig,
    pub tilt: TiltConfig,
    pub parallax: ParallaxConfig,
    pub reveal: RevealConfig,
    pub text: TextConfig,
    pub background: BackgroundConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            spring: SpringConfig::default(),
            tilt: TiltConfig::default(),
            parallax: ParallaxConfig::default(),
            reveal: RevealConfig::default(),
            text: TextConfig::default(),
            background: BackgroundConfig::default(),
        }
    }
}

impl MotionConfig {
    /// Parse a JSON document. Missing fields take their defaults and unusable
    /// numbers are sanitized; only malformed JSON is an error.
    pub fn from_json_str(json: &str) -> MotionResult<Self> {
        let mut config: Self =
            serde_json::from_str(json).map_err(|e| MotionError::serde(e.to_string()))?;
        config.sanitize();
        Ok(config)
    }

    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            MotionError::config(format!("failed to read '{}': {e}", path.display()))
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(seed = config.seed, "loaded motion config");
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> MotionResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MotionError::serde(e.to_string()))
    }

    /// Replace values no component can work with, warning for each one.
    ///
    /// Timing values (delays, durations, stagger intervals) and other magnitudes
    /// clamp negatives to `0`; values that must stay positive, non-finite values,
    /// and empty palette names take their defaults. The threshold is clamped
    /// into `[0, 1]`.
    pub fn sanitize(&mut self) {
        let spring = SpringConfig::default();
        let tilt = TiltConfig::default();
        positive("spring.stiffness", &mut self.spring.stiffness, spring.stiffness);
        positive("spring.damping", &mut self.spring.damping, spring.damping);
        positive("tilt.hover_scale", &mut self.tilt.hover_scale, tilt.hover_scale);

        let parallax = ParallaxConfig::default();
        let reveal = RevealConfig::default();
        let text = TextConfig::default();
        for (name, value, fallback) in [
            ("tilt.depth", &mut self.tilt.depth, tilt.depth),
            ("parallax.speed", &mut self.parallax.speed, parallax.speed),
            ("reveal.delay", &mut self.reveal.delay, reveal.delay),
            ("reveal.duration", &mut self.reveal.duration, reveal.duration),
            ("reveal.distance", &mut self.reveal.distance, reveal.distance),
            ("reveal.stagger_delay", &mut self.reveal.stagger_delay, reveal.stagger_delay),
            ("text.delay", &mut self.text.delay, text.delay),
            ("text.duration", &mut self.text.duration, text.duration),
            ("text.stagger_children", &mut self.text.stagger_children, text.stagger_children),
        ] {
            non_negative(name, value, fallback);
        }

        let threshold = self.reveal.threshold;
        if threshold.is_nan() {
            tracing::warn!(option = "reveal.threshold", "not a number, using default");
            self.reveal.threshold = reveal.threshold;
        } else if !(0.0..=1.0).contains(&threshold) {
            self.reveal.threshold = threshold.clamp(0.0, 1.0);
            tracing::warn!(
                option = "reveal.threshold",
                value = threshold,
                clamped = self.reveal.threshold,
                "out of range, clamped"
            );
        }

        let background = BackgroundConfig::default();
        for (name, value, fallback) in [
            ("tilt.border_color", &mut self.tilt.border_color, tilt.border_color),
            ("text.highlight_color", &mut self.text.highlight_color, text.highlight_color),
            (
                "background.primary_color",
                &mut self.background.primary_color,
                background.primary_color,
            ),
            (
                "background.secondary_color",
                &mut self.background.secondary_color,
                background.secondary_color,
            ),
        ] {
            if value.trim().is_empty() {
                tracing::warn!(option = name, "empty palette name, using default");
                *value = fallback;
            }
        }
    }
}

fn positive(name: &'static str, value: &mut f64, fallback: f64) {
    if !value.is_finite() || *value <= 0.0 {
        tracing::warn!(option = name, value = *value, "must be > 0, using default");
        *value = fallback;
    }
}

fn non_negative(name: &'static str, value: &mut f64, fallback: f64) {
    if !value.is_finite() {
        tracing::warn!(option = name, value = *value, "not finite, using default");
        *value = fallback;
    } else if *value < 0.0 {
        tracing::warn!(option = name, value = *value, "negative, clamped to 0");
        *value = 0.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
