//! Mount-triggered text entrances.

use crate::{
    animation::ease::Ease,
    animation::stagger::Stagger,
    animation::style::{Property, Style},
    animation::variant::{Repeat, Transition, Variant, VariantMachine, VariantName, VariantSet},
    config::model::{TextConfig, TextVariant},
    foundation::core::PaletteToken,
    foundation::error::MotionResult,
    foundation::math::non_negative,
};

const RISE: f64 = 20.0;
const WAVE_LIFT: f64 = -10.0;
const CURSOR_BLINK_SECS: f64 = 0.8;
const NBSP: &str = "\u{00A0}";

/// Piece of text animated as one unit.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TextSegment {
    pub index: usize,
    /// Text to render; spaces in per-character mode become non-breaking.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SegmentFrame {
    pub index: usize,
    pub text: String,
    pub style: Style,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextFrame {
    pub segments: Vec<SegmentFrame>,
    /// Blinking caret, typewriter only.
    pub cursor: Option<Style>,
}

/// Splits text into segments for `variant`: words on single spaces, characters
/// as Unicode scalar values, or the whole string.
pub fn segment_text(text: &str, variant: TextVariant) -> Vec<TextSegment> {
    let pieces: Vec<String> = match variant {
        TextVariant::FadeIn => text.split(' ').map(str::to_string).collect(),
        TextVariant::Wave => text
            .chars()
            .map(|c| {
                if c == ' ' {
                    NBSP.to_string()
                } else {
                    c.to_string()
                }
            })
            .collect(),
        TextVariant::Typewriter | TextVariant::Highlight => vec![text.to_string()],
    };
    pieces
        .into_iter()
        .enumerate()
        .map(|(index, text)| TextSegment { index, text })
        .collect()
}

#[derive(Clone, Debug)]
pub struct AnimatedText {
    variant: TextVariant,
    segments: Vec<TextSegment>,
    machines: Vec<VariantMachine>,
    cursor: Option<VariantMachine>,
    highlight_color: String,
}

impl AnimatedText {
    pub fn new(text: &str, config: &TextConfig) -> MotionResult<Self> {
        let delay = non_negative(config.delay);
        let duration = non_negative(config.duration);
        let stagger = Stagger::new(delay, config.stagger_children);
        let segments = segment_text(text, config.variant);

        let per_segment = |hidden: Variant, visible: Variant, timing: Transition| {
            let child = stagger.variants(&visible, timing);
            segments
                .iter()
                .map(|s| {
                    let set = VariantSet::new(hidden.clone(), child(s.index))?
                        .with_default_transition(timing);
                    Ok(VariantMachine::new(set))
                })
                .collect::<MotionResult<Vec<_>>>()
        };

        let (machines, cursor) = match config.variant {
            TextVariant::FadeIn => (
                per_segment(
                    Variant::new()
                        .with(Property::Opacity, 0.0)
                        .with(Property::Y, RISE),
                    Variant::new()
                        .with(Property::Opacity, 1.0)
                        .with(Property::Y, 0.0),
                    Transition::new(0.0, duration),
                )?,
                None,
            ),
            TextVariant::Wave => (
                per_segment(
                    Variant::new().with(Property::Y, 0.0),
                    Variant::new().with_keyframes(Property::Y, vec![0.0, WAVE_LIFT, 0.0]),
                    Transition::new(0.0, duration).with_ease(Ease::InOutCubic),
                )?,
                None,
            ),
            TextVariant::Typewriter => {
                let set = VariantSet::new(
                    Variant::new()
                        .with(Property::Width, 0.0)
                        .with(Property::Opacity, 0.0),
                    Variant::new()
                        .with(Property::Width, 100.0)
                        .with(Property::Opacity, 1.0),
                )?
                .with_default_transition(Transition::new(delay, duration * 2.0));
                let blink = VariantSet::new(
                    Variant::new().with(Property::Opacity, 1.0),
                    Variant::new()
                        .with_keyframes(Property::Opacity, vec![1.0, 0.0, 1.0])
                        .with_transition(
                            Transition::new(0.0, CURSOR_BLINK_SECS).with_repeat(Repeat::Forever),
                        ),
                )?;
                (vec![VariantMachine::new(set)], Some(VariantMachine::new(blink)))
            }
            TextVariant::Highlight => {
                let set = VariantSet::new(
                    Variant::new().with(Property::BackgroundSize, 0.0),
                    Variant::new().with(Property::BackgroundSize, 100.0),
                )?
                .with_default_transition(Transition::new(delay, duration));
                (vec![VariantMachine::new(set)], None)
            }
        };

        Ok(Self {
            variant: config.variant,
            segments,
            machines,
            cursor,
            highlight_color: config.highlight_color.clone(),
        })
    }

    pub fn variant(&self) -> TextVariant {
        self.variant
    }

    pub fn segments(&self) -> &[TextSegment] {
        &self.segments
    }

    /// Gradient stops behind highlighted text, light to lighter.
    pub fn highlight_gradient(&self) -> Option<(PaletteToken, PaletteToken)> {
        (self.variant == TextVariant::Highlight).then(|| {
            (
                PaletteToken::new(&self.highlight_color, 200),
                PaletteToken::new(&self.highlight_color, 100),
            )
        })
    }

    /// Start the entrance. Text animates on mount rather than on visibility.
    pub fn start(&mut self, now: f64) {
        for machine in self.machines.iter_mut().chain(self.cursor.iter_mut()) {
            machine.transition_to(&VariantName::Visible, now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.machines
            .first()
            .is_some_and(|m| *m.current() == VariantName::Visible)
    }

    /// Whether any segment is still moving. The cursor blinks forever and is not
    /// counted.
    pub fn is_animating(&self, now: f64) -> bool {
        self.machines.iter().any(|m| m.is_animating(now))
    }

    pub fn frame(&self, now: f64) -> TextFrame {
        TextFrame {
            segments: self
                .segments
                .iter()
                .zip(&self.machines)
                .map(|(segment, machine)| SegmentFrame {
                    index: segment.index,
                    text: segment.text.clone(),
                    style: machine.sample(now),
                })
                .collect(),
            cursor: self.cursor.as_ref().map(|c| c.sample(now)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/text.rs"]
mod tests;
