//! folio-motion is the motion engine behind a personal portfolio site.
//!
//! It turns continuous host signals (pointer position, scroll position, viewport
//! visibility) into animated style values, and generates the decorative particle
//! and wave backgrounds.
//!
//! # Pipeline overview
//!
//! 1. **Signals**: the host publishes pointer, scroll, intersection and resize
//!    events on a [`HostSignals`] bundle of [`Subject`]s.
//! 2. **Map**: [`TransformMapping`]/[`ChannelMap`] turn a bounded signal into
//!    property values; [`Spring`] smooths them over time.
//! 3. **Sequence**: a [`VisibilityController`] fires a [`VariantMachine`] between
//!    `hidden` and `visible`, with [`Stagger`] delaying children in order.
//! 4. **Session**: an [`AnimationSession`] per mounted element owns the
//!    subscriptions and yields a [`MotionFrame`] per host frame.
//!
//! The engine is single-threaded and never fails at runtime: missing geometry is
//! ignored, unknown names fall back to defaults, and unusable numbers are clamped.
//! Only construction and configuration return [`MotionResult`].
#![forbid(unsafe_code)]

mod animation;
mod config;
mod engine;
mod foundation;
mod signal;

pub use animation::ease::Ease;
pub use animation::proc::{
    MAX_PARTICLES, PARTICLE_DELAY, PARTICLE_DRIFT, PARTICLE_DURATION, PARTICLE_PEAK_SCALE,
    PARTICLE_POSITION, PARTICLE_SIZE, Particle, ParticleField, ParticleFrame, RandomSource, Rng64,
    WAVE_AMPLITUDE, WAVE_BAND_HEIGHT, WAVE_COUNT, WAVE_FREQUENCY, WAVE_PHASE, WAVE_SPEED, Wave,
    WaveField,
};
pub use animation::spring::{REST_DELTA, REST_SPEED, Spring, SpringConfig};
pub use animation::stagger::{Stagger, StaggerPlan};
pub use animation::style::{Property, Style};
pub use animation::transform::{ChannelMap, Stop, TransformMapping};
pub use animation::variant::{
    Repeat, StartPolicy, Target, Transition, Variant, VariantMachine, VariantName, VariantSet,
};
pub use config::model::{
    BackgroundConfig, BackgroundVariant, DEFAULT_SEED, MotionConfig, ParallaxConfig,
    ParallaxDirection, RevealConfig, RevealVariant, TextConfig, TextVariant, TiltConfig,
};
pub use engine::background::{AnimatedBackground, BackgroundFrame, Blob, BlobAnchor, WaveFrame};
pub use engine::controller::{Crossing, VisibilityController};
pub use engine::parallax::ParallaxSection;
pub use engine::reveal::{ScrollReveal, reveal_variants};
pub use engine::session::{AnimationSession, Motion, MotionFrame};
pub use engine::text::{AnimatedText, SegmentFrame, TextFrame, TextSegment, segment_text};
pub use engine::tilt::{TiltCard, TiltFrame};
pub use foundation::core::{BezPath, Domain, PaletteToken, Point, Rect, Size, Vec2};
pub use foundation::error::{MotionError, MotionResult};
pub use signal::event::{
    HostSignals, IntersectionEvent, PointerEvent, ResizeEvent, ScrollEvent, Trigger,
};
pub use signal::subject::{Subject, Subscription, SubscriptionId, WeakSubject};
pub use signal::value::{Signal, Signal2, pointer_offset, scroll_progress, visible_fraction};
