//! Host events and the subjects a host publishes them on.
//!
//! Every event carries its timestamp `at` in seconds on the host's monotonic clock.

use crate::{
    foundation::core::{Point, Rect, Size},
    signal::subject::Subject,
    signal::value::visible_fraction,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved over the element. `bounds` is the element's current client
    /// rect; `None` when the host could not measure it.
    Move {
        at: f64,
        client: Point,
        bounds: Option<Rect>,
    },
    Leave {
        at: f64,
    },
}

impl PointerEvent {
    pub fn at(&self) -> f64 {
        match self {
            Self::Move { at, .. } | Self::Leave { at } => *at,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub at: f64,
    /// Element rect in viewport coordinates, `None` before layout.
    pub element: Option<Rect>,
    pub viewport: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEvent {
    pub at: f64,
    /// Visible fraction of the element, `None` when unmeasured.
    pub fraction: Option<f64>,
}

impl IntersectionEvent {
    pub fn from_rects(at: f64, element: Rect, viewport: Rect) -> Self {
        Self {
            at,
            fraction: Some(visible_fraction(element, viewport)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEvent {
    pub at: f64,
    pub viewport: Size,
}

/// What caused a session to update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Trigger {
    PointerMove,
    PointerLeave,
    ScrollProgress,
    IntersectionChange,
    Mount,
    ExplicitToggle,
}

/// Event subjects for one host element.
///
/// Handles are cheap to clone; sessions mounted on the same element share them.
#[derive(Clone, Debug, Default)]
pub struct HostSignals {
    pub pointer: Subject<PointerEvent>,
    pub scroll: Subject<ScrollEvent>,
    pub intersection: Subject<IntersectionEvent>,
    pub resize: Subject<ResizeEvent>,
}

impl HostSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same element, but resize events come from `resize`, e.g. a window-level
    /// subject shared across elements.
    pub fn with_resize(mut self, resize: Subject<ResizeEvent>) -> Self {
        self.resize = resize;
        self
    }

    /// Listeners currently attached across all four subjects.
    pub fn listener_count(&self) -> usize {
        self.pointer.listener_count()
            + self.scroll.listener_count()
            + self.intersection.listener_count()
            + self.resize.listener_count()
    }
}
