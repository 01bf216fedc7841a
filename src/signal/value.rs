use crate::foundation::core::{Domain, Point, Rect, Vec2};

/// Continuously updated scalar confined to a [`Domain`].
///
/// Out-of-domain writes are clamped; NaN writes are dropped and the previous value
/// is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Signal {
    domain: Domain,
    value: f64,
}

impl Signal {
    pub fn new(domain: Domain, initial: f64) -> Self {
        let value = domain.clamp(initial).unwrap_or(domain.min);
        Self { domain, value }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn get(&self) -> f64 {
        self.value
    }

    /// Store `v` (clamped). Returns whether the stored value changed.
    pub fn set(&mut self, v: f64) -> bool {
        match self.domain.clamp(v) {
            Some(v) if v != self.value => {
                self.value = v;
                true
            }
            _ => false,
        }
    }
}

/// Two independent bounded axes, e.g. a pointer offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Signal2 {
    x: Signal,
    y: Signal,
}

impl Signal2 {
    pub fn new(domain: Domain) -> Self {
        let rest = domain.clamp(0.0).unwrap_or(domain.min);
        Self {
            x: Signal::new(domain, rest),
            y: Signal::new(domain, rest),
        }
    }

    pub fn get(&self) -> Vec2 {
        Vec2::new(self.x.get(), self.y.get())
    }

    pub fn set(&mut self, v: Vec2) -> bool {
        let dx = self.x.set(v.x);
        let dy = self.y.set(v.y);
        dx || dy
    }
}

/// Pointer position relative to the center of `bounds`, in units of the element's
/// size. `(0, 0)` is the exact center; edges are at `±0.5`. Values are not clamped
/// here; feed them through a [`Signal2`] over [`Domain::CENTERED`].
///
/// `None` for empty or non-finite geometry.
pub fn pointer_offset(client: Point, bounds: Rect) -> Option<Vec2> {
    let bounds = bounds.abs();
    let (w, h) = (bounds.width(), bounds.height());
    if !(w > 0.0 && h > 0.0) || !client.x.is_finite() || !client.y.is_finite() {
        return None;
    }
    let center = bounds.center();
    let offset = Vec2::new((client.x - center.x) / w, (client.y - center.y) / h);
    offset.is_finite().then_some(offset)
}

/// Traversal of `element` through `viewport` along the vertical axis.
///
/// `0` when the element's top meets the viewport's bottom edge, `1` when the
/// element's bottom passes the viewport's top edge; clamped in between.
pub fn scroll_progress(element: Rect, viewport: Rect) -> f64 {
    let element = element.abs();
    let viewport = viewport.abs();
    let travel = viewport.height() + element.height();
    if !(travel > 0.0) {
        return 0.0;
    }
    let p = (viewport.y1 - element.y0) / travel;
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Fraction of `element`'s area inside `viewport`, in `[0, 1]`.
pub fn visible_fraction(element: Rect, viewport: Rect) -> f64 {
    let element = element.abs();
    let viewport = viewport.abs();
    let area = element.area();
    if !(area > 0.0) {
        return 0.0;
    }
    let w = (element.x1.min(viewport.x1) - element.x0.max(viewport.x0)).max(0.0);
    let h = (element.y1.min(viewport.y1) - element.y0.max(viewport.y0)).max(0.0);
    let f = (w * h) / area;
    if f.is_nan() { 0.0 } else { f.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/value.rs"]
mod tests;
