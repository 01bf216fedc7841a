//! Per-element animation sessions: the glue between host event subjects and the
//! motion engines.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    animation::style::Style,
    engine::background::{AnimatedBackground, BackgroundFrame},
    engine::parallax::ParallaxSection,
    engine::reveal::ScrollReveal,
    engine::text::{AnimatedText, TextFrame},
    engine::tilt::{TiltCard, TiltFrame},
    signal::event::{
        HostSignals, IntersectionEvent, PointerEvent, ResizeEvent, ScrollEvent, Trigger,
    },
    signal::subject::{Subscription, SubscriptionId},
};

/// The engine a session drives.
#[derive(Clone, Debug)]
pub enum Motion {
    Tilt(TiltCard),
    Parallax(ParallaxSection),
    Reveal(ScrollReveal),
    Text(AnimatedText),
    Background(AnimatedBackground),
}

impl Motion {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tilt(_) => "tilt",
            Self::Parallax(_) => "parallax",
            Self::Reveal(_) => "reveal",
            Self::Text(_) => "text",
            Self::Background(_) => "background",
        }
    }
}

/// Output of one session frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum MotionFrame {
    Tilt(TiltFrame),
    Parallax(Style),
    /// One style per revealed target, in child order.
    Reveal(Vec<Style>),
    Text(TextFrame),
    Background(BackgroundFrame),
}

#[derive(Debug)]
struct SessionState {
    motion: Motion,
    mounted: bool,
    last_trigger: Option<Trigger>,
}

impl SessionState {
    fn record(&mut self, trigger: Trigger) {
        self.last_trigger = Some(trigger);
    }
}

#[derive(Debug, Default)]
struct Subscriptions {
    pointer: Option<Subscription<PointerEvent>>,
    scroll: Option<Subscription<ScrollEvent>>,
    intersection: Option<Subscription<IntersectionEvent>>,
    resize: Option<Subscription<ResizeEvent>>,
}

impl Subscriptions {
    fn active(&self) -> usize {
        [
            self.pointer.as_ref().is_some_and(Subscription::is_active),
            self.scroll.as_ref().is_some_and(Subscription::is_active),
            self.intersection.as_ref().is_some_and(Subscription::is_active),
            self.resize.as_ref().is_some_and(Subscription::is_active),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// One mounted element.
///
/// Mounting subscribes to the host subjects the engine needs; unmounting (or
/// dropping the session) releases every subscription before returning, after
/// which no event reaches the engine and [`AnimationSession::frame`] yields
/// `None`.
#[derive(Debug)]
pub struct AnimationSession {
    state: Rc<RefCell<SessionState>>,
    subscriptions: Subscriptions,
}

impl AnimationSession {
    #[tracing::instrument(skip_all, fields(kind = motion.kind()))]
    pub fn mount(signals: &HostSignals, mut motion: Motion, now: f64) -> Self {
        let mut last_trigger = None;
        if let Motion::Text(text) = &mut motion {
            text.start(now);
            last_trigger = Some(Trigger::Mount);
        }

        let wants = (
            matches!(motion, Motion::Tilt(_)),
            matches!(motion, Motion::Parallax(_)),
            matches!(motion, Motion::Reveal(_)),
            matches!(motion, Motion::Background(_)),
        );
        let state = Rc::new(RefCell::new(SessionState {
            motion,
            mounted: true,
            last_trigger,
        }));

        let mut subscriptions = Subscriptions::default();
        let (pointer, scroll, intersection, resize) = wants;
        if pointer {
            subscriptions.pointer = Some(subscribe_pointer(signals, &state));
        }
        if scroll {
            subscriptions.scroll = Some(subscribe_scroll(signals, &state));
        }
        if intersection {
            subscriptions.intersection = Some(subscribe_intersection(signals, &state));
        }
        if resize {
            subscriptions.resize = Some(subscribe_resize(signals, &state));
        }

        tracing::debug!(subscriptions = subscriptions.active(), "session mounted");
        Self {
            state,
            subscriptions,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.state.borrow().mounted
    }

    /// Subscriptions still registered with a live subject.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.active()
    }

    pub fn last_trigger(&self) -> Option<Trigger> {
        self.state.borrow().last_trigger
    }

    pub fn kind(&self) -> &'static str {
        self.state.borrow().motion.kind()
    }

    /// Sample the engine at `now`. `None` once unmounted.
    pub fn frame(&self, now: f64) -> Option<MotionFrame> {
        let mut state = self.state.borrow_mut();
        if !state.mounted {
            return None;
        }
        Some(match &mut state.motion {
            Motion::Tilt(card) => MotionFrame::Tilt(card.frame(now)),
            Motion::Parallax(section) => MotionFrame::Parallax(section.style()),
            Motion::Reveal(reveal) => MotionFrame::Reveal(reveal.frame(now)),
            Motion::Text(text) => MotionFrame::Text(text.frame(now)),
            Motion::Background(bg) => MotionFrame::Background(bg.frame(now)),
        })
    }

    /// Host-requested flip between `hidden` and `visible`, for engines that have
    /// those states. Returns whether anything changed.
    pub fn toggle(&self, now: f64) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.mounted {
            return false;
        }
        let changed = match &mut state.motion {
            Motion::Reveal(reveal) => reveal.toggle(now),
            Motion::Text(text) if !text.is_started() => {
                text.start(now);
                true
            }
            _ => false,
        };
        if changed {
            state.record(Trigger::ExplicitToggle);
        }
        changed
    }

    /// Release every subscription. Idempotent.
    #[tracing::instrument(skip(self), fields(kind = self.kind()))]
    pub fn unmount(&mut self) {
        let was_mounted = std::mem::replace(&mut self.state.borrow_mut().mounted, false);
        self.subscriptions = Subscriptions::default();
        if was_mounted {
            tracing::debug!("session unmounted");
        }
    }
}

impl Drop for AnimationSession {
    fn drop(&mut self) {
        if self.state.borrow().mounted {
            self.unmount();
        }
    }
}

fn subscribe_pointer(
    signals: &HostSignals,
    state: &Rc<RefCell<SessionState>>,
) -> Subscription<PointerEvent> {
    let state = Rc::clone(state);
    signals.pointer.subscribe(move |event| {
        let mut state = state.borrow_mut();
        if !state.mounted {
            return;
        }
        let Motion::Tilt(card) = &mut state.motion else {
            return;
        };
        let trigger = match *event {
            PointerEvent::Move { at, client, bounds } => card
                .on_pointer_move(client, bounds, at)
                .then_some(Trigger::PointerMove),
            PointerEvent::Leave { at } => {
                card.on_pointer_leave(at);
                Some(Trigger::PointerLeave)
            }
        };
        if let Some(trigger) = trigger {
            state.record(trigger);
        }
    })
}

fn subscribe_scroll(
    signals: &HostSignals,
    state: &Rc<RefCell<SessionState>>,
) -> Subscription<ScrollEvent> {
    let state = Rc::clone(state);
    signals.scroll.subscribe(move |event| {
        let mut state = state.borrow_mut();
        if !state.mounted {
            return;
        }
        let Motion::Parallax(section) = &mut state.motion else {
            return;
        };
        if section.on_scroll(event.element, event.viewport) {
            state.record(Trigger::ScrollProgress);
        }
    })
}

/// The listener drops itself once the reveal no longer needs updates.
fn subscribe_intersection(
    signals: &HostSignals,
    state: &Rc<RefCell<SessionState>>,
) -> Subscription<IntersectionEvent> {
    let state = Rc::clone(state);
    let own_id: Rc<Cell<Option<SubscriptionId>>> = Rc::default();
    let slot = Rc::clone(&own_id);
    let weak = signals.intersection.downgrade();

    let subscription = signals.intersection.subscribe(move |event| {
        let done = {
            let mut state = state.borrow_mut();
            if !state.mounted {
                return;
            }
            let Motion::Reveal(reveal) = &mut state.motion else {
                return;
            };
            let Some(fraction) = event.fraction else {
                return;
            };
            let crossed = reveal.on_visibility(fraction, event.at).is_some();
            let done = !reveal.wants_updates();
            if crossed {
                state.record(Trigger::IntersectionChange);
            }
            done
        };
        if done && let Some(id) = slot.get() {
            weak.unsubscribe(id);
            tracing::debug!("reveal frozen, intersection listener released");
        }
    });
    own_id.set(Some(subscription.id()));
    subscription
}

fn subscribe_resize(
    signals: &HostSignals,
    state: &Rc<RefCell<SessionState>>,
) -> Subscription<ResizeEvent> {
    let state = Rc::clone(state);
    signals.resize.subscribe(move |event| {
        let mut state = state.borrow_mut();
        if !state.mounted {
            return;
        }
        if let Motion::Background(bg) = &mut state.motion {
            bg.on_resize(event.viewport);
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/engine/session.rs"]
mod tests;
