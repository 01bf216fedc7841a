//! Single-threaded observable subject with explicit subscription handles.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

struct Listener<T> {
    id: SubscriptionId,
    // `None` while the callback is executing.
    callback: Option<Callback<T>>,
}

struct Inner<T> {
    next_id: u64,
    listeners: Vec<Listener<T>>,
}

/// Event stream that listeners subscribe to.
///
/// Cloning yields another handle to the same stream. Callbacks run synchronously in
/// subscription order. A callback may unsubscribe itself or others while an event
/// is being delivered; listeners added during delivery see the next event.
pub struct Subject<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<T: 'static> Subject<T> {
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription<T> {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push(Listener {
            id,
            callback: Some(Box::new(callback)),
        });
        Subscription {
            id,
            subject: Rc::downgrade(&self.inner),
        }
    }
}

impl<T> Subject<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        remove(&self.inner, id)
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.inner.borrow().listeners.iter().any(|l| l.id == id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn emit(&self, value: &T) {
        let ids: Vec<SubscriptionId> = self.inner.borrow().listeners.iter().map(|l| l.id).collect();

        for id in ids {
            let callback = {
                let mut inner = self.inner.borrow_mut();
                inner
                    .listeners
                    .iter_mut()
                    .find(|l| l.id == id)
                    .and_then(|l| l.callback.take())
            };
            let Some(mut callback) = callback else {
                continue;
            };

            callback(value);

            let mut inner = self.inner.borrow_mut();
            if let Some(listener) = inner.listeners.iter_mut().find(|l| l.id == id) {
                listener.callback = Some(callback);
            }
        }
    }

    /// Weak handle that does not keep the stream alive.
    pub fn downgrade(&self) -> WeakSubject<T> {
        WeakSubject {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

fn remove<T>(inner: &RefCell<Inner<T>>, id: SubscriptionId) -> bool {
    // Dropped after the borrow ends: a callback may own subscriptions of its own.
    let removed: Vec<Listener<T>> = {
        let mut inner = inner.borrow_mut();
        let (removed, kept) = std::mem::take(&mut inner.listeners)
            .into_iter()
            .partition(|l| l.id == id);
        inner.listeners = kept;
        removed
    };
    !removed.is_empty()
}

/// Non-owning subject handle, for callbacks that need to detach themselves.
pub struct WeakSubject<T> {
    inner: Weak<RefCell<Inner<T>>>,
}

impl<T> Clone for WeakSubject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakSubject<T> {
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.upgrade().is_some_and(|inner| remove(&inner, id))
    }
}

/// Owned registration. Dropping it unsubscribes.
pub struct Subscription<T> {
    id: SubscriptionId,
    subject: Weak<RefCell<Inner<T>>>,
}

impl<T> Subscription<T> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the listener is still registered with a live subject.
    pub fn is_active(&self) -> bool {
        self.subject
            .upgrade()
            .is_some_and(|inner| inner.borrow().listeners.iter().any(|l| l.id == self.id))
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.subject.upgrade() {
            remove(&inner, self.id);
        }
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/subject.rs"]
mod tests;
