//! Observable values.
//!
//! An [`Observable`] stores a value and a list of subscribers. Subscribers are
//! only told about writes that change the value, so a subscriber that writes
//! back what it just received cannot start an echo loop.

use std::fmt;

/// Handle returned by [`Observable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value with change subscriptions.
pub struct Observable<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Observable<T> {
    /// Create an observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a change subscriber.
    pub fn subscribe(&mut self, f: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Call every subscriber with the current value.
    pub fn notify(&mut self) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.value);
        }
    }
}

impl<T: PartialEq> Observable<T> {
    /// Store `value` without notifying. Returns whether it changed.
    pub fn update(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Store `value` and notify subscribers if it changed.
    pub fn set(&mut self, value: T) -> bool {
        let changed = self.update(value);
        if changed {
            self.notify();
        }
        changed
    }
}
