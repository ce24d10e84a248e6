#![forbid(unsafe_code)]

//! Snapshot-on-iterate listener registration.
//!
//! Listener callbacks frequently register or remove listeners while a
//! notification is being dispatched. [`ListenerSet`] sidesteps iterator
//! invalidation by cloning the registration list before dispatch: a
//! notification round always sees the membership as of its start, and
//! mutations take effect from the next round.
//!
//! The set is single-threaded by design (`Rc` handles); the engine's
//! concurrency model is one cooperative UI thread.

use std::rc::Rc;

/// An ordered set of listener handles with snapshot iteration.
pub struct ListenerSet<T: ?Sized> {
    items: Vec<Rc<T>>,
}

impl<T: ?Sized> ListenerSet<T> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Register a listener. Registration order is dispatch order.
    pub fn add(&mut self, listener: Rc<T>) {
        self.items.push(listener);
    }

    /// Remove a listener by handle identity.
    ///
    /// Returns `false` when the handle was not registered.
    pub fn remove(&mut self, listener: &Rc<T>) -> bool {
        match self.items.iter().position(|l| Rc::ptr_eq(l, listener)) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Clone the current membership for iteration.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Rc<T>> {
        self.items.clone()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: ?Sized> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for ListenerSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.items.len())
            .finish()
    }
}
