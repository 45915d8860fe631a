//! Subscription channel for "the server rejected our credentials".
//!
//! DESIGN
//! ======
//! `ApiClient` owns one bus and publishes to it whenever a response comes back
//! 401. Reactions (clearing session state, redirecting to login) subscribe
//! explicitly and are removed when their `Subscription` is dropped.

#[cfg(test)]
#[path = "unauthorized_test.rs"]
mod unauthorized_test;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Payload delivered to unauthorized listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnauthorizedEvent {
    pub status: u16,
}

type Listener = Arc<dyn Fn(&UnauthorizedEvent) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Shared publisher of [`UnauthorizedEvent`]s. Clones share listeners.
#[derive(Clone, Default)]
pub struct UnauthorizedBus {
    inner: Arc<Mutex<Listeners>>,
}

impl fmt::Debug for UnauthorizedBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnauthorizedBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl UnauthorizedBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&UnauthorizedEvent) + Send + Sync + 'static,
    {
        let mut listeners = self.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        Subscription { id, bus: Arc::downgrade(&self.inner) }
    }

    /// Deliver `event` to every listener in subscription order and return how
    /// many were called.
    pub fn notify(&self, event: UnauthorizedEvent) -> usize {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let snapshot: Vec<Listener> = self.lock().entries.iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in &snapshot {
            listener(&event);
        }
        snapshot.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().entries.len()
    }

    fn lock(&self) -> MutexGuard<'_, Listeners> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle that keeps a listener registered.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    bus: Weak<Mutex<Listeners>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.bus.upgrade() else {
            return;
        };
        let mut listeners = inner.lock().unwrap_or_else(PoisonError::into_inner);
        listeners.entries.retain(|(id, _)| *id != self.id);
    }
}
