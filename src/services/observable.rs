//! Observable value holders with replay-latest subscription semantics.
//!
//! A typed value container split into an owning side ([`ObservableValue`],
//! the only side that can publish) and a read side ([`Observer`]) handed to
//! consumers. New subscribers receive the current value immediately on
//! subscription, then every subsequently published value. Listener lists
//! are explicit; there is no framework-provided reactivity here.
//!
//! Listeners are invoked after the internal lock is released, so a
//! listener may read or publish through the same holder, including
//! re-entering whatever state machine notified it. Notification order is
//! only well-defined for a single publisher; the holders in this crate
//! are single-writer.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle returned by [`Observer::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    listeners: HashMap<u64, Callback<T>>,
}

struct Shared<T> {
    inner: Mutex<Inner<T>>,
    next_handle: AtomicU64,
}

impl<T> Shared<T> {
    // A panicking listener must not wedge the holder.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owning side of an observable value.
///
/// Cloning yields another handle to the same underlying value; the holder
/// clones freely into spawned tasks.
pub struct ObservableValue<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for ObservableValue<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Send> ObservableValue<T> {
    /// Create a holder seeded with `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    value: initial,
                    listeners: HashMap::new(),
                }),
                next_handle: AtomicU64::new(0),
            }),
        }
    }

    /// Replace the current value and notify all subscribers.
    ///
    /// The value is stored under the lock; listeners then run outside it
    /// with a snapshot of the stored value, so a listener may call back
    /// into this observable.
    pub fn publish(&self, value: T)
    where
        T: Clone,
    {
        let (snapshot, listeners) = {
            let mut inner = self.shared.lock();
            inner.value = value;
            let listeners: Vec<Callback<T>> = inner.listeners.values().cloned().collect();
            (inner.value.clone(), listeners)
        };
        for listener in &listeners {
            listener(&snapshot);
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.shared.lock().value.clone()
    }

    /// Read-only view for consumers.
    pub fn observer(&self) -> Observer<T> {
        Observer {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Read side of an observable value: current-value access and
/// subscription, but no publishing.
pub struct Observer<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Send> Observer<T> {
    /// Snapshot of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.shared.lock().value.clone()
    }

    /// Register `callback` and invoke it immediately with the current
    /// value (replay-latest), then on every subsequent publish.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionHandle
    where
        T: Clone,
    {
        let callback: Callback<T> = Arc::new(callback);
        let id = self.shared.next_handle.fetch_add(1, Ordering::SeqCst);
        let snapshot = {
            let mut inner = self.shared.lock();
            inner.listeners.insert(id, Arc::clone(&callback));
            inner.value.clone()
        };
        callback(&snapshot);
        SubscriptionHandle(id)
    }

    /// Remove a subscription. Returns `false` if the handle was already
    /// removed.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        self.shared.lock().listeners.remove(&handle.0).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_subscriber(observer: &Observer<u32>) -> (Arc<Mutex<Vec<u32>>>, SubscriptionHandle) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handle = observer.subscribe(move |v| sink.lock().unwrap().push(*v));
        (seen, handle)
    }

    #[test]
    fn replays_latest_on_subscribe() {
        let value = ObservableValue::new(7u32);
        let (seen, _handle) = recording_subscriber(&value.observer());
        assert_eq!(*seen.lock().unwrap(), vec![7]);
    }

    #[test]
    fn delivers_publishes_to_all_subscribers() {
        let value = ObservableValue::new(0u32);
        let observer = value.observer();
        let (first, _h1) = recording_subscriber(&observer);
        let (second, _h2) = recording_subscriber(&observer);

        value.publish(1);
        value.publish(2);

        assert_eq!(*first.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(*second.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribed_callbacks_stop_firing() {
        let value = ObservableValue::new(0u32);
        let observer = value.observer();
        let (seen, handle) = recording_subscriber(&observer);

        value.publish(1);
        assert!(observer.unsubscribe(handle));
        value.publish(2);

        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
        // Second removal is a no-op.
        assert!(!observer.unsubscribe(handle));
    }

    #[test]
    fn get_returns_latest_value() {
        let value = ObservableValue::new(1u32);
        let observer = value.observer();
        value.publish(5);
        assert_eq!(value.get(), 5);
        assert_eq!(observer.get(), 5);
    }

    #[test]
    fn listener_may_read_back_into_the_observable() {
        let value = ObservableValue::new(0u32);
        let reader = value.observer();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        // Reading during notification must not block on the holder's lock.
        value.observer().subscribe(move |_| sink.lock().unwrap().push(reader.get()));

        value.publish(3);

        assert_eq!(*seen.lock().unwrap(), vec![0, 3]);
    }
}
