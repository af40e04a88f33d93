//! # Fan-out of option-value changes to listeners and callbacks.
//!
//! [`ConfigChangeDispatcher`] delivers `(key, value)` notifications to two
//! stores with different ownership contracts:
//!
//! - **Listeners** are weakly held. A listener whose last external owner is
//!   gone is removed in place by the first `notify` that observes it — lazy
//!   pruning, no background sweep, exactly one removal per dead entry.
//! - **Callbacks** are owned closures and never pruned automatically; they
//!   run on every notify until [`clear`](ConfigChangeDispatcher::clear).
//!
//! ## Rules
//! - Delivery order: listeners in registration order, then callbacks in
//!   registration order.
//! - No uniqueness check on registration: adding the same listener twice
//!   yields two deliveries per event. Callers register once.
//! - The enable gate makes `notify` a total no-op without touching either
//!   store; re-enabling resumes delivery to whatever is still live.
//! - One mutex guards both stores and is held across the whole fan-out; a
//!   listener calling back into the dispatcher deadlocks (forbidden).
//!
//! There is deliberately no global instance. Construct one dispatcher at
//! startup and pass clones to whoever publishes or observes config changes;
//! tests build isolated instances.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use slicecast::{ConfigChangeDispatcher, ConfigChangeListener, OptionValue};
//!
//! struct Echo;
//! impl ConfigChangeListener for Echo {
//!     fn on_config_change(&self, key: &str, _value: &OptionValue) {
//!         println!("changed: {key}");
//!     }
//! }
//!
//! let dispatcher = ConfigChangeDispatcher::new();
//! let echo = Arc::new(Echo);
//! dispatcher.add_listener(Arc::downgrade(&echo) as _);
//! dispatcher.notify("layer_height", &OptionValue::Float(0.2));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::options::listener::{ChangeCallback, ListenerRef};
use crate::options::value::OptionValue;

#[derive(Default)]
struct Stores {
    listeners: Vec<ListenerRef>,
    callbacks: Vec<ChangeCallback>,
}

/// Dispatcher for configuration-change events.
///
/// Cheap to clone: all clones share the same stores and enable gate.
#[derive(Clone)]
pub struct ConfigChangeDispatcher {
    inner: Arc<Inner>,
}

struct Inner {
    stores: Mutex<Stores>,
    enabled: AtomicBool,
}

impl Default for ConfigChangeDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigChangeDispatcher {
    /// Creates an empty, enabled dispatcher.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                stores: Mutex::new(Stores::default()),
                enabled: AtomicBool::new(true),
            }),
        }
    }

    /// Registers a listener through a weak reference.
    ///
    /// The dispatcher does not keep the listener alive: once the last `Arc`
    /// to it is dropped, the entry is pruned by the next `notify`.
    pub fn add_listener(&self, listener: ListenerRef) {
        self.inner.stores.lock().listeners.push(listener);
    }

    /// Registers an owned callback; always live, never auto-pruned.
    pub fn add_callback(&self, callback: impl Fn(&str, &OptionValue) + Send + Sync + 'static) {
        self.inner
            .stores
            .lock()
            .callbacks
            .push(Box::new(callback));
    }

    /// Notifies every live listener, then every callback, of one change.
    ///
    /// Returns immediately with no side effects while disabled. Dead listener
    /// entries observed during the walk are removed in place.
    pub fn notify(&self, key: &str, value: &OptionValue) {
        if !self.is_enabled() {
            return;
        }

        let mut stores = self.inner.stores.lock();

        // Single pass: deliver to live listeners, erase dead ones in place.
        let mut i = 0;
        while i < stores.listeners.len() {
            match stores.listeners[i].upgrade() {
                Some(listener) => {
                    listener.on_config_change(key, value);
                    i += 1;
                }
                None => {
                    stores.listeners.remove(i);
                }
            }
        }

        for callback in &stores.callbacks {
            callback(key, value);
        }
    }

    /// Empties both the listener and the callback store. Idempotent.
    pub fn clear(&self) {
        let mut stores = self.inner.stores.lock();
        stores.listeners.clear();
        stores.callbacks.clear();
    }

    /// Gates delivery process-wide; the stores are left untouched.
    pub fn set_enabled(&self, enabled: bool) {
        self.inner.enabled.store(enabled, Ordering::Release);
    }

    /// Whether `notify` currently delivers.
    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.load(Ordering::Acquire)
    }

    /// Number of listener entries still stored (snapshot; may include dead
    /// entries not yet observed by a `notify`).
    pub fn listener_count(&self) -> usize {
        self.inner.stores.lock().listeners.len()
    }

    /// Number of registered callbacks (snapshot).
    pub fn callback_count(&self) -> usize {
        self.inner.stores.lock().callbacks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::listener::ConfigChangeListener;

    struct Recorder {
        seen: Mutex<Vec<(String, OptionValue)>>,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl ConfigChangeListener for Recorder {
        fn on_config_change(&self, key: &str, value: &OptionValue) {
            self.seen.lock().push((key.to_string(), value.clone()));
        }
    }

    #[test]
    fn test_listener_then_callback_delivery() {
        let dispatcher = ConfigChangeDispatcher::new();
        let listener = Recorder::new();
        dispatcher.add_listener(Arc::downgrade(&listener) as ListenerRef);

        let hits = Arc::new(Mutex::new(Vec::new()));
        let hits_cb = hits.clone();
        dispatcher.add_callback(move |key, _| hits_cb.lock().push(key.to_string()));

        dispatcher.notify("wall_loops", &OptionValue::Int(3));

        assert_eq!(
            *listener.seen.lock(),
            vec![("wall_loops".to_string(), OptionValue::Int(3))]
        );
        assert_eq!(*hits.lock(), vec!["wall_loops"]);
    }

    #[test]
    fn test_dead_listener_pruned_exactly_once() {
        let dispatcher = ConfigChangeDispatcher::new();
        let listener = Recorder::new();
        dispatcher.add_listener(Arc::downgrade(&listener) as ListenerRef);
        assert_eq!(dispatcher.listener_count(), 1);

        drop(listener);

        // First notify observes the dead entry and removes it.
        dispatcher.notify("layer_height", &OptionValue::Float(0.2));
        assert_eq!(dispatcher.listener_count(), 0);

        // Further notifies neither re-invoke nor re-attempt removal.
        dispatcher.notify("layer_height", &OptionValue::Float(0.3));
        assert_eq!(dispatcher.listener_count(), 0);
    }

    #[test]
    fn test_dead_listener_callback_still_invoked() {
        // One weak listener and one callback; the listener's owner is
        // released; notify invokes only the callback.
        let dispatcher = ConfigChangeDispatcher::new();
        let listener = Recorder::new();
        dispatcher.add_listener(Arc::downgrade(&listener) as ListenerRef);

        let hits = Arc::new(Mutex::new(0usize));
        let hits_cb = hits.clone();
        dispatcher.add_callback(move |_, _| *hits_cb.lock() += 1);

        drop(listener);
        dispatcher.notify("layer_height", &OptionValue::Float(0.2));

        assert_eq!(*hits.lock(), 1);
        assert_eq!(dispatcher.listener_count(), 0);
        assert_eq!(dispatcher.callback_count(), 1);
    }

    #[test]
    fn test_disabled_gate_is_total() {
        let dispatcher = ConfigChangeDispatcher::new();
        let listener = Recorder::new();
        dispatcher.add_listener(Arc::downgrade(&listener) as ListenerRef);

        let hits = Arc::new(Mutex::new(0usize));
        let hits_cb = hits.clone();
        dispatcher.add_callback(move |_, _| *hits_cb.lock() += 1);

        dispatcher.set_enabled(false);
        assert!(!dispatcher.is_enabled());
        dispatcher.notify("brim_width", &OptionValue::Float(5.0));
        assert!(listener.seen.lock().is_empty());
        assert_eq!(*hits.lock(), 0);

        // Re-enabling restores delivery without re-registration.
        dispatcher.set_enabled(true);
        dispatcher.notify("brim_width", &OptionValue::Float(6.0));
        assert_eq!(listener.seen.lock().len(), 1);
        assert_eq!(*hits.lock(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dispatcher = ConfigChangeDispatcher::new();
        let listener = Recorder::new();
        dispatcher.add_listener(Arc::downgrade(&listener) as ListenerRef);
        dispatcher.add_callback(|_, _| {});

        dispatcher.clear();
        dispatcher.clear();
        assert_eq!(dispatcher.listener_count(), 0);
        assert_eq!(dispatcher.callback_count(), 0);

        dispatcher.notify("resolution", &OptionValue::Float(0.01));
        assert!(listener.seen.lock().is_empty());
    }

    #[test]
    fn test_double_registration_double_delivery() {
        let dispatcher = ConfigChangeDispatcher::new();
        let listener = Recorder::new();
        dispatcher.add_listener(Arc::downgrade(&listener) as ListenerRef);
        dispatcher.add_listener(Arc::downgrade(&listener) as ListenerRef);

        dispatcher.notify("seam_gap", &OptionValue::Float(0.1));
        assert_eq!(listener.seen.lock().len(), 2);
    }

    #[test]
    fn test_mixed_live_and_dead_listeners_keep_order() {
        let dispatcher = ConfigChangeDispatcher::new();
        let first = Recorder::new();
        let doomed = Recorder::new();
        let last = Recorder::new();
        dispatcher.add_listener(Arc::downgrade(&first) as ListenerRef);
        dispatcher.add_listener(Arc::downgrade(&doomed) as ListenerRef);
        dispatcher.add_listener(Arc::downgrade(&last) as ListenerRef);

        drop(doomed);
        dispatcher.notify("travel_speed", &OptionValue::Int(200));

        assert_eq!(first.seen.lock().len(), 1);
        assert_eq!(last.seen.lock().len(), 1);
        assert_eq!(dispatcher.listener_count(), 2);
    }
}
