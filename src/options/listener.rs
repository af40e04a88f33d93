//! # Config-change listener contract.
//!
//! Two registration shapes exist on the config channel:
//! - [`ConfigChangeListener`] implementors, registered through a **weak**
//!   reference — the dispatcher never extends their lifetime and prunes them
//!   lazily once the last external owner is gone;
//! - [`ChangeCallback`] closures, **owned** by the dispatcher and live until
//!   [`clear`](crate::ConfigChangeDispatcher::clear).
//!
//! A listener that panics does so on the producer thread; the dispatcher does
//! not catch it.

use std::sync::Weak;

use crate::options::value::OptionValue;

/// Weak handle to a listener, as stored by the dispatcher.
pub type ListenerRef = Weak<dyn ConfigChangeListener>;

/// Owned callback registered with
/// [`add_callback`](crate::ConfigChangeDispatcher::add_callback).
pub type ChangeCallback = Box<dyn Fn(&str, &OptionValue) + Send + Sync>;

/// Contract for config-change consumers.
pub trait ConfigChangeListener: Send + Sync + 'static {
    /// Called when one option value changes.
    ///
    /// # Parameters
    /// - `key`: the option key (e.g. `"layer_height"`)
    /// - `value`: the new value
    fn on_config_change(&self, key: &str, value: &OptionValue);
}
