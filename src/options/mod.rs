//! Configuration-change notifications: value model, listener contract, dispatcher.
//!
//! This is the second, independently instantiated fan-out channel of the
//! crate. It is structurally similar to the slicing side but carries a
//! different ownership contract: listeners are **weakly held** and pruned
//! lazily, while callbacks are **owned** and live until cleared.
//!
//! ## Contents
//! - [`OptionValue`] — the closed set of option value kinds
//! - [`ConfigChangeListener`] — single-method listener contract
//! - [`ConfigChangeDispatcher`] — weak-listener + callback fan-out with an
//!   enable gate

mod dispatcher;
mod listener;
mod value;

pub use dispatcher::ConfigChangeDispatcher;
pub use listener::{ChangeCallback, ConfigChangeListener, ListenerRef};
pub use value::OptionValue;
