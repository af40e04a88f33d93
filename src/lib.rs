//! # slicecast
//!
//! **Slicecast** is the notification core for a background slicing process.
//!
//! It decouples a long-running computation (the producer of progress,
//! completion and export events) from an arbitrary, dynamically-changing set
//! of consumers (a UI thread, a broker publisher, an HTTP poller) without
//! introducing a runtime or a message queue.
//!
//! ## Architecture
//! ```text
//!                      ┌───────────────────────────┐
//!                      │ background slicing thread │
//!                      │ (single producer)         │
//!                      └───────────┬───────────────┘
//!                                  │ on_slicing_update / on_process_finished / ...
//!                                  ▼
//!              ┌──────────────────────────────────────┐
//!              │  SlicingEventDispatcher              │
//!              │  (composite sink: one mutex,         │
//!              │   registration-order fan-out)        │
//!              └───┬──────────────┬───────────────┬───┘
//!                  ▼              ▼               ▼
//!          ChannelEventSink  BrokerEventSink   PollSink
//!          (UI event loop)   (topic publish)   (status cache)
//!
//!   ConfigChangeDispatcher ──► weak listeners (auto-pruned)
//!        notify(key, value)     + owned callbacks (always live)
//!                                 e.g. BrokerConfigPublisher
//! ```
//!
//! ## Dispatch model
//! Fan-out is **synchronous and blocking on the caller's thread**: a delivery
//! call returns only after every registered sink has returned, and a slow sink
//! delays the producer. This is a deliberate choice — registration churn and
//! event frequency are both low, and strict serialization under a single lock
//! buys total per-dispatcher ordering for free. Consumers that must not hold
//! up the producer opt into decoupling at the adapter level
//! ([`ChannelEventSink`] enqueues and returns immediately).
//!
//! Registration (`add_sink` / `remove_sink` / `add_listener`) may be called
//! from any thread, concurrently with delivery from the producer thread.
//! Calling back into a dispatcher from inside one of its own delivery
//! callbacks deadlocks and is forbidden.
//!
//! ## Event lifecycle of one run
//! ```text
//! Idle → (on_slicing_update)* → on_slicing_completed
//!      → on_export_began → on_export_finished
//!      → on_process_finished → Idle
//! ```
//! `on_process_finished` may also arrive early (cancellation or error),
//! skipping the export phases; it is always the terminal event of a run.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use slicecast::{PollSink, SlicingEventDispatcher, SlicingEventSink, SlicingStatus};
//!
//! let dispatcher = SlicingEventDispatcher::new();
//!
//! let poll = Arc::new(PollSink::new());
//! dispatcher.add_sink(poll.clone());
//!
//! // Installed as *the* sink of the background process; here we call it directly.
//! dispatcher
//!     .on_slicing_update(&SlicingStatus::new(42, "slicing layer 10"))
//!     .unwrap();
//!
//! assert_eq!(poll.latest_status().unwrap().percent, 42);
//! ```

mod broker;
mod error;
mod events;
mod options;
mod sinks;

// ---- Public re-exports ----

pub use broker::{BrokerConfigPublisher, BrokerEventSink, BrokerPublisher, ConfigTopicMap};
pub use error::SinkError;
pub use events::{
    CompletedInfo, CompletionStatus, ExportInfo, ExportPhase, SinkRef, SlicingEventDispatcher,
    SlicingEventSink, SlicingStatus,
};
pub use options::{
    ChangeCallback, ConfigChangeDispatcher, ConfigChangeListener, ListenerRef, OptionValue,
};
pub use sinks::{ChannelEventSink, PollSink, SlicingNotice, StatusSnapshot};
