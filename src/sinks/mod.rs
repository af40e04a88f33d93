//! In-process sink adapters.
//!
//! Reference implementations of the [`SlicingEventSink`](crate::SlicingEventSink)
//! contract for the two in-process consumption styles:
//!
//! - [`ChannelEventSink`] — marshals events onto a channel for another thread
//!   (typically a UI event loop) to drain; never blocks the producer.
//! - [`PollSink`] — caches the latest status and completion for on-demand
//!   queries (an HTTP `GET /status` handler, a TUI refresh tick).
//!
//! Broker-facing adapters live in `crate::broker`.

mod channel;
mod poll;

pub use channel::{ChannelEventSink, SlicingNotice};
pub use poll::{PollSink, StatusSnapshot};
