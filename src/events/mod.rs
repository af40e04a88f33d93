//! Slicing lifecycle events: payload types, sink contract, composite dispatcher.
//!
//! This module groups the event **data model** and the fan-out machinery for
//! the slicing side of the crate.
//!
//! ## Contents
//! - [`SlicingStatus`], [`CompletedInfo`], [`ExportInfo`] — event payloads
//! - [`SlicingEventSink`] — the five-method contract consumed by the producer
//! - [`SlicingEventDispatcher`] — a sink that fans out to other sinks
//!
//! ## Quick reference
//! - **Producer**: the background slicing thread, which holds exactly one
//!   [`SinkRef`] (always the dispatcher) and calls it synchronously.
//! - **Consumers**: anything implementing [`SlicingEventSink`] — see
//!   `crate::sinks` and `crate::broker` for the shipped adapters.

mod dispatcher;
mod event;
mod sink;

pub use dispatcher::SlicingEventDispatcher;
pub use event::{CompletedInfo, CompletionStatus, ExportInfo, ExportPhase, SlicingStatus};
pub use sink::{SinkRef, SlicingEventSink};
