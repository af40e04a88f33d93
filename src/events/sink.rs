//! # Core sink trait
//!
//! `SlicingEventSink` is the extension point for receiving lifecycle events
//! from the background slicing process. The producer holds exactly one sink
//! reference — in practice always a
//! [`SlicingEventDispatcher`](crate::SlicingEventDispatcher), which fans out
//! to the real consumers.
//!
//! ## Contract
//! - Methods are called **synchronously on the producer thread** and block it
//!   until they return; implementations that may be slow should hand the
//!   event off (see [`ChannelEventSink`](crate::ChannelEventSink)).
//! - The producer guarantees single-threaded calls: no two sink methods run
//!   concurrently for the same producer.
//! - Returning `Err` aborts the current fan-out for sinks registered after
//!   this one and surfaces the error at the producer's call site. Transport
//!   problems that are routine (broker offline, UI gone) should be swallowed
//!   by the adapter instead.
//!
//! ## Example (skeleton)
//! ```rust
//! use slicecast::{CompletedInfo, SinkError, SlicingEventSink, SlicingStatus};
//!
//! struct Telemetry;
//!
//! impl SlicingEventSink for Telemetry {
//!     fn on_slicing_update(&self, status: &SlicingStatus) -> Result<(), SinkError> {
//!         // record progress gauge...
//!         let _ = status.percent;
//!         Ok(())
//!     }
//!     fn on_slicing_completed(&self, _timestamp: i64) -> Result<(), SinkError> { Ok(()) }
//!     fn on_process_finished(&self, _info: &CompletedInfo) -> Result<(), SinkError> { Ok(()) }
//!     fn on_export_began(&self) -> Result<(), SinkError> { Ok(()) }
//!     fn on_export_finished(&self, _path: &str) -> Result<(), SinkError> { Ok(()) }
//!     fn name(&self) -> &'static str { "telemetry" }
//! }
//! ```

use std::sync::Arc;

use crate::error::SinkError;
use crate::events::event::{CompletedInfo, SlicingStatus};

/// Shared handle to a sink. Ownership is strong: the dispatcher keeps the
/// sink alive until it is explicitly removed.
pub type SinkRef = Arc<dyn SlicingEventSink>;

/// Contract for consumers of slicing lifecycle events.
///
/// One run is observed as:
/// `(on_slicing_update)* → on_slicing_completed → on_export_began →
/// on_export_finished → on_process_finished`, where `on_process_finished`
/// may also arrive early (cancellation/error) and is always terminal.
pub trait SlicingEventSink: Send + Sync + 'static {
    /// Progress update; called frequently during a run.
    fn on_slicing_update(&self, status: &SlicingStatus) -> Result<(), SinkError>;

    /// Slicing phase done, export about to start.
    ///
    /// # Parameters
    /// - `timestamp`: producer wall-clock seconds at slicing completion
    fn on_slicing_completed(&self, timestamp: i64) -> Result<(), SinkError>;

    /// All processing finished (slicing + export, or early termination).
    fn on_process_finished(&self, info: &CompletedInfo) -> Result<(), SinkError>;

    /// Output export has started.
    fn on_export_began(&self) -> Result<(), SinkError>;

    /// Output export has finished.
    ///
    /// # Parameters
    /// - `path`: path of the exported file
    fn on_export_finished(&self, path: &str) -> Result<(), SinkError>;

    /// Human-readable name (for logs and error context).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
