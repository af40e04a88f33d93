//! # Composite sink: fan-out of slicing events to multiple sinks.
//!
//! [`SlicingEventDispatcher`] implements [`SlicingEventSink`] while holding a
//! list of other sinks, so it can be installed as *the* single sink of the
//! background process and internally deliver to every registered consumer.
//!
//! ## Rules
//! - **One lock**: registration and delivery serialize on the same mutex,
//!   held for the full duration of either. A registration can never race an
//!   in-flight fan-out.
//! - **Registration order**: every delivery walks the sinks in the order they
//!   were added, deterministically.
//! - **Abort on fault**: the first sink returning `Err` stops the fan-out;
//!   sinks registered after it do not see that event, and the error
//!   propagates to the producer.
//! - **No re-entrancy**: calling `add_sink`/`remove_sink`/delivery from
//!   inside a sink callback deadlocks. Forbidden, not guarded.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use slicecast::{PollSink, SlicingEventDispatcher, SlicingEventSink, SlicingStatus};
//!
//! let dispatcher = SlicingEventDispatcher::new();
//! let poll = Arc::new(PollSink::new());
//! dispatcher.add_sink(poll.clone());
//! assert_eq!(dispatcher.sink_count(), 1);
//!
//! dispatcher.on_slicing_update(&SlicingStatus::new(5, "arranging")).unwrap();
//! dispatcher.remove_sink(&(poll as Arc<dyn SlicingEventSink>));
//! assert_eq!(dispatcher.sink_count(), 0);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::SinkError;
use crate::events::event::{CompletedInfo, SlicingStatus};
use crate::events::sink::{SinkRef, SlicingEventSink};

/// Fan-out dispatcher for slicing lifecycle events.
///
/// Cheap to clone: all clones share the same sink list. Sinks are held by
/// strong reference and removed only by explicit [`remove_sink`] or
/// [`clear_sinks`] — there is no liveness pruning on this path, unlike the
/// weakly-held config listeners.
///
/// [`remove_sink`]: SlicingEventDispatcher::remove_sink
/// [`clear_sinks`]: SlicingEventDispatcher::clear_sinks
#[derive(Clone, Default)]
pub struct SlicingEventDispatcher {
    sinks: Arc<Mutex<Vec<SinkRef>>>,
}

impl SlicingEventDispatcher {
    /// Creates a dispatcher with no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sink to receive all subsequent events.
    ///
    /// No uniqueness check: adding the same `Arc` twice yields two deliveries
    /// per event. (The original API also rejected null sinks; a [`SinkRef`]
    /// cannot be null, so that case does not exist here.)
    pub fn add_sink(&self, sink: SinkRef) {
        self.sinks.lock().push(sink);
    }

    /// Removes **all** registrations of the given sink.
    ///
    /// Identity is pointer equality on the `Arc`, not structural equality:
    /// pass a clone of the handle that was registered.
    pub fn remove_sink(&self, sink: &SinkRef) {
        self.sinks.lock().retain(|s| !Arc::ptr_eq(s, sink));
    }

    /// Removes every registered sink.
    pub fn clear_sinks(&self) {
        self.sinks.lock().clear();
    }

    /// Number of currently registered sinks (snapshot).
    pub fn sink_count(&self) -> usize {
        self.sinks.lock().len()
    }

    /// Delivers one event to every sink in registration order, stopping at
    /// the first failure.
    fn fan_out(
        &self,
        deliver: impl Fn(&dyn SlicingEventSink) -> Result<(), SinkError>,
    ) -> Result<(), SinkError> {
        let sinks = self.sinks.lock();
        for sink in sinks.iter() {
            deliver(sink.as_ref())?;
        }
        Ok(())
    }
}

impl SlicingEventSink for SlicingEventDispatcher {
    fn on_slicing_update(&self, status: &SlicingStatus) -> Result<(), SinkError> {
        self.fan_out(|sink| sink.on_slicing_update(status))
    }

    fn on_slicing_completed(&self, timestamp: i64) -> Result<(), SinkError> {
        self.fan_out(|sink| sink.on_slicing_completed(timestamp))
    }

    fn on_process_finished(&self, info: &CompletedInfo) -> Result<(), SinkError> {
        self.fan_out(|sink| sink.on_process_finished(info))
    }

    fn on_export_began(&self) -> Result<(), SinkError> {
        self.fan_out(|sink| sink.on_export_began())
    }

    fn on_export_finished(&self, path: &str) -> Result<(), SinkError> {
        self.fan_out(|sink| sink.on_export_finished(path))
    }

    fn name(&self) -> &'static str {
        "slicing_event_dispatcher"
    }
}
