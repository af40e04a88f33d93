//! # Channel-marshalling sink for event-loop consumers.
//!
//! [`ChannelEventSink`] converts each sink call into a [`SlicingNotice`] and
//! sends it over an unbounded channel. The producer is never blocked and
//! never fails: a consumer that stopped draining (or dropped its receiver)
//! simply stops receiving, with a debug log line for the first symptom.
//!
//! Ordering: the channel is FIFO, so the consumer observes notices in exactly
//! the order the producer emitted the events — across all five event kinds.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use slicecast::{ChannelEventSink, SlicingEventDispatcher, SlicingEventSink,
//!                 SlicingNotice, SlicingStatus};
//!
//! let (sink, rx) = ChannelEventSink::new();
//! let dispatcher = SlicingEventDispatcher::new();
//! dispatcher.add_sink(Arc::new(sink));
//!
//! dispatcher.on_slicing_update(&SlicingStatus::new(10, "infill")).unwrap();
//!
//! // ...meanwhile, on the UI thread:
//! match rx.recv().unwrap() {
//!     SlicingNotice::Update(status) => assert_eq!(status.percent, 10),
//!     other => panic!("unexpected notice: {other:?}"),
//! }
//! ```

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::error::SinkError;
use crate::events::{CompletedInfo, SlicingStatus};
use crate::events::SlicingEventSink;

/// One slicing event, reified for transport to another thread.
#[derive(Clone, Debug, PartialEq)]
pub enum SlicingNotice {
    /// Progress update.
    Update(SlicingStatus),
    /// Slicing phase done; export starting.
    Completed { timestamp: i64 },
    /// Terminal event of the run.
    Finished(CompletedInfo),
    /// Export started.
    ExportBegan,
    /// Export done, output written to `path`.
    ExportFinished { path: String },
}

/// Sink that forwards events into a channel and returns immediately.
pub struct ChannelEventSink {
    tx: Sender<SlicingNotice>,
}

impl ChannelEventSink {
    /// Creates the sink and the receiving end for the consumer thread.
    pub fn new() -> (Self, Receiver<SlicingNotice>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }

    fn forward(&self, notice: SlicingNotice) -> Result<(), SinkError> {
        // A gone consumer is routine (window closed mid-slice), not a fault.
        if self.tx.send(notice).is_err() {
            log::debug!("channel sink: receiver disconnected, notice dropped");
        }
        Ok(())
    }
}

impl SlicingEventSink for ChannelEventSink {
    fn on_slicing_update(&self, status: &SlicingStatus) -> Result<(), SinkError> {
        self.forward(SlicingNotice::Update(status.clone()))
    }

    fn on_slicing_completed(&self, timestamp: i64) -> Result<(), SinkError> {
        self.forward(SlicingNotice::Completed { timestamp })
    }

    fn on_process_finished(&self, info: &CompletedInfo) -> Result<(), SinkError> {
        self.forward(SlicingNotice::Finished(info.clone()))
    }

    fn on_export_began(&self) -> Result<(), SinkError> {
        self.forward(SlicingNotice::ExportBegan)
    }

    fn on_export_finished(&self, path: &str) -> Result<(), SinkError> {
        self.forward(SlicingNotice::ExportFinished {
            path: path.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "channel_event_sink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CompletionStatus;

    #[test]
    fn test_notices_preserve_call_order() {
        let (sink, rx) = ChannelEventSink::new();

        sink.on_slicing_update(&SlicingStatus::new(50, "half")).unwrap();
        sink.on_slicing_completed(42).unwrap();
        sink.on_export_began().unwrap();
        sink.on_export_finished("/tmp/a.gcode").unwrap();
        sink.on_process_finished(&CompletedInfo::finished()).unwrap();

        assert!(matches!(rx.recv().unwrap(), SlicingNotice::Update(s) if s.percent == 50));
        assert_eq!(rx.recv().unwrap(), SlicingNotice::Completed { timestamp: 42 });
        assert_eq!(rx.recv().unwrap(), SlicingNotice::ExportBegan);
        assert_eq!(
            rx.recv().unwrap(),
            SlicingNotice::ExportFinished {
                path: "/tmp/a.gcode".to_string()
            }
        );
        assert!(matches!(
            rx.recv().unwrap(),
            SlicingNotice::Finished(info) if info.status == CompletionStatus::Finished
        ));
    }

    #[test]
    fn test_disconnected_receiver_is_swallowed() {
        let (sink, rx) = ChannelEventSink::new();
        drop(rx);

        // The producer must not see an error when the consumer is gone.
        sink.on_slicing_update(&SlicingStatus::new(1, "x")).unwrap();
        sink.on_export_began().unwrap();
    }
}
