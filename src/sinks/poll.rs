//! # Polling sink: cached status for on-demand queries.
//!
//! [`PollSink`] does not push anywhere. It caches the latest
//! [`SlicingStatus`] and, once the run ends, the [`CompletedInfo`], under its
//! own lock, for retrieval by whoever polls — an HTTP status handler, a
//! remote-control query, a periodic UI refresh.
//!
//! Export events are accepted and ignored: the polling surface only exposes
//! progress and completion.
//!
//! ## Example
//! ```rust
//! use slicecast::{CompletedInfo, PollSink, SlicingEventSink, SlicingStatus};
//!
//! let sink = PollSink::new();
//! sink.on_slicing_update(&SlicingStatus::new(42, "slicing layer 10")).unwrap();
//! assert_eq!(sink.latest_status().unwrap().message, "slicing layer 10");
//!
//! sink.on_process_finished(&CompletedInfo::error("mesh not manifold")).unwrap();
//! assert!(sink.has_completed());
//! ```

use parking_lot::Mutex;

use crate::error::SinkError;
use crate::events::{CompletedInfo, SlicingStatus};
use crate::events::SlicingEventSink;

/// Point-in-time view of the cached run state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusSnapshot {
    /// Latest progress update, if any arrived since the last reset.
    pub status: Option<SlicingStatus>,
    /// Terminal summary, present once the run has finished.
    pub completed: Option<CompletedInfo>,
}

impl StatusSnapshot {
    /// Whether the run this snapshot describes has finished.
    pub fn has_completed(&self) -> bool {
        self.completed.is_some()
    }
}

#[derive(Default)]
struct Cached {
    status: Option<SlicingStatus>,
    completed: Option<CompletedInfo>,
}

/// Sink that caches the latest status and completion for polling.
#[derive(Default)]
pub struct PollSink {
    cached: Mutex<Cached>,
}

impl PollSink {
    /// Creates an empty cache (no status, not completed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest progress update, if any.
    pub fn latest_status(&self) -> Option<SlicingStatus> {
        self.cached.lock().status.clone()
    }

    /// Terminal summary of the last run, once it finished.
    pub fn completion(&self) -> Option<CompletedInfo> {
        self.cached.lock().completed.clone()
    }

    /// Whether the last observed run has finished.
    pub fn has_completed(&self) -> bool {
        self.cached.lock().completed.is_some()
    }

    /// Consistent snapshot of both fields under one lock acquisition.
    pub fn snapshot(&self) -> StatusSnapshot {
        let cached = self.cached.lock();
        StatusSnapshot {
            status: cached.status.clone(),
            completed: cached.completed.clone(),
        }
    }

    /// Clears the cache for a new run (called when the process is started or
    /// reset by its controller).
    pub fn reset(&self) {
        let mut cached = self.cached.lock();
        cached.status = None;
        cached.completed = None;
    }
}

impl SlicingEventSink for PollSink {
    fn on_slicing_update(&self, status: &SlicingStatus) -> Result<(), SinkError> {
        self.cached.lock().status = Some(status.clone());
        Ok(())
    }

    fn on_slicing_completed(&self, _timestamp: i64) -> Result<(), SinkError> {
        // Progress already reflects 100% via on_slicing_update.
        Ok(())
    }

    fn on_process_finished(&self, info: &CompletedInfo) -> Result<(), SinkError> {
        self.cached.lock().completed = Some(info.clone());
        Ok(())
    }

    fn on_export_began(&self) -> Result<(), SinkError> {
        Ok(())
    }

    fn on_export_finished(&self, _path: &str) -> Result<(), SinkError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "poll_sink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CompletionStatus;

    #[test]
    fn test_latest_update_wins() {
        let sink = PollSink::new();
        sink.on_slicing_update(&SlicingStatus::new(10, "walls")).unwrap();
        sink.on_slicing_update(&SlicingStatus::new(42, "slicing layer 10"))
            .unwrap();

        let status = sink.latest_status().unwrap();
        assert_eq!(status.percent, 42);
        assert_eq!(status.message, "slicing layer 10");
        assert!(!sink.has_completed());
    }

    #[test]
    fn test_completion_scenario() {
        let sink = PollSink::new();
        sink.on_slicing_update(&SlicingStatus::new(42, "slicing layer 10"))
            .unwrap();
        sink.on_process_finished(&CompletedInfo::error("mesh not manifold"))
            .unwrap();

        let snapshot = sink.snapshot();
        assert!(snapshot.has_completed());
        let completed = snapshot.completed.unwrap();
        assert_eq!(completed.status, CompletionStatus::Error);
        assert_eq!(completed.error_message, "mesh not manifold");
        // The last progress update stays visible alongside the completion.
        assert_eq!(snapshot.status.unwrap().percent, 42);
    }

    #[test]
    fn test_reset_clears_both_fields() {
        let sink = PollSink::new();
        sink.on_slicing_update(&SlicingStatus::new(99, "almost")).unwrap();
        sink.on_process_finished(&CompletedInfo::cancelled()).unwrap();

        sink.reset();
        assert_eq!(sink.latest_status(), None);
        assert!(!sink.has_completed());
        assert_eq!(sink.snapshot(), StatusSnapshot::default());
    }

    #[test]
    fn test_export_events_are_noops() {
        let sink = PollSink::new();
        sink.on_export_began().unwrap();
        sink.on_export_finished("/tmp/x.gcode").unwrap();
        sink.on_slicing_completed(7).unwrap();
        assert_eq!(sink.snapshot(), StatusSnapshot::default());
    }
}
