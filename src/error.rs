//! Error types crossing the dispatcher boundary.
//!
//! The dispatcher core is a pass-through: the only error it can surface is a
//! sink implementation failing mid-delivery. Transport faults (a broker
//! publish failing, a UI channel going away) never become [`SinkError`] — the
//! adapters report those as boolean results or swallow them at their own
//! boundary.

use thiserror::Error;

/// # Errors produced during event delivery.
///
/// Raised by a [`SlicingEventSink`](crate::SlicingEventSink) implementation
/// and propagated unchanged through the dispatcher to the producer's call
/// site. One failing sink aborts delivery to the sinks registered after it
/// in the same fan-out.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SinkError {
    /// A sink failed while handling an event.
    #[error("sink {sink} failed delivery: {reason}")]
    Delivery {
        /// Name of the failing sink (for logs).
        sink: String,
        /// Underlying failure message.
        reason: String,
    },
}

impl SinkError {
    /// Builds a delivery error for the given sink.
    pub fn delivery(sink: impl Into<String>, reason: impl Into<String>) -> Self {
        SinkError::Delivery {
            sink: sink.into(),
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use slicecast::SinkError;
    ///
    /// let err = SinkError::delivery("broker", "boom");
    /// assert_eq!(err.as_label(), "sink_delivery_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SinkError::Delivery { .. } => "sink_delivery_failed",
        }
    }
}
