//! # Broker sink: slicing lifecycle events as topic publishes.
//!
//! [`BrokerEventSink`] serializes each event to a flat JSON document and
//! publishes it under a per-kind topic:
//!
//! ```text
//! {prefix}status            — SlicingStatus updates (frequent)
//! {prefix}slicing_completed — slicing phase done, {"timestamp":N}
//! {prefix}finished          — terminal summary (retained)
//! {prefix}export/began      — {"phase":"began"}
//! {prefix}export/finished   — {"phase":"finished","path":"..."}
//! ```
//!
//! `finished` is published **retained** so that subscribers joining after the
//! run still see the last known outcome.
//!
//! Publish failures are best-effort territory: logged at warn level and
//! swallowed. This sink never returns an error, so a dead broker cannot
//! abort delivery to the sinks registered after it.
//!
//! ## Example
//! ```rust,ignore
//! let publisher: Arc<dyn BrokerPublisher> = Arc::new(MqttClientAdapter::connect(cfg)?);
//! let sink = BrokerEventSink::new(publisher.clone());
//! dispatcher.add_sink(Arc::new(sink));
//! ```

use std::sync::Arc;

use crate::broker::publish::BrokerPublisher;
use crate::error::SinkError;
use crate::events::{CompletedInfo, ExportInfo, SlicingStatus};
use crate::events::SlicingEventSink;

/// Default topic prefix, ahead of the per-kind suffixes.
pub const DEFAULT_TOPIC_PREFIX: &str = "slicer/";

/// Sink that publishes slicing events to a broker transport.
pub struct BrokerEventSink {
    publisher: Arc<dyn BrokerPublisher>,
    prefix: String,
}

impl BrokerEventSink {
    /// Creates a sink with the default `slicer/` topic prefix.
    pub fn new(publisher: Arc<dyn BrokerPublisher>) -> Self {
        Self::with_prefix(publisher, DEFAULT_TOPIC_PREFIX)
    }

    /// Creates a sink with a custom topic prefix.
    pub fn with_prefix(publisher: Arc<dyn BrokerPublisher>, prefix: impl Into<String>) -> Self {
        Self {
            publisher,
            prefix: prefix.into(),
        }
    }

    fn publish(&self, suffix: &str, payload: String, retained: bool) {
        let topic = format!("{}{}", self.prefix, suffix);
        if !self.publisher.publish(&topic, &payload, retained) {
            log::warn!("broker sink: publish to {topic} failed, event dropped");
        }
    }
}

impl SlicingEventSink for BrokerEventSink {
    fn on_slicing_update(&self, status: &SlicingStatus) -> Result<(), SinkError> {
        match serde_json::to_string(status) {
            Ok(payload) => self.publish("status", payload, false),
            Err(err) => log::warn!("broker sink: status serialization failed: {err}"),
        }
        Ok(())
    }

    fn on_slicing_completed(&self, timestamp: i64) -> Result<(), SinkError> {
        let payload = serde_json::json!({ "timestamp": timestamp }).to_string();
        self.publish("slicing_completed", payload, false);
        Ok(())
    }

    fn on_process_finished(&self, info: &CompletedInfo) -> Result<(), SinkError> {
        match serde_json::to_string(info) {
            // Retained: late subscribers get the last known outcome.
            Ok(payload) => self.publish("finished", payload, true),
            Err(err) => log::warn!("broker sink: completion serialization failed: {err}"),
        }
        Ok(())
    }

    fn on_export_began(&self) -> Result<(), SinkError> {
        match serde_json::to_string(&ExportInfo::began()) {
            Ok(payload) => self.publish("export/began", payload, false),
            Err(err) => log::warn!("broker sink: export serialization failed: {err}"),
        }
        Ok(())
    }

    fn on_export_finished(&self, path: &str) -> Result<(), SinkError> {
        match serde_json::to_string(&ExportInfo::finished(path)) {
            Ok(payload) => self.publish("export/finished", payload, false),
            Err(err) => log::warn!("broker sink: export serialization failed: {err}"),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "broker_event_sink"
    }
}
