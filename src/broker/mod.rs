//! Broker-publishing boundary: transport seam, event sink, config publisher.
//!
//! Everything here speaks to a message broker through the [`BrokerPublisher`]
//! trait; the actual client (MQTT or otherwise) lives outside the crate and
//! reports per-publish success as a plain boolean. Delivery over the broker
//! is best-effort: failures are logged and swallowed, never surfaced to the
//! producer.
//!
//! ## Contents
//! - [`BrokerPublisher`] — the transport contract
//! - [`BrokerEventSink`] — slicing lifecycle events → per-kind topics
//! - [`BrokerConfigPublisher`] — config changes → `config/{page}/{group}/{key}`
//! - [`ConfigTopicMap`] — the static key → page/group lookup table

mod config_publisher;
mod event_sink;
mod publish;
mod topics;

pub use config_publisher::BrokerConfigPublisher;
pub use event_sink::BrokerEventSink;
pub use publish::BrokerPublisher;
pub use topics::ConfigTopicMap;
