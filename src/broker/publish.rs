//! # Transport contract for broker publishing.
//!
//! The crate never talks to a broker directly; it hands fully-formed
//! `(topic, payload, retained)` triples to a [`BrokerPublisher`]. Concrete
//! implementations wrap an MQTT client, an in-memory bus for tests, or
//! anything else with topic semantics.

/// Contract a broker transport must satisfy.
///
/// `publish` returns `false` on failure (not connected, send error); it must
/// not block for long and must not panic. The callers treat delivery as
/// best-effort and only log a failed publish.
pub trait BrokerPublisher: Send + Sync + 'static {
    /// Publishes `payload` under `topic`.
    ///
    /// # Parameters
    /// - `retained`: ask the broker to keep the payload as last-known-state
    ///   for late-joining subscribers
    fn publish(&self, topic: &str, payload: &str, retained: bool) -> bool;
}
