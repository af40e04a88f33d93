//! # Broker publisher for config changes.
//!
//! [`BrokerConfigPublisher`] implements [`ConfigChangeListener`] and turns
//! each changed option into a retained publish under its
//! `config/{page}/{group}/{key}` topic. Payloads are flat JSON documents:
//!
//! ```text
//! {"key":"layer_height","value":0.2,"type":"float"}
//! ```
//!
//! Retained publishes mean a subscriber joining later still sees the current
//! value of every option that ever changed. [`BrokerConfigPublisher::publish_all`]
//! pushes a whole config snapshot the same way, one publish per key.
//!
//! Like the event sink, delivery is best-effort: a refused publish is logged
//! and dropped.

use std::sync::Arc;

use crate::broker::publish::BrokerPublisher;
use crate::broker::topics::ConfigTopicMap;
use crate::options::{ConfigChangeListener, OptionValue};

/// Default topic prefix, matching the event sink.
pub const DEFAULT_TOPIC_PREFIX: &str = "slicer/";

/// Listener that mirrors config changes to a broker, retained.
pub struct BrokerConfigPublisher {
    publisher: Arc<dyn BrokerPublisher>,
    prefix: String,
    topics: ConfigTopicMap,
}

impl BrokerConfigPublisher {
    /// Creates a publisher with the default `slicer/` prefix.
    pub fn new(publisher: Arc<dyn BrokerPublisher>) -> Self {
        Self::with_prefix(publisher, DEFAULT_TOPIC_PREFIX)
    }

    /// Creates a publisher with a custom topic prefix.
    pub fn with_prefix(publisher: Arc<dyn BrokerPublisher>, prefix: impl Into<String>) -> Self {
        Self {
            publisher,
            prefix: prefix.into(),
            topics: ConfigTopicMap::new(),
        }
    }

    /// Publishes every `(key, value)` pair of a full config snapshot.
    pub fn publish_all<'a, I>(&self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a OptionValue)>,
    {
        for (key, value) in pairs {
            self.publish_change(key, value);
        }
    }

    fn publish_change(&self, key: &str, value: &OptionValue) {
        let topic = format!("{}{}", self.prefix, self.topics.topic_for(key));
        let payload = serde_json::json!({
            "key": key,
            "value": value,
            "type": value.type_label(),
        })
        .to_string();
        // Retained: the topic carries the current value for late subscribers.
        if !self.publisher.publish(&topic, &payload, true) {
            log::warn!("config publisher: publish to {topic} failed, change dropped");
        }
    }
}

impl ConfigChangeListener for BrokerConfigPublisher {
    fn on_config_change(&self, key: &str, value: &OptionValue) {
        self.publish_change(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct FakeBroker {
        published: Mutex<Vec<(String, String, bool)>>,
        accept: bool,
    }

    impl FakeBroker {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                published: Mutex::new(Vec::new()),
                accept: true,
            })
        }
    }

    impl BrokerPublisher for FakeBroker {
        fn publish(&self, topic: &str, payload: &str, retained: bool) -> bool {
            self.published
                .lock()
                .push((topic.to_string(), payload.to_string(), retained));
            self.accept
        }
    }

    #[test]
    fn test_known_key_topic_and_payload() {
        let broker = FakeBroker::new();
        let publisher = BrokerConfigPublisher::new(broker.clone());

        publisher.on_config_change("layer_height", &OptionValue::Float(0.2));

        let published = broker.published.lock();
        let (topic, payload, retained) = &published[0];
        assert_eq!(topic, "slicer/config/quality/layer_height/layer_height");
        assert!(*retained);

        let json: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(json["key"], "layer_height");
        assert_eq!(json["value"], 0.2);
        assert_eq!(json["type"], "float");
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let broker = FakeBroker::new();
        let publisher = BrokerConfigPublisher::with_prefix(broker.clone(), "printers/a1/");

        publisher.on_config_change("frob_factor", &OptionValue::Bool(true));

        let published = broker.published.lock();
        assert_eq!(published[0].0, "printers/a1/config/unknown/frob_factor");
        let json: serde_json::Value = serde_json::from_str(&published[0].1).unwrap();
        assert_eq!(json["value"], true);
        assert_eq!(json["type"], "bool");
    }

    #[test]
    fn test_value_kinds_carry_type_labels() {
        let broker = FakeBroker::new();
        let publisher = BrokerConfigPublisher::new(broker.clone());

        publisher.on_config_change("wall_loops", &OptionValue::Int(3));
        publisher.on_config_change("seam_position", &OptionValue::from("aligned"));
        publisher.on_config_change(
            "post_process",
            &OptionValue::Strings(vec!["smooth.py".into()]),
        );

        let published = broker.published.lock();
        let labels: Vec<String> = published
            .iter()
            .map(|(_, payload, _)| {
                let json: serde_json::Value = serde_json::from_str(payload).unwrap();
                json["type"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(labels, ["int", "string", "strings"]);
    }

    #[test]
    fn test_publish_all_pushes_every_pair() {
        let broker = FakeBroker::new();
        let publisher = BrokerConfigPublisher::new(broker.clone());

        let height = OptionValue::Float(0.28);
        let loops = OptionValue::Int(2);
        publisher.publish_all([("layer_height", &height), ("wall_loops", &loops)]);

        let published = broker.published.lock();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0].0, "slicer/config/quality/layer_height/layer_height");
        assert_eq!(published[1].0, "slicer/config/strength/walls/wall_loops");
        assert!(published.iter().all(|(_, _, retained)| *retained));
    }
}
