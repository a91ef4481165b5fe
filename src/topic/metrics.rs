use crate::Topic;
use prometheus_client::{
    encoding::{EncodeLabel, EncodeLabelSet, LabelSetEncoder},
    metrics::{family::Family, gauge::Gauge},
    registry::Registry,
};
use std::{fmt, sync::atomic::AtomicU64};

/// A gauge family keyed by [TopicLabels], holding one `f64` series per label
/// combination.
pub(super) type TopicGauge = Family<TopicLabels, Gauge<f64, AtomicU64>>;

/// Label set identifying one topic series.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub(super) struct TopicLabels {
    /// Name of the topic.
    pub topic: String,
    /// Whether the topic was paused when the snapshot was taken.
    pub paused: bool,
}

impl TopicLabels {
    /// Create the label set for a topic.
    pub fn from(topic: &Topic) -> Self {
        Self {
            topic: topic.name.clone(),
            paused: topic.paused,
        }
    }
}

// Encoded by hand: `type` is a reserved word, its value is constant (it
// distinguishes topic series from future stat families sharing the
// namespace), and `paused` must render as the literal strings
// "true"/"false".
impl EncodeLabelSet for TopicLabels {
    fn encode(&self, mut encoder: LabelSetEncoder) -> Result<(), fmt::Error> {
        ("type", "topic").encode(encoder.encode_label())?;
        ("topic", self.topic.as_str()).encode(encoder.encode_label())?;
        ("paused", if self.paused { "true" } else { "false" }).encode(encoder.encode_label())?;
        Ok(())
    }
}

fn channel_count(topic: &Topic) -> f64 {
    topic.channels.len() as f64
}

fn depth(topic: &Topic) -> f64 {
    topic.depth as f64
}

fn backend_depth(topic: &Topic) -> f64 {
    topic.backend_depth as f64
}

fn message_count(topic: &Topic) -> f64 {
    topic.message_count as f64
}

/// Metrics for the [Collector](super::Collector): the fixed set of gauges
/// exported per topic.
pub(super) struct Metrics {
    /// Number of channels on the topic.
    pub channel_count: TopicGauge,
    /// Current queue depth.
    pub depth: TopicGauge,
    /// Depth of the backend store.
    pub backend_depth: TopicGauge,
    /// Cumulative message count.
    pub message_count: TopicGauge,
}

impl Metrics {
    /// Create and return a new set of metrics, registered with the given
    /// registry under the namespace prefix.
    pub fn init(registry: &mut Registry, namespace: &str) -> Self {
        let metrics = Self {
            channel_count: TopicGauge::default(),
            depth: TopicGauge::default(),
            backend_depth: TopicGauge::default(),
            message_count: TopicGauge::default(),
        };
        let registry = if namespace.is_empty() {
            registry
        } else {
            registry.sub_registry_with_prefix(namespace)
        };
        registry.register(
            "channel_count",
            "Number of channels",
            metrics.channel_count.clone(),
        );
        registry.register("depth", "Queue depth", metrics.depth.clone());
        registry.register(
            "backend_depth",
            "Queue backend depth",
            metrics.backend_depth.clone(),
        );
        registry.register(
            "message_count",
            "Queue message count",
            metrics.message_count.clone(),
        );
        metrics
    }

    /// The metric definition set: each extractor paired with its gauge, in
    /// registration order.
    fn specs(&self) -> [(fn(&Topic) -> f64, &TopicGauge); 4] {
        [
            (channel_count, &self.channel_count),
            (depth, &self.depth),
            (backend_depth, &self.backend_depth),
            (message_count, &self.message_count),
        ]
    }

    /// Apply every extractor to `topic` and set the gauges addressed by
    /// `labels`.
    pub fn record(&self, labels: &TopicLabels, topic: &Topic) {
        for (extract, gauge) in self.specs() {
            gauge.get_or_create(labels).set(extract(topic));
        }
    }
}
