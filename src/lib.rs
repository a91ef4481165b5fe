//! Collect message-queue topic statistics and expose them as Prometheus gauges.
//!
//! # Overview
//!
//! A queue-server node reports, on demand, a point-in-time [Stats] snapshot of
//! every topic it serves. The [topic::Collector] translates each snapshot into
//! a fixed set of labeled gauges registered with a
//! [Registry](prometheus_client::registry::Registry) owned by the caller, who
//! serves the encoded registry from its scrape endpoint.
//!
//! Across snapshots the collector enforces a continuity invariant: every topic
//! observed on the previous cycle must still be reported on the current one.
//! A topic silently disappearing means the monitored node (or the link to it)
//! is in a state this collector cannot interpret, so the cycle fails with
//! [Error::TopicVanished] and the embedding process is expected to exit and be
//! restarted by its supervisor.
//!
//! # Example
//!
//! ```
//! use prometheus_client::{encoding::text::encode, registry::Registry};
//! use queue_exporter::{topic, Stats, Topic};
//!
//! let mut registry = Registry::default();
//! let mut collector = topic::Collector::new(
//!     &mut registry,
//!     topic::Config {
//!         namespace: "nsq".into(),
//!     },
//! );
//!
//! let stats = Stats {
//!     topics: vec![
//!         Topic {
//!             name: "orders".into(),
//!             depth: 3,
//!             ..Default::default()
//!         },
//!         Topic {
//!             name: "emails".into(),
//!             ..Default::default()
//!         },
//!     ],
//! };
//! collector.collect(&stats).expect("continuity violated");
//!
//! let mut buffer = String::new();
//! encode(&mut buffer, &registry).expect("encoding failed");
//! assert!(buffer.contains("nsq_depth"));
//! ```

use thiserror::Error;

pub mod topic;

/// Errors that can occur when collecting topic statistics.
#[derive(Error, Debug)]
pub enum Error {
    /// A topic reported on the previous cycle is missing from the current
    /// snapshot. Unrecoverable: the caller should terminate the process and
    /// let a supervisor restart it with fresh memory.
    #[error("previously seen topic missing from snapshot: {0}")]
    TopicVanished(String),
}

/// A channel attached to a [Topic].
///
/// Only its presence is observed (topic channel count); per-channel
/// statistics are reported elsewhere.
#[derive(Clone, Debug, Default)]
pub struct Channel {
    /// Name of the channel, unique within its topic.
    pub name: String,
}

/// Statistics for a single topic at one point in time.
#[derive(Clone, Debug, Default)]
pub struct Topic {
    /// Name of the topic, unique within a snapshot.
    pub name: String,
    /// Channels attached to the topic.
    pub channels: Vec<Channel>,
    /// Number of messages currently queued in memory.
    pub depth: u64,
    /// Number of messages spilled to the backend store.
    pub backend_depth: u64,
    /// Cumulative number of messages the topic has received.
    pub message_count: u64,
    /// Whether message flow on the topic is paused.
    pub paused: bool,
}

/// A point-in-time snapshot of every topic on a queue-server node.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Topics in the order the node reported them.
    pub topics: Vec<Topic>,
}

/// A producer of [Stats] snapshots.
///
/// How the snapshot is obtained (and how fetch failures are handled) is the
/// producer's concern; by the time a [Stats] value exists, its fields are
/// valid.
pub trait StatsSource {
    /// Produce the current statistics snapshot.
    fn stats(&mut self) -> Stats;
}
