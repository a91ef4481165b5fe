use super::{
    metrics::{Metrics, TopicLabels},
    Config,
};
use crate::{Error, Stats, StatsSource};
use prometheus_client::registry::Registry;
use std::collections::HashSet;
use tracing::{debug, error};

/// Translates [Stats] snapshots into labeled gauges, one cycle at a time.
///
/// The collector remembers the topic names it saw on the last successful
/// cycle. A remembered topic missing from the current snapshot fails the
/// cycle with [Error::TopicVanished] before any gauge is touched; the
/// memory is replaced wholesale only after a cycle succeeds.
pub struct Collector {
    metrics: Metrics,
    seen: HashSet<String>,
}

impl Collector {
    /// Create a new collector, registering its gauges with `registry` under
    /// the configured namespace.
    pub fn new(registry: &mut Registry, config: Config) -> Self {
        Self {
            metrics: Metrics::init(registry, &config.namespace),
            seen: HashSet::new(),
        }
    }

    /// Run one collection cycle over `stats`.
    ///
    /// Updates all four gauges for every topic in snapshot order, then
    /// commits the snapshot's topic names as the new memory.
    ///
    /// Errors with [Error::TopicVanished] if a topic remembered from the
    /// previous cycle is absent from `stats`. The error is unrecoverable by
    /// design: the caller should exit so a supervisor restarts the process.
    pub fn collect(&mut self, stats: &Stats) -> Result<(), Error> {
        // All remembered topics must still be reported before anything is
        // emitted for this cycle.
        for name in &self.seen {
            if !stats.topics.iter().any(|topic| topic.name == *name) {
                error!(topic = %name, "previously seen topic missing from snapshot");
                return Err(Error::TopicVanished(name.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(stats.topics.len());
        for topic in &stats.topics {
            seen.insert(topic.name.clone());
            let labels = TopicLabels::from(topic);
            self.metrics.record(&labels, topic);
        }
        self.seen = seen;

        debug!(topics = self.seen.len(), "collected topic stats");
        Ok(())
    }

    /// Fetch the current snapshot from `source` and run one collection cycle.
    pub fn poll<S: StatsSource>(&mut self, source: &mut S) -> Result<(), Error> {
        let stats = source.stats();
        self.collect(&stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Topic;

    fn stats(names: &[&str]) -> Stats {
        Stats {
            topics: names
                .iter()
                .map(|name| Topic {
                    name: (*name).into(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn collector() -> Collector {
        Collector::new(
            &mut Registry::default(),
            Config {
                namespace: "nsq".into(),
            },
        )
    }

    fn names(seen: &HashSet<String>) -> HashSet<&str> {
        seen.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_memory_replaced_wholesale() {
        let mut collector = collector();

        collector.collect(&stats(&["orders"])).unwrap();
        assert_eq!(names(&collector.seen), HashSet::from(["orders"]));

        collector.collect(&stats(&["orders", "emails"])).unwrap();
        assert_eq!(names(&collector.seen), HashSet::from(["orders", "emails"]));

        // Exactly the snapshot's names: nothing merged from earlier cycles.
        collector
            .collect(&stats(&["orders", "emails", "alerts"]))
            .unwrap();
        assert_eq!(
            names(&collector.seen),
            HashSet::from(["orders", "emails", "alerts"])
        );
    }

    #[test]
    fn test_memory_unchanged_on_violation() {
        let mut collector = collector();

        collector.collect(&stats(&["orders", "emails"])).unwrap();
        assert!(collector.collect(&stats(&["orders"])).is_err());

        // Nothing was committed for the failed cycle.
        assert_eq!(names(&collector.seen), HashSet::from(["orders", "emails"]));
    }

    #[test]
    fn test_memory_starts_empty() {
        let collector = collector();
        assert!(collector.seen.is_empty());
    }

    #[test]
    fn test_gauges_refresh_on_every_cycle() {
        let mut collector = collector();

        let mut snapshot = stats(&["orders"]);
        snapshot.topics[0].depth = 7;
        snapshot.topics[0].message_count = 100;
        collector.collect(&snapshot).unwrap();

        snapshot.topics[0].depth = 2;
        snapshot.topics[0].message_count = 120;
        collector.collect(&snapshot).unwrap();

        let labels = TopicLabels::from(&snapshot.topics[0]);
        assert_eq!(collector.metrics.depth.get_or_create(&labels).get(), 2.0);
        assert_eq!(
            collector.metrics.message_count.get_or_create(&labels).get(),
            120.0
        );
    }
}
