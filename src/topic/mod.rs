//! Translate topic snapshots into labeled gauges.
//!
//! # Overview
//!
//! The core of the module is the [Collector]. On each cycle it is handed one
//! [Stats](crate::Stats) snapshot (directly via [Collector::collect], or
//! pulled from a [StatsSource](crate::StatsSource) via [Collector::poll]) and:
//!
//! - Checks that every topic remembered from the previous cycle is still
//!   reported, failing with [Error::TopicVanished](crate::Error::TopicVanished)
//!   otherwise (before touching any gauge for the cycle).
//! - Sets four gauges per topic (`channel_count`, `depth`, `backend_depth`,
//!   `message_count`), each addressed by the labels `type="topic"`,
//!   `topic=<name>`, and `paused="true"|"false"`.
//! - Replaces its memory with exactly the names seen in this snapshot.
//!
//! New topics are accepted silently; only disappearance is fatal. Because a
//! paused flip changes the `paused` label, the series for the previous label
//! combination remains at its last-set value.
//!
//! # Details
//!
//! [Collector::collect] takes `&mut self`: a whole cycle is one synchronous
//! call, so the continuity read and the memory commit are atomic as a pair.
//! Callers sharing a collector across concurrent scrape handlers should wrap
//! it in a mutex held for the whole cycle.
//!
//! A continuity violation is returned as an error rather than aborting
//! in-process so the cycle logic stays testable; the embedding run loop is
//! expected to translate it into a fatal exit:
//!
//! ```no_run
//! use queue_exporter::{topic, StatsSource};
//!
//! fn scrape<S: StatsSource>(collector: &mut topic::Collector, source: &mut S) {
//!     if let Err(err) = collector.poll(source) {
//!         eprintln!("{err}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
pub use config::Config;
mod collector;
pub use collector::Collector;
mod metrics;

#[cfg(test)]
pub mod mocks;
