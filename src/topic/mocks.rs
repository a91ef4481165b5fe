//! Mock implementations for tests.

use crate::{Stats, StatsSource};
use std::collections::VecDeque;

/// A [StatsSource] that replays a scripted sequence of snapshots.
pub struct Source {
    snapshots: VecDeque<Stats>,
}

impl Source {
    /// Create a source that returns the given snapshots in order.
    pub fn new(snapshots: impl IntoIterator<Item = Stats>) -> Self {
        Self {
            snapshots: snapshots.into_iter().collect(),
        }
    }
}

impl StatsSource for Source {
    fn stats(&mut self) -> Stats {
        self.snapshots.pop_front().expect("no snapshots scripted")
    }
}
