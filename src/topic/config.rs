/// Configuration for the [`Collector`](super::Collector).
#[derive(Clone, Debug)]
pub struct Config {
    /// Prefix applied to every exported metric name.
    ///
    /// An empty namespace registers the metrics unprefixed.
    pub namespace: String,
}
