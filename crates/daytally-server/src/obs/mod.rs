//! Lightweight in-process metrics.
//!
//! Counters and histograms are stored as atomics in `DashMap`s and rendered by
//! the `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::ServerMetrics;
