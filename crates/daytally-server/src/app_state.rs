//! Shared application state for the daytally server.
//!
//! Holds the explicitly constructed store handle, the clock and metrics. Store calls made by handlers go through here so every operation
//! is timed and failures are counted.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;

use daytally_core::error::Result;
use daytally_core::EventKind;

use crate::clock::{Clock, SystemClock};
use crate::config::ServerConfig;
use crate::obs::ServerMetrics;
use crate::store::{CounterStore, SqliteCounterStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn CounterStore>,
    clock: Arc<dyn Clock>,
    metrics: ServerMetrics,
}

impl AppState {
    /// Build application state from config: opens (and migrates) the SQLite
    /// store and uses the wall clock.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: &ServerConfig) -> Result<Self> {
        let store = SqliteCounterStore::from_config(&cfg.store)?;
        tracing::info!(path = %cfg.store.path, "counter store opened");
        Ok(Self::with_parts(Arc::new(store), Arc::new(SystemClock)))
    }

    /// Build application state from already constructed parts.
    pub fn with_parts(store: Arc<dyn CounterStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                clock,
                metrics: ServerMetrics::default(),
            }),
        }
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }

    /// Today's calendar date, asked fresh on every call.
    pub fn today(&self) -> NaiveDate {
        self.inner.clock.today()
    }

    pub async fn record_and_increment(&self, kind: EventKind, day: NaiveDate) -> Result<()> {
        let started = Instant::now();
        let res = self.inner.store.record_and_increment(kind, day).await;
        self.observe("record_and_increment", started, res.is_err());
        res
    }

    pub async fn get_count(&self, kind: EventKind, day: NaiveDate) -> Result<u64> {
        let started = Instant::now();
        let res = self.inner.store.get_count(kind, day).await;
        self.observe("get_count", started, res.is_err());
        res
    }

    pub async fn ping_store(&self) -> Result<()> {
        let started = Instant::now();
        let res = self.inner.store.ping().await;
        self.observe("ping", started, res.is_err());
        res
    }

    fn observe(&self, op: &str, started: Instant, failed: bool) {
        let m = &self.inner.metrics;
        m.store_duration.observe(&[("op", op)], started.elapsed());
        if failed {
            m.store_errors.inc(&[("op", op)]);
        }
    }
}
