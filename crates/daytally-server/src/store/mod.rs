//! Counter Store: durable per-day, per-kind event counting.

pub mod sqlite;

use async_trait::async_trait;
use chrono::NaiveDate;

use daytally_core::error::Result;
use daytally_core::EventKind;

pub use sqlite::SqliteCounterStore;

#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Create the `(kind, day)` row at 1, or add 1 to it. Committed before returning.
    async fn record_and_increment(&self, kind: EventKind, day: NaiveDate) -> Result<()>;

    /// Count for `(kind, day)`, or 0 when no row exists. Never writes.
    async fn get_count(&self, kind: EventKind, day: NaiveDate) -> Result<u64>;

    /// Cheap round trip used for readiness checks.
    async fn ping(&self) -> Result<()>;
}
