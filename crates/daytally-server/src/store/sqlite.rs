//! SQLite-backed counter store.
//!
//! One table holds every kind, keyed by a `(kind, date)` unique constraint.
//! Increments are a single upsert statement, so concurrent requests in this
//! process cannot lose updates. A single connection sits behind a mutex and
//! all I/O runs on the blocking pool.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use daytally_core::error::{DayTallyError, Result};
use daytally_core::EventKind;

use super::CounterStore;
use crate::config::StoreSection;

pub struct SqliteCounterStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCounterStore {
    /// Open or create the database file and run migrations.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                DayTallyError::Persistence(format!("create {} failed: {e}", dir.display()))
            })?;
        }
        let conn = Connection::open(path).map_err(persistence("open"))?;
        Self::from_connection(conn)
    }

    /// Open a non-durable in-memory database (tests, `store.path: ":memory:"`).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(persistence("open"))?;
        Self::from_connection(conn)
    }

    pub fn from_config(cfg: &StoreSection) -> Result<Self> {
        if cfg.is_in_memory() {
            Self::open_in_memory()
        } else {
            Self::open(Path::new(&cfg.path))
        }
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrate(&conn).map_err(persistence("migrate"))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, op: &'static str, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| DayTallyError::Persistence("connection mutex poisoned".into()))?;
            f(&guard).map_err(persistence(op))
        })
        .await
        .map_err(|e| DayTallyError::Internal(format!("store task failed: {e}")))?
    }
}

#[async_trait]
impl CounterStore for SqliteCounterStore {
    async fn record_and_increment(&self, kind: EventKind, day: NaiveDate) -> Result<()> {
        self.with_conn("record_and_increment", move |conn| {
            conn.execute(
                "INSERT INTO daily_counts (kind, date, count) VALUES (?1, ?2, 1)
                 ON CONFLICT(kind, date) DO UPDATE SET count = count + 1",
                params![kind.as_str(), day],
            )
        })
        .await?;
        tracing::debug!(%kind, date = %day, "daily count incremented");
        Ok(())
    }

    async fn get_count(&self, kind: EventKind, day: NaiveDate) -> Result<u64> {
        let count = self
            .with_conn("get_count", move |conn| {
                conn.query_row(
                    "SELECT count FROM daily_counts WHERE kind = ?1 AND date = ?2",
                    params![kind.as_str(), day],
                    |row| row.get::<_, i64>(0),
                )
                .optional()
            })
            .await?;

        match count {
            None => Ok(0),
            Some(n) => u64::try_from(n).map_err(|_| {
                DayTallyError::Persistence(format!("negative count {n} for {kind} on {day}"))
            }),
        }
    }

    async fn ping(&self) -> Result<()> {
        self.with_conn("ping", |conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)))
            .await
            .map(|_| ())
    }
}

fn persistence(op: &'static str) -> impl Fn(rusqlite::Error) -> DayTallyError {
    move |e| DayTallyError::Persistence(format!("{op}: {e}"))
}

fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS daily_counts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL,
            date TEXT NOT NULL,
            count INTEGER NOT NULL DEFAULT 1,
            UNIQUE (kind, date)
        );
    ",
    )
}
