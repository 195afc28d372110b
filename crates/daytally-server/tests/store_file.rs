#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use chrono::NaiveDate;

use daytally_core::EventKind;
use daytally_server::config;
use daytally_server::store::{CounterStore, SqliteCounterStore};

#[tokio::test]
async fn counts_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("counts.db");
    let day = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();

    {
        let store = SqliteCounterStore::open(&path).unwrap();
        store.record_and_increment(EventKind::Comment, day).await.unwrap();
        store.record_and_increment(EventKind::Comment, day).await.unwrap();
    }

    let reopened = SqliteCounterStore::open(&path).unwrap();
    assert_eq!(reopened.get_count(EventKind::Comment, day).await.unwrap(), 2);
    assert_eq!(reopened.get_count(EventKind::Visit, day).await.unwrap(), 0);
}

#[tokio::test]
async fn store_opens_from_config_section() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("data-dev.db");
    let yaml = format!("version: 1\nstore:\n  path: {:?}\n", db.to_str().unwrap());
    let cfg = config::load_from_str(&yaml).unwrap();

    let store = SqliteCounterStore::from_config(&cfg.store).unwrap();
    store.ping().await.unwrap();
    assert!(db.exists());
}
