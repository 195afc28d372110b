//! daytally server library entry.
//!
//! Wires the SQLite counter store, the clock, and the page and ops routes into
//! an axum application. Consumed by the binary (`main.rs`) and by integration
//! tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod clock;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod pages;
pub mod router;
pub mod store;
