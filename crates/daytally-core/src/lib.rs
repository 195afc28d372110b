//! daytally core: event kinds and the shared error type.
//!
//! This crate carries no storage, HTTP, or runtime dependencies so the counting
//! contract can be shared by the server, tests, and any future tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `DayTallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod kind;

/// Shared result type.
pub use error::{DayTallyError, Result};
pub use kind::EventKind;
