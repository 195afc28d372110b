//! Axum router wiring.
//!
//! Counter pages at `/`, `/comment/`, `/like/`, plus the ops endpoints.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, pages};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/comment/", get(pages::comment))
        .route("/like/", get(pages::like))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
