//! daytally server
//!
//! - Counter pages: `/`, `/comment/`, `/like/`
//! - Ops: `/healthz`, `/readyz`, `/metrics`
//! - Config: first CLI argument, else `$DAYTALLY_CONFIG`, else `daytally.yaml`

use tracing_subscriber::{fmt, EnvFilter};

use daytally_core::error::{DayTallyError, Result};
use daytally_server::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = config::resolve_path(std::env::args().nth(1));
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(&cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "daytally-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| DayTallyError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| DayTallyError::Internal(format!("server failed: {e}")))
}
