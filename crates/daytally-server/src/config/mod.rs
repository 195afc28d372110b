//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use daytally_core::error::{DayTallyError, Result};

pub use schema::{ServerConfig, ServerSection, StoreSection};

/// Environment variable naming the config file when no CLI argument is given.
pub const CONFIG_ENV: &str = "DAYTALLY_CONFIG";
/// Config file used when neither the CLI nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "daytally.yaml";

/// Read and validate the config file; a missing file yields the default config.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(%path, "config file not found, using defaults");
            let cfg = ServerConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(DayTallyError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| DayTallyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config path: first CLI argument, then `DAYTALLY_CONFIG`, then the default.
pub fn resolve_path(cli_arg: Option<String>) -> String {
    cli_arg
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the environment is never mutated concurrently.
    #[test]
    fn path_resolution_order() {
        std::env::remove_var(CONFIG_ENV);
        assert_eq!(resolve_path(None), DEFAULT_CONFIG_PATH);

        std::env::set_var(CONFIG_ENV, "/srv/daytally/env.yaml");
        assert_eq!(resolve_path(None), "/srv/daytally/env.yaml");
        assert_eq!(resolve_path(Some("/etc/daytally.yaml".into())), "/etc/daytally.yaml");

        std::env::remove_var(CONFIG_ENV);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_or_default("/nonexistent/daytally.yaml");
        assert!(matches!(cfg, Ok(ref c) if c.store.path == "data-dev.db"));
    }
}
