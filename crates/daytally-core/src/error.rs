//! Shared error type across daytally crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input or config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Counter store unreachable or write not committed.
    Persistence,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in response bodies and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Persistence => "PERSISTENCE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DayTallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum DayTallyError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("persistence: {0}")]
    Persistence(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl DayTallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            DayTallyError::BadRequest(_) => ClientCode::BadRequest,
            DayTallyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            DayTallyError::Persistence(_) => ClientCode::Persistence,
            DayTallyError::Internal(_) => ClientCode::Internal,
        }
    }
}
