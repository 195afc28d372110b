//! HTTP mapping for `DayTallyError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use daytally_core::error::{ClientCode, DayTallyError};

/// Handler error: logs the cause and answers with a status plus the client code.
#[derive(Debug)]
pub struct HttpError(pub DayTallyError);

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Persistence | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DayTallyError> for HttpError {
    fn from(e: DayTallyError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.client_code().as_str();
        if status.is_server_error() {
            tracing::error!(%code, error = %self.0, "request failed");
        } else {
            tracing::warn!(%code, error = %self.0, "request rejected");
        }
        (status, code).into_response()
    }
}
