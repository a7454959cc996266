//! Mapping of [`FflError`] onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ErrorKind, FflError};

/// JSON error body: a machine-readable reason plus the display message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::Configuration | ErrorKind::UpstreamUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::AssetMissing => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for FflError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = kind.status_code();
        if status.is_server_error() {
            warn!(reason = kind.reason(), error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: kind.reason().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
