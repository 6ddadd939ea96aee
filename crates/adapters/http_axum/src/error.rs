//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devicehub_domain::error::DeviceHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DeviceHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: DeviceHubError,
}

impl From<DeviceHubError> for ApiError {
    fn from(error: DeviceHubError) -> Self {
        let status = match &error {
            DeviceHubError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DeviceHubError::InvalidId(_) => StatusCode::BAD_REQUEST,
            DeviceHubError::NotFound(_) => StatusCode::NOT_FOUND,
            DeviceHubError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, error }
    }
}

impl ApiError {
    /// Report `error` as a 500 whatever its kind.
    #[must_use]
    pub fn internal(error: DeviceHubError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }

    #[cfg(test)]
    fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.error.to_string();
        if self.status.is_server_error() {
            tracing::error!(error = %message, status = %self.status, "request failed");
        } else {
            tracing::warn!(error = %message, status = %self.status, "request rejected");
        }

        (self.status, Json(ErrorBody { error: message })).into_response()
    }
}
