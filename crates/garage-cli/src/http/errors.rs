//! Mapping of service errors onto HTTP responses.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use garage_core::GarageError;
use log::{error, warn};
use serde_json::json;

/// Error returned by every handler.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the garage service
    Service(GarageError),
    /// A request whose path, query string or body could not be decoded
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Service(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Service(e) => e.to_string(),
            Self::BadRequest(message) => message.clone(),
        }
    }
}

impl From<GarageError> for ApiError {
    fn from(error: GarageError) -> Self {
        Self::Service(error)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        if status.is_server_error() {
            error!("Request failed: {detail}");
        } else {
            warn!("Rejected request ({status}): {detail}");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (GarageError::GarageNotFound { id: 1 }, StatusCode::NOT_FOUND),
            (GarageError::MaintenanceNotFound { id: 1 }, StatusCode::NOT_FOUND),
            (
                GarageError::invalid_range("2024-03-10", "2024-03-05"),
                StatusCode::BAD_REQUEST,
            ),
            (
                GarageError::invalid_format("startDate", "x", "YYYY-MM-DD"),
                StatusCode::BAD_REQUEST,
            ),
            (
                GarageError::invalid_input("licensePlate").with_reason("taken"),
                StatusCode::BAD_REQUEST,
            ),
            (
                GarageError::Configuration {
                    message: "join".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status(), expected);
        }
    }
}
