use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::errors::ProviderError;

/// Body of every non-200 answer, e.g. `{"message":"Not Found"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Why a proxied request could not be answered with data.
#[derive(Debug)]
pub enum ApiError {
    /// Upstream found nothing, or answered 404 itself.
    NotFound,
    /// Upstream was unreachable, failed, or sent something undecodable.
    BadGateway,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadGateway => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Status(status) if status == StatusCode::NOT_FOUND => ApiError::NotFound,
            _ => ApiError::BadGateway,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = status
            .canonical_reason()
            .unwrap_or("Error")
            .to_string();
        (status, Json(ErrorResponse { message })).into_response()
    }
}
