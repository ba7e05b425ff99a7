use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use garth_core::{HmsError, api_types::ApiResponse};

pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "Ocurrió un error interno";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.message))).into_response()
    }
}

impl From<HmsError> for AppError {
    fn from(err: HmsError) -> Self {
        match err {
            HmsError::Validation(msg) => Self::bad_request(msg),
            HmsError::NotFound(msg) => Self::not_found(msg),
            HmsError::Conflict(msg) => Self::conflict(msg),
            HmsError::Unauthorized(msg) => Self::unauthorized(msg),
            HmsError::Forbidden(msg) => Self::forbidden(msg),
            HmsError::Database(err) => {
                tracing::error!(error = ?err, "database operation failed");
                Self::internal(INTERNAL_MESSAGE)
            }
            HmsError::Internal(msg) => Self::internal(msg),
        }
    }
}
