//! Error handling - every failure is rendered in the response envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use cms_core::error::{DomainError, RepoError};
use cms_shared::ApiResponse;

/// Application-level error type; the message is what the client sees.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Replace the generic message of an internal failure with one naming the operation.
    pub fn during(self, operation: &str) -> Self {
        match self {
            AppError::Internal(_) => AppError::Internal(operation.to_string()),
            other => other,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.to_string()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument(msg) => AppError::BadRequest(msg),
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type, id = %id, "Entity not found");
                AppError::NotFound(format!("{entity_type} not found"))
            }
            DomainError::Persistence(err) => err.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => {
                tracing::warn!("Constraint violation: {}", msg);
                AppError::Conflict("Request conflicts with existing data".to_string())
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Handler-side shorthand for `map_err(|e| AppError::from(e).during(..))`.
pub trait OrFail<T> {
    fn or_fail(self, operation: &str) -> AppResult<T>;
}

impl<T> OrFail<T> for Result<T, DomainError> {
    fn or_fail(self, operation: &str) -> AppResult<T> {
        self.map_err(|err| AppError::from(err).during(operation))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
