//! Error types for the booking server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::kurtaxe::KurtaxeError;

/// Numeric error codes returned in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    NoSuchBooking = 3,
    NoSuchData = 4,
    BadValue = 5,
    InvalidDateRange = 6,
    NoGuests = 7,
    TooManyGuests = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing booking
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing row other than a booking, e.g. a rate entry
    #[error("Not found: {0}")]
    DataNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Kurtaxe calculation failed: {0}")]
    Kurtaxe(#[from] KurtaxeError),

    #[error("Too many guests: {0}")]
    TooManyGuests(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchBooking),
            AppError::DataNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData),
            AppError::Validation(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue)
            }
            AppError::Database(sqlx::Error::RowNotFound) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchData)
            }
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbFailure),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure),
            AppError::Kurtaxe(KurtaxeError::InvalidDateRange) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidDateRange)
            }
            AppError::Kurtaxe(KurtaxeError::NoGuests) => (StatusCode::BAD_REQUEST, ErrorCode::NoGuests),
            AppError::TooManyGuests(_) => (StatusCode::BAD_REQUEST, ErrorCode::TooManyGuests),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::NotFound(msg)
            | AppError::DataNotFound(msg)
            | AppError::Validation(msg)
            | AppError::BadRequest(msg)
            | AppError::TooManyGuests(msg) => msg.clone(),
            AppError::Kurtaxe(e) => e.to_string(),
            AppError::Database(sqlx::Error::RowNotFound) => "Not found".to_string(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kurtaxe_errors_are_client_errors() {
        let (status, code) = AppError::from(KurtaxeError::InvalidDateRange).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, ErrorCode::InvalidDateRange);

        let (status, code) = AppError::from(KurtaxeError::NoGuests).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, ErrorCode::NoGuests);
    }

    #[test]
    fn test_not_found_status() {
        let (status, code) = AppError::NotFound("Booking 1 not found".into()).status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, ErrorCode::NoSuchBooking);

        let (status, code) = AppError::DataNotFound("Kurtaxe rate 1 not found".into()).status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, ErrorCode::NoSuchData);
    }

    #[tokio::test]
    async fn test_error_body_names_code() {
        let response = AppError::from(KurtaxeError::NoGuests).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "NoGuests");
        assert_eq!(body["code"], 7);
        assert_eq!(body["message"], "At least one guest is required");
    }
}
