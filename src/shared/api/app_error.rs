// src/shared/api/app_error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;
use uuid::Uuid;

use crate::shared::api::{ApiError, ApiResponse};

/// Every failure a handler can surface, translated into one response shape.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    MissingFields(String),

    #[error("Validation Error")]
    Validation(Vec<String>),

    #[error("{0} already exists")]
    DuplicateKey(String),

    #[error("Invalid ID format")]
    InvalidId,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("{message}")]
    NotFound { code: &'static str, message: String },

    #[error("Database not connected")]
    DatastoreUnavailable,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(code: &'static str, message: &str) -> Self {
        AppError::NotFound {
            code,
            message: message.to_string(),
        }
    }

    /// Detail that may be shown to developers; `None` for client-facing errors.
    pub fn internal_detail(&self) -> Option<&str> {
        match self {
            AppError::Internal(detail) => Some(detail),
            _ => None,
        }
    }

    fn api_error(&self) -> ApiError {
        match self {
            AppError::MissingFields(message) => ApiError::new("MISSING_FIELDS", message),
            AppError::Validation(errors) => ApiError {
                errors: errors.clone(),
                ..ApiError::new("VALIDATION_ERROR", "Validation Error")
            },
            AppError::DuplicateKey(field) => ApiError {
                field: Some(field.clone()),
                ..ApiError::new("DUPLICATE_KEY", &self.to_string())
            },
            AppError::InvalidId => ApiError::new("INVALID_ID", "Invalid ID format"),
            AppError::InvalidToken => ApiError::new("INVALID_TOKEN", "Invalid token"),
            AppError::TokenExpired => ApiError::new("TOKEN_EXPIRED", "Token expired"),
            AppError::NotFound { code, message } => ApiError::new(code, message),
            AppError::DatastoreUnavailable => {
                ApiError::new("DATABASE_UNAVAILABLE", "Database not connected")
            }
            AppError::Internal(_) => {
                ApiError::new("INTERNAL_ERROR", "An unexpected error occurred")
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields(_)
            | AppError::Validation(_)
            | AppError::DuplicateKey(_)
            | AppError::InvalidId => StatusCode::BAD_REQUEST,
            AppError::InvalidToken | AppError::TokenExpired => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::DatastoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            error!("Unhandled error: {}", detail);
        }
        ApiResponse::failure(self.status_code(), self.api_error())
    }
}

/// Parses a path identifier, rejecting anything that is not a UUID.
pub fn parse_record_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::InvalidId)
}
