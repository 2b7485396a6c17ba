// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::content::{ContentSource, Resolved};

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ContentSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Per-field validation messages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Field that caused a uniqueness conflict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Internal detail, only attached outside production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            errors: Vec::new(),
            field: None,
            stack: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    fn with_data(data: T) -> Self {
        ApiResponse {
            success: true,
            message: None,
            data: Some(data),
            source: None,
            timestamp: None,
            error: None,
        }
    }

    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::with_data(data))
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(Self::with_data(data))
    }

    pub fn success_with_message(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            message: Some(message.to_string()),
            ..Self::with_data(data)
        })
    }

    pub fn created_with_message(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            message: Some(message.to_string()),
            ..Self::with_data(data)
        })
    }

    /// Read-side response tagged with where the content came from.
    pub fn resolved(resolved: Resolved<T>) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            source: Some(resolved.source),
            timestamp: Some(Utc::now()),
            ..Self::with_data(resolved.data)
        })
    }
}

impl ApiResponse<()> {
    pub fn failure(status: StatusCode, error: ApiError) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            message: None,
            data: None,
            source: None,
            timestamp: None,
            error: Some(error),
        })
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        Self::failure(status, ApiError::new(code, message))
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn service_unavailable(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::SERVICE_UNAVAILABLE, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }

    pub fn internal_error_with_stack(stack: &str) -> HttpResponse {
        let mut error = ApiError::new("INTERNAL_ERROR", "An unexpected error occurred");
        error.stack = Some(stack.to_string());
        Self::failure(StatusCode::INTERNAL_SERVER_ERROR, error)
    }
}
