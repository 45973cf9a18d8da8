//! REST API error types
//!
//! Every error leaves the service as `{error, code, field?}` with a status
//! code derived from the variant.

use nutri_auth::AuthError;
use nutri_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: &'static str,
    /// Offending request field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed field (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Duplicate email or deleted profile (400)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Bad login (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Too many auth requests (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Unreadable body or query string (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. }
            | ApiError::Conflict { .. }
            | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                error: message,
                code: "VALIDATION_ERROR",
                field,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                error: message,
                code: "CONFLICT",
                field: None,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                error: message,
                code: "INVALID_CREDENTIALS",
                field: None,
            },
            ApiError::RateLimited { message, .. } => ApiErrorBody {
                error: message,
                code: "RATE_LIMIT_EXCEEDED",
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                error: message,
                code: "INTERNAL_ERROR",
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                error: message,
                code: "BAD_REQUEST",
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::Conflict { message, .. } => ApiError::Conflict { message, location },
            // Already logged with operation context; message is client-safe
            CoreError::Store { message, .. } => ApiError::Internal { message, location },
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            AuthError::Conflict { message, .. } => ApiError::Conflict { message, location },
            AuthError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: "Invalid email or password".to_string(),
                location,
            },
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!(
                    "Too many requests, at most {} per {}s allowed",
                    limit, window_secs
                ),
                location,
            },
            AuthError::Store { message, .. } => ApiError::Internal { message, location },
            AuthError::Hashing { message, .. } => {
                log::error!("Password processing failed: {}", message);
                ApiError::Internal {
                    message: "Password processing failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
