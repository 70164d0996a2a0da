//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server faults to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, ApiError>`; responses carry a JSON `{"message": ...}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::store::{StoreError, UserStoreError};

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] UserStoreError),

    /// Document store operation failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Session read/write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No authenticated session.
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated, but not allowed.
    #[error("Forbidden")]
    Forbidden,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server faults to Sentry
        if matches!(
            self,
            Self::Store(_)
                | Self::Session(_)
                | Self::Internal(_)
                | Self::Auth(UserStoreError::PasswordHash | UserStoreError::Store(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Store(_) | Self::Session(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Auth(err) => match err {
                UserStoreError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                UserStoreError::EmailInUse => StatusCode::CONFLICT,
                UserStoreError::InvalidEmail(_) | UserStoreError::Validation(_) => {
                    StatusCode::BAD_REQUEST
                }
                UserStoreError::PasswordHash | UserStoreError::Store(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) | Self::Session(_) | Self::Internal(_) => "Server error".to_string(),
            Self::Auth(err) => match err {
                UserStoreError::InvalidCredentials => "Invalid email or password".to_string(),
                UserStoreError::EmailInUse => "Email already in use".to_string(),
                UserStoreError::InvalidEmail(_) => "Invalid email address".to_string(),
                UserStoreError::Validation(msg) => msg.clone(),
                UserStoreError::PasswordHash | UserStoreError::Store(_) => {
                    "Server error".to_string()
                }
            },
            Self::NotFound(what) => format!("{what} not found"),
            Self::Unauthorized => "Not authorized".to_string(),
            Self::Forbidden => "Not authorized as an admin".to_string(),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
