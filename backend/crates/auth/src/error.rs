//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// `Display` is the message sent to the client.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input, first violated rule wins
    #[error("{0}")]
    Validation(String),

    /// Admin key missing from configuration or not matching
    #[error("Invalid admin key.")]
    InvalidAdminKey,

    /// User name already exists
    #[error("User name already exists.")]
    DuplicateUserName,

    /// Unknown user or wrong password
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// No `Authorization: Bearer` header
    #[error("Unauthorized")]
    MissingToken,

    /// Bad signature, malformed or expired token
    #[error("Invalid token")]
    InvalidToken,

    /// Database error
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal server error")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_)
            | AuthError::InvalidAdminKey
            | AuthError::DuplicateUserName
            | AuthError::InvalidCredentials => ErrorKind::BadRequest,
            AuthError::MissingToken | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidAdminKey => {
                tracing::warn!("Registration with invalid admin key");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<axum::extract::rejection::JsonRejection> for AuthError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}
