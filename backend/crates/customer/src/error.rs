//! Customer Error Types
//!
//! Business outcomes (conflict, not found) and failures of the customer
//! registry, mapped onto `kernel::error::AppError` at the HTTP boundary.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Customer-specific result type alias
pub type CustomerResult<T> = Result<T, CustomerError>;

/// Customer-specific error variants
///
/// `Display` is the message sent to the client.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Malformed or missing input, first violated rule wins
    #[error("{0}")]
    Validation(String),

    /// No authenticated actor in the request context
    #[error("No user found")]
    MissingActor,

    /// Path id is not a customer id
    #[error("Invalid customer ID")]
    InvalidId,

    /// Another record already holds the same name pair
    #[error("Customer already exists.")]
    DuplicateCustomer,

    /// Renaming onto a name pair held by another record
    #[error("Customer with provided name already exists.")]
    NameTaken,

    #[error("Customer not found")]
    NotFound,

    #[error("Internal server error")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(String),
}

impl CustomerError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CustomerError::Validation(_) | CustomerError::MissingActor | CustomerError::InvalidId => {
                ErrorKind::BadRequest
            }
            CustomerError::DuplicateCustomer | CustomerError::NameTaken => ErrorKind::Conflict,
            CustomerError::NotFound => ErrorKind::NotFound,
            CustomerError::Database(_) | CustomerError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CustomerError::Database(e) => {
                tracing::error!(error = %e, "Customer database error");
            }
            CustomerError::Internal(msg) => {
                tracing::error!(message = %msg, "Customer internal error");
            }
            CustomerError::MissingActor => {
                tracing::warn!("Customer request without authenticated actor");
            }
            _ => {
                tracing::debug!(error = %self, "Customer error");
            }
        }
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for CustomerError {
    fn from(rejection: JsonRejection) -> Self {
        CustomerError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for CustomerError {
    fn from(rejection: QueryRejection) -> Self {
        CustomerError::Validation(rejection.body_text())
    }
}
