//! Client Error Types

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur when talking to the API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response, `message` from the response envelope
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Success response without the expected `data`
    #[error("response has no data")]
    MissingData,

    /// No usable session token
    #[error("not logged in")]
    NotLoggedIn,

    #[error("invalid session token")]
    InvalidToken,

    /// Token store I/O
    #[error("token store error: {0}")]
    Store(#[from] std::io::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Duplicate customer (409)
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
