//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::{LoginInput, RegisterInput};
use crate::error::{AuthError, AuthResult};

/// Trimmed, non-empty field or the given message
pub(crate) fn required(value: Option<String>, message: &str) -> AuthResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AuthError::Validation(message.to_string())),
    }
}

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Fields are optional so a missing field reports its own message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub admin_key: Option<String>,
}

impl RegisterRequest {
    /// Presence checks in field order
    pub fn validate(self) -> AuthResult<RegisterInput> {
        Ok(RegisterInput {
            user_name: required(self.user_name, "Username is required")?,
            password: required(self.password, "Password is required")?,
            full_name: required(self.full_name, "Full name is required")?,
            admin_key: required(self.admin_key, "Admin key is required")?,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(self) -> AuthResult<LoginInput> {
        Ok(LoginInput {
            user_name: required(self.user_name, "Username is required")?,
            password: required(self.password, "Password is required")?,
        })
    }
}

/// Login response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
}
