//! Authenticate Use Case
//!
//! Verifies bearer tokens and resolves them to an [`Actor`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::actor::Actor;
use kernel::id::AccountId;
use platform::token;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Session token claims
///
/// `iat` and `exp` are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: AccountId,
    pub full_name: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn issue(actor: &Actor, now: DateTime<Utc>, ttl_secs: i64) -> Self {
        let iat = now.timestamp();
        Self {
            user_id: actor.account_id,
            full_name: actor.full_name.clone(),
            iat,
            exp: iat.saturating_add(ttl_secs),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn sign(&self, config: &AuthConfig) -> AuthResult<String> {
        token::sign(self, &config.token_secret).map_err(|e| AuthError::Internal(e.to_string()))
    }

    pub fn into_actor(self) -> Actor {
        Actor::new(self.user_id, self.full_name)
    }
}

/// Authenticate use case
#[derive(Clone)]
pub struct AuthenticateUseCase {
    config: Arc<AuthConfig>,
}

impl AuthenticateUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, bearer_token: &str) -> AuthResult<Actor> {
        self.execute_at(bearer_token, Utc::now())
    }

    /// Authenticate against an explicit clock
    pub fn execute_at(&self, bearer_token: &str, now: DateTime<Utc>) -> AuthResult<Actor> {
        let claims: SessionClaims =
            token::verify(bearer_token, &self.config.token_secret).map_err(|e| {
                tracing::debug!(error = %e, "Token verification failed");
                AuthError::InvalidToken
            })?;

        if claims.is_expired_at(now) {
            tracing::debug!(exp = claims.exp, "Token expired");
            return Err(AuthError::InvalidToken);
        }

        Ok(claims.into_actor())
    }
}
