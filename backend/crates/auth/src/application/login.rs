//! Login Use Case
//!
//! Verifies credentials and issues a signed session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::authenticate::SessionClaims;
use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Bearer token for the `Authorization` header
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        self.execute_at(input, Utc::now()).await
    }

    /// Login with an explicit issue time
    pub async fn execute_at(
        &self,
        input: LoginInput,
        now: DateTime<Utc>,
    ) -> AuthResult<LoginOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let candidate = RawPassword::candidate(input.password);
        if !account
            .password_hash
            .verify(&candidate, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = SessionClaims::issue(&account.actor(), now, self.config.token_ttl_secs());
        let token = claims.sign(&self.config)?;

        tracing::info!(
            account_id = %account.account_id,
            user_name = %account.user_name,
            "Account logged in"
        );

        Ok(LoginOutput { token })
    }
}
