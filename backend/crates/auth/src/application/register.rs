//! Register Use Case
//!
//! Creates a new account, gated by the configured admin key.

use std::sync::Arc;

use platform::crypto::constant_time_eq;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    full_name::FullName,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input (already checked for presence)
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
    pub full_name: String,
    pub admin_key: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub account_id: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Nothing about the account rules is revealed without the key
        if !self.admin_key_matches(&input.admin_key) {
            return Err(AuthError::InvalidAdminKey);
        }

        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let raw_password = RawPassword::new(input.password)?;
        let full_name =
            FullName::new(&input.full_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::DuplicateUserName);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let account = Account::new(user_name, password_hash, full_name);

        // Unique index catches a concurrent registration of the same name
        self.repo.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            user_name = %account.user_name,
            "Account registered"
        );

        Ok(RegisterOutput {
            account_id: account.account_id.to_string(),
        })
    }

    fn admin_key_matches(&self, provided: &str) -> bool {
        match &self.config.admin_key {
            Some(expected) => constant_time_eq(expected.as_bytes(), provided.as_bytes()),
            None => false,
        }
    }
}
