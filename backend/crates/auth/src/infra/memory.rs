//! In-Memory Repository
//!
//! Used when no database is configured and in tests. Enforces the same
//! canonical user name uniqueness as the `accounts` table.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Accounts keyed by canonical user name
#[derive(Clone, Default)]
pub struct MemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRepository for MemoryAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;
        let key = account.user_name.canonical().to_string();
        if accounts.contains_key(&key) {
            return Err(AuthError::DuplicateUserName);
        }
        accounts.insert(key, account.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(user_name.canonical()).cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let accounts = self.accounts.read().await;
        Ok(accounts.contains_key(user_name.canonical()))
    }
}
