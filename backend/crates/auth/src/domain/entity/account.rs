//! Account Entity
//!
//! A registered operator allowed to manage customer records.

use chrono::{DateTime, Utc};
use kernel::actor::Actor;
use kernel::id::AccountId;

use crate::domain::value_object::{
    full_name::FullName, user_name::UserName, user_password::UserPassword,
};

/// Account entity
///
/// Created by admin-gated registration; never updated or deleted.
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    /// Login handle (unique by canonical form)
    pub user_name: UserName,
    pub password_hash: UserPassword,
    /// Smart-capitalized display name
    pub full_name: FullName,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    pub fn new(user_name: UserName, password_hash: UserPassword, full_name: FullName) -> Self {
        Self {
            account_id: AccountId::new(),
            user_name,
            password_hash,
            full_name,
            created_at: Utc::now(),
        }
    }

    /// Identity carried in session tokens
    pub fn actor(&self) -> Actor {
        Actor::new(self.account_id, self.full_name.as_str())
    }
}
