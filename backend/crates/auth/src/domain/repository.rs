//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account.
    ///
    /// Fails with `AuthError::DuplicateUserName` when the canonical user name
    /// is already taken.
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find account by canonical user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<Account>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}
