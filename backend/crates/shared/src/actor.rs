//! Authenticated actor
//!
//! The identity a verified bearer token resolves to. The auth middleware
//! inserts it into request extensions; customer handlers read it to stamp
//! `lastModifiedBy` and to scope "recent" searches.

use serde::{Deserialize, Serialize};

use crate::id::AccountId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub account_id: AccountId,
    pub full_name: String,
}

impl Actor {
    pub fn new(account_id: AccountId, full_name: impl Into<String>) -> Self {
        Self {
            account_id,
            full_name: full_name.into(),
        }
    }
}
