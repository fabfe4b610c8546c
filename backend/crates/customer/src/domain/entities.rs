//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, CustomerId};

use crate::domain::value_objects::CustomerName;

/// Customer record
///
/// `full_name` is derived from the name pair and kept in sync by
/// [`Customer::new`] and [`Customer::rename`].
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub last_modified_by: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(name: CustomerName, actor: AccountId) -> Self {
        Self::new_at(name, actor, Utc::now())
    }

    pub fn new_at(name: CustomerName, actor: AccountId, now: DateTime<Utc>) -> Self {
        let full_name = name.full_name();
        let (first_name, last_name) = name.into_parts();
        Self {
            id: CustomerId::new(),
            first_name,
            last_name,
            full_name,
            last_modified_by: actor,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the name pair, keeping `created_at`
    pub fn rename(&mut self, name: CustomerName, actor: AccountId, now: DateTime<Utc>) {
        self.full_name = name.full_name();
        let (first_name, last_name) = name.into_parts();
        self.first_name = first_name;
        self.last_name = last_name;
        self.last_modified_by = actor;
        self.updated_at = now;
    }

    pub fn summary(&self) -> CustomerSummary {
        CustomerSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Name-only projection used for listings and duplicate candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
}
