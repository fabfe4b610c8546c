//! API DTOs (Data Transfer Objects)
//!
//! Shared with the `client` crate, so responses also derive `Deserialize`
//! and requests `Serialize`.

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, CustomerId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Customer, CustomerSummary};
use crate::domain::value_objects::{CustomerName, NameField, required_part};
use crate::error::CustomerResult;

// ============================================================================
// Requests
// ============================================================================

/// Create / update request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl CustomerRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    pub fn validate(self) -> CustomerResult<CustomerName> {
        CustomerName::new(self.first_name, self.last_name)
    }
}

/// Duplicate-candidate lookup body
///
/// Only presence is checked; a single typed letter is a valid prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl FilterRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// Trimmed (first, last)
    pub fn validate(self) -> CustomerResult<(String, String)> {
        Ok((
            required_part(self.first_name, NameField::First)?,
            required_part(self.last_name, NameField::Last)?,
        ))
    }
}

/// `GET /api/customers?fullName=&limit=`
///
/// `limit` stays a string so a malformed value falls back to the default
/// instead of failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Full customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub last_modified_by: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            full_name: c.full_name,
            last_modified_by: c.last_modified_by,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// `{ id, firstName, lastName }` projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummaryResponse {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
}

impl From<CustomerSummary> for CustomerSummaryResponse {
    fn from(s: CustomerSummary) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
        }
    }
}

impl From<CustomerSummaryResponse> for CustomerSummary {
    fn from(s: CustomerSummaryResponse) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
        }
    }
}
