//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{AccountId, CustomerId};

use crate::domain::entities::{Customer, CustomerSummary};
use crate::domain::value_objects::Initials;
use crate::error::CustomerResult;

/// Customer repository trait
///
/// Implementations enforce case-insensitive uniqueness of the
/// (first name, last name) pair and report a violation as
/// `CustomerError::DuplicateCustomer` on create and
/// `CustomerError::NameTaken` on update.
#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// Insert a new record
    async fn create(&self, customer: &Customer) -> CustomerResult<()>;

    /// Overwrite an existing record, `false` when the id is unknown
    async fn update(&self, customer: &Customer) -> CustomerResult<bool>;

    async fn find_by_id(&self, id: CustomerId) -> CustomerResult<Option<Customer>>;

    /// Case-insensitive exact match on the name pair, optionally ignoring one record
    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
        exclude: Option<CustomerId>,
    ) -> CustomerResult<bool>;

    /// Records whose full name contains `fragment`, case-insensitively
    async fn search_by_full_name(&self, fragment: &str) -> CustomerResult<Vec<Customer>>;

    /// Records last modified by `actor`, newest first
    async fn recent_by_modifier(
        &self,
        actor: AccountId,
        limit: u32,
    ) -> CustomerResult<Vec<Customer>>;

    async fn list_summaries(&self) -> CustomerResult<Vec<CustomerSummary>>;

    /// Records whose first and last names start with the given initials
    async fn find_by_initials(&self, initials: &Initials) -> CustomerResult<Vec<CustomerSummary>>;
}
