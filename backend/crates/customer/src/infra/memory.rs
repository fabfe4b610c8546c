//! In-Memory Repository
//!
//! Used when no database is configured and in tests. Mirrors the
//! `customers` table: insertion order, and a case-insensitive unique
//! name pair.

use std::sync::Arc;

use kernel::id::{AccountId, CustomerId};
use tokio::sync::RwLock;

use crate::domain::entities::{Customer, CustomerSummary};
use crate::domain::repository::CustomerRepository;
use crate::domain::value_objects::Initials;
use crate::error::{CustomerError, CustomerResult};

/// Customers in insertion order
#[derive(Clone, Default)]
pub struct MemoryCustomerRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl MemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_name(customer: &Customer, first_name: &str, last_name: &str) -> bool {
    customer.first_name.to_lowercase() == first_name.to_lowercase()
        && customer.last_name.to_lowercase() == last_name.to_lowercase()
}

fn name_taken(
    customers: &[Customer],
    first_name: &str,
    last_name: &str,
    exclude: Option<CustomerId>,
) -> bool {
    customers
        .iter()
        .any(|c| Some(c.id) != exclude && same_name(c, first_name, last_name))
}

impl CustomerRepository for MemoryCustomerRepository {
    async fn create(&self, customer: &Customer) -> CustomerResult<()> {
        let mut customers = self.customers.write().await;
        if name_taken(&customers, &customer.first_name, &customer.last_name, None) {
            return Err(CustomerError::DuplicateCustomer);
        }
        customers.push(customer.clone());
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> CustomerResult<bool> {
        let mut customers = self.customers.write().await;
        if name_taken(
            &customers,
            &customer.first_name,
            &customer.last_name,
            Some(customer.id),
        ) {
            return Err(CustomerError::NameTaken);
        }
        match customers.iter_mut().find(|c| c.id == customer.id) {
            Some(slot) => {
                *slot = customer.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_id(&self, id: CustomerId) -> CustomerResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
        exclude: Option<CustomerId>,
    ) -> CustomerResult<bool> {
        let customers = self.customers.read().await;
        Ok(name_taken(&customers, first_name, last_name, exclude))
    }

    async fn search_by_full_name(&self, fragment: &str) -> CustomerResult<Vec<Customer>> {
        let needle = fragment.to_lowercase();
        let customers = self.customers.read().await;
        Ok(customers
            .iter()
            .filter(|c| c.full_name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn recent_by_modifier(
        &self,
        actor: AccountId,
        limit: u32,
    ) -> CustomerResult<Vec<Customer>> {
        let customers = self.customers.read().await;
        let mut recent: Vec<Customer> = customers
            .iter()
            .filter(|c| c.last_modified_by == actor)
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent.truncate(limit as usize);
        Ok(recent)
    }

    async fn list_summaries(&self) -> CustomerResult<Vec<CustomerSummary>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().map(Customer::summary).collect())
    }

    async fn find_by_initials(&self, initials: &Initials) -> CustomerResult<Vec<CustomerSummary>> {
        let customers = self.customers.read().await;
        Ok(customers
            .iter()
            .filter(|c| initials.matches(&c.first_name, &c.last_name))
            .map(Customer::summary)
            .collect())
    }
}
