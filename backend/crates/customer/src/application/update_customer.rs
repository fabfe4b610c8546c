//! Update Customer Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, CustomerId};

use crate::domain::entities::Customer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_objects::CustomerName;
use crate::error::{CustomerError, CustomerResult};

/// Update input
pub struct UpdateCustomerInput {
    pub id: CustomerId,
    pub name: CustomerName,
    pub actor: AccountId,
}

/// Update customer use case
pub struct UpdateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateCustomerInput) -> CustomerResult<Customer> {
        self.execute_at(input, Utc::now()).await
    }

    /// Update with an explicit modification time
    pub async fn execute_at(
        &self,
        input: UpdateCustomerInput,
        now: DateTime<Utc>,
    ) -> CustomerResult<Customer> {
        // Conflict is checked before existence, keeping the record's own pair free
        if self
            .repo
            .exists_by_name(input.name.first(), input.name.last(), Some(input.id))
            .await?
        {
            return Err(CustomerError::NameTaken);
        }

        let mut customer = self
            .repo
            .find_by_id(input.id)
            .await?
            .ok_or(CustomerError::NotFound)?;

        customer.rename(input.name, input.actor, now);

        if !self.repo.update(&customer).await? {
            return Err(CustomerError::NotFound);
        }

        tracing::info!(
            customer_id = %customer.id,
            account_id = %customer.last_modified_by,
            full_name = %customer.full_name,
            "Customer updated"
        );

        Ok(customer)
    }
}
