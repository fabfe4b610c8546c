//! Create Customer Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entities::Customer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_objects::CustomerName;
use crate::error::{CustomerError, CustomerResult};

/// Create input
pub struct CreateCustomerInput {
    pub name: CustomerName,
    pub actor: AccountId,
}

/// Create customer use case
pub struct CreateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateCustomerInput) -> CustomerResult<Customer> {
        if self
            .repo
            .exists_by_name(input.name.first(), input.name.last(), None)
            .await?
        {
            return Err(CustomerError::DuplicateCustomer);
        }

        let customer = Customer::new(input.name, input.actor);

        // A concurrent create of the same pair is rejected by the unique index
        self.repo.create(&customer).await?;

        tracing::info!(
            customer_id = %customer.id,
            account_id = %customer.last_modified_by,
            full_name = %customer.full_name,
            "Customer created"
        );

        Ok(customer)
    }
}
