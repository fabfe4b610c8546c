//! List Customers Use Case

use std::sync::Arc;

use crate::domain::entities::CustomerSummary;
use crate::domain::repository::CustomerRepository;
use crate::error::CustomerResult;

/// Enumerate every customer as a name projection
pub struct ListCustomersUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> ListCustomersUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CustomerResult<Vec<CustomerSummary>> {
        self.repo.list_summaries().await
    }
}
