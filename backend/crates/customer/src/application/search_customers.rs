//! Search Customers Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entities::Customer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_objects::SearchQuery;
use crate::error::CustomerResult;

/// Full-name search, or the caller's most recently modified records
pub struct SearchCustomersUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> SearchCustomersUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        actor: AccountId,
        query: SearchQuery,
    ) -> CustomerResult<Vec<Customer>> {
        match query {
            SearchQuery::FullName(fragment) => self.repo.search_by_full_name(&fragment).await,
            SearchQuery::Recent { limit } => self.repo.recent_by_modifier(actor, limit).await,
        }
    }
}
