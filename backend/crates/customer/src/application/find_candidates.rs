//! Find Candidates Use Case
//!
//! Coarse, server-side half of duplicate detection: every record sharing
//! the initials of the typed pair. Fine ranking happens on the caller's
//! side with `domain::services::rank_candidates`.

use std::sync::Arc;

use crate::domain::entities::CustomerSummary;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_objects::Initials;
use crate::error::CustomerResult;

/// Prefix candidate lookup
pub struct FindCandidatesUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> FindCandidatesUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> CustomerResult<Vec<CustomerSummary>> {
        let Some(initials) = Initials::of(first_name, last_name) else {
            return Ok(Vec::new());
        };

        let candidates = self.repo.find_by_initials(&initials).await?;

        tracing::debug!(
            first = initials.first(),
            last = initials.last(),
            count = candidates.len(),
            "Prefix candidates fetched"
        );

        Ok(candidates)
    }
}
