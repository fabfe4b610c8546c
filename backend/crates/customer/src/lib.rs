//! Customer Registry Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Customer entity, name validation, repository trait, fuzzy ranking
//! - `application/` - Use cases (create, update, search, list, find candidates)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Duplicate Prevention
//! - Writes check the case-insensitive (first, last) pair before touching
//!   the store; the store's unique index catches concurrent writers
//! - `POST /filters` returns every record sharing both initials; callers
//!   rank that set with [`rank_candidates`] as the user types

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::CustomerConfig;
pub use domain::entities::{Customer, CustomerSummary};
pub use domain::services::{RankedCandidate, rank_candidates};
pub use domain::value_objects::Initials;
pub use error::{CustomerError, CustomerResult};
pub use infra::{MemoryCustomerRepository, PgCustomerRepository};
pub use presentation::router::{customer_router, customer_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
