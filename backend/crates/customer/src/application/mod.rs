//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod create_customer;
pub mod find_candidates;
pub mod list_customers;
pub mod search_customers;
pub mod update_customer;

pub use create_customer::{CreateCustomerInput, CreateCustomerUseCase};
pub use find_candidates::FindCandidatesUseCase;
pub use list_customers::ListCustomersUseCase;
pub use search_customers::SearchCustomersUseCase;
pub use update_customer::{UpdateCustomerInput, UpdateCustomerUseCase};
