//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryCustomerRepository;
pub use postgres::PgCustomerRepository;
