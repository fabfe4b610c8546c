//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CustomerAppState;
pub use router::{customer_router, customer_router_generic};
