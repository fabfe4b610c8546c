//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed ID wrappers for accounts and customers
//! - The authenticated actor carried through request context
//! - Name formatting shared by accounts and customers
//! - The JSON response envelope
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod actor;
pub mod id;
pub mod name;
pub mod response;
