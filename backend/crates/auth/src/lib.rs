//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (register, login, authenticate)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Security Model
//! - Registration requires the configured admin key (constant-time compare)
//! - Passwords hashed with Argon2id, optional pepper
//! - Stateless HS256 session tokens carrying `{ userId, fullName, iat, exp }`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{AuthenticateUseCase, SessionClaims};
pub use error::{AuthError, AuthResult};
pub use infra::{MemoryAccountRepository, PgAccountRepository};
pub use presentation::middleware::require_bearer;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
