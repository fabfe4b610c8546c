//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod login;
pub mod register;

// Re-exports
pub use authenticate::{AuthenticateUseCase, SessionClaims};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
