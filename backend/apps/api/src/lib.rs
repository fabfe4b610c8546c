//! API Server Library
//!
//! Router composition and configuration, shared by the binary and by
//! end-to-end tests that run the server in-process.

pub mod app;
pub mod config;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
