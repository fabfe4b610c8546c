//! Headless Customer Form Client
//!
//! - [`ApiClient`] / [`CustomerApi`] - typed calls against `/api/auth` and `/api/customers`
//! - [`Session`] - bearer token with an explicit init / login / logout lifecycle
//! - [`Debouncer`] - cancellable delayed task, one in flight
//! - [`DuplicateWatcher`] - search-as-you-type duplicate warnings

pub mod api;
pub mod debounce;
pub mod error;
pub mod session;
pub mod watcher;

pub use api::{ApiClient, CustomerApi, Registration};
pub use debounce::Debouncer;
pub use error::{ClientError, ClientResult};
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenClaims, TokenStore};
pub use watcher::{CandidateSource, DuplicateWatcher};
