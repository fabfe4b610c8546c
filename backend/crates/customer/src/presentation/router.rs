//! Customer Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::CustomerConfig;
use crate::domain::repository::CustomerRepository;
use crate::infra::postgres::PgCustomerRepository;
use crate::presentation::handlers::{self, CustomerAppState};

/// Create the Customer router with PostgreSQL repository
pub fn customer_router(repo: PgCustomerRepository, config: Arc<CustomerConfig>) -> Router {
    customer_router_generic(repo, config)
}

/// Create a generic Customer router for any repository implementation
///
/// Expects an `Actor` in the request extensions; layer it behind
/// `auth::require_bearer`.
pub fn customer_router_generic<R>(repo: R, config: Arc<CustomerConfig>) -> Router
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let state = CustomerAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/",
            get(handlers::search::<R>).post(handlers::create::<R>),
        )
        .route("/all", get(handlers::list_all::<R>))
        .route("/filters", post(handlers::filters::<R>))
        .route("/{id}", put(handlers::update::<R>))
        .with_state(state)
}
