//! Router Composition
//!
//! `/api/auth` is public; `/api/customers` sits behind the bearer
//! middleware, which resolves the caller into a `kernel::actor::Actor`.

use std::sync::Arc;

use auth::domain::repository::AccountRepository;
use auth::{AuthConfig, AuthenticateUseCase, auth_router_generic, require_bearer};
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use customer::domain::repository::CustomerRepository;
use customer::{CustomerConfig, customer_router_generic};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// Compose the API over any pair of repositories
pub fn build_router<A, C>(
    accounts: A,
    customers: C,
    auth_config: Arc<AuthConfig>,
    customer_config: Arc<CustomerConfig>,
) -> Router
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    C: CustomerRepository + Clone + Send + Sync + 'static,
{
    let authenticate = AuthenticateUseCase::new(auth_config.clone());

    let customers = customer_router_generic(customers, customer_config).route_layer(
        middleware::from_fn_with_state(authenticate, require_bearer),
    );

    Router::new()
        .nest("/api/auth", auth_router_generic(accounts, auth_config))
        .nest("/api/customers", customers)
}

/// CORS for the browser front end
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
