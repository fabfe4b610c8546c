//! Auth Middleware
//!
//! Middleware for requiring a bearer token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::AuthenticateUseCase;
use crate::error::AuthError;

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware that requires a valid bearer token.
///
/// On success the resolved `kernel::actor::Actor` is inserted into the
/// request extensions.
///
/// ```ignore
/// router.layer(axum::middleware::from_fn_with_state(
///     AuthenticateUseCase::new(config),
///     require_bearer,
/// ))
/// ```
pub async fn require_bearer(
    State(authenticate): State<AuthenticateUseCase>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(req.headers()) else {
        return AuthError::MissingToken.into_response();
    };

    match authenticate.execute(token) {
        Ok(actor) => {
            req.extensions_mut().insert(actor);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("bearer abc")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
