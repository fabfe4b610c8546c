//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;
use kernel::response::Reply;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginUseCase, RegisterUseCase};
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<RegisterRequest>, AuthError>,
) -> AuthResult<Reply<()>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let input = req.validate()?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(input).await?;

    Ok(Reply::created_empty("User has been successfully created."))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, AuthError>,
) -> AuthResult<Reply<LoginResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let input = req.validate()?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(input).await?;

    Ok(Reply::ok(
        "Successfully logged in.",
        LoginResponse {
            token: output.token,
        },
    ))
}
