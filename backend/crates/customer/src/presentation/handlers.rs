//! HTTP Handlers
//!
//! Every route sits behind the bearer middleware, which puts the
//! authenticated `Actor` into the request extensions.

use axum::Json;
use axum::extract::{FromRequestParts, Path, Query, State};
use axum::http::request::Parts;
use axum_extra::extract::WithRejection;
use kernel::actor::Actor;
use kernel::id::{AccountId, CustomerId};
use kernel::response::Reply;
use std::sync::Arc;

use crate::application::config::CustomerConfig;
use crate::application::{
    CreateCustomerInput, CreateCustomerUseCase, FindCandidatesUseCase, ListCustomersUseCase,
    SearchCustomersUseCase, UpdateCustomerInput, UpdateCustomerUseCase,
};
use crate::domain::repository::CustomerRepository;
use crate::domain::value_objects::SearchQuery;
use crate::error::{CustomerError, CustomerResult};
use crate::presentation::dto::{
    CustomerRequest, CustomerResponse, CustomerSummaryResponse, FilterRequest, SearchParams,
};

/// Shared state for customer handlers
#[derive(Clone)]
pub struct CustomerAppState<R>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<CustomerConfig>,
}

/// Account id of the authenticated caller, or `MissingActor`
pub struct CurrentActor(pub AccountId);

impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = CustomerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Actor>()
            .map(|actor| CurrentActor(actor.account_id))
            .ok_or(CustomerError::MissingActor)
    }
}

// ============================================================================
// Create / Update
// ============================================================================

/// POST /api/customers
pub async fn create<R>(
    State(state): State<CustomerAppState<R>>,
    CurrentActor(actor): CurrentActor,
    WithRejection(Json(req), _): WithRejection<Json<CustomerRequest>, CustomerError>,
) -> CustomerResult<Reply<CustomerResponse>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let name = req.validate()?;

    let use_case = CreateCustomerUseCase::new(state.repo.clone());
    let customer = use_case.execute(CreateCustomerInput { name, actor }).await?;

    Ok(Reply::created(
        "Customer added successfully",
        CustomerResponse::from(customer),
    ))
}

/// PUT /api/customers/{id}
pub async fn update<R>(
    State(state): State<CustomerAppState<R>>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<CustomerRequest>, CustomerError>,
) -> CustomerResult<Reply<CustomerResponse>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let id: CustomerId = id.parse().map_err(|_| CustomerError::InvalidId)?;
    let name = req.validate()?;

    let use_case = UpdateCustomerUseCase::new(state.repo.clone());
    let customer = use_case
        .execute(UpdateCustomerInput { id, name, actor })
        .await?;

    Ok(Reply::created(
        "Customer updated successfully",
        CustomerResponse::from(customer),
    ))
}

// ============================================================================
// Queries
// ============================================================================

/// GET /api/customers?fullName=&limit=
pub async fn search<R>(
    State(state): State<CustomerAppState<R>>,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, CustomerError>,
    actor: Result<CurrentActor, CustomerError>,
) -> CustomerResult<Reply<Vec<CustomerResponse>>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let query = SearchQuery::parse(
        params.full_name,
        params.limit,
        state.config.max_recent_limit,
    )?;
    let CurrentActor(actor) = actor?;

    let use_case = SearchCustomersUseCase::new(state.repo.clone());
    let customers = use_case.execute(actor, query).await?;

    Ok(Reply::ok(
        "Successfully retrieved customer(s)",
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// GET /api/customers/all
pub async fn list_all<R>(
    State(state): State<CustomerAppState<R>>,
) -> CustomerResult<Reply<Vec<CustomerSummaryResponse>>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCustomersUseCase::new(state.repo.clone());
    let summaries = use_case.execute().await?;

    Ok(Reply::ok(
        "Successfully retrieved customer(s)",
        summaries
            .into_iter()
            .map(CustomerSummaryResponse::from)
            .collect(),
    ))
}

/// POST /api/customers/filters
pub async fn filters<R>(
    State(state): State<CustomerAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<FilterRequest>, CustomerError>,
) -> CustomerResult<Reply<Vec<CustomerSummaryResponse>>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let (first_name, last_name) = req.validate()?;

    let use_case = FindCandidatesUseCase::new(state.repo.clone());
    let candidates = use_case.execute(&first_name, &last_name).await?;

    Ok(Reply::ok(
        "Successfully retrieved matched customer(s)",
        candidates
            .into_iter()
            .map(CustomerSummaryResponse::from)
            .collect(),
    ))
}
