//! API Client
//!
//! Thin typed wrapper over the JSON endpoints. Every response body is a
//! `kernel::response::Envelope`; non-2xx responses become
//! [`ClientError::Api`] carrying the envelope message.

use customer::CustomerSummary;
use customer::presentation::dto::{
    CustomerRequest, CustomerResponse, CustomerSummaryResponse, FilterRequest, SearchParams,
};
use kernel::id::CustomerId;
use kernel::response::Envelope;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::session::{Session, TokenStore};

/// Admin-gated account registration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub user_name: String,
    pub password: String,
    pub admin_key: String,
    pub full_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Credentials<'a> {
    user_name: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenData {
    token: String,
}

/// HTTP client for the customer registration API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST /api/auth/register
    pub async fn register(&self, registration: &Registration) -> ClientResult<()> {
        let request = self
            .client
            .post(self.url("/api/auth/register"))
            .json(registration);
        send::<serde_json::Value>(request).await?;
        Ok(())
    }

    /// POST /api/auth/login, returning the bearer token
    pub async fn login(&self, user_name: &str, password: &str) -> ClientResult<String> {
        let request = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&Credentials {
                user_name,
                password,
            });
        let issued: TokenData = data(send(request).await?)?;
        Ok(issued.token)
    }

    /// Customer endpoints authorized with the session's token
    pub fn customers<S: TokenStore>(&self, session: &Session<S>) -> ClientResult<CustomerApi> {
        let token = session.token().ok_or(ClientError::NotLoggedIn)?;
        Ok(CustomerApi {
            api: self.clone(),
            token: token.to_string(),
        })
    }
}

/// Authorized customer endpoints
///
/// Owns its token so it can be handed to background tasks.
#[derive(Debug, Clone)]
pub struct CustomerApi {
    api: ApiClient,
    token: String,
}

impl CustomerApi {
    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.api
            .client
            .request(method, self.api.url(path))
            .bearer_auth(&self.token)
    }

    /// POST /api/customers
    pub async fn create(&self, first_name: &str, last_name: &str) -> ClientResult<CustomerResponse> {
        let request = self
            .request(reqwest::Method::POST, "/api/customers")
            .json(&CustomerRequest::new(first_name, last_name));
        data(send(request).await?)
    }

    /// PUT /api/customers/{id}
    pub async fn update(
        &self,
        id: CustomerId,
        first_name: &str,
        last_name: &str,
    ) -> ClientResult<CustomerResponse> {
        let request = self
            .request(reqwest::Method::PUT, &format!("/api/customers/{id}"))
            .json(&CustomerRequest::new(first_name, last_name));
        data(send(request).await?)
    }

    /// GET /api/customers?fullName=&limit=
    pub async fn search(&self, params: &SearchParams) -> ClientResult<Vec<CustomerResponse>> {
        let request = self
            .request(reqwest::Method::GET, "/api/customers")
            .query(params);
        data(send(request).await?)
    }

    /// GET /api/customers/all
    pub async fn list_all(&self) -> ClientResult<Vec<CustomerSummaryResponse>> {
        let request = self.request(reqwest::Method::GET, "/api/customers/all");
        data(send(request).await?)
    }

    /// POST /api/customers/filters: same-initials candidates
    pub async fn fetch_candidates(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> ClientResult<Vec<CustomerSummary>> {
        let request = self
            .request(reqwest::Method::POST, "/api/customers/filters")
            .json(&FilterRequest::new(first_name, last_name));
        let candidates: Vec<CustomerSummaryResponse> = data(send(request).await?)?;
        Ok(candidates.into_iter().map(CustomerSummary::from).collect())
    }
}

// ============================================================================
// Envelope handling
// ============================================================================

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<Envelope<T>> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let envelope: Envelope<T> = response.json().await?;
        debug!(status = status.as_u16(), message = %envelope.message, "API call succeeded");
        return Ok(envelope);
    }

    let message = match response.json::<Envelope<serde_json::Value>>().await {
        Ok(envelope) => envelope.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };
    debug!(status = status.as_u16(), message = %message, "API call failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn data<T>(envelope: Envelope<T>) -> ClientResult<T> {
    envelope.data.ok_or(ClientError::MissingData)
}
