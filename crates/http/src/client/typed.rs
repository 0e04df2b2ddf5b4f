//! Clients for the platform API, split by authentication requirement.

use std::time::Duration;

use pylon_core::SessionCredentials;
use reqwest::{Client, ClientBuilder};
use uuid::Uuid;

use super::error::ClientError;

/// Header carrying the interactive-session token.
pub const AUTH_TOKEN_HEADER: &str = "X-AUTH-TOKEN";
/// Header carrying the long-lived API token.
pub const API_TOKEN_HEADER: &str = "X-AUTH-YW-API-TOKEN";

const USER_AGENT: &str = "pylon-console/0.1.0";

/// Client for endpoints that work without a session: bootstrap login,
/// customer count, login, and registration.
#[derive(Clone)]
pub struct PublicPlatformClient {
    client: Client,
    base_url: String,
}

/// Client bound to a customer session. Every request carries the session
/// token headers; paths under `/api/customers/{id}` use the bound customer.
#[derive(Clone)]
pub struct AuthenticatedPlatformClient {
    client: Client,
    base_url: String,
    customer_id: Uuid,
    api_token: Option<String>,
    auth_token: Option<String>,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = timeout; // timeouts are not supported on wasm targets
        Ok(ClientBuilder::new().user_agent(USER_AGENT).build()?)
    }
}

impl PublicPlatformClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, None)
    }

    fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    pub(crate) async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }
}

impl AuthenticatedPlatformClient {
    /// Bind a client to a credential snapshot. Fails when the snapshot has
    /// no customer id or carries no token at all.
    pub fn from_credentials(
        base_url: impl Into<String>,
        credentials: &SessionCredentials,
    ) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, credentials, None)
    }

    fn with_timeout(
        base_url: impl Into<String>,
        credentials: &SessionCredentials,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let customer_id = credentials
            .customer_id
            .ok_or_else(|| ClientError::Configuration("session has no customer id".into()))?;
        if credentials.api_token.is_none() && credentials.auth_token.is_none() {
            return Err(ClientError::Configuration("session has no token".into()));
        }
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            customer_id,
            api_token: credentials.api_token.clone(),
            auth_token: credentials.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.auth_token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }
        if let Some(token) = &self.api_token {
            request = request.header(API_TOKEN_HEADER, token);
        }
        request
    }

    pub(crate) async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Execute a request whose response body the console does not consume.
    pub(crate) async fn execute_unit(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

/// Builder producing either client flavor.
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build_public(self) -> Result<PublicPlatformClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        PublicPlatformClient::with_timeout(base_url, self.timeout)
    }

    pub fn build_authenticated(
        self,
        credentials: &SessionCredentials,
    ) -> Result<AuthenticatedPlatformClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        AuthenticatedPlatformClient::with_timeout(base_url, credentials, self.timeout)
    }
}
