//! GraphQL client for the tenants endpoint.
//!
//! A [`ClientProvider`] holds a single [`GraphQLClient`] pointed at a fixed
//! endpoint. Results are cached in an [`InMemoryCache`] with a cache-first
//! policy: a query that already succeeded is answered from memory until
//! [`GraphQLClient::refetch`] or a cache reset. The cache keeps the
//! [`DEFAULT_CACHE_CAPACITY`] most recently used results.

mod cache;
mod provider;

pub use cache::{InMemoryCache, DEFAULT_CACHE_CAPACITY};
pub use provider::ClientProvider;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use cache::CacheKey;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

pub const TENANTS_QUERY: &str = "query { tenants { id name email phone houseno } }";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint {0:?}")]
    InvalidEndpoint(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQL(Vec<String>),

    #[error("response carried no data")]
    MissingData,

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

/// Response shape of [`TENANTS_QUERY`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TenantsData {
    pub tenants: Vec<TenantNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TenantNode {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub houseno: Option<String>,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

#[derive(Deserialize)]
struct ResponseBody {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Deserialize)]
struct ResponseError {
    message: String,
}

pub struct GraphQLClient {
    endpoint: Url,
    http: reqwest::Client,
    cache: InMemoryCache,
}

impl GraphQLClient {
    /// # Errors
    /// Returns [`ClientError::InvalidEndpoint`] if the endpoint is not a URL,
    /// or a transport error if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|_| ClientError::InvalidEndpoint(config.endpoint.clone()))?;

        // The endpoint is addressed directly, never through a system proxy.
        let http = reqwest::Client::builder().no_proxy().build()?;

        Ok(Self {
            endpoint,
            http,
            cache: InMemoryCache::new(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn cache(&self) -> &InMemoryCache {
        &self.cache
    }

    /// Runs `query`, answering from the cache when an identical query has
    /// already succeeded.
    ///
    /// # Errors
    /// Returns an error if the request fails, the server reports GraphQL
    /// errors, or `data` does not decode into `T`
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<T, ClientError> {
        let key = CacheKey::new(query, variables.as_ref());
        if let Some(data) = self.cache.read(&key).await {
            debug!("Cache hit for query");
            return Ok(serde_json::from_value(data)?);
        }

        let data = self.fetch(query, variables.as_ref()).await?;
        let decoded = serde_json::from_value(data.clone())?;
        self.cache.write(key, data).await;
        Ok(decoded)
    }

    /// Runs `query` against the server regardless of the cache and stores
    /// the fresh result.
    ///
    /// # Errors
    /// Same as [`GraphQLClient::query`]
    pub async fn refetch<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<T, ClientError> {
        let key = CacheKey::new(query, variables.as_ref());
        let data = self.fetch(query, variables.as_ref()).await?;
        let decoded = serde_json::from_value(data.clone())?;
        self.cache.write(key, data).await;
        Ok(decoded)
    }

    /// # Errors
    /// Same as [`GraphQLClient::query`]
    pub async fn tenants(&self) -> Result<Vec<TenantNode>, ClientError> {
        let data: TenantsData = self.query(TENANTS_QUERY, None).await?;
        Ok(data.tenants)
    }

    async fn fetch(&self, query: &str, variables: Option<&Value>) -> Result<Value, ClientError> {
        let body: ResponseBody = self
            .http
            .post(self.endpoint.clone())
            .json(&RequestBody { query, variables })
            .send()
            .await?
            .json()
            .await?;

        parse_response(body)
    }
}

fn parse_response(body: ResponseBody) -> Result<Value, ClientError> {
    if !body.errors.is_empty() {
        return Err(ClientError::GraphQL(
            body.errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    match body.data {
        Some(Value::Null) | None => Err(ClientError::MissingData),
        Some(data) => Ok(data),
    }
}
