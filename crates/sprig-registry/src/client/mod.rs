//! HTTP client with bounded retry and linear backoff.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::{debug, warn};

use sprig_core::error::SprigError;
use sprig_core::types::ComponentRecord;

use crate::api::{self, Catalog};
use crate::RegistryResult;

/// Default registry endpoint
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.sprig-ui.dev";

/// Configuration for the retry policy.
///
/// Backoff is linear, not exponential: the wait before attempt n+1 is
/// `base_delay * n`. Every failed attempt is retried uniformly regardless
/// of the error's kind; only a successful not-found response short-circuits.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts, including the first
    pub max_attempts: u32,
    /// Base unit for the linear backoff
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

/// HTTP client for the component registry
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Underlying HTTP client with connection pooling
    client: Client,
    /// Retry configuration
    retry_config: RetryConfig,
    /// Base registry URL
    base_url: String,
}

impl RegistryClient {
    /// Create a client against the default registry
    pub fn new() -> RegistryResult<Self> {
        Self::with_config(DEFAULT_REGISTRY_URL, RetryConfig::default())
    }

    /// Create a client with a custom registry URL and retry policy
    pub fn with_config(
        base_url: impl Into<String>,
        retry_config: RetryConfig,
    ) -> RegistryResult<Self> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(30))
            .gzip(true)
            .user_agent(concat!("sprig/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                SprigError::network("Failed to create HTTP client".to_string(), e)
            })?;

        Ok(Self {
            client,
            retry_config,
            base_url: base_url.into(),
        })
    }

    /// Run `operation` under the retry policy.
    ///
    /// On exhausting the attempt budget the last error is wrapped into a
    /// terminal network error carrying the attempt count and `context`.
    pub async fn with_retry<F, Fut, T>(&self, operation: F, context: &str) -> RegistryResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = RegistryResult<T>>,
    {
        let max_attempts = self.retry_config.max_attempts;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    warn!(context, attempt, %error, "registry operation failed");
                    last_error = Some(error);

                    if attempt < max_attempts {
                        tokio::time::sleep(self.retry_config.base_delay * attempt).await;
                    }
                }
            }
        }

        let last = last_error.unwrap_or_else(|| SprigError::Network {
            message: "retry budget was zero".to_string(),
            attempts: None,
            source: None,
        });

        Err(SprigError::network_exhausted(
            format!("{} failed: {}", context, last),
            max_attempts,
            last,
        ))
    }

    /// Fetch a component record, failing with `ComponentNotFound` when the
    /// registry resolves the name to nothing
    pub async fn get_component(&self, name: &str) -> RegistryResult<ComponentRecord> {
        let context = format!("fetch component '{}'", name);
        let record = self
            .with_retry(|| self.fetch_component(name), &context)
            .await?;

        record.ok_or_else(|| SprigError::ComponentNotFound {
            name: name.to_string(),
        })
    }

    /// Fetch the full catalog keyed by component name
    pub async fn get_all_components(&self) -> RegistryResult<Catalog> {
        self.with_retry(|| self.fetch_catalog(), "fetch component catalog")
            .await
    }

    /// One transport-level fetch of a component record.
    ///
    /// A 404 is a successful "not found" response and must not be retried,
    /// so it maps to `Ok(None)` rather than an error.
    async fn fetch_component(&self, name: &str) -> RegistryResult<Option<ComponentRecord>> {
        let url = api::component_url(&self.base_url, name);
        debug!(%url, "fetching component record");

        let response = self.client.get(&url).send().await.map_err(|e| {
            SprigError::network(format!("Failed to reach registry: {}", e), e)
        })?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let record = response.json::<ComponentRecord>().await.map_err(|e| {
                    SprigError::network(
                        format!("Failed to parse component record: {}", e),
                        e,
                    )
                })?;
                Ok(Some(record))
            }
            reqwest::StatusCode::NOT_FOUND => Ok(None),
            status => Err(SprigError::Network {
                message: format!("Registry returned status {} for '{}'", status, name),
                attempts: None,
                source: None,
            }),
        }
    }

    async fn fetch_catalog(&self) -> RegistryResult<Catalog> {
        let url = api::catalog_url(&self.base_url);
        debug!(%url, "fetching component catalog");

        let response = self.client.get(&url).send().await.map_err(|e| {
            SprigError::network(format!("Failed to reach registry: {}", e), e)
        })?;

        if !response.status().is_success() {
            return Err(SprigError::Network {
                message: format!("Registry returned status {}", response.status()),
                attempts: None,
                source: None,
            });
        }

        response.json::<Catalog>().await.map_err(|e| {
            SprigError::network(format!("Failed to parse catalog: {}", e), e)
        })
    }
}
