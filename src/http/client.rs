//! Shared HTTP client for the backend API.

use std::time::Duration;

use reqwest::Client;

use crate::config::{ApiConfig, TimeoutConfig};

/// Handle to the backend API: one pooled `reqwest::Client` plus the base URL.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api: ApiConfig,
    request_timeout: Duration,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(api: &ApiConfig, timeouts: &TimeoutConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .user_agent(api.user_agent.clone())
            .connect_timeout(Duration::from_millis(timeouts.connect_ms));
        if !api.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self::with_client(client, api, timeouts))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(client: Client, api: &ApiConfig, timeouts: &TimeoutConfig) -> Self {
        Self {
            client,
            api: api.clone(),
            request_timeout: Duration::from_millis(timeouts.request_ms),
        }
    }

    /// Absolute URL for an API endpoint.
    pub fn endpoint(&self, path: &str) -> String {
        self.api.endpoint(path)
    }

    /// POST to an API endpoint. No timeout beyond the connect timeout.
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.endpoint(path))
    }

    /// POST to an API endpoint with the per-attempt request timeout applied.
    pub fn post_timed(&self, path: &str) -> reqwest::RequestBuilder {
        self.post(path).timeout(self.request_timeout)
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Underlying client, for requests outside the API base.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }
}
