//! Client facade wiring configuration into the API-facing services.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::content::{ContentFetchResult, ContentFetcher, FetchOptions};
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::net;
use crate::resilience::RetryPolicy;
use crate::translation::{TranslationClient, TranslationRequest, TranslationResponse};

/// Content fetch, translation, and reachability probing over one shared
/// connection pool.
#[derive(Debug, Clone)]
pub struct LinguaClient {
    api: ApiClient,
    content: ContentFetcher,
    translation: TranslationClient,
    probe_timeout: Duration,
}

impl LinguaClient {
    /// Build all services from a validated configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let api = ApiClient::new(&config.api, &config.timeouts)?;
        let policy = RetryPolicy::from_config(&config.retries);

        tracing::debug!(
            base_url = %config.api.base_url,
            max_attempts = policy.max_attempts(),
            "Client configured"
        );

        Ok(Self {
            content: ContentFetcher::new(api.clone(), policy),
            translation: TranslationClient::new(api.clone()),
            probe_timeout: Duration::from_millis(config.timeouts.probe_ms),
            api,
        })
    }

    pub async fn fetch_content(&self, url: &str, options: FetchOptions) -> ClientResult<ContentFetchResult> {
        self.content.fetch(url, options).await
    }

    pub async fn translate(&self, request: &TranslationRequest) -> ClientResult<TranslationResponse> {
        self.translation.translate(request).await
    }

    /// Best-effort HEAD probe of an arbitrary URL.
    pub async fn check_reachable(&self, url: &str) -> bool {
        net::check_reachable(self.api.inner(), url, self.probe_timeout).await
    }

    pub fn content(&self) -> &ContentFetcher {
        &self.content
    }

    pub fn translation(&self) -> &TranslationClient {
        &self.translation
    }
}
