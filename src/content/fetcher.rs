//! Resilient content fetch.
//!
//! `POST {api}/fetch-content` with bounded retry and fixed exponential
//! backoff. Each attempt reports `Done`, `Retry`, or `Abort`; the final
//! failure cause is classified once into a [`ClientError`] category.

use std::fmt;
use std::time::Instant;

use reqwest::StatusCode;

use crate::content::types::{parse_payload, ContentFetchResult, FetchContentRequest, FetchOptions};
use crate::error::{ClientError, ClientResult};
use crate::http::{ApiClient, RequestId, RequestIdExt};
use crate::net::parse_http_url;
use crate::observability::metrics;
use crate::resilience::{Attempt, RetryPolicy};

/// Backend path for content extraction.
pub const FETCH_CONTENT_PATH: &str = "/fetch-content";

/// Why an attempt failed. Logged, never returned to callers.
#[derive(Debug)]
enum FailureCause {
    Status(StatusCode),
    Timeout,
    Network(String),
    Malformed(String),
}

impl FailureCause {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FailureCause::Timeout
        } else if err.is_decode() {
            FailureCause::Malformed(err.to_string())
        } else {
            FailureCause::Network(err.to_string())
        }
    }

    fn is_retryable(&self) -> bool {
        !matches!(
            self,
            FailureCause::Status(StatusCode::NOT_FOUND) | FailureCause::Status(StatusCode::FORBIDDEN)
        )
    }

    fn classify(&self) -> ClientError {
        match self {
            FailureCause::Status(StatusCode::NOT_FOUND) => ClientError::NotFound,
            FailureCause::Status(StatusCode::FORBIDDEN) => ClientError::Forbidden,
            FailureCause::Timeout => ClientError::Timeout,
            FailureCause::Network(_) => ClientError::NetworkError,
            FailureCause::Status(_) | FailureCause::Malformed(_) => ClientError::FetchFailed,
        }
    }

    fn into_attempt<T>(self) -> Attempt<T, FailureCause> {
        if self.is_retryable() {
            Attempt::Retry(self)
        } else {
            Attempt::Abort(self)
        }
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCause::Status(status) => write!(f, "upstream returned {}", status),
            FailureCause::Timeout => write!(f, "request timed out"),
            FailureCause::Network(e) => write!(f, "network error: {}", e),
            FailureCause::Malformed(e) => write!(f, "invalid response: {}", e),
        }
    }
}

/// Fetches page content through the backend API.
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    api: ApiClient,
    policy: RetryPolicy,
}

impl ContentFetcher {
    pub fn new(api: ApiClient, policy: RetryPolicy) -> Self {
        Self { api, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Fetch and extract the content at `url`.
    ///
    /// The URL must be an absolute http(s) URL; anything else fails with
    /// [`ClientError::InvalidInput`] before a request is sent. 404 and 403
    /// fail immediately; every other failure is retried within the policy.
    pub async fn fetch(&self, url: &str, options: FetchOptions) -> ClientResult<ContentFetchResult> {
        let start = Instant::now();
        let request_id = RequestId::new();

        if let Err(err) = parse_http_url(url) {
            tracing::warn!(request_id = %request_id, url = %url, "Refusing to fetch invalid URL");
            metrics::record_fetch_outcome(err.category());
            return Err(err);
        }

        let result = self
            .policy
            .run(move |attempt| self.attempt(url, options, request_id, attempt))
            .await;
        metrics::record_duration("fetch_content", start);

        match result {
            Ok(content) => {
                tracing::info!(
                    request_id = %request_id,
                    url = %url,
                    words = content.metadata.word_count,
                    "Content fetched"
                );
                metrics::record_fetch_outcome("ok");
                Ok(content)
            }
            Err(cause) => {
                let err = cause.classify();
                tracing::error!(
                    request_id = %request_id,
                    url = %url,
                    cause = %cause,
                    category = err.category(),
                    "Error fetching content"
                );
                metrics::record_fetch_outcome(err.category());
                Err(err)
            }
        }
    }

    async fn attempt(
        &self,
        url: &str,
        options: FetchOptions,
        request_id: RequestId,
        attempt: u32,
    ) -> Attempt<ContentFetchResult, FailureCause> {
        metrics::record_fetch_attempt();
        tracing::debug!(request_id = %request_id, attempt, url = %url, "Requesting content");

        let body = FetchContentRequest {
            url,
            preserve_formatting: options.preserve_formatting,
        };

        let response = match self
            .api
            .post_timed(FETCH_CONTENT_PATH)
            .request_id(request_id)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return FailureCause::from_reqwest(e).into_attempt(),
        };

        let status = response.status();
        if !status.is_success() {
            return FailureCause::Status(status).into_attempt();
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return FailureCause::from_reqwest(e).into_attempt(),
        };

        match parse_payload(&bytes) {
            Ok(content) => Attempt::Done(content),
            Err(e) => FailureCause::Malformed(e.to_string()).into_attempt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_retryable_statuses() {
        assert!(!FailureCause::Status(StatusCode::NOT_FOUND).is_retryable());
        assert!(!FailureCause::Status(StatusCode::FORBIDDEN).is_retryable());
        assert!(FailureCause::Status(StatusCode::INTERNAL_SERVER_ERROR).is_retryable());
        assert!(FailureCause::Status(StatusCode::BAD_GATEWAY).is_retryable());
        assert!(FailureCause::Timeout.is_retryable());
        assert!(FailureCause::Network("connection refused".into()).is_retryable());
        assert!(FailureCause::Malformed("missing field `content`".into()).is_retryable());
    }

    #[test]
    fn test_classification() {
        assert_eq!(FailureCause::Status(StatusCode::NOT_FOUND).classify(), ClientError::NotFound);
        assert_eq!(FailureCause::Status(StatusCode::FORBIDDEN).classify(), ClientError::Forbidden);
        assert_eq!(FailureCause::Timeout.classify(), ClientError::Timeout);
        assert_eq!(FailureCause::Network("reset".into()).classify(), ClientError::NetworkError);
        assert_eq!(
            FailureCause::Status(StatusCode::SERVICE_UNAVAILABLE).classify(),
            ClientError::FetchFailed
        );
        assert_eq!(FailureCause::Malformed("eof".into()).classify(), ClientError::FetchFailed);
    }

    #[test]
    fn test_classified_message_hides_cause() {
        let cause = FailureCause::Network("dns error: secret-host.internal".into());
        assert!(!cause.classify().to_string().contains("secret-host"));
    }

    #[tokio::test]
    async fn test_invalid_url_makes_no_request() {
        // Nothing listens on this base; an attempted request would surface as NetworkError.
        let api = ApiClient::new(
            &crate::config::ApiConfig { base_url: "http://127.0.0.1:9".into(), ..Default::default() },
            &crate::config::TimeoutConfig::default(),
        )
        .unwrap();
        let fetcher = ContentFetcher::new(api, RetryPolicy::default());

        for url in ["example.com", "ftp://example.com/file", "not a url", ""] {
            assert_eq!(
                fetcher.fetch(url, FetchOptions::default()).await.unwrap_err(),
                ClientError::InvalidInput
            );
        }
    }
}
