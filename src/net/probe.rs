//! Best-effort reachability probe.
//!
//! A HEAD request with a hard deadline. The answer is a plain bool; the
//! reason for a `false` is logged at debug level and otherwise dropped, so
//! callers must not use this as a correctness gate.

use std::time::{Duration, Instant};

use reqwest::Client;

use crate::observability::metrics;
use crate::resilience::with_deadline;

/// Default probe deadline.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// HEAD `url` and report whether it answered with a 2xx or 3xx status.
pub async fn check_reachable(client: &Client, url: &str, deadline: Duration) -> bool {
    let start = Instant::now();

    let reachable = match with_deadline(deadline, client.head(url).send()).await {
        Ok(Ok(response)) => {
            let status = response.status();
            let ok = status.is_success() || status.is_redirection();
            if !ok {
                tracing::debug!(url = %url, status = %status, "Probe failed: non-success status");
            }
            ok
        }
        Ok(Err(e)) => {
            tracing::debug!(url = %url, error = %e, "Probe failed: request error");
            false
        }
        Err(_) => {
            tracing::debug!(url = %url, deadline = ?deadline, "Probe failed: timeout");
            false
        }
    };

    metrics::record_probe(reachable);
    metrics::record_duration("probe", start);
    reachable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unparseable_url_is_unreachable() {
        let client = Client::new();
        assert!(!check_reachable(&client, "not a url", DEFAULT_PROBE_TIMEOUT).await);
    }

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        let client = Client::new();
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/", addr);
        assert!(!check_reachable(&client, &url, Duration::from_secs(2)).await);
    }
}
