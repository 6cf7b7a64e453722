//! Timeout enforcement.

use std::future::Future;
use std::time::Duration;

use tokio::time;

/// Marker error for an operation that ran past its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation timed out after {0:?}")]
pub struct TimedOut(pub Duration);

/// Run `fut` with a hard deadline.
pub async fn with_deadline<F>(deadline: Duration, fut: F) -> Result<F::Output, TimedOut>
where
    F: Future,
{
    time::timeout(deadline, fut).await.map_err(|_| TimedOut(deadline))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_deadline_elapses() {
        let result = with_deadline(Duration::from_secs(5), time::sleep(Duration::from_secs(60))).await;
        assert_eq!(result, Err(TimedOut(Duration::from_secs(5))));
    }

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let result = with_deadline(Duration::from_secs(5), async { 7 }).await;
        assert_eq!(result, Ok(7));
    }
}
