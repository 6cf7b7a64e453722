//! Fixed exponential backoff.

use std::time::Duration;

/// Delay to wait before retry number `retry` (1-based).
///
/// `retry = 0` is the initial attempt and never waits. Retry `k` waits
/// `base_ms * 2^(k-1)`, capped at `max_ms`. No jitter is applied.
pub fn calculate_backoff(retry: u32, base_ms: u64, max_ms: u64) -> Duration {
    if retry == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(retry - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);

    Duration::from_millis(delay_ms.min(max_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_sequence() {
        assert_eq!(calculate_backoff(0, 1000, 4000), Duration::ZERO);
        assert_eq!(calculate_backoff(1, 1000, 4000), Duration::from_secs(1));
        assert_eq!(calculate_backoff(2, 1000, 4000), Duration::from_secs(2));
        assert_eq!(calculate_backoff(3, 1000, 4000), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_is_capped() {
        assert_eq!(calculate_backoff(10, 100, 1000), Duration::from_millis(1000));
        assert_eq!(calculate_backoff(64, 1000, 4000), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_is_deterministic() {
        for retry in 1..5 {
            assert_eq!(
                calculate_backoff(retry, 250, 10_000),
                calculate_backoff(retry, 250, 10_000)
            );
        }
    }
}
