//! Metrics collection.
//!
//! # Metrics
//! - `lingua_fetch_attempts_total` (counter): content fetch attempts sent
//! - `lingua_retries_total` (counter): backoff sleeps taken
//! - `lingua_fetch_outcomes_total` (counter): final fetch result by category
//! - `lingua_translate_requests_total` (counter): translation calls by outcome
//! - `lingua_probe_total` (counter): reachability probes by result
//! - `lingua_request_duration_seconds` (histogram): latency by operation
//!
//! Updates are no-ops until the embedding application installs a recorder.

use std::time::Instant;

pub fn record_fetch_attempt() {
    metrics::counter!("lingua_fetch_attempts_total").increment(1);
}

pub fn record_retry() {
    metrics::counter!("lingua_retries_total").increment(1);
}

pub fn record_fetch_outcome(category: &'static str) {
    metrics::counter!("lingua_fetch_outcomes_total", "category" => category).increment(1);
}

pub fn record_translate(outcome: &'static str) {
    metrics::counter!("lingua_translate_requests_total", "outcome" => outcome).increment(1);
}

pub fn record_probe(reachable: bool) {
    let label = if reachable { "true" } else { "false" };
    metrics::counter!("lingua_probe_total", "reachable" => label).increment(1);
}

pub fn record_duration(operation: &'static str, start: Instant) {
    metrics::histogram!("lingua_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}
