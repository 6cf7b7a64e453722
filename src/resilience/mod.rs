//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call to backend API:
//!     → retries.rs (run attempts; each reports Done / Retry / Abort)
//!     → backoff.rs (fixed exponential delay between attempts)
//!     → timeouts.rs (hard deadline for best-effort probes)
//! ```
//!
//! # Design Decisions
//! - Attempts are sequential, never concurrent
//! - No jitter: retry k waits base * 2^(k-1)
//! - 404/403/bad input abort immediately

pub mod backoff;
pub mod retries;
pub mod timeouts;

pub use retries::{Attempt, RetryPolicy};
pub use timeouts::{with_deadline, TimedOut};
