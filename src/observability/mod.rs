//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! content / translation / probe / auth
//!     → logging.rs (structured tracing events, request id as a field)
//!     → metrics.rs (counters and latency histograms)
//! ```
//!
//! # Design Decisions
//! - Upstream error detail goes to logs only, never to callers
//! - Request ID is attached to every event of a fetch or translate call

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
