//! Outbound HTTP plumbing.
//!
//! # Data Flow
//! ```text
//! content / translation call
//!     → request.rs (fresh request ID, x-request-id header)
//!     → client.rs (pooled reqwest client, base URL, per-attempt timeout)
//!     → backend API
//! ```

pub mod client;
pub mod request;

pub use client::ApiClient;
pub use request::{RequestId, RequestIdExt, X_REQUEST_ID};
