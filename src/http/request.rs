//! Request identification.
//!
//! Each logical call (one fetch with all of its retries, or one translation)
//! gets a fresh UUID v4 that is sent as `x-request-id` and attached to every
//! log event for that call.

use std::fmt;

use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Unique identifier for one outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Attach a request ID header to an outbound request.
pub trait RequestIdExt {
    fn request_id(self, id: RequestId) -> Self;
}

impl RequestIdExt for reqwest::RequestBuilder {
    fn request_id(self, id: RequestId) -> Self {
        self.header(X_REQUEST_ID, id.to_string())
    }
}
