//! Caller-facing error taxonomy.
//!
//! Every failure that leaves the crate is one of a fixed set of categories
//! with a stable message. Upstream detail (status lines, reqwest errors, body
//! text) is logged where it happens and never carried in these values.

use thiserror::Error;

use crate::auth::AuthError;

/// Errors returned by content fetch, translation, and URL helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The input could not be turned into a usable http(s) URL or request.
    #[error("Please enter a valid website URL")]
    InvalidInput,

    /// Upstream answered 404.
    #[error("The requested page could not be found")]
    NotFound,

    /// Upstream answered 403.
    #[error("Access to this page is forbidden")]
    Forbidden,

    #[error("The request timed out. Please try again")]
    Timeout,

    #[error("Network error. Please check your connection")]
    NetworkError,

    /// Catch-all for content fetch failures.
    #[error("Failed to fetch website content")]
    FetchFailed,

    #[error("Failed to translate text")]
    TranslationFailed,

    #[error("Authentication failed")]
    AuthFailed,
}

impl ClientError {
    /// Stable machine-readable name of the category.
    pub fn category(&self) -> &'static str {
        match self {
            ClientError::InvalidInput => "invalid_input",
            ClientError::NotFound => "not_found",
            ClientError::Forbidden => "forbidden",
            ClientError::Timeout => "timeout",
            ClientError::NetworkError => "network_error",
            ClientError::FetchFailed => "fetch_failed",
            ClientError::TranslationFailed => "translation_failed",
            ClientError::AuthFailed => "auth_failed",
        }
    }
}

impl From<AuthError> for ClientError {
    fn from(err: AuthError) -> Self {
        tracing::warn!(error = %err, "Authentication error");
        ClientError::AuthFailed
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
