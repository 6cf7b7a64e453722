//! Identity provider boundary.
//!
//! The provider's token cache, crypto, and popup/redirect mechanics are
//! external. This crate only sees them through [`IdentityClient`], which an
//! embedding application implements over its real SDK and tests implement
//! with a fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A signed-in account known to the identity client's cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub home_account_id: String,
    pub username: String,
    pub name: Option<String>,
}

/// Result of a login or token acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    pub access_token: String,
    pub account: Option<Account>,
    pub scopes: Vec<String>,
}

/// Parameters for login and token acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub scopes: Vec<String>,
    /// Account to acquire for; `None` lets the provider choose or prompt.
    pub account: Option<Account>,
}

/// Errors that can occur during authentication.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The cached session cannot be used without user interaction.
    #[error("Interaction required")]
    InteractionRequired,

    /// No account is cached.
    #[error("No account found")]
    NoAccount,

    /// The gateway was used before initialization completed.
    #[error("Identity client not initialized")]
    NotInitialized,

    /// Any other failure reported by the identity provider.
    #[error("Identity provider error: {0}")]
    Provider(String),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Capability exposed by an external identity client.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// One-time client startup.
    async fn initialize(&self) -> AuthResult<()>;

    /// Complete a redirect-based flow if the app was loaded from one.
    async fn handle_redirect_promise(&self) -> AuthResult<Option<AuthenticationResult>>;

    /// Interactive login in a popup.
    async fn login_popup(&self, request: &TokenRequest) -> AuthResult<AuthenticationResult>;

    /// Clear the local session.
    fn logout(&self);

    /// Acquire a token from the cache without user interaction.
    ///
    /// Must fail with [`AuthError::InteractionRequired`] when the session
    /// needs the user (expired refresh token, consent, MFA).
    async fn acquire_token_silent(&self, request: &TokenRequest) -> AuthResult<AuthenticationResult>;

    /// Acquire a token interactively in a popup.
    async fn acquire_token_popup(&self, request: &TokenRequest) -> AuthResult<AuthenticationResult>;

    /// Accounts currently in the cache.
    fn all_accounts(&self) -> AuthResult<Vec<Account>>;
}
