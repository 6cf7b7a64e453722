//! Auth gateway over an injected identity client.
//!
//! # Responsibilities
//! - Initialize the identity client and finish any pending redirect
//! - Interactive login and fire-and-forget logout
//! - Silent token acquisition with a popup fallback on `InteractionRequired`
//! - Account listing for the route guard

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::auth::identity::{
    Account, AuthError, AuthResult, AuthenticationResult, IdentityClient, TokenRequest,
};
use crate::config::IdentityConfig;

pub struct AuthGateway {
    client: Arc<dyn IdentityClient>,
    config: IdentityConfig,
    ready: AtomicBool,
}

impl AuthGateway {
    pub fn new(client: Arc<dyn IdentityClient>, config: IdentityConfig) -> Self {
        Self {
            client,
            config,
            ready: AtomicBool::new(false),
        }
    }

    /// Initialize the identity client and process a pending redirect.
    ///
    /// The gateway is ready only after both steps succeed. Calling this again
    /// once ready is a no-op.
    pub async fn initialize(&self) -> AuthResult<()> {
        if self.is_ready() {
            return Ok(());
        }

        self.client.initialize().await?;
        if let Some(result) = self.client.handle_redirect_promise().await? {
            tracing::info!(
                account = ?result.account.as_ref().map(|a| a.username.as_str()),
                "Completed sign-in from redirect"
            );
        }

        self.ready.store(true, Ordering::Release);
        tracing::info!(
            authority = %self.config.authority(),
            client_id = %self.config.client_id,
            "Auth gateway ready"
        );
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    /// Interactive login. Identity client failures propagate unchanged.
    pub async fn login(&self) -> AuthResult<AuthenticationResult> {
        self.ensure_ready()?;

        let result: AuthResult<AuthenticationResult> = async {
            self.client.handle_redirect_promise().await?;
            self.client.login_popup(&self.token_request(None)).await
        }
        .await;

        match result {
            Ok(response) => {
                tracing::info!("Interactive login completed");
                Ok(response)
            }
            Err(e) => {
                tracing::error!(error = %e, "Interactive login failed");
                Err(e)
            }
        }
    }

    /// Drop the local session. Fire-and-forget.
    pub fn logout(&self) {
        tracing::info!("Logging out");
        self.client.logout();
    }

    /// Access token for the first cached account.
    ///
    /// Tries the silent flow first; if the identity client reports
    /// `InteractionRequired`, falls back to a popup and returns its token.
    pub async fn get_token(&self) -> AuthResult<String> {
        self.ensure_ready()?;

        let account = self
            .client
            .all_accounts()?
            .into_iter()
            .next()
            .ok_or(AuthError::NoAccount)?;

        match self.client.acquire_token_silent(&self.token_request(Some(account))).await {
            Ok(response) => Ok(response.access_token),
            Err(AuthError::InteractionRequired) => {
                tracing::info!("Silent token acquisition needs interaction, falling back to popup");
                self.client
                    .acquire_token_popup(&self.token_request(None))
                    .await
                    .map(|response| response.access_token)
                    .map_err(|e| match e {
                        AuthError::InteractionRequired => {
                            AuthError::Provider("interactive token acquisition did not complete".into())
                        }
                        other => other,
                    })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Silent token acquisition failed");
                Err(e)
            }
        }
    }

    /// Accounts known to the identity client; possibly empty.
    pub fn get_all_accounts(&self) -> AuthResult<Vec<Account>> {
        self.ensure_ready()?;
        self.client.all_accounts()
    }

    fn ensure_ready(&self) -> AuthResult<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(AuthError::NotInitialized)
        }
    }

    fn token_request(&self, account: Option<Account>) -> TokenRequest {
        TokenRequest {
            scopes: self.config.scopes.clone(),
            account,
        }
    }
}
