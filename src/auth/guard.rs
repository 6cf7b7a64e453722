//! Route guard for protected destinations.
//!
//! Re-evaluated on every navigation; the decision is never cached.

use std::sync::Arc;

use crate::auth::gateway::AuthGateway;

/// Where a guarded navigation should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Continue to the requested destination.
    Proceed(String),
    /// Send the user to the login destination instead.
    Redirect(String),
}

pub struct RouteGuard {
    gateway: Option<Arc<AuthGateway>>,
    login_path: String,
}

impl RouteGuard {
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        let login_path = gateway.config().login_path.clone();
        Self {
            gateway: Some(gateway),
            login_path,
        }
    }

    /// A guard for an application whose auth gateway failed to come up.
    /// Every protected navigation redirects to `login_path`.
    pub fn without_gateway(login_path: impl Into<String>) -> Self {
        Self {
            gateway: None,
            login_path: login_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Decide whether navigation to `destination` may proceed.
    pub fn check(&self, destination: &str) -> Navigation {
        if destination == self.login_path {
            return Navigation::Proceed(destination.to_string());
        }

        let gateway = match &self.gateway {
            Some(gateway) if gateway.is_ready() => gateway,
            _ => {
                tracing::error!(destination = %destination, "Auth gateway not initialized");
                return self.redirect();
            }
        };

        match gateway.get_all_accounts() {
            Ok(accounts) if !accounts.is_empty() => Navigation::Proceed(destination.to_string()),
            Ok(_) => {
                tracing::debug!(destination = %destination, "No signed-in account, redirecting to login");
                self.redirect()
            }
            Err(e) => {
                tracing::error!(destination = %destination, error = %e, "Auth check failed");
                self.redirect()
            }
        }
    }

    fn redirect(&self) -> Navigation {
        Navigation::Redirect(self.login_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::fake::{account, FakeIdentityClient};
    use crate::auth::identity::{AuthError, IdentityClient};
    use crate::config::IdentityConfig;

    fn login() -> Navigation {
        Navigation::Redirect("/login".to_string())
    }

    async fn guard_for(fake: Arc<FakeIdentityClient>, initialize: bool) -> RouteGuard {
        let gateway = Arc::new(AuthGateway::new(fake, IdentityConfig::default()));
        if initialize {
            gateway.initialize().await.unwrap();
        }
        RouteGuard::new(gateway)
    }

    #[tokio::test]
    async fn test_signed_in_proceeds() {
        let guard = guard_for(Arc::new(FakeIdentityClient::signed_in("ada", "t")), true).await;
        assert_eq!(guard.check("/translate"), Navigation::Proceed("/translate".into()));
    }

    #[tokio::test]
    async fn test_no_accounts_redirects() {
        let guard = guard_for(Arc::new(FakeIdentityClient::signed_out()), true).await;
        assert_eq!(guard.check("/translate"), login());
    }

    #[tokio::test]
    async fn test_uninitialized_gateway_redirects() {
        let fake = Arc::new(FakeIdentityClient::signed_in("ada", "t"));
        let guard = guard_for(fake.clone(), false).await;
        assert_eq!(guard.check("/translate"), login());
        assert!(fake.calls().is_empty());

        assert_eq!(RouteGuard::without_gateway("/login").check("/translate"), login());
    }

    #[tokio::test]
    async fn test_account_lookup_failure_redirects() {
        let fake = Arc::new(FakeIdentityClient::signed_in("ada", "t"));
        *fake.accounts.lock().unwrap() = Err(AuthError::Provider("cache corrupted".into()));
        let guard = guard_for(fake, true).await;
        assert_eq!(guard.check("/translate"), login());
    }

    #[tokio::test]
    async fn test_decision_is_not_cached() {
        let fake = Arc::new(FakeIdentityClient::signed_out());
        let guard = guard_for(fake.clone(), true).await;
        assert_eq!(guard.check("/history"), login());

        *fake.accounts.lock().unwrap() = Ok(vec![account("ada")]);
        assert_eq!(guard.check("/history"), Navigation::Proceed("/history".into()));

        fake.logout();
        assert_eq!(guard.check("/history"), login());
        assert_eq!(fake.calls().iter().filter(|c| **c == "all_accounts").count(), 3);
    }

    #[tokio::test]
    async fn test_login_path_itself_is_never_redirected() {
        let guard = RouteGuard::without_gateway("/login");
        assert_eq!(guard.check("/login"), Navigation::Proceed("/login".into()));
    }
}
