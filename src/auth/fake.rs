//! In-memory identity client for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::auth::identity::{
    Account, AuthResult, AuthenticationResult, IdentityClient, TokenRequest,
};

pub(crate) fn account(username: &str) -> Account {
    Account {
        home_account_id: format!("{}.tenant", username),
        username: username.to_string(),
        name: None,
    }
}

pub(crate) fn token(access_token: &str) -> AuthenticationResult {
    AuthenticationResult {
        access_token: access_token.to_string(),
        account: None,
        scopes: vec!["User.Read".to_string()],
    }
}

/// Scripted identity client; every call is recorded by name.
pub(crate) struct FakeIdentityClient {
    pub accounts: Mutex<AuthResult<Vec<Account>>>,
    pub silent: Mutex<AuthResult<AuthenticationResult>>,
    pub popup: Mutex<AuthResult<AuthenticationResult>>,
    pub redirect: Mutex<Option<AuthenticationResult>>,
    pub requests: Mutex<Vec<TokenRequest>>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeIdentityClient {
    pub fn signed_in(username: &str, silent_token: &str) -> Self {
        Self {
            accounts: Mutex::new(Ok(vec![account(username)])),
            silent: Mutex::new(Ok(token(silent_token))),
            popup: Mutex::new(Ok(token("popup-token"))),
            redirect: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn signed_out() -> Self {
        let fake = Self::signed_in("nobody", "unused");
        *fake.accounts.lock().unwrap() = Ok(Vec::new());
        fake
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

#[async_trait]
impl IdentityClient for FakeIdentityClient {
    async fn initialize(&self) -> AuthResult<()> {
        self.record("initialize");
        Ok(())
    }

    async fn handle_redirect_promise(&self) -> AuthResult<Option<AuthenticationResult>> {
        self.record("handle_redirect_promise");
        Ok(self.redirect.lock().unwrap().take())
    }

    async fn login_popup(&self, request: &TokenRequest) -> AuthResult<AuthenticationResult> {
        self.record("login_popup");
        self.requests.lock().unwrap().push(request.clone());
        self.popup.lock().unwrap().clone()
    }

    fn logout(&self) {
        self.record("logout");
        *self.accounts.lock().unwrap() = Ok(Vec::new());
    }

    async fn acquire_token_silent(&self, request: &TokenRequest) -> AuthResult<AuthenticationResult> {
        self.record("acquire_token_silent");
        self.requests.lock().unwrap().push(request.clone());
        self.silent.lock().unwrap().clone()
    }

    async fn acquire_token_popup(&self, request: &TokenRequest) -> AuthResult<AuthenticationResult> {
        self.record("acquire_token_popup");
        self.requests.lock().unwrap().push(request.clone());
        self.popup.lock().unwrap().clone()
    }

    fn all_accounts(&self) -> AuthResult<Vec<Account>> {
        self.record("all_accounts");
        self.accounts.lock().unwrap().clone()
    }
}
