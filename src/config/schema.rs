//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend API settings.
    pub api: ApiConfig,

    /// Identity provider settings.
    pub identity: IdentityConfig,

    /// Retry configuration for content fetch.
    pub retries: RetryConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL prepended to `/translate` and `/fetch-content`.
    pub base_url: String,

    /// User-Agent sent with every request.
    pub user_agent: String,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            user_agent: concat!("lingua-client/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

impl ApiConfig {
    /// Join an endpoint path onto the base URL without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Where the identity client persists its session cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CacheLocation {
    #[default]
    LocalStorage,
    SessionStorage,
    Memory,
}

/// Identity provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Application (client) identifier registered with the provider.
    pub client_id: String,

    /// Tenant identifier; combined with `authority_host` into the authority URL.
    pub tenant_id: String,

    /// Redirect URI registered for the application.
    pub redirect_uri: String,

    /// Authority host, e.g. `https://login.microsoftonline.com`.
    pub authority_host: String,

    /// Scopes requested on login and token acquisition.
    pub scopes: Vec<String>,

    /// Session cache location handed to the identity client.
    pub cache_location: CacheLocation,

    /// Also keep auth state in a cookie.
    pub store_auth_state_in_cookie: bool,

    /// Destination the route guard redirects to.
    pub login_path: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            tenant_id: String::new(),
            redirect_uri: String::new(),
            authority_host: "https://login.microsoftonline.com".to_string(),
            scopes: vec!["User.Read".to_string()],
            cache_location: CacheLocation::LocalStorage,
            store_auth_state_in_cookie: true,
            login_path: "/login".to_string(),
        }
    }
}

impl IdentityConfig {
    /// Authority URL derived from the tenant identifier.
    pub fn authority(&self) -> String {
        format!("{}/{}", self.authority_host.trim_end_matches('/'), self.tenant_id)
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first one.
    pub max_attempts: u32,

    /// Delay before the first retry in milliseconds; doubles per retry.
    pub base_delay_ms: u64,

    /// Upper bound on a single backoff delay in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            max_delay_ms: 4000,
        }
    }
}

/// Timeout configuration for outbound calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in milliseconds.
    pub connect_ms: u64,

    /// Per-attempt request timeout in milliseconds.
    pub request_ms: u64,

    /// Reachability probe timeout in milliseconds.
    pub probe_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_ms: 10_000,
            request_ms: 30_000,
            probe_ms: 5_000,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "lingua_client=info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
