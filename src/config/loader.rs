//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variables consulted for the API base URL, in priority order.
pub const ENV_API_BASE: [&str; 2] = ["NUXT_PUBLIC_API_BASE", "API_BASE"];
pub const ENV_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const ENV_TENANT_ID: &str = "AZURE_TENANT_ID";
pub const ENV_REDIRECT_URI: &str = "AUTH_REDIRECT_URI";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load a TOML file, apply environment overrides, and validate.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ClientConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
    finish(config)
}

/// Build a configuration from defaults plus environment overrides.
pub fn load_from_env() -> Result<ClientConfig, ConfigError> {
    finish(ClientConfig::default())
}

fn finish(mut config: ClientConfig) -> Result<ClientConfig, ConfigError> {
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Overlay values from the environment. Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut ClientConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(base) = ENV_API_BASE.iter().find_map(|key| get(key)) {
        config.api.base_url = base;
    }
    if let Some(client_id) = get(ENV_CLIENT_ID) {
        config.identity.client_id = client_id;
    }
    if let Some(tenant_id) = get(ENV_TENANT_ID) {
        config.identity.tenant_id = tenant_id;
    }
    if let Some(redirect_uri) = get(ENV_REDIRECT_URI) {
        config.identity.redirect_uri = redirect_uri;
    }
}
