//! Configuration validation.
//!
//! Serde handles the syntax; this checks the values. All violations are
//! collected rather than stopping at the first one.

use std::fmt;

use crate::config::schema::ClientConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.api.base_url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        Ok(parsed) => errors.push(ValidationError::new(
            "api.base_url",
            format!("unsupported scheme '{}'", parsed.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new("api.base_url", e.to_string())),
    }

    if config.retries.max_attempts == 0 {
        errors.push(ValidationError::new("retries.max_attempts", "must be at least 1"));
    }
    if config.retries.base_delay_ms > config.retries.max_delay_ms {
        errors.push(ValidationError::new(
            "retries.base_delay_ms",
            "must not exceed retries.max_delay_ms",
        ));
    }

    for (field, value) in [
        ("timeouts.connect_ms", config.timeouts.connect_ms),
        ("timeouts.request_ms", config.timeouts.request_ms),
        ("timeouts.probe_ms", config.timeouts.probe_ms),
    ] {
        if value == 0 {
            errors.push(ValidationError::new(field, "must be greater than 0"));
        }
    }

    if !config.identity.redirect_uri.is_empty() && url::Url::parse(&config.identity.redirect_uri).is_err() {
        errors.push(ValidationError::new("identity.redirect_uri", "not a valid URL"));
    }
    if config.identity.scopes.is_empty() {
        errors.push(ValidationError::new("identity.scopes", "at least one scope is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
