//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (API base, identity client/tenant/redirect)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::{
    ApiConfig, CacheLocation, ClientConfig, IdentityConfig, LogFormat, ObservabilityConfig,
    RetryConfig, TimeoutConfig,
};
