//! Client library for a translation backend and its identity provider.

pub mod app;
pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod net;
pub mod observability;
pub mod resilience;
pub mod translation;

pub use app::LinguaClient;
pub use auth::{AuthGateway, IdentityClient, Navigation, RouteGuard};
pub use config::ClientConfig;
pub use content::{ContentFetchResult, ContentMetadata, FetchOptions};
pub use error::{ClientError, ClientResult};
pub use translation::{TranslationRequest, TranslationResponse};
