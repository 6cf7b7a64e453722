//! Text translation through the backend API.

pub mod client;
pub mod types;

pub use client::{TranslationClient, TRANSLATE_PATH};
pub use types::{TranslationRequest, TranslationResponse, DEFAULT_SOURCE_LANGUAGE};
