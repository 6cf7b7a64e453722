//! Translation request/response records.

use serde::{Deserialize, Serialize};

/// Source language assumed when the caller does not name one.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// A text to translate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
            source_language: None,
        }
    }

    pub fn with_source(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = Some(source_language.into());
        self
    }

    /// Source language to send; blank or unset means [`DEFAULT_SOURCE_LANGUAGE`].
    pub fn source_or_default(&self) -> &str {
        self.source_language
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_SOURCE_LANGUAGE)
    }
}

/// Body of `POST /translate`; the source language is always present on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslateBody<'a> {
    pub text: &'a str,
    pub target_language: &'a str,
    pub source_language: &'a str,
}

impl<'a> From<&'a TranslationRequest> for TranslateBody<'a> {
    fn from(request: &'a TranslationRequest) -> Self {
        Self {
            text: &request.text,
            target_language: &request.target_language,
            source_language: request.source_or_default(),
        }
    }
}

/// Translation produced by the backend. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub translated_text: String,
    pub detected_source_language: String,
    pub target_language: String,
    pub timestamp: String,
}
