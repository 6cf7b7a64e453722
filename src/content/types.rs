//! Content fetch request/response records.

use serde::{Deserialize, Serialize};

/// Options for a content fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchOptions {
    /// Ask the backend to keep paragraph and inline formatting.
    pub preserve_formatting: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            preserve_formatting: true,
        }
    }
}

/// Summary statistics about extracted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    pub word_count: u64,
    pub paragraph_count: u64,
    pub has_images: bool,
}

/// Extracted page content, always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFetchResult {
    pub content: String,
    pub title: String,
    pub metadata: ContentMetadata,
}

/// Body of `POST /fetch-content`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FetchContentRequest<'a> {
    pub url: &'a str,
    pub preserve_formatting: bool,
}

/// Upstream payload as received. Only `content` is mandatory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFetchResponse {
    content: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    metadata: Option<RawMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    #[serde(default)]
    word_count: Option<u64>,
    #[serde(default)]
    paragraph_count: Option<u64>,
    #[serde(default)]
    has_images: Option<bool>,
}

impl From<RawFetchResponse> for ContentFetchResult {
    fn from(raw: RawFetchResponse) -> Self {
        let metadata = raw.metadata.unwrap_or_default();
        Self {
            content: raw.content,
            title: raw.title.unwrap_or_default(),
            metadata: ContentMetadata {
                word_count: metadata.word_count.unwrap_or(0),
                paragraph_count: metadata.paragraph_count.unwrap_or(0),
                has_images: metadata.has_images.unwrap_or(false),
            },
        }
    }
}

/// Validate an upstream body and fill in defaults for absent metadata.
pub(crate) fn parse_payload(body: &[u8]) -> Result<ContentFetchResult, serde_json::Error> {
    serde_json::from_slice::<RawFetchResponse>(body).map(ContentFetchResult::from)
}
