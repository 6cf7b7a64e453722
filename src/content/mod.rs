//! Web page content extraction through the backend API.

pub mod fetcher;
pub mod types;

pub use fetcher::{ContentFetcher, FETCH_CONTENT_PATH};
pub use types::{ContentFetchResult, ContentMetadata, FetchOptions};
