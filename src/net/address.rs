//! URL helpers for user-supplied addresses.

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Characters removed from user input before it is treated as a URL.
const STRIPPED: [char; 4] = ['<', '>', '\'', '"'];

/// Normalize a user-typed address into an absolute http(s) URL string.
///
/// Trims whitespace, defaults the scheme to `https://`, drops `< > ' "`, and
/// fails with [`ClientError::InvalidInput`] if the result does not parse.
pub fn sanitize(input: &str) -> ClientResult<String> {
    let trimmed = input.trim();

    let with_scheme = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let cleaned: String = with_scheme.chars().filter(|c| !STRIPPED.contains(c)).collect();

    match Url::parse(&cleaned) {
        Ok(parsed) if parsed.has_host() => Ok(cleaned),
        Ok(_) | Err(_) => {
            tracing::debug!(input = %input, "Rejected URL after sanitizing");
            Err(ClientError::InvalidInput)
        }
    }
}

/// Hostname of `input`, or an empty string if it does not parse.
pub fn domain_of(input: &str) -> String {
    Url::parse(input)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Parse `input` as an absolute URL and require an http or https scheme.
pub fn parse_http_url(input: &str) -> ClientResult<Url> {
    let url = Url::parse(input).map_err(|_| ClientError::InvalidInput)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => {
            tracing::debug!(scheme = %other, "Unsupported URL scheme");
            Err(ClientError::InvalidInput)
        }
    }
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
