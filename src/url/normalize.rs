use crate::UrlError;
use url::Url;

/// Scheme inserted when the caller omitted one
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Normalizes a raw URL string into an absolute URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prefix `https://` unless the string already starts with `http://` or `https://`
/// 3. Parse with the WHATWG URL grammar, which lowercases the scheme and host,
///    resolves dot segments and gives an empty path the root `/`
///
/// Normalizing an already-normalized URL string yields the same string.
///
/// # Examples
///
/// ```
/// use linkprobe::url::normalize_url;
///
/// let url = normalize_url("  Example.COM/a  ").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/a");
/// ```
pub fn normalize_url(raw: &str) -> Result<Url, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::MalformedUrl(trimmed.to_string()));
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, trimmed)
    };

    Url::parse(&candidate).map_err(|_| UrlError::MalformedUrl(trimmed.to_string()))
}

/// Returns true if the string carries an explicit http or https scheme
fn has_http_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
