use crate::url::normalize::normalize_url;
use crate::UrlError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// http(s) scheme, dotted hostname with an alphabetic TLD of two or more letters,
/// optional port, then optional path, query and fragment
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^https?://",
        r"([a-zA-Z0-9-]+\.)*[a-zA-Z0-9-]+\.[a-zA-Z]{2,}(:[0-9]+)?",
        r"(/[^?#]*)?",
        r"(\?[^#]*)?",
        r"(#.*)?",
        r"$",
    ))
    .expect("hardcoded regex pattern is valid")
});

/// Returns true if the string passes the accepted URL pattern
pub fn matches_url_pattern(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

/// Validates the size of a batch and the format of every entry
///
/// Entries are checked as given; callers that accept scheme-less input should
/// use [`prepare_batch`], which normalizes before the pattern check.
///
/// # Errors
///
/// * `UrlError::BatchSize` - the batch is empty or holds more than `max` entries
/// * `UrlError::InvalidFormat` - names the first entry failing the pattern
pub fn validate_batch<S: AsRef<str>>(urls: &[S], max: usize) -> Result<(), UrlError> {
    check_batch_size(urls.len(), max)?;

    if let Some(invalid) = urls.iter().find(|u| !matches_url_pattern(u.as_ref())) {
        return Err(UrlError::InvalidFormat(invalid.as_ref().to_string()));
    }

    Ok(())
}

/// Validates and normalizes a batch before any network activity
///
/// The size bound is checked first. Each entry is then normalized and the
/// normalized form is matched against the URL pattern, so `example.com/a` is
/// accepted as `https://example.com/a`. Errors name the entry as the caller
/// supplied it.
pub fn prepare_batch<S: AsRef<str>>(urls: &[S], max: usize) -> Result<Vec<Url>, UrlError> {
    check_batch_size(urls.len(), max)?;

    urls.iter()
        .map(|raw| {
            let raw = raw.as_ref();
            let normalized = normalize_url(raw)?;
            if matches_url_pattern(normalized.as_str()) {
                Ok(normalized)
            } else {
                Err(UrlError::InvalidFormat(raw.trim().to_string()))
            }
        })
        .collect()
}

/// Splits newline-separated input into trimmed, non-empty URL strings
pub fn split_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_batch_size(len: usize, max: usize) -> Result<(), UrlError> {
    if len < 1 || len > max {
        return Err(UrlError::BatchSize { len, max });
    }
    Ok(())
}
