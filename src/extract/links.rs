//! Anchor link extraction
//!
//! Both extraction policies share one pass over the document:
//! - every `<a href="...">` is resolved against the base URL
//! - fragment-only (`#...`) and `javascript:` hrefs are skipped
//! - hrefs that fail to resolve are skipped individually
//! - the allowlist policy additionally keeps only matching URLs
//!
//! Output is a set that preserves first-occurrence order.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Which resolved links an extraction keeps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkPolicy {
    /// Keep every resolvable link
    Unrestricted,

    /// Keep links whose resolved URL contains any of the substrings
    Allowlist(Vec<String>),
}

impl LinkPolicy {
    /// Builds an allowlist policy from any list of substrings
    pub fn allowlist<I, S>(substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Allowlist(substrings.into_iter().map(Into::into).collect())
    }

    /// Returns true if a resolved link passes this policy
    pub fn admits(&self, resolved: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Allowlist(substrings) => substrings.iter().any(|s| resolved.contains(s.as_str())),
        }
    }
}

/// Extracts links from HTML under the given policy
///
/// # Example
///
/// ```
/// use linkprobe::extract::{extract_links, LinkPolicy};
/// use url::Url;
///
/// let html = r#"<a href="/a">A</a><a href="https://aka.ms/x">X</a><a href="/a">A again</a>"#;
/// let base = Url::parse("https://example.com/").unwrap();
///
/// let all = extract_links(html, &base, &LinkPolicy::Unrestricted);
/// assert_eq!(all, vec!["https://example.com/a", "https://aka.ms/x"]);
///
/// let tracked = extract_links(html, &base, &LinkPolicy::allowlist(["aka.ms"]));
/// assert_eq!(tracked, vec!["https://aka.ms/x"]);
/// ```
pub fn extract_links(html: &str, base_url: &Url, policy: &LinkPolicy) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&a_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(absolute_url) = resolve_link(href, base_url) else {
            continue;
        };

        if policy.admits(&absolute_url) && seen.insert(absolute_url.clone()) {
            links.push(absolute_url);
        }
    }

    links
}

/// Resolves a link href to an absolute URL
///
/// Returns None if the link should be excluded:
/// - empty hrefs
/// - fragment-only hrefs (same page anchors)
/// - javascript: hrefs
/// - hrefs that do not resolve against the base
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') || is_script_href(href) {
        return None;
    }

    base_url.join(href).ok().map(String::from)
}

fn is_script_href(href: &str) -> bool {
    href.get(..11)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
}
