//! Linkprobe: batch link-resolution engine
//!
//! This crate takes a small batch of seed URLs and, for each one, runs one of three analyses:
//! resolving tracked outbound links to their final redirect destination, reporting broken
//! outbound links, or detecting duplicated SEO metadata content.

pub mod api;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod probe;
pub mod url;

use thiserror::Error;

/// Main error type for Linkprobe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The seed page itself could not be fetched or returned a non-2xx status
    #[error("Failed to fetch seed {url}: {message}")]
    SeedFetch {
        url: String,
        status_code: u16,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL and batch validation errors
///
/// The display strings are returned verbatim to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Please enter between 1 and {max} URLs")]
    BatchSize { len: usize, max: usize },

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Invalid URL format: {0}")]
    MalformedUrl(String),
}

// Re-export commonly used types
pub use config::Config;
pub use extract::{extract_links, find_duplicate_descriptions, LinkPolicy};
pub use fetch::{build_http_client, resolve, ResolutionOutcome};
pub use probe::{FetchMode, LinkRecord, Prober, SeedResult, SeedStatus};
pub use url::{normalize_url, prepare_batch, validate_batch};
