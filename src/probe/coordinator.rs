//! Batch orchestration
//!
//! This module runs every seed of a batch concurrently and, within a seed,
//! resolves every extracted link concurrently:
//! - Normalizing and fetching the seed page
//! - Dispatching the body to the mode-specific pipeline
//! - Fanning out link resolution through an ordered, bounded pool
//! - Assembling one result per seed in input order

use crate::config::Config;
use crate::extract::{extract_links, find_duplicate_descriptions, LinkPolicy};
use crate::fetch::{build_http_client, fetch_page, resolve, FetchedPage};
use crate::probe::result::{FetchMode, LinkRecord, SeedPayload, SeedResult};
use crate::url::normalize_url;
use crate::ProbeError;
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::time::Duration;

/// Runs seed analyses with a shared HTTP client
///
/// A `Prober` holds no per-batch state; it can serve any number of batches
/// concurrently.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    timeout: Duration,
    max_concurrent_links: usize,
    allowlist: LinkPolicy,
}

impl Prober {
    /// Creates a prober from the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Prober)` - Successfully built the HTTP client
    /// * `Err(ProbeError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, ProbeError> {
        let client = build_http_client(&config.http)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a prober around an existing client
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            timeout: Duration::from_secs(config.http.timeout_secs),
            max_concurrent_links: config.http.max_concurrent_links.max(1),
            allowlist: LinkPolicy::allowlist(config.filter.substrings.iter().cloned()),
        }
    }

    /// Overrides the per-request deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs every seed concurrently and returns results in input order
    ///
    /// Seeds are not validated here; one seed failing never affects another.
    pub async fn probe_batch<S: AsRef<str>>(&self, urls: &[S], mode: FetchMode) -> Vec<SeedResult> {
        tracing::info!("Probing {} seed URLs in {} mode", urls.len(), mode);

        let results = join_all(urls.iter().map(|url| self.probe_seed(url.as_ref(), mode))).await;

        let failed = results.iter().filter(|r| r.is_error()).count();
        tracing::info!(
            "Batch complete: {} succeeded, {} failed",
            results.len() - failed,
            failed
        );

        results
    }

    /// Fetches one seed page and runs the mode's pipeline over it
    pub async fn probe_seed(&self, raw: &str, mode: FetchMode) -> SeedResult {
        let url = match normalize_url(raw) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping seed {}: {}", raw, e);
                return SeedResult::failure(raw, mode, 0, e.to_string());
            }
        };

        tracing::debug!("Fetching seed {}", url);

        match fetch_page(&self.client, &url, self.timeout).await {
            Ok(page) => {
                let payload = self.analyze(&page, mode).await;
                tracing::debug!("Finished seed {}", url);
                SeedResult::success(raw, page.status_code, payload)
            }
            Err(ProbeError::SeedFetch {
                status_code,
                message,
                ..
            }) => {
                tracing::warn!("Failed to fetch seed {}: {}", url, message);
                SeedResult::failure(raw, mode, status_code, message)
            }
            Err(e) => {
                tracing::warn!("Failed to fetch seed {}: {}", url, e);
                SeedResult::failure(raw, mode, 0, e.to_string())
            }
        }
    }

    /// Dispatches a fetched page to the mode-specific pipeline
    ///
    /// Relative links resolve against the page's final URL.
    async fn analyze(&self, page: &FetchedPage, mode: FetchMode) -> SeedPayload {
        match mode {
            FetchMode::Rt => {
                let fetched_urls = extract_links(&page.body, &page.final_url, &self.allowlist);
                let destination_urls = self.resolve_links(&fetched_urls).await;
                SeedPayload::Rt {
                    fetched_urls,
                    destination_urls,
                }
            }
            FetchMode::Broken => {
                let links = extract_links(&page.body, &page.final_url, &LinkPolicy::Unrestricted);
                let total_links = links.len();
                let broken_links = self
                    .resolve_links(&links)
                    .await
                    .into_iter()
                    .filter(LinkRecord::is_broken)
                    .collect();
                SeedPayload::Broken {
                    total_links,
                    broken_links,
                }
            }
            FetchMode::Seo => SeedPayload::Seo {
                duplicate_descriptions: find_duplicate_descriptions(&page.body),
            },
        }
    }

    /// Resolves links concurrently, preserving their order
    ///
    /// At most `max_concurrent_links` requests are in flight at once.
    pub async fn resolve_links(&self, links: &[String]) -> Vec<LinkRecord> {
        tracing::debug!("Resolving {} links", links.len());

        stream::iter(links.iter().cloned())
            .map(|link| async move {
                let outcome = resolve(&self.client, &link, self.timeout).await;
                LinkRecord::new(link, outcome)
            })
            .buffered(self.max_concurrent_links)
            .collect()
            .await
    }
}
