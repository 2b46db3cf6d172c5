//! HTTP fetcher implementation
//!
//! This module handles all outbound requests, including:
//! - Building the shared HTTP client with the configured User-Agent
//! - Per-request deadlines independent of every other request
//! - Resolving links to their final destination and status
//! - Fetching seed pages for analysis

use crate::config::HttpConfig;
use crate::fetch::outcome::{RequestError, ResolutionOutcome};
use crate::ProbeError;
use reqwest::{redirect::Policy, Client, Response, StatusCode};
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use url::Url;

/// A successfully fetched seed page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,
    /// HTTP status code (always 2xx)
    pub status_code: u16,
    /// Page body content
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed by the transport up to `max_redirects` hops, so a
/// response's URL is already the end of the redirect chain.
///
/// # Example
///
/// ```no_run
/// use linkprobe::config::HttpConfig;
/// use linkprobe::fetch::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Sends a GET request that is abandoned once `deadline` passes
async fn send_before(client: &Client, url: &str, deadline: Instant) -> Result<Response, RequestError> {
    match timeout_at(deadline, client.get(url).send()).await {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(e)) => Err(RequestError::from(e)),
        Err(_) => Err(RequestError::Timeout),
    }
}

/// Resolves a URL to its final destination and status
///
/// Issues exactly one request with its own deadline. No retries are made and
/// the response body is never read.
///
/// # Classification
///
/// | Condition | Status | Error |
/// |-----------|--------|-------|
/// | Response received | actual | see [`crate::fetch::status_error_message`] |
/// | Deadline fired | 408 | Request timed out |
/// | Connection failed | 0 | Network error or CORS restriction |
/// | Other transport failure | 0 | underlying message |
pub async fn resolve(client: &Client, url: &str, timeout: Duration) -> ResolutionOutcome {
    let deadline = Instant::now() + timeout;

    match send_before(client, url, deadline).await {
        Ok(response) => {
            let outcome = ResolutionOutcome::from_status(response.url().as_str(), response.status());
            tracing::trace!("Resolved {} -> {} ({})", url, outcome.final_url, outcome.status_code);
            outcome
        }
        Err(e) => {
            tracing::debug!("Failed to resolve {}: {}", url, e);
            ResolutionOutcome::from_error(url, &e)
        }
    }
}

/// Fetches a seed page and reads its body
///
/// The deadline covers both the response headers and the body.
///
/// # Errors
///
/// Returns `ProbeError::SeedFetch` when no response arrives in time, the
/// transport fails, or the status is not 2xx.
pub async fn fetch_page(client: &Client, url: &Url, timeout: Duration) -> Result<FetchedPage, ProbeError> {
    let deadline = Instant::now() + timeout;
    let seed_error = |status_code: u16, message: String| ProbeError::SeedFetch {
        url: url.to_string(),
        status_code,
        message,
    };

    let response = send_before(client, url.as_str(), deadline)
        .await
        .map_err(|e| seed_error(e.status_code(), e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(seed_error(status.as_u16(), seed_status_message(status)));
    }

    let final_url = response.url().clone();
    let body = match timeout_at(deadline, response.text()).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            let e = RequestError::from(e);
            return Err(seed_error(e.status_code(), e.to_string()));
        }
        Err(_) => {
            let e = RequestError::Timeout;
            return Err(seed_error(e.status_code(), e.to_string()));
        }
    };

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        body,
    })
}

/// Error text for a seed page that answered with a non-2xx status
fn seed_status_message(status: StatusCode) -> String {
    if status == StatusCode::FORBIDDEN {
        return "Access Forbidden - Consider authentication or checking access permissions"
            .to_string();
    }
    format!("HTTP error! status: {}", status.as_u16())
}
