//! Resolution outcomes and status classification

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Reserved status reported when the local deadline fires before a response
pub const TIMEOUT_STATUS: u16 = 408;

/// Why a request produced no HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The per-request deadline fired
    #[error("Request timed out")]
    Timeout,

    /// The connection could not be established
    #[error("Network error or CORS restriction")]
    Network,

    /// Any other transport failure (bad target, redirect limit, TLS, ...)
    #[error("{0}")]
    Transport(String),
}

impl RequestError {
    /// Status code recorded for this failure
    ///
    /// Timeouts report the reserved 408; every other failure reports 0.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Timeout => TIMEOUT_STATUS,
            Self::Network | Self::Transport(_) => 0,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Network
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Result of resolving one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionOutcome {
    /// Final URL reached after redirects, or the requested URL on failure
    #[serde(rename = "destinationUrl")]
    pub final_url: String,

    /// HTTP status, 0 when no response was obtained
    pub status_code: u16,

    /// True for a 2xx response
    pub ok: bool,

    /// Human-readable failure description
    pub error: Option<String>,
}

impl ResolutionOutcome {
    /// Builds an outcome from a received response status
    pub fn from_status(final_url: impl Into<String>, status: StatusCode) -> Self {
        Self {
            final_url: final_url.into(),
            status_code: status.as_u16(),
            ok: status.is_success(),
            error: status_error_message(status),
        }
    }

    /// Builds an outcome for a request that produced no response
    pub fn from_error(url: impl Into<String>, error: &RequestError) -> Self {
        Self {
            final_url: url.into(),
            status_code: error.status_code(),
            ok: false,
            error: Some(error.to_string()),
        }
    }

    /// A broken link has status >= 400, an error, or no response at all
    pub fn is_broken(&self) -> bool {
        self.status_code >= 400 || self.error.is_some() || self.status_code == 0
    }
}

/// Maps a response status to its error description
///
/// | Status | Error |
/// |--------|-------|
/// | 403 | Access Forbidden |
/// | 404 | Not Found |
/// | 408 | Request Timeout |
/// | 500 | Server Error |
/// | other non-2xx | HTTP Error {status} |
/// | 2xx | none |
pub fn status_error_message(status: StatusCode) -> Option<String> {
    match status {
        StatusCode::FORBIDDEN => Some("Access Forbidden".to_string()),
        StatusCode::NOT_FOUND => Some("Not Found".to_string()),
        StatusCode::INTERNAL_SERVER_ERROR => Some("Server Error".to_string()),
        StatusCode::REQUEST_TIMEOUT => Some("Request Timeout".to_string()),
        s if s.is_success() => None,
        s => Some(format!("HTTP Error {}", s.as_u16())),
    }
}
