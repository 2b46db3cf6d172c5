//! Per-seed result records

use crate::fetch::ResolutionOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analysis run for every seed in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Resolve allowlisted links to their redirect destination
    #[default]
    Rt,
    /// Resolve every link and keep the broken ones
    Broken,
    /// Detect duplicated SEO metadata
    Seo,
}

impl FetchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rt => "rt",
            Self::Broken => "broken",
            Self::Seo => "seo",
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rt" => Ok(Self::Rt),
            "broken" => Ok(Self::Broken),
            "seo" => Ok(Self::Seo),
            other => Err(format!(
                "unknown fetch type '{}', expected rt, broken or seo",
                other
            )),
        }
    }
}

/// Overall state of one seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedStatus {
    Success,
    Error,
}

/// An extracted link paired with its resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub original_url: String,
    #[serde(flatten)]
    pub outcome: ResolutionOutcome,
    /// True when the final URL differs from the original link
    pub redirected: bool,
}

impl LinkRecord {
    pub fn new(original_url: String, outcome: ResolutionOutcome) -> Self {
        let redirected = outcome.final_url != original_url;
        Self {
            original_url,
            outcome,
            redirected,
        }
    }

    pub fn is_broken(&self) -> bool {
        self.outcome.is_broken()
    }
}

/// Mode-specific part of a seed result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "fetchType", rename_all = "lowercase")]
pub enum SeedPayload {
    /// Allowlisted links in extraction order, with a parallel record per link
    #[serde(rename_all = "camelCase")]
    Rt {
        fetched_urls: Vec<String>,
        destination_urls: Vec<LinkRecord>,
    },

    /// Size of the full link set and the broken subsequence
    #[serde(rename_all = "camelCase")]
    Broken {
        total_links: usize,
        broken_links: Vec<LinkRecord>,
    },

    /// Duplicate metadata reports in slot order
    #[serde(rename_all = "camelCase")]
    Seo { duplicate_descriptions: Vec<String> },
}

impl SeedPayload {
    /// Payload reported when the seed page could not be analyzed
    pub fn empty(mode: FetchMode) -> Self {
        match mode {
            FetchMode::Rt => Self::Rt {
                fetched_urls: Vec::new(),
                destination_urls: Vec::new(),
            },
            FetchMode::Broken => Self::Broken {
                total_links: 0,
                broken_links: Vec::new(),
            },
            FetchMode::Seo => Self::Seo {
                duplicate_descriptions: Vec::new(),
            },
        }
    }

    pub fn mode(&self) -> FetchMode {
        match self {
            Self::Rt { .. } => FetchMode::Rt,
            Self::Broken { .. } => FetchMode::Broken,
            Self::Seo { .. } => FetchMode::Seo,
        }
    }
}

/// Result of running one seed through its pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResult {
    /// The seed exactly as the caller supplied it
    pub source_url: String,
    pub status: SeedStatus,
    /// Status of the seed fetch; 408 on timeout, 0 when no response arrived
    pub status_code: u16,
    /// Set only when the seed page itself could not be fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: SeedPayload,
}

impl SeedResult {
    pub fn success(source_url: impl Into<String>, status_code: u16, payload: SeedPayload) -> Self {
        Self {
            source_url: source_url.into(),
            status: SeedStatus::Success,
            status_code,
            error: None,
            payload,
        }
    }

    pub fn failure(
        source_url: impl Into<String>,
        mode: FetchMode,
        status_code: u16,
        error: impl Into<String>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            status: SeedStatus::Error,
            status_code,
            error: Some(error.into()),
            payload: SeedPayload::empty(mode),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == SeedStatus::Error
    }

    pub fn mode(&self) -> FetchMode {
        self.payload.mode()
    }

    /// Link records carried by rt and broken payloads
    pub fn link_records(&self) -> &[LinkRecord] {
        match &self.payload {
            SeedPayload::Rt {
                destination_urls, ..
            } => destination_urls,
            SeedPayload::Broken { broken_links, .. } => broken_links,
            SeedPayload::Seo { .. } => &[],
        }
    }
}
