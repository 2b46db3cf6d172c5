//! Request and response bodies of the HTTP API

use crate::probe::{FetchMode, SeedResult};
use crate::url::split_url_lines;
use serde::{Deserialize, Serialize};

/// `urls` accepts a JSON array or one newline-separated string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UrlsInput {
    List(Vec<String>),
    Text(String),
}

impl UrlsInput {
    pub fn into_urls(self) -> Vec<String> {
        match self {
            Self::List(urls) => urls,
            Self::Text(text) => split_url_lines(&text),
        }
    }
}

/// Body of `POST /api/fetch-urls`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchUrlsRequest {
    pub urls: UrlsInput,
    #[serde(default)]
    pub fetch_type: Option<FetchMode>,
}

/// Successful response of `POST /api/fetch-urls`
#[derive(Debug, Clone, Serialize)]
pub struct FetchUrlsResponse {
    pub success: bool,
    pub results: Vec<SeedResult>,
}

impl FetchUrlsResponse {
    pub fn new(results: Vec<SeedResult>) -> Self {
        Self {
            success: true,
            results,
        }
    }
}

/// Query string of `GET /api/check-description`
#[derive(Debug, Clone, Deserialize)]
pub struct CheckDescriptionQuery {
    pub url: Option<String>,
}

/// Successful response of `GET /api/check-description`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDescriptionResponse {
    pub success: bool,
    pub has_duplicate_description: bool,
    pub duplicates: Vec<String>,
}

impl CheckDescriptionResponse {
    pub fn new(duplicates: Vec<String>) -> Self {
        Self {
            success: true,
            has_duplicate_description: !duplicates.is_empty(),
            duplicates,
        }
    }
}

/// Body of every 400 response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
