//! Fetch module for outbound HTTP requests
//!
//! This module contains:
//! - The redirect resolver used for every extracted link
//! - The seed page fetcher used by the orchestrator
//! - Outcome classification shared by both

mod fetcher;
mod outcome;

pub use fetcher::{build_http_client, fetch_page, resolve, FetchedPage};
pub use outcome::{status_error_message, RequestError, ResolutionOutcome, TIMEOUT_STATUS};
