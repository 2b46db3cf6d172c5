//! URL handling module for Linkprobe
//!
//! This module provides seed URL normalization and batch validation. Both run
//! before any network activity; a failure here rejects the whole batch.

mod normalize;
mod validate;

// Re-export main functions
pub use normalize::normalize_url;
pub use validate::{matches_url_pattern, prepare_batch, split_url_lines, validate_batch};
