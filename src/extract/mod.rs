//! HTML extraction for Linkprobe
//!
//! Pure functions over an HTML string: outbound anchor links under a
//! [`LinkPolicy`], and duplicated content across SEO metadata slots.

mod links;
mod seo;

pub use links::{extract_links, LinkPolicy};
pub use seo::{
    find_duplicate_descriptions, find_duplicates, DuplicateReport, MetaKey, MetadataSlot,
    METADATA_SLOTS,
};
