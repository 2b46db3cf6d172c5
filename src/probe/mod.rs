//! Probe module: per-seed orchestration
//!
//! For each seed URL the pipeline is:
//! 1. Normalize the seed and fetch the page
//! 2. Extract links or metadata according to the [`FetchMode`]
//! 3. Resolve extracted links concurrently
//! 4. Assemble a [`SeedResult`]
//!
//! Seed and link failures are recorded in the results; they never abort a batch.

mod coordinator;
mod result;

pub use coordinator::Prober;
pub use result::{FetchMode, LinkRecord, SeedPayload, SeedResult, SeedStatus};
