//! Batch statistics
//!
//! Pure aggregation over a finished batch. None of these counts are part of
//! a seed result; callers compute them when they need them.

use crate::config::FilterConfig;
use crate::probe::{SeedPayload, SeedResult};
use serde::Serialize;

/// Aggregate counts over one batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStatistics {
    /// Number of seeds in the batch
    pub seeds: usize,

    /// Seeds whose page could not be fetched
    pub failed_seeds: usize,

    /// Links resolved across all seeds
    pub links_checked: usize,

    /// Failed seeds plus broken link records
    pub red_links: usize,

    /// Tracked links from the shortener domain that end on the destination domain
    pub shortener_to_destination: usize,

    /// Tracked links that point at the destination domain directly
    pub direct_destination: usize,
}

/// Computes batch statistics
///
/// The first filter substring names the shortener domain and the second the
/// destination domain. A tracked link counts as shortener-to-destination when
/// it contains the shortener and either it or its final URL contains the
/// destination; it counts as direct when only the destination matches.
pub fn summarize(results: &[SeedResult], filter: &FilterConfig) -> BatchStatistics {
    let shortener = filter.substrings.first().map(String::as_str);
    let destination = filter.substrings.get(1).map(String::as_str);

    let mut stats = BatchStatistics {
        seeds: results.len(),
        ..BatchStatistics::default()
    };

    for result in results {
        if result.is_error() {
            stats.failed_seeds += 1;
            stats.red_links += 1;
            continue;
        }

        stats.red_links += result.link_records().iter().filter(|r| r.is_broken()).count();

        match &result.payload {
            SeedPayload::Rt {
                fetched_urls,
                destination_urls,
            } => {
                stats.links_checked += destination_urls.len();

                for (i, fetched) in fetched_urls.iter().enumerate() {
                    let final_url = destination_urls
                        .get(i)
                        .map(|r| r.outcome.final_url.as_str())
                        .unwrap_or("");

                    let is_destination = destination
                        .is_some_and(|d| fetched.contains(d) || final_url.contains(d));
                    let is_shortener = shortener.is_some_and(|s| fetched.contains(s));

                    if is_shortener && is_destination {
                        stats.shortener_to_destination += 1;
                    } else if is_destination {
                        stats.direct_destination += 1;
                    }
                }
            }
            SeedPayload::Broken { total_links, .. } => {
                stats.links_checked += total_links;
            }
            SeedPayload::Seo { .. } => {}
        }
    }

    stats
}
