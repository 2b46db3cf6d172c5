//! Plain-text batch report for the command line

use crate::output::stats::BatchStatistics;
use crate::probe::{LinkRecord, SeedPayload, SeedResult};
use std::fmt::Write;

/// Renders a batch as a plain-text report
///
/// The report is a function of its arguments only.
pub fn format_report(results: &[SeedResult], stats: &BatchStatistics) -> String {
    let mut out = String::new();

    for result in results {
        let _ = writeln!(out, "{}", result.source_url);

        if let Some(error) = &result.error {
            let _ = writeln!(out, "  ERROR ({}): {}", result.status_code, error);
            out.push('\n');
            continue;
        }

        match &result.payload {
            SeedPayload::Rt {
                destination_urls, ..
            } => {
                if destination_urls.is_empty() {
                    let _ = writeln!(out, "  No tracked links found");
                }
                for record in destination_urls {
                    let _ = writeln!(out, "  {}", record.original_url);
                    let _ = writeln!(out, "    -> {} [{}]", record.outcome.final_url, status_text(record));
                }
            }
            SeedPayload::Broken {
                total_links,
                broken_links,
            } => {
                if broken_links.is_empty() {
                    let _ = writeln!(out, "  No broken links ({} checked)", total_links);
                } else {
                    let noun = if broken_links.len() == 1 { "link" } else { "links" };
                    let _ = writeln!(
                        out,
                        "  {} broken {} out of {} total",
                        broken_links.len(),
                        noun,
                        total_links
                    );
                }
                for record in broken_links {
                    let _ = writeln!(out, "  {} [{}]", record.original_url, status_text(record));
                    if record.redirected {
                        let _ = writeln!(out, "    -> {}", record.outcome.final_url);
                    }
                }
            }
            SeedPayload::Seo {
                duplicate_descriptions,
            } => {
                if duplicate_descriptions.is_empty() {
                    let _ = writeln!(out, "  No duplicate metadata");
                }
                for duplicate in duplicate_descriptions {
                    let _ = writeln!(out, "  Duplicate found: {}", duplicate);
                }
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "=== Summary ===");
    let _ = writeln!(
        out,
        "  Seeds: {} ({} failed)",
        stats.seeds, stats.failed_seeds
    );
    let _ = writeln!(out, "  Links checked: {}", stats.links_checked);
    let _ = writeln!(out, "  Red links: {}", stats.red_links);
    if results.iter().any(|r| matches!(r.payload, SeedPayload::Rt { .. })) {
        let _ = writeln!(
            out,
            "  Shortener to destination: {}",
            stats.shortener_to_destination
        );
        let _ = writeln!(out, "  Direct destination: {}", stats.direct_destination);
    }

    out
}

/// Prints the report to stdout
pub fn print_report(results: &[SeedResult], stats: &BatchStatistics) {
    print!("{}", format_report(results, stats));
}

fn status_text(record: &LinkRecord) -> String {
    match (&record.outcome.error, record.outcome.status_code) {
        (Some(error), code) => format!("{} {}", code, error),
        (None, code) => code.to_string(),
    }
}
