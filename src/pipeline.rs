// src/pipeline.rs
use crate::config::ScraperConfig;
use crate::domain::{aggregate, ComparisonTable, NormalizedListing, Source};
use crate::scraper::{extract_ss, extract_webautobid, PageFetcher, ScraperError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

/// The finished result of one comparison run. Never mutated after
/// construction; callers share it behind an `Arc`.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSnapshot {
    pub make_filter: String,
    pub pages: u32,
    /// Listings per source that made it into aggregation.
    pub listing_counts: BTreeMap<Source, usize>,
    pub created_at: DateTime<Utc>,
    pub table: ComparisonTable,
}

impl ComparisonSnapshot {
    pub fn from_listings(make_filter: &str, pages: u32, listings: &[NormalizedListing]) -> Self {
        let mut listing_counts: BTreeMap<Source, usize> =
            Source::ALL.iter().map(|s| (*s, 0)).collect();
        for listing in listings {
            *listing_counts.entry(listing.source).or_default() += 1;
        }

        Self {
            make_filter: make_filter.to_string(),
            pages,
            listing_counts,
            created_at: Utc::now(),
            table: aggregate(listings),
        }
    }

    pub fn total_listings(&self) -> usize {
        self.listing_counts.values().sum()
    }
}

/// Fetches WebAutoBid once and SS.com `pages` times, one request after the
/// other, and aggregates everything into a fresh snapshot.
///
/// The first fetch error ends the run; there is no partial snapshot.
pub fn run_comparison(
    fetcher: &dyn PageFetcher,
    config: &ScraperConfig,
    make_filter: &str,
    pages: u32,
) -> Result<ComparisonSnapshot, ScraperError> {
    let start = Instant::now();
    tracing::info!(make = make_filter, pages, "comparison started");

    let mut listings = extract_webautobid(fetcher, config, make_filter)?;
    listings.extend(extract_ss(fetcher, config, make_filter, pages)?);

    let snapshot = ComparisonSnapshot::from_listings(make_filter, pages, &listings);

    tracing::info!(
        make = make_filter,
        listings = snapshot.total_listings(),
        rows = snapshot.table.rows().len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "comparison finished"
    );

    Ok(snapshot)
}
