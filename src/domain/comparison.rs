// src/domain/comparison.rs

use crate::domain::listing::{NormalizedListing, Source};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

pub const DIFFERENCE_HEADER: &str = "difference (€)";
pub const KEY_HEADERS: [&str; 3] = ["make", "model", "year"];

/// One (make, model, year) line of the comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub make: String,
    pub model: String,
    pub year: u16,
    /// Median price per source. A source with no listings for this key has
    /// no entry.
    pub prices: BTreeMap<Source, f64>,
    /// SS.com minus WebAutoBid, with a missing side counted as 0.
    pub difference: f64,
}

impl ComparisonRow {
    pub fn price(&self, source: Source) -> Option<f64> {
        self.prices.get(&source).copied()
    }

    pub fn has_all_sources(&self) -> bool {
        Source::ALL.iter().all(|s| self.prices.contains_key(s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    sources: Vec<Source>,
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Source columns to show. An empty table keeps the full shape so the
    /// headers still render.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn headers(&self) -> Vec<String> {
        KEY_HEADERS
            .iter()
            .map(|h| h.to_string())
            .chain(self.sources().iter().map(|s| s.label().to_string()))
            .chain(std::iter::once(DIFFERENCE_HEADER.to_string()))
            .collect()
    }
}

/// Median of an unsorted price set. Even-sized sets average the two middle
/// values.
///
/// Exact for prices up to 2^53; larger ones round to the nearest `f64`.
pub fn median(prices: &[u64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }

    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

/// Renders a price or difference. Whole amounts print without a fraction.
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}

type GroupKey = (String, String, u16);

/// Groups listings by (source, make, model, year), takes the median of each
/// group and pivots sources into columns. Rows come out ordered by
/// (make, model, year).
pub fn aggregate(listings: &[NormalizedListing]) -> ComparisonTable {
    let mut groups: BTreeMap<GroupKey, BTreeMap<Source, Vec<u64>>> = BTreeMap::new();
    let mut seen: BTreeSet<Source> = BTreeSet::new();

    for listing in listings {
        seen.insert(listing.source);
        groups
            .entry((listing.make.clone(), listing.model.clone(), listing.year))
            .or_default()
            .entry(listing.source)
            .or_default()
            .push(listing.price);
    }

    let rows = groups
        .into_iter()
        .map(|((make, model, year), by_source)| {
            let prices: BTreeMap<Source, f64> = by_source
                .iter()
                .filter_map(|(source, prices)| median(prices).map(|m| (*source, m)))
                .collect();

            let ss = prices.get(&Source::SsCom).copied().unwrap_or(0.0);
            let wab = prices.get(&Source::WebAutoBid).copied().unwrap_or(0.0);

            ComparisonRow {
                make,
                model,
                year,
                prices,
                difference: ss - wab,
            }
        })
        .collect::<Vec<_>>();

    let sources = if seen.is_empty() {
        Source::ALL.to_vec()
    } else {
        seen.into_iter().collect()
    };

    ComparisonTable { sources, rows }
}
