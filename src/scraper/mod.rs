mod adapter;
mod fetcher;
mod scraper_error;
mod ss;
mod webautobid;

pub use adapter::ListingAdapter;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use scraper_error::ScraperError;
pub use ss::SsAdapter;
pub use webautobid::WebAutoBidAdapter;

use crate::config::ScraperConfig;
use crate::domain::NormalizedListing;

/// Fetches the WebAutoBid auction page and returns its listings whose title
/// contains `make_filter`.
pub fn extract_webautobid(
    fetcher: &dyn PageFetcher,
    config: &ScraperConfig,
    make_filter: &str,
) -> Result<Vec<NormalizedListing>, ScraperError> {
    let markup = fetcher.fetch(&config.webautobid_url)?;
    let filtered = WebAutoBidAdapter.extract(&markup, make_filter)?;

    tracing::info!(
        source = "WebAutoBid",
        kept = filtered.kept.len(),
        discarded = filtered.discarded.len(),
        "page extracted"
    );

    Ok(filtered.kept)
}

/// Fetches SS.com pages `1..=page_count` for `make_filter`, in order.
///
/// Any page failing to load fails the whole call; listings from pages that
/// did load are not returned.
pub fn extract_ss(
    fetcher: &dyn PageFetcher,
    config: &ScraperConfig,
    make_filter: &str,
    page_count: u32,
) -> Result<Vec<NormalizedListing>, ScraperError> {
    let mut listings = Vec::new();

    for page in 1..=page_count {
        let url = SsAdapter::page_url(&config.ss_base_url, make_filter, page);
        let markup = fetcher.fetch(&url)?;
        let filtered = SsAdapter.extract(&markup, make_filter)?;

        tracing::info!(
            source = "SS.com",
            page,
            kept = filtered.kept.len(),
            discarded = filtered.discarded.len(),
            "page extracted"
        );

        listings.extend(filtered.kept);
    }

    Ok(listings)
}
