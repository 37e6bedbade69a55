// adapter.rs
use crate::domain::{normalize_all, Filtered, PricePolicy, RawListing, Source};
use crate::scraper::ScraperError;
use scraper::ElementRef;

/// Knows the markup shape of one source. Turns a page into raw listings;
/// fetching and normalization happen elsewhere.
pub trait ListingAdapter {
    fn source(&self) -> Source;

    fn price_policy(&self) -> PricePolicy;

    fn parse(&self, markup: &str, make_filter: &str) -> Result<Vec<RawListing>, ScraperError>;

    fn extract(&self, markup: &str, make_filter: &str) -> Result<Filtered, ScraperError> {
        let raws = self.parse(markup, make_filter)?;
        Ok(normalize_all(raws, self.source(), self.price_policy()))
    }
}

/// Concatenated text of an element, each text node trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}
