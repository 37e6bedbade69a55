// webautobid.rs
use crate::domain::{PricePolicy, RawListing, Source};
use crate::scraper::adapter::{element_text, ListingAdapter};
use crate::scraper::ScraperError;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

// .carbox
//  ├── .title   "BMW 320 d Touring 2014"
//  └── .bid     "€4,350.00"

static CARD_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(".carbox").unwrap());
static TITLE_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(".title").unwrap());
static BID_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(".bid").unwrap());

pub struct WebAutoBidAdapter;

impl ListingAdapter for WebAutoBidAdapter {
    fn source(&self) -> Source {
        Source::WebAutoBid
    }

    fn price_policy(&self) -> PricePolicy {
        PricePolicy::Decimal
    }

    /// Cards whose title does not contain `make_filter` (ignoring case) are
    /// skipped here, before any normalization.
    fn parse(&self, markup: &str, make_filter: &str) -> Result<Vec<RawListing>, ScraperError> {
        let document = Html::parse_document(markup);
        let needle = make_filter.to_lowercase();
        let mut listings = Vec::new();

        for card in document.select(&CARD_SEL) {
            let (Some(title_el), Some(bid_el)) =
                (card.select(&TITLE_SEL).next(), card.select(&BID_SEL).next())
            else {
                continue;
            };

            let title = element_text(title_el);
            if !title.to_lowercase().contains(&needle) {
                continue;
            }

            listings.push(RawListing::new(title, element_text(bid_el)));
        }

        Ok(listings)
    }
}
