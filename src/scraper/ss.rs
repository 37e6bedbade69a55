// ss.rs
use crate::domain::{PricePolicy, RawListing, Source};
use crate::scraper::adapter::{element_text, ListingAdapter};
use crate::scraper::ScraperError;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const MIN_CELLS: usize = 6;
const TITLE_CELL: usize = 2;
const PRICE_CELL: usize = 4;

static ROW_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(r#"tr[align="center"]"#).unwrap());
static CELL_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

/// SS.com classifieds list. Each listing is a `tr[align="center"]` row; the
/// third cell holds the description and the fifth the price.
pub struct SsAdapter;

impl SsAdapter {
    /// `{base}/{make}/sell/page{n}.html`, make lower-cased and used as is.
    pub fn page_url(base_url: &str, make_filter: &str, page: u32) -> String {
        format!(
            "{}/{}/sell/page{page}.html",
            base_url.trim_end_matches('/'),
            make_filter.to_lowercase()
        )
    }
}

impl ListingAdapter for SsAdapter {
    fn source(&self) -> Source {
        Source::SsCom
    }

    fn price_policy(&self) -> PricePolicy {
        PricePolicy::WholeNumber
    }

    /// The make is already part of the page URL, so `make_filter` is not
    /// applied to the rows.
    fn parse(&self, markup: &str, _make_filter: &str) -> Result<Vec<RawListing>, ScraperError> {
        let document = Html::parse_document(markup);
        let listings = document
            .select(&ROW_SEL)
            .filter_map(|row| {
                let cells: Vec<_> = row.select(&CELL_SEL).collect();
                if cells.len() < MIN_CELLS {
                    return None;
                }
                Some(RawListing::new(
                    element_text(cells[TITLE_CELL]),
                    element_text(cells[PRICE_CELL]),
                ))
            })
            .collect();

        Ok(listings)
    }
}
