// src/domain/normalize.rs

use crate::domain::listing::{NormalizedListing, RawListing, Source};
use crate::domain::title::parse_title;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

/// How a source's price text is cleaned and accepted.
///
/// The two sources disagree on decimals: WebAutoBid bids may carry cents and
/// are truncated, SS.com prices must be whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePolicy {
    /// Strip `€` and `,`, trim, allow one decimal point, truncate.
    Decimal,
    /// Strip `€`, spaces and `,`; digits only.
    WholeNumber,
}

impl PricePolicy {
    pub fn clean(self, raw: &str) -> String {
        match self {
            PricePolicy::Decimal => raw.replace(&['€', ','][..], "").trim().to_string(),
            PricePolicy::WholeNumber => raw.replace(&['€', ' ', ','][..], ""),
        }
    }

    pub fn parse(self, raw: &str) -> Result<u64, Discard> {
        let cleaned = self.clean(raw);
        let invalid = || Discard::InvalidPrice {
            cleaned: cleaned.clone(),
        };

        match self {
            PricePolicy::Decimal => {
                let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
                let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

                if whole.is_empty() && fraction.is_empty() {
                    return Err(invalid());
                }
                if !digits_only(whole) || !digits_only(fraction) {
                    return Err(invalid());
                }
                if whole.is_empty() {
                    return Ok(0);
                }
                whole.parse().map_err(|_| invalid())
            }
            PricePolicy::WholeNumber => {
                if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                cleaned.parse().map_err(|_| invalid())
            }
        }
    }
}

/// Why a raw listing never made it into the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discard {
    MissingYear,
    InvalidPrice { cleaned: String },
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discard::MissingYear => write!(f, "no 19xx/20xx year in title"),
            Discard::InvalidPrice { cleaned } => write!(f, "price {cleaned:?} is not numeric"),
        }
    }
}

/// First 4-digit year starting with 19 or 20, on word boundaries.
pub fn extract_year(title: &str) -> Option<u16> {
    YEAR_RE.find(title).and_then(|m| m.as_str().parse().ok())
}

pub fn normalize(
    raw: &RawListing,
    source: Source,
    policy: PricePolicy,
) -> Result<NormalizedListing, Discard> {
    let year = extract_year(&raw.title).ok_or(Discard::MissingYear)?;
    let price = policy.parse(&raw.price)?;
    let (make, model) = parse_title(&raw.title);

    Ok(NormalizedListing {
        make,
        model,
        year,
        price,
        source,
    })
}

/// Outcome of running a batch of raw listings through the filters.
#[derive(Debug, Default)]
pub struct Filtered {
    pub kept: Vec<NormalizedListing>,
    pub discarded: Vec<(RawListing, Discard)>,
}

pub fn normalize_all(raws: Vec<RawListing>, source: Source, policy: PricePolicy) -> Filtered {
    let mut out = Filtered::default();

    for raw in raws {
        match normalize(&raw, source, policy) {
            Ok(listing) => out.kept.push(listing),
            Err(reason) => {
                tracing::debug!(%source, title = %raw.title, %reason, "listing discarded");
                out.discarded.push((raw, reason));
            }
        }
    }

    out
}
