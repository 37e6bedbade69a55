// src/domain/listing.rs

use serde::Serialize;
use std::fmt;

/// Where a listing was scraped from.
///
/// Variant order is the column order of the comparison pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Source {
    #[serde(rename = "SS.com")]
    SsCom,
    #[serde(rename = "WebAutoBid")]
    WebAutoBid,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::SsCom, Source::WebAutoBid];

    pub fn label(self) -> &'static str {
        match self {
            Source::SsCom => "SS.com",
            Source::WebAutoBid => "WebAutoBid",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text pulled out of one listing element, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub title: String,
    pub price: String,
}

impl RawListing {
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
        }
    }
}

/// A listing that passed the year and price filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedListing {
    pub make: String,
    pub model: String,
    pub year: u16,
    pub price: u64,
    pub source: Source,
}
