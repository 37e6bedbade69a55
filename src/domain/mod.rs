pub mod comparison;
pub mod listing;
pub mod normalize;
pub mod title;

pub use comparison::{aggregate, ComparisonTable};
pub use listing::{NormalizedListing, RawListing, Source};
pub use normalize::{normalize_all, Filtered, PricePolicy};
