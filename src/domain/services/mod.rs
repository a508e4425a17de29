//! # Domain Services
//!
//! Pure business logic that does not belong to a single record.
//!
//! ## Services
//!
//! - [`quote_engine::QuoteEngine`]: tier and area pricing with volume discounts
//! - [`list_normalizer`]: stable natural-key deduplication and category filtering

pub mod list_normalizer;
pub mod quote_engine;

pub use list_normalizer::{
    Categorized, NaturalKey, distinct_categories, filter_by_category, normalize,
    normalize_records,
};
pub use quote_engine::{QuoteEngine, compute_quote, round_half_up};
