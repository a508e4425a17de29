//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Pricing
//!
//! - [`Tier`]: basic, standard or premium
//! - [`RateTable`]: base rate per m² for each tier
//! - [`DiscountSchedule`]: volume discount steps
//! - [`PricingConfig`]: rate table plus discount schedule
//! - [`QuoteRequest`] / [`QuoteBreakdown`]: engine input and output
//!
//! ## Content
//!
//! - [`RecordKind`]: the five display record kinds
//! - [`CategoryFilter`]: portfolio category selection

pub mod category_filter;
pub mod discount_schedule;
pub mod pricing_config;
pub mod quote_breakdown;
pub mod rate_table;
pub mod record_kind;
pub mod tier;

pub use category_filter::CategoryFilter;
pub use discount_schedule::{DiscountSchedule, DiscountStep};
pub use pricing_config::PricingConfig;
pub use quote_breakdown::{QuoteBreakdown, QuoteRequest};
pub use rate_table::RateTable;
pub use record_kind::RecordKind;
pub use tier::Tier;
