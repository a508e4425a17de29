//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`QuoteService`]: quote pricing with the configured rate table
//! - [`CatalogService`]: deduplicated display lists
//! - [`ContactService`]: contact form intake

pub mod catalog;
pub mod contact;
pub mod quoting;

pub use catalog::CatalogService;
pub use contact::ContactService;
pub use quoting::QuoteService;
