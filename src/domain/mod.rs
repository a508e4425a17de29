//! # Domain Layer
//!
//! Pure types and logic with no I/O.
//!
//! - [`value_objects`]: tiers, pricing configuration, quote values, filters
//! - [`entities`]: display records and contact submissions
//! - [`services`]: the quote engine and the list normalizer
//! - [`errors`]: domain error types

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
