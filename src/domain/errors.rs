//! # Domain Errors
//!
//! Error types raised by the pure domain layer.
//!
//! - [`QuoteError`]: the single failure kind of the quote engine
//! - [`PricingError`]: an invalid rate table or discount schedule
//! - [`InvalidContactError`]: a rejected contact form field
//!
//! # Examples
//!
//! ```
//! use mural_studio::domain::errors::{QuoteError, QuoteField};
//!
//! let err = QuoteError::invalid_area("area must be greater than zero");
//! assert_eq!(err.field(), QuoteField::Area);
//! assert!(err.to_string().contains("area"));
//! ```

use crate::domain::value_objects::tier::Tier;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The request field a [`QuoteError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteField {
    /// The requested area in square meters.
    Area,
    /// The requested complexity tier.
    Tier,
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Area => write!(f, "area"),
            Self::Tier => write!(f, "tier"),
        }
    }
}

/// Quote engine error.
///
/// Rejecting the input is the only way the engine fails. An area too large
/// to price as a finite number is rejected like any other bad area.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The request carried an invalid area or an unknown tier.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Which field was rejected.
        field: QuoteField,
        /// Human-readable reason.
        reason: String,
    },
}

impl QuoteError {
    /// Creates an invalid area error.
    #[must_use]
    pub fn invalid_area(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: QuoteField::Area,
            reason: reason.into(),
        }
    }

    /// Creates an invalid tier error.
    #[must_use]
    pub fn invalid_tier(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: QuoteField::Tier,
            reason: reason.into(),
        }
    }

    /// Returns the field that was rejected.
    #[must_use]
    pub fn field(&self) -> QuoteField {
        match self {
            Self::InvalidInput { field, .. } => *field,
        }
    }
}

/// Result type for quote operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Invalid pricing configuration.
///
/// Raised when building a rate table or discount schedule, normally while
/// loading configuration at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A tier's base rate is not a finite positive number.
    #[error("invalid base rate for tier {tier}: {rate}")]
    InvalidRate {
        /// Offending tier.
        tier: Tier,
        /// Offending rate.
        rate: f64,
    },

    /// A discount threshold is not a finite positive number.
    #[error("discount step {index}: threshold must be finite and positive, got {min_area}")]
    InvalidThreshold {
        /// Position of the step in the schedule.
        index: usize,
        /// Offending threshold.
        min_area: f64,
    },

    /// Thresholds are not strictly ascending.
    #[error("discount step {index}: threshold {min_area} does not exceed the previous one")]
    UnorderedThreshold {
        /// Position of the step in the schedule.
        index: usize,
        /// Offending threshold.
        min_area: f64,
    },

    /// A discount percentage is above 100.
    #[error("discount step {index}: percent must be at most 100, got {percent}")]
    InvalidPercent {
        /// Position of the step in the schedule.
        index: usize,
        /// Offending percentage.
        percent: u8,
    },

    /// A larger threshold grants a smaller discount.
    #[error("discount step {index}: percent {percent} is lower than the previous step")]
    DecreasingDiscount {
        /// Position of the step in the schedule.
        index: usize,
        /// Offending percentage.
        percent: u8,
    },
}

/// Result type for pricing configuration.
pub type PricingResult<T> = Result<T, PricingError>;

/// The contact form field an [`InvalidContactError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Sender phone number.
    Phone,
    /// Sender email address.
    Email,
    /// Message body.
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
            Self::Email => write!(f, "email"),
            Self::Message => write!(f, "message"),
        }
    }
}

/// A contact form field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct InvalidContactError {
    /// Rejected field.
    pub field: ContactField,
    /// Human-readable reason.
    pub reason: String,
}

impl InvalidContactError {
    /// Creates a contact validation error.
    #[must_use]
    pub fn new(field: ContactField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_area_carries_field() {
        let err = QuoteError::invalid_area("must be positive");
        assert_eq!(err.field(), QuoteField::Area);
        assert_eq!(err.to_string(), "invalid area: must be positive");
    }

    #[test]
    fn invalid_tier_carries_field() {
        let err = QuoteError::invalid_tier("unknown tier 'gold'");
        assert_eq!(err.field(), QuoteField::Tier);
        assert!(err.to_string().contains("gold"));
    }

    #[test]
    fn field_serializes_lowercase() {
        let json = serde_json::to_string(&QuoteField::Area).unwrap_or_default();
        assert_eq!(json, "\"area\"");
    }

    #[test]
    fn pricing_error_messages() {
        let err = PricingError::InvalidRate {
            tier: Tier::Basic,
            rate: -1.0,
        };
        assert!(err.to_string().contains("basic"));

        let err = PricingError::DecreasingDiscount {
            index: 1,
            percent: 3,
        };
        assert!(err.to_string().contains("step 1"));
    }
}
