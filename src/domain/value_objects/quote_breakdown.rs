//! # Quote Request and Breakdown
//!
//! The validated input and the itemized output of the quote engine.

use crate::domain::errors::{QuoteError, QuoteResult};
use crate::domain::value_objects::tier::Tier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated pricing request.
///
/// Only constructible through [`QuoteRequest::new`] or
/// [`QuoteRequest::parse`], so `area` is always finite and positive.
///
/// # Examples
///
/// ```
/// use mural_studio::domain::value_objects::quote_breakdown::QuoteRequest;
/// use mural_studio::domain::value_objects::tier::Tier;
///
/// let request = QuoteRequest::parse(12.5, "premium").unwrap();
/// assert_eq!(request.tier(), Tier::Premium);
///
/// assert!(QuoteRequest::new(0.0, Tier::Basic).is_err());
/// assert!(QuoteRequest::parse(10.0, "gold").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteRequest {
    area: f64,
    tier: Tier,
}

impl QuoteRequest {
    /// Creates a request for an already-typed tier.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] on the area field if `area` is
    /// NaN, infinite, zero or negative.
    pub fn new(area: f64, tier: Tier) -> QuoteResult<Self> {
        validate_area(area)?;
        Ok(Self { area, tier })
    }

    /// Creates a request from the tier's wire name.
    ///
    /// The area is checked before the tier.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] naming the invalid field.
    pub fn parse(area: f64, tier: &str) -> QuoteResult<Self> {
        validate_area(area)?;
        let tier = tier.parse::<Tier>()?;
        Ok(Self { area, tier })
    }

    /// Requested area in m².
    #[inline]
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Requested tier.
    #[inline]
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }
}

fn validate_area(area: f64) -> QuoteResult<()> {
    if !area.is_finite() {
        return Err(QuoteError::invalid_area(format!(
            "area must be a finite number, got {area}"
        )));
    }
    if area <= 0.0 {
        return Err(QuoteError::invalid_area(format!(
            "area must be greater than zero, got {area}"
        )));
    }
    Ok(())
}

/// Itemized price for a [`QuoteRequest`].
///
/// A plain value: built once per request and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    area: f64,
    tier: Tier,
    base_price_per_m2: f64,
    subtotal: f64,
    discount_percent: u8,
    final_price: f64,
}

impl QuoteBreakdown {
    pub(crate) const fn new(
        area: f64,
        tier: Tier,
        base_price_per_m2: f64,
        subtotal: f64,
        discount_percent: u8,
        final_price: f64,
    ) -> Self {
        Self {
            area,
            tier,
            base_price_per_m2,
            subtotal,
            discount_percent,
            final_price,
        }
    }

    /// Requested area in m².
    #[inline]
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Requested tier.
    #[inline]
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// The tier's base rate per m².
    #[inline]
    #[must_use]
    pub const fn base_price_per_m2(&self) -> f64 {
        self.base_price_per_m2
    }

    /// `area * base_price_per_m2`, unrounded and before discount.
    #[inline]
    #[must_use]
    pub const fn subtotal(&self) -> f64 {
        self.subtotal
    }

    /// Volume discount applied, in whole percent.
    #[inline]
    #[must_use]
    pub const fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    /// Discounted price rounded half-up to a whole currency unit.
    #[inline]
    #[must_use]
    pub const fn final_price(&self) -> f64 {
        self.final_price
    }

    /// Returns true if a volume discount was applied.
    #[inline]
    #[must_use]
    pub const fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }
}

impl fmt::Display for QuoteBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote({} m² {} @ {} = {} -{}% => {})",
            self.area,
            self.tier,
            self.base_price_per_m2,
            self.subtotal,
            self.discount_percent,
            self.final_price
        )
    }
}
