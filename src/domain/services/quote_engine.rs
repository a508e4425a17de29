//! # Quote Engine
//!
//! Deterministic pricing of a project from its area and complexity tier.
//!
//! # Pricing
//!
//! ```text
//! subtotal    = area * rate(tier)
//! discount    = schedule.discount_for(area)            (whole percent)
//! final_price = round_half_up(subtotal * (100 - discount) / 100)
//! ```
//!
//! Everything is computed in `f64`; rounding happens once, on the final
//! price only.
//!
//! # Examples
//!
//! ```
//! use mural_studio::domain::services::quote_engine::compute_quote;
//!
//! let quote = compute_quote(100.0, "standard").unwrap();
//! assert_eq!(quote.base_price_per_m2(), 3500.0);
//! assert_eq!(quote.subtotal(), 350000.0);
//! assert_eq!(quote.discount_percent(), 10);
//! assert_eq!(quote.final_price(), 315000.0);
//!
//! assert!(compute_quote(0.0, "basic").is_err());
//! assert!(compute_quote(10.0, "gold").is_err());
//! ```

use crate::domain::errors::{QuoteError, QuoteResult};
use crate::domain::value_objects::pricing_config::PricingConfig;
use crate::domain::value_objects::quote_breakdown::{QuoteBreakdown, QuoteRequest};

/// Prices quote requests against one [`PricingConfig`].
///
/// Stateless apart from its immutable configuration; safe to share across
/// threads and call concurrently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteEngine {
    pricing: PricingConfig,
}

impl QuoteEngine {
    /// Creates an engine with the given pricing.
    #[must_use]
    pub fn new(pricing: PricingConfig) -> Self {
        Self { pricing }
    }

    /// The pricing this engine uses.
    #[inline]
    #[must_use]
    pub const fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Prices an already validated request.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] on the area field if the area is
    /// so large that the price is not a finite number.
    pub fn quote(&self, request: &QuoteRequest) -> QuoteResult<QuoteBreakdown> {
        let area = request.area();
        let tier = request.tier();
        let rate = self.pricing.rates().rate_for(tier);
        let subtotal = area * rate;
        let discount_percent = self.pricing.discounts().discount_for(area);

        let discounted = if discount_percent == 0 {
            subtotal
        } else {
            subtotal * f64::from(100u8.saturating_sub(discount_percent)) / 100.0
        };

        if !subtotal.is_finite() || !discounted.is_finite() {
            return Err(QuoteError::invalid_area(format!(
                "{area} m\u{b2} at {tier} is too large to price"
            )));
        }

        Ok(QuoteBreakdown::new(
            area,
            tier,
            rate,
            subtotal,
            discount_percent,
            round_half_up(discounted),
        ))
    }

    /// Validates `area` and `tier`, then prices the request.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`](crate::domain::errors::QuoteError::InvalidInput)
    /// if `area` is not a finite number greater than zero, or if `tier` is
    /// not `basic`, `standard` or `premium`, or if the price overflows.
    pub fn compute_quote(&self, area: f64, tier: &str) -> QuoteResult<QuoteBreakdown> {
        let request = QuoteRequest::parse(area, tier)?;
        self.quote(&request)
    }
}

/// Prices a request with the default rate table and discount schedule.
///
/// # Errors
///
/// See [`QuoteEngine::compute_quote`].
pub fn compute_quote(area: f64, tier: &str) -> QuoteResult<QuoteBreakdown> {
    QuoteEngine::default().compute_quote(area, tier)
}

/// Rounds to the nearest whole unit, halves up.
///
/// Prices are never negative, where half-away-from-zero and half-up agree.
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    value.round()
}
