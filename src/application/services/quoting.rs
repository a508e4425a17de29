//! # Quoting Service
//!
//! Prices quote requests arriving at the API boundary.

use crate::application::error::ApplicationResult;
use crate::domain::services::QuoteEngine;
use crate::domain::value_objects::{PricingConfig, QuoteBreakdown};

/// Wraps a [`QuoteEngine`] built from the configured pricing.
#[derive(Debug, Clone, Default)]
pub struct QuoteService {
    engine: QuoteEngine,
}

impl QuoteService {
    /// Creates a service with the given pricing.
    #[must_use]
    pub fn new(pricing: PricingConfig) -> Self {
        Self {
            engine: QuoteEngine::new(pricing),
        }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    /// Validates and prices a request.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Quote`](crate::application::error::ApplicationError::Quote)
    /// for a non-positive area or an unknown tier.
    pub fn calculate(&self, area: f64, tier: &str) -> ApplicationResult<QuoteBreakdown> {
        match self.engine.compute_quote(area, tier) {
            Ok(breakdown) => {
                tracing::debug!(
                    area,
                    tier = %breakdown.tier(),
                    discount_percent = breakdown.discount_percent(),
                    final_price = breakdown.final_price(),
                    "quote calculated"
                );
                Ok(breakdown)
            }
            Err(e) => {
                tracing::debug!(area, tier, error = %e, "quote rejected");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DiscountSchedule, Tier};

    #[test]
    fn default_pricing() {
        let service = QuoteService::default();
        let quote = service.calculate(25.0, "standard").unwrap();
        assert_eq!(quote.tier(), Tier::Standard);
        assert_eq!(quote.discount_percent(), 5);
        assert!((quote.final_price() - 83_125.0).abs() < f64::EPSILON);
    }

    #[test]
    fn configured_pricing_is_used() {
        let pricing = PricingConfig::default().with_discounts(DiscountSchedule::none());
        let service = QuoteService::new(pricing);
        let quote = service.calculate(100.0, "basic").unwrap();
        assert!(!quote.has_discount());
        assert!((quote.final_price() - 150_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejection_maps_to_validation() {
        let err = QuoteService::default().calculate(0.0, "basic").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.field().as_deref(), Some("area"));
    }
}
