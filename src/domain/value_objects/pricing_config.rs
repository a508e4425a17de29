//! # Pricing Configuration
//!
//! The rate table and discount schedule the quote engine prices with.
//!
//! # Examples
//!
//! ```
//! use mural_studio::domain::value_objects::pricing_config::PricingConfig;
//! use mural_studio::domain::value_objects::discount_schedule::DiscountSchedule;
//! use mural_studio::domain::value_objects::tier::Tier;
//!
//! let config = PricingConfig::default().with_discounts(DiscountSchedule::none());
//! assert_eq!(config.rates().rate_for(Tier::Standard), 3500.0);
//! assert!(config.discounts().is_empty());
//! ```

use crate::domain::value_objects::discount_schedule::DiscountSchedule;
use crate::domain::value_objects::rate_table::RateTable;
use serde::{Deserialize, Serialize};

/// Immutable pricing inputs.
///
/// Both parts validate on construction and on deserialization, so a
/// `PricingConfig` in hand is always usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    rates: RateTable,
    discounts: DiscountSchedule,
}

impl PricingConfig {
    /// Creates a pricing configuration.
    #[must_use]
    pub fn new(rates: RateTable, discounts: DiscountSchedule) -> Self {
        Self { rates, discounts }
    }

    /// Replaces the rate table.
    #[must_use]
    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Replaces the discount schedule.
    #[must_use]
    pub fn with_discounts(mut self, discounts: DiscountSchedule) -> Self {
        self.discounts = discounts;
        self
    }

    /// The tier rate table.
    #[inline]
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// The volume discount schedule.
    #[inline]
    #[must_use]
    pub const fn discounts(&self) -> &DiscountSchedule {
        &self.discounts
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::discount_schedule::DiscountStep;
    use crate::domain::value_objects::tier::Tier;

    #[test]
    fn partial_document_keeps_defaults() {
        let config: PricingConfig =
            serde_json::from_str(r#"{"discounts":[{"min_area":5,"percent":1}]}"#).unwrap();
        assert_eq!(config.rates(), &RateTable::default());
        assert_eq!(config.discounts().discount_for(5.0), 1);
    }

    #[test]
    fn builder_replaces_parts() {
        let schedule = DiscountSchedule::new(vec![DiscountStep::new(1.0, 50)]).unwrap();
        let rates = RateTable::new(1.0, 2.0, 3.0).unwrap();
        let config = PricingConfig::default()
            .with_rates(rates)
            .with_discounts(schedule.clone());
        assert_eq!(config.rates().rate_for(Tier::Premium), 3.0);
        assert_eq!(config.discounts(), &schedule);
    }

    #[test]
    fn invalid_document_is_rejected() {
        let result = serde_json::from_str::<PricingConfig>(
            r#"{"rates":{"basic":0,"standard":1,"premium":1}}"#,
        );
        assert!(result.is_err());
    }
}
