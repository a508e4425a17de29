//! # Rate Table
//!
//! Base price per square meter for each [`Tier`].
//!
//! # Examples
//!
//! ```
//! use mural_studio::domain::value_objects::rate_table::RateTable;
//! use mural_studio::domain::value_objects::tier::Tier;
//!
//! let rates = RateTable::default();
//! assert_eq!(rates.rate_for(Tier::Basic), 1500.0);
//! assert_eq!(rates.rate_for(Tier::Premium), 7000.0);
//!
//! let custom = RateTable::new(1000.0, 2000.0, 4000.0).unwrap();
//! assert_eq!(custom.rate_for(Tier::Standard), 2000.0);
//! ```

use crate::domain::errors::{PricingError, PricingResult};
use crate::domain::value_objects::tier::Tier;
use serde::{Deserialize, Serialize};

/// Default basic rate, currency units per m².
pub const DEFAULT_BASIC_RATE: f64 = 1500.0;
/// Default standard rate, currency units per m².
pub const DEFAULT_STANDARD_RATE: f64 = 3500.0;
/// Default premium rate, currency units per m².
pub const DEFAULT_PREMIUM_RATE: f64 = 7000.0;

/// Immutable tier -> base rate mapping.
///
/// Every rate is finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRateTable", into = "RawRateTable")]
pub struct RateTable {
    basic: f64,
    standard: f64,
    premium: f64,
}

impl RateTable {
    /// Creates a rate table.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidRate`] for the first tier whose rate is
    /// not finite and greater than zero.
    pub fn new(basic: f64, standard: f64, premium: f64) -> PricingResult<Self> {
        for (tier, rate) in [
            (Tier::Basic, basic),
            (Tier::Standard, standard),
            (Tier::Premium, premium),
        ] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(PricingError::InvalidRate { tier, rate });
            }
        }
        Ok(Self {
            basic,
            standard,
            premium,
        })
    }

    /// Returns the base rate per m² for `tier`.
    #[inline]
    #[must_use]
    pub const fn rate_for(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Basic => self.basic,
            Tier::Standard => self.standard,
            Tier::Premium => self.premium,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            basic: DEFAULT_BASIC_RATE,
            standard: DEFAULT_STANDARD_RATE,
            premium: DEFAULT_PREMIUM_RATE,
        }
    }
}

/// Unvalidated wire form of a [`RateTable`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawRateTable {
    basic: f64,
    standard: f64,
    premium: f64,
}

impl TryFrom<RawRateTable> for RateTable {
    type Error = PricingError;

    fn try_from(raw: RawRateTable) -> Result<Self, Self::Error> {
        Self::new(raw.basic, raw.standard, raw.premium)
    }
}

impl From<RateTable> for RawRateTable {
    fn from(table: RateTable) -> Self {
        Self {
            basic: table.basic,
            standard: table.standard,
            premium: table.premium,
        }
    }
}
