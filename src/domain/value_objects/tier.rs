//! # Complexity Tier
//!
//! The closed set of complexity tiers a project can be priced at.
//!
//! # Examples
//!
//! ```
//! use mural_studio::domain::value_objects::tier::Tier;
//!
//! let tier: Tier = "standard".parse().unwrap();
//! assert_eq!(tier, Tier::Standard);
//! assert_eq!(tier.to_string(), "standard");
//! assert!("gold".parse::<Tier>().is_err());
//! ```

use crate::domain::errors::QuoteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named complexity level of a project.
///
/// Each tier has a fixed base rate per square meter, held in a
/// [`RateTable`](super::rate_table::RateTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Tier {
    /// Simple artistic decoration.
    Basic = 0,
    /// Detailed work with additional elements.
    Standard = 1,
    /// Maximum detail.
    Premium = 2,
}

impl Tier {
    /// All tiers, cheapest first.
    pub const ALL: [Tier; 3] = [Self::Basic, Self::Standard, Self::Premium];

    /// Returns the wire name of this tier.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    /// Returns the display description shown next to a quote.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Basic => "Simple artistic decoration",
            Self::Standard => "Detailed work with elements",
            Self::Premium => "Premium work with maximum detail",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = QuoteError;

    /// Parses an exact lowercase wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            _ => Err(QuoteError::invalid_tier(format!(
                "unknown tier '{s}', expected one of basic, standard, premium"
            ))),
        }
    }
}
