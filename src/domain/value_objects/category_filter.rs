//! # Category Filter
//!
//! Selection of portfolio items by category, with an `all` sentinel.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Wire value selecting every category.
pub const ALL_CATEGORIES: &str = "all";

/// Which portfolio category to show.
///
/// # Examples
///
/// ```
/// use mural_studio::domain::value_objects::category_filter::CategoryFilter;
///
/// let all: CategoryFilter = "all".parse().unwrap();
/// assert!(all.matches(Some("murals")));
/// assert!(all.matches(None));
///
/// let murals = CategoryFilter::category("murals");
/// assert!(murals.matches(Some("murals")));
/// assert!(!murals.matches(Some("portraits")));
/// assert!(!murals.matches(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every item, including items without a category.
    #[default]
    All,
    /// Only items whose category equals this value exactly.
    Category(String),
}

impl CategoryFilter {
    /// Creates a filter for one category.
    ///
    /// The value `"all"` and the empty string still mean
    /// [`CategoryFilter::All`].
    #[must_use]
    pub fn category(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() || value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value)
        }
    }

    /// Returns true if an item with `category` passes the filter.
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category == Some(wanted.as_str()),
        }
    }

    /// Returns true for the `all` sentinel.
    #[inline]
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Category(value) => f.write_str(value),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::category(s))
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::category(value))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_parses_to_all() {
        assert!(CategoryFilter::category("all").is_all());
        assert!(CategoryFilter::category("").is_all());
        assert_eq!(serde_json::from_str::<CategoryFilter>("\"all\"").unwrap(), CategoryFilter::All);
    }

    #[test]
    fn matching_is_exact() {
        let filter = CategoryFilter::category("murals");
        assert!(!filter.matches(Some("Murals")));
        assert!(!filter.matches(Some("murals ")));
    }

    #[test]
    fn display_round_trips_through_serde() {
        let filter = CategoryFilter::category("automotive");
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, "\"automotive\"");
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }

    #[test]
    fn default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }
}
