//! # Service
//!
//! An offered service with its display price.

use crate::domain::entities::Record;
use crate::domain::services::list_normalizer::NaturalKey;
use crate::domain::value_objects::record_kind::RecordKind;
use serde::{Deserialize, Serialize};

/// Service offering. Natural key: `(title)`.
///
/// `price` is a display string ("from 40,000"), not a number the quote
/// engine uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Identifier assigned by the content source.
    pub id: Option<String>,
    /// Icon name used by the front end.
    #[serde(deserialize_with = "super::null_as_default")]
    pub icon: String,
    /// Service title.
    pub title: Option<String>,
    /// Short description.
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Display price.
    #[serde(deserialize_with = "super::null_as_default")]
    pub price: String,
    /// Sort position assigned by the content source.
    #[serde(deserialize_with = "super::null_as_default")]
    pub order: i32,
    /// Shown on the site. Absent or `null` counts as shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Service {
    /// Creates a service with the key field set.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the display price.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Sets the sort position.
    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl NaturalKey for Service {
    type Key = Option<String>;

    fn natural_key(&self) -> Self::Key {
        self.title.clone()
    }
}

impl Record for Service {
    const KIND: RecordKind = RecordKind::Service;

    fn is_published(&self) -> bool {
        self.active != Some(false)
    }

    fn position(&self) -> Option<i64> {
        Some(i64::from(self.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_title_only() {
        let a = Service::new("Car art").with_price("80,000");
        let b = Service::new("Car art").with_price("90,000");
        assert_eq!(a.natural_key(), b.natural_key());
        assert_ne!(a.natural_key(), Service::new("Photo zone").natural_key());
    }
}
