//! # Portfolio Item
//!
//! A finished project shown in the portfolio gallery.

use crate::domain::entities::Record;
use crate::domain::services::list_normalizer::{Categorized, NaturalKey};
use crate::domain::value_objects::record_kind::RecordKind;
use serde::{Deserialize, Serialize};

/// Portfolio project as returned by the content source.
///
/// Natural key: `(title, category)`.
///
/// # Examples
///
/// ```
/// use mural_studio::domain::entities::PortfolioItem;
/// use mural_studio::domain::services::list_normalizer::NaturalKey;
///
/// let item = PortfolioItem::new("Underpass", "murals");
/// assert_eq!(
///     item.natural_key(),
///     (Some("Underpass".to_string()), Some("murals".to_string()))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioItem {
    /// Identifier assigned by the content source.
    pub id: Option<String>,
    /// Project title.
    pub title: Option<String>,
    /// Gallery category, e.g. `murals` or `automotive`.
    pub category: Option<String>,
    /// Image URL or inline data.
    #[serde(deserialize_with = "super::null_as_default")]
    pub image: String,
    /// Short description.
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Highlighted on the landing section.
    #[serde(deserialize_with = "super::null_as_default")]
    pub featured: bool,
}

impl PortfolioItem {
    /// Creates an item with the key fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Marks the item as featured.
    #[must_use]
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

impl NaturalKey for PortfolioItem {
    type Key = (Option<String>, Option<String>);

    fn natural_key(&self) -> Self::Key {
        (self.title.clone(), self.category.clone())
    }
}

impl Categorized for PortfolioItem {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Record for PortfolioItem {
    const KIND: RecordKind = RecordKind::Portfolio;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_non_key_fields() {
        let a = PortfolioItem::new("A", "murals").with_description("first");
        let b = PortfolioItem::new("A", "murals").with_description("second");
        assert_eq!(a.natural_key(), b.natural_key());
    }

    #[test]
    fn key_distinguishes_category() {
        let a = PortfolioItem::new("A", "murals");
        let b = PortfolioItem::new("A", "abstract");
        assert_ne!(a.natural_key(), b.natural_key());
    }

    #[test]
    fn missing_fields_deserialize_to_sentinel() {
        let item: PortfolioItem = serde_json::from_str(r#"{"image":"x.jpg"}"#).unwrap();
        assert_eq!(item.natural_key(), (None, None));
        assert_eq!(item.image, "x.jpg");
        assert!(!item.featured);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let item: PortfolioItem = serde_json::from_str(
            r#"{"title":"A","category":"murals","created_at":"2025-07-18T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(item.category(), Some("murals"));
    }
}
