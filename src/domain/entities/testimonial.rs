//! # Testimonial
//!
//! A customer quote shown in the reviews section.

use crate::domain::entities::Record;
use crate::domain::services::list_normalizer::NaturalKey;
use crate::domain::value_objects::record_kind::RecordKind;
use serde::{Deserialize, Serialize};

/// Customer testimonial. Natural key: `(name, text)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    /// Identifier assigned by the content source.
    pub id: Option<String>,
    /// Author name.
    pub name: Option<String>,
    /// Author role, e.g. "Cafe owner".
    #[serde(deserialize_with = "super::null_as_default")]
    pub role: String,
    /// Testimonial text.
    pub text: Option<String>,
    /// Star rating, 1 to 5.
    pub rating: Option<u8>,
    /// Approved for display. Absent or `null` counts as approved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

impl Testimonial {
    /// Creates a testimonial with the key fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Sets the author role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the rating.
    #[must_use]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl NaturalKey for Testimonial {
    type Key = (Option<String>, Option<String>);

    fn natural_key(&self) -> Self::Key {
        (self.name.clone(), self.text.clone())
    }
}

impl Record for Testimonial {
    const KIND: RecordKind = RecordKind::Testimonial;

    fn is_published(&self) -> bool {
        self.approved != Some(false)
    }
}
