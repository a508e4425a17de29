//! # FAQ Entry

use crate::domain::entities::Record;
use crate::domain::services::list_normalizer::NaturalKey;
use crate::domain::value_objects::record_kind::RecordKind;
use serde::{Deserialize, Serialize};

/// Frequently asked question. Natural key: `(question)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    /// Identifier assigned by the content source.
    pub id: Option<String>,
    /// The question.
    pub question: Option<String>,
    /// The answer.
    #[serde(deserialize_with = "super::null_as_default")]
    pub answer: String,
    /// Sort position assigned by the content source.
    #[serde(deserialize_with = "super::null_as_default")]
    pub order: i32,
    /// Shown on the site. Absent or `null` counts as shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Faq {
    /// Creates an entry.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: answer.into(),
            ..Self::default()
        }
    }

    /// Sets the sort position.
    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

impl NaturalKey for Faq {
    type Key = Option<String>;

    fn natural_key(&self) -> Self::Key {
        self.question.clone()
    }
}

impl Record for Faq {
    const KIND: RecordKind = RecordKind::Faq;

    fn is_published(&self) -> bool {
        self.active != Some(false)
    }

    fn position(&self) -> Option<i64> {
        Some(i64::from(self.order))
    }
}
