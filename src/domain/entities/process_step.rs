//! # Process Step
//!
//! One step of the studio's work process.

use crate::domain::entities::Record;
use crate::domain::services::list_normalizer::NaturalKey;
use crate::domain::value_objects::record_kind::RecordKind;
use serde::{Deserialize, Serialize};

/// Work process step. Natural key: `(step, title)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessStep {
    /// Identifier assigned by the content source.
    pub id: Option<String>,
    /// Step number, starting at 1.
    pub step: Option<u32>,
    /// Step title.
    pub title: Option<String>,
    /// Short description.
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Icon name used by the front end.
    #[serde(deserialize_with = "super::null_as_default")]
    pub icon: String,
    /// Shown on the site. Absent or `null` counts as shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ProcessStep {
    /// Creates a step with the key fields set.
    #[must_use]
    pub fn new(step: u32, title: impl Into<String>) -> Self {
        Self {
            step: Some(step),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl NaturalKey for ProcessStep {
    type Key = (Option<u32>, Option<String>);

    fn natural_key(&self) -> Self::Key {
        (self.step, self.title.clone())
    }
}

impl Record for ProcessStep {
    const KIND: RecordKind = RecordKind::ProcessStep;

    fn is_published(&self) -> bool {
        self.active != Some(false)
    }

    fn position(&self) -> Option<i64> {
        self.step.map(i64::from)
    }
}
