//! # Record Kinds
//!
//! The five list-shaped record kinds served by the content source, with the
//! wire path each is fetched from and the fields of its natural key.
//!
//! # Examples
//!
//! ```
//! use mural_studio::domain::value_objects::record_kind::RecordKind;
//!
//! assert_eq!(RecordKind::Portfolio.path(), "portfolio");
//! assert_eq!(RecordKind::Portfolio.key_fields(), &["title", "category"]);
//! assert_eq!(RecordKind::ProcessStep.to_string(), "process step");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of display record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Portfolio project.
    Portfolio,
    /// Offered service.
    Service,
    /// Step of the work process.
    ProcessStep,
    /// Customer testimonial.
    Testimonial,
    /// Frequently asked question.
    Faq,
}

impl RecordKind {
    /// All kinds.
    pub const ALL: [RecordKind; 5] = [
        Self::Portfolio,
        Self::Service,
        Self::ProcessStep,
        Self::Testimonial,
        Self::Faq,
    ];

    /// Path segment of this kind's list, relative to the content base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Portfolio => "portfolio",
            Self::Service => "services",
            Self::ProcessStep => "process",
            Self::Testimonial => "testimonials",
            Self::Faq => "faqs",
        }
    }

    /// Names of the fields forming this kind's natural key, in key order.
    #[must_use]
    pub const fn key_fields(self) -> &'static [&'static str] {
        match self {
            Self::Portfolio => &["title", "category"],
            Self::Service => &["title"],
            Self::ProcessStep => &["step", "title"],
            Self::Testimonial => &["name", "text"],
            Self::Faq => &["question"],
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portfolio => write!(f, "portfolio item"),
            Self::Service => write!(f, "service"),
            Self::ProcessStep => write!(f, "process step"),
            Self::Testimonial => write!(f, "testimonial"),
            Self::Faq => write!(f, "faq"),
        }
    }
}
