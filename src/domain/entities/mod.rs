//! # Domain Entities
//!
//! Records served to the site and the contact submission.
//!
//! ## Display Records
//!
//! - [`PortfolioItem`]: gallery project, keyed by `(title, category)`
//! - [`Service`]: offered service, keyed by `(title)`
//! - [`ProcessStep`]: work process step, keyed by `(step, title)`
//! - [`Testimonial`]: customer quote, keyed by `(name, text)`
//! - [`Faq`]: question and answer, keyed by `(question)`
//!
//! ## Contact
//!
//! - [`ContactRequest`] / [`ContactSubmission`]

pub mod contact_submission;
pub mod faq;
pub mod portfolio_item;
pub mod process_step;
pub mod service;
pub mod testimonial;

pub use contact_submission::{ContactRequest, ContactSubmission};
pub use faq::Faq;
pub use portfolio_item::PortfolioItem;
pub use process_step::ProcessStep;
pub use service::Service;
pub use testimonial::Testimonial;

use crate::domain::services::list_normalizer::NaturalKey;
use crate::domain::value_objects::record_kind::RecordKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A display record kind served by the content source.
///
/// Ties a record type to its [`RecordKind`] and, through [`NaturalKey`], to
/// its deduplication key.
pub trait Record: NaturalKey + Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The kind this type represents.
    const KIND: RecordKind;

    /// Whether the content source marks the record as shown on the site.
    fn is_published(&self) -> bool {
        true
    }

    /// Display position. Lists are stably sorted by it after deduplication;
    /// `None` sorts first.
    fn position(&self) -> Option<i64> {
        None
    }
}

/// Reads an explicit `null` as the field's default.
///
/// `#[serde(default)]` only covers absent fields, so non-key fields that the
/// content source may send as `null` go through this.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_non_key_fields_decode_as_defaults() {
        let item: PortfolioItem =
            serde_json::from_value(json!({"title": "A", "image": null, "featured": null}))
                .unwrap();
        assert_eq!(item.image, "");
        assert!(!item.featured);

        let service: Service =
            serde_json::from_value(json!({"title": "B", "order": null, "price": null})).unwrap();
        assert_eq!(service.order, 0);
        assert_eq!(service.price, "");

        let faq: Faq = serde_json::from_value(json!({"question": "Q", "answer": null})).unwrap();
        assert_eq!(faq.answer, "");

        let step: ProcessStep =
            serde_json::from_value(json!({"step": 1, "icon": null, "description": null}))
                .unwrap();
        assert_eq!(step.icon, "");

        let review: Testimonial =
            serde_json::from_value(json!({"name": "N", "role": null})).unwrap();
        assert_eq!(review.role, "");
    }

    #[test]
    fn visibility_flag_defaults_to_published() {
        let shown: Service = serde_json::from_value(json!({"title": "A", "active": null})).unwrap();
        let hidden: Service =
            serde_json::from_value(json!({"title": "A", "active": false})).unwrap();
        assert!(shown.is_published());
        assert!(!hidden.is_published());

        let unapproved: Testimonial =
            serde_json::from_value(json!({"name": "N", "approved": false})).unwrap();
        assert!(!unapproved.is_published());
        assert!(Testimonial::new("N", "T").is_published());
    }
}
