//! # Content Source Trait
//!
//! Port through which raw record lists are fetched.
//!
//! Sources return the list exactly as stored: possibly containing
//! duplicates, possibly containing malformed entries. Decoding and
//! normalization are the caller's job.
//!
//! # Examples
//!
//! ```ignore
//! use mural_studio::infrastructure::content::traits::ContentSource;
//! use mural_studio::domain::value_objects::RecordKind;
//!
//! async fn count_faqs(source: &dyn ContentSource) -> usize {
//!     source.fetch(RecordKind::Faq).await.map(|raw| raw.len()).unwrap_or(0)
//! }
//! ```

use crate::domain::value_objects::record_kind::RecordKind;
use crate::infrastructure::content::error::ContentResult;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Source of raw display record lists.
#[async_trait]
pub trait ContentSource: Send + Sync + fmt::Debug {
    /// Fetches the ordered raw list for `kind`.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`](super::error::ContentError) if the list
    /// cannot be retrieved or is not a JSON array.
    async fn fetch(&self, kind: RecordKind) -> ContentResult<Vec<Value>>;

    /// Short name of the source, for logs.
    fn name(&self) -> &'static str;
}
