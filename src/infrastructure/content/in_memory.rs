//! # In-Memory Content Source
//!
//! [`ContentSource`] holding raw lists in memory.
//!
//! Used for local runs without the data service (seeded with the studio
//! catalogue) and for tests, where lists can be replaced with arbitrary,
//! possibly malformed, JSON.

use crate::domain::entities::Record;
use crate::domain::value_objects::record_kind::RecordKind;
use crate::infrastructure::content::error::{ContentError, ContentResult};
use crate::infrastructure::content::seed;
use crate::infrastructure::content::traits::ContentSource;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`ContentSource`].
///
/// Kinds that were never set fetch as an empty list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentSource {
    storage: Arc<RwLock<HashMap<RecordKind, Vec<Value>>>>,
}

impl InMemoryContentSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding the studio's catalogue.
    #[must_use]
    pub fn seeded() -> Self {
        let storage = RecordKind::ALL
            .into_iter()
            .map(|kind| (kind, seed::records(kind)))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }

    /// Replaces the raw list for `kind`.
    pub async fn set_raw(&self, kind: RecordKind, records: Vec<Value>) {
        let mut storage = self.storage.write().await;
        storage.insert(kind, records);
    }

    /// Replaces the list for `R`'s kind with the serialized `records`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Internal` if a record cannot be serialized.
    pub async fn set<R: Record>(&self, records: &[R]) -> ContentResult<()> {
        let raw = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ContentError::internal(format!("Failed to serialize {}: {}", R::KIND, e)))?;
        self.set_raw(R::KIND, raw).await;
        Ok(())
    }

    /// Removes every list.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl ContentSource for InMemoryContentSource {
    async fn fetch(&self, kind: RecordKind) -> ContentResult<Vec<Value>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&kind).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
