//! # Recording Contact Sink
//!
//! In-memory [`ContactSink`] for tests. Can be switched into a failing mode
//! to exercise delivery errors.

use crate::domain::entities::ContactSubmission;
use crate::infrastructure::contact::{ContactError, ContactResult, ContactSink};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Keeps every delivered submission in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingContactSink {
    delivered: Arc<RwLock<Vec<ContactSubmission>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingContactSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent deliveries fail (`true`) or succeed (`false`).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Submissions delivered so far.
    pub async fn delivered(&self) -> Vec<ContactSubmission> {
        self.delivered.read().await.clone()
    }

    /// Number of submissions delivered so far.
    pub async fn count(&self) -> usize {
        self.delivered.read().await.len()
    }
}

#[async_trait]
impl ContactSink for RecordingContactSink {
    async fn deliver(&self, submission: &ContactSubmission) -> ContactResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ContactError::unavailable("recording sink set to fail"));
        }
        self.delivered.write().await.push(submission.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::ContactRequest;

    fn submission(name: &str) -> ContactSubmission {
        ContactRequest::new(name, "123", "a@b.c", "hi")
            .into_submission()
            .unwrap()
    }

    #[tokio::test]
    async fn records_in_order() {
        let sink = RecordingContactSink::new();
        sink.deliver(&submission("A")).await.unwrap();
        sink.deliver(&submission("B")).await.unwrap();

        let names: Vec<String> = sink.delivered().await.into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn failing_mode_rejects_and_records_nothing() {
        let sink = RecordingContactSink::new();
        sink.set_failing(true);
        let err = sink.deliver(&submission("A")).await.unwrap_err();
        assert!(matches!(err, ContactError::Unavailable(_)));
        assert_eq!(sink.count().await, 0);

        sink.set_failing(false);
        sink.deliver(&submission("A")).await.unwrap();
        assert_eq!(sink.count().await, 1);
    }
}
