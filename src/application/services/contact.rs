//! # Contact Service
//!
//! Validates contact forms and hands accepted submissions to a
//! [`ContactSink`].

use crate::application::error::ApplicationResult;
use crate::domain::entities::{ContactRequest, ContactSubmission};
use crate::infrastructure::contact::ContactSink;
use std::sync::Arc;

/// Accepts contact forms.
#[derive(Debug, Clone)]
pub struct ContactService {
    sink: Arc<dyn ContactSink>,
}

impl ContactService {
    /// Creates a service delivering to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn ContactSink>) -> Self {
        Self { sink }
    }

    /// Validates `request` and delivers it.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::InvalidContact`](crate::application::error::ApplicationError::InvalidContact)
    ///   if a field is rejected
    /// - [`ApplicationError::Contact`](crate::application::error::ApplicationError::Contact)
    ///   if the sink fails
    pub async fn submit(&self, request: ContactRequest) -> ApplicationResult<ContactSubmission> {
        let submission = request.into_submission().map_err(|e| {
            tracing::debug!(field = %e.field, reason = %e.reason, "contact form rejected");
            e
        })?;

        self.sink.deliver(&submission).await.map_err(|e| {
            tracing::warn!(id = %submission.id, error = %e, "contact delivery failed");
            e
        })?;

        tracing::info!(id = %submission.id, "contact submission accepted");
        Ok(submission)
    }
}
