//! # Tracing Contact Sink

use crate::domain::entities::ContactSubmission;
use crate::infrastructure::contact::{ContactResult, ContactSink};
use async_trait::async_trait;

/// Delivers submissions as `info` log events on the `contact` target.
///
/// The message body is not logged, only its length.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingContactSink;

impl TracingContactSink {
    /// Creates the sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContactSink for TracingContactSink {
    async fn deliver(&self, submission: &ContactSubmission) -> ContactResult<()> {
        tracing::info!(
            target: "contact",
            id = %submission.id,
            name = %submission.name,
            email = %submission.email,
            phone = %submission.phone,
            message_len = submission.message.len(),
            received_at = %submission.received_at,
            "contact submission received"
        );
        Ok(())
    }
}
