//! # Contact Sinks
//!
//! Where accepted contact submissions are delivered.
//!
//! ## Port
//!
//! - [`ContactSink`]: deliver one submission
//!
//! ## Implementations
//!
//! - [`TracingContactSink`]: emits a structured log event per submission
//! - [`RecordingContactSink`]: keeps submissions in memory for tests

pub mod recording;
pub mod tracing_sink;

pub use recording::RecordingContactSink;
pub use tracing_sink::TracingContactSink;

use crate::domain::entities::ContactSubmission;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for contact delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// The sink could not be reached.
    #[error("contact sink unavailable: {0}")]
    Unavailable(String),

    /// The sink refused or lost the submission.
    #[error("contact delivery failed: {0}")]
    Delivery(String),
}

impl ContactError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a delivery error.
    #[must_use]
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery(message.into())
    }
}

/// Result type for contact delivery.
pub type ContactResult<T> = Result<T, ContactError>;

/// Destination for accepted contact submissions.
#[async_trait]
pub trait ContactSink: Send + Sync + fmt::Debug {
    /// Delivers one submission.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactError`] if the submission could not be handed off.
    async fn deliver(&self, submission: &ContactSubmission) -> ContactResult<()>;
}
