//! # Application Errors
//!
//! Error type for use case execution.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Quote(QuoteError)                   - Rejected quote input
//! ├── InvalidContact(InvalidContactError) - Rejected contact form
//! ├── Content(ContentError)               - Content source failure
//! ├── Contact(ContactError)               - Contact sink failure
//! └── Internal(String)                    - Anything else
//! ```
//!
//! # Examples
//!
//! ```
//! use mural_studio::application::error::ApplicationError;
//! use mural_studio::domain::errors::QuoteError;
//!
//! let err: ApplicationError = QuoteError::invalid_area("must be positive").into();
//! assert!(err.is_validation());
//! assert_eq!(err.field().as_deref(), Some("area"));
//! ```

use crate::domain::errors::{InvalidContactError, QuoteError};
use crate::infrastructure::contact::ContactError;
use crate::infrastructure::content::ContentError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Quote request rejected.
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// Contact form rejected.
    #[error(transparent)]
    InvalidContact(#[from] InvalidContactError),

    /// Content source failed.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Contact sink failed.
    #[error("contact error: {0}")]
    Contact(#[from] ContactError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the caller sent invalid input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Quote(_) | Self::InvalidContact(_))
    }

    /// Returns true if an upstream dependency failed.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Content(_) | Self::Contact(_))
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Content(e) => e.is_retryable(),
            Self::Contact(ContactError::Unavailable(_)) => true,
            _ => false,
        }
    }

    /// Name of the rejected input field, for validation errors.
    #[must_use]
    pub fn field(&self) -> Option<String> {
        match self {
            Self::Quote(e) => Some(e.field().to_string()),
            Self::InvalidContact(e) => Some(e.field.to_string()),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ContactField;

    #[test]
    fn quote_error_is_validation() {
        let err: ApplicationError = QuoteError::invalid_tier("unknown tier 'gold'").into();
        assert!(err.is_validation());
        assert!(!err.is_upstream());
        assert_eq!(err.field().as_deref(), Some("tier"));
        assert_eq!(err.to_string(), "invalid tier: unknown tier 'gold'");
    }

    #[test]
    fn contact_validation_carries_field() {
        let err: ApplicationError =
            InvalidContactError::new(ContactField::Email, "must contain '@'").into();
        assert!(err.is_validation());
        assert_eq!(err.field().as_deref(), Some("email"));
    }

    #[test]
    fn content_error_is_upstream() {
        let err: ApplicationError = ContentError::timeout("slow").into();
        assert!(err.is_upstream());
        assert!(err.is_retryable());
        assert!(err.field().is_none());
    }

    #[test]
    fn contact_delivery_is_not_retryable() {
        let err: ApplicationError = ContactError::delivery("rejected").into();
        assert!(err.is_upstream());
        assert!(!err.is_retryable());

        let err: ApplicationError = ContactError::unavailable("down").into();
        assert!(err.is_retryable());
    }

    #[test]
    fn internal_is_neither() {
        let err = ApplicationError::internal("boom");
        assert!(!err.is_validation());
        assert!(!err.is_upstream());
        assert!(err.to_string().contains("boom"));
    }
}
