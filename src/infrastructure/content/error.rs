//! # Content Errors
//!
//! Error types for content source operations.
//!
//! # Examples
//!
//! ```
//! use mural_studio::infrastructure::content::error::ContentError;
//!
//! let error = ContentError::timeout("Request timed out after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = ContentError::protocol("expected a JSON array");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for content source operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Request timed out.
    #[error("content timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network failure or server-side error.
    #[error("content connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The response was not what the content API promises.
    #[error("content protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// The content service does not know the requested list.
    #[error("content not found: {message}")]
    NotFound {
        /// Error message.
        message: String,
    },

    /// Local failure unrelated to the remote service.
    #[error("content internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ContentError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if retrying the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }
}

/// Result type for content source operations.
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_variants() {
        assert!(ContentError::timeout("t").is_retryable());
        assert!(ContentError::timeout_with_duration("t", 10).is_retryable());
        assert!(ContentError::connection("c").is_retryable());
        assert!(!ContentError::protocol("p").is_retryable());
        assert!(!ContentError::not_found("n").is_retryable());
        assert!(!ContentError::internal("i").is_retryable());
    }

    #[test]
    fn display_includes_message() {
        let err = ContentError::not_found("GET /faqs: 404");
        assert!(err.to_string().contains("/faqs"));
    }
}
