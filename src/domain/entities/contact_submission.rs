//! # Contact Submission
//!
//! The contact form as posted by a visitor, and the accepted submission
//! handed on to a contact sink.

use crate::domain::errors::{ContactField, InvalidContactError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw contact form. Missing fields deserialize as empty and then fail
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    /// Sender name.
    pub name: String,
    /// Sender phone number.
    pub phone: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactRequest {
    /// Creates a contact form.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validates the form and stamps it as a new submission.
    ///
    /// Fields are trimmed. Every field must be non-blank and the email must
    /// have a non-empty local part and domain around a single `@`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidContactError`] for the first rejected field, checked
    /// in form order.
    pub fn into_submission(self) -> Result<ContactSubmission, InvalidContactError> {
        let name = required(ContactField::Name, &self.name)?;
        let phone = required(ContactField::Phone, &self.phone)?;
        let email = required(ContactField::Email, &self.email)?;
        validate_email(email)?;
        let message = required(ContactField::Message, &self.message)?;

        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            received_at: Utc::now(),
        })
    }
}

fn required(field: ContactField, value: &str) -> Result<&str, InvalidContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidContactError::new(field, "must not be empty"));
    }
    Ok(trimmed)
}

fn validate_email(email: &str) -> Result<(), InvalidContactError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(InvalidContactError::new(
            ContactField::Email,
            "must look like name@domain",
        )),
    }
}

/// An accepted contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Submission identifier.
    pub id: Uuid,
    /// Sender name.
    pub name: String,
    /// Sender phone number.
    pub phone: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// When the submission was accepted.
    pub received_at: DateTime<Utc>,
}
