//! Contact submission model handed to delivery sinks.

use crate::domain::{EmailAddress, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A contact form submission that passed every field check.
///
/// Text fields are trimmed; email and phone are validated value objects, so
/// a `ContactSubmission` can only be built from input the form accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Sender name
    pub name: String,

    /// Sender email
    pub email: EmailAddress,

    /// Sender phone, digits only
    pub phone: PhoneNumber,

    /// Message subject
    pub subject: String,

    /// Message body
    pub message: String,

    /// When the form was submitted (RFC 3339)
    pub submitted_at: String,
}

impl ContactSubmission {
    /// Build a submission stamped with the current time.
    pub fn new(
        name: &str,
        email: EmailAddress,
        phone: PhoneNumber,
        subject: &str,
        message: &str,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email,
            phone,
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
