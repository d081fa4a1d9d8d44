//! Contact form state machine.
//!
//! The form holds the five field values and a map of per-field error
//! messages. Editing a field clears that field's error without re-validating
//! it; submitting validates every field and either reports the errors or
//! hands back a [`ContactSubmission`].

use crate::domain::{email_form_message, phone_form_message, EmailAddress, PhoneNumber};
use crate::error::SiteError;
use crate::models::ContactSubmission;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Per-field error messages. An absent key means the field has no error.
pub type FieldErrors = BTreeMap<ContactField, String>;

/// Success text shown after a submission goes through.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

/// The contact form's fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in display order.
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Field name as used in form markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SiteError::UnknownField(s.to_string()))
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every check passed.
    Accepted(ContactSubmission),
    /// At least one field failed; the errors are now on the form.
    Rejected { error_count: usize },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Contact form values and inline errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
    errors: FieldErrors,
}

impl ContactForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Error currently shown for a field, if any.
    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// All errors currently shown.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| self.value(*field).is_empty())
    }

    /// Apply an edit: store the value and clear that field's error.
    ///
    /// The new value is not validated until the next submit.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
        self.errors.remove(&field);
    }

    /// Run every field check without touching the form.
    pub fn check(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = if self.email.is_empty() {
            errors.insert(ContactField::Email, "Email is required".to_string());
            None
        } else {
            match EmailAddress::new(self.email.as_str()) {
                Ok(email) => Some(email),
                Err(_) => {
                    let message = email_form_message(&self.email);
                    errors.insert(ContactField::Email, message.to_string());
                    None
                }
            }
        };

        let phone = if self.phone.is_empty() {
            errors.insert(ContactField::Phone, "Phone number is required".to_string());
            None
        } else {
            match PhoneNumber::new(self.phone.as_str()) {
                Ok(phone) => Some(phone),
                Err(_) => {
                    let message = phone_form_message(&self.phone);
                    errors.insert(ContactField::Phone, message.to_string());
                    None
                }
            }
        };

        for (field, message) in [
            (ContactField::Name, "Name is required"),
            (ContactField::Subject, "Subject is required"),
            (ContactField::Message, "Message is required"),
        ] {
            if self.value(field).trim().is_empty() {
                errors.insert(field, message.to_string());
            }
        }

        match (email, phone) {
            (Some(email), Some(phone)) if errors.is_empty() => Ok(ContactSubmission::new(
                &self.name,
                email,
                phone,
                &self.subject,
                &self.message,
            )),
            _ => Err(errors),
        }
    }

    /// Validate every field and replace the error map with the result.
    ///
    /// Values are left untouched either way.
    pub fn validate(&mut self) -> SubmitOutcome {
        match self.check() {
            Ok(submission) => {
                self.errors.clear();
                SubmitOutcome::Accepted(submission)
            }
            Err(errors) => {
                let error_count = errors.len();
                tracing::debug!(error_count, "Contact form rejected");
                self.errors = errors;
                SubmitOutcome::Rejected { error_count }
            }
        }
    }

    /// Clear every value and every error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate and, when every check passes, reset the form.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.validate();
        if outcome.is_accepted() {
            self.reset();
        }
        outcome
    }
}
