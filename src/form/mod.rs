//! Contact form state and validation flow.

pub mod contact_form;

pub use contact_form::{ContactField, ContactForm, FieldErrors, SubmitOutcome, SUCCESS_MESSAGE};
