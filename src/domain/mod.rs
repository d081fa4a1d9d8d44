//! Domain value objects and validators.
//!
//! This module contains the contact form's email and phone validators and
//! the value objects built on them. Validators are pure functions returning
//! `Result<(), Rejection>`. The form's inline messages are chosen from the
//! raw text by [`email_form_message`] and [`phone_form_message`].

pub mod email;
pub mod errors;
pub mod phone;

pub use email::{email_form_message, validate_email, EmailAddress};
pub use errors::{EmailRejection, PhoneRejection, ValidationError};
pub use phone::{digits_of, phone_form_message, validate_phone, PhoneNumber};
