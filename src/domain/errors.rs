//! Domain validation errors and rejection reasons.

use std::fmt;

/// Why an email address was rejected.
///
/// The reason is for callers of the validator. The contact form picks its
/// message from the raw text instead (see [`crate::domain::email_form_message`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailRejection {
    /// No '@' anywhere in the input (this includes blank input).
    MissingAt,
    /// More than one '@'.
    MultipleAt,
    /// Does not match the local-part@domain pattern.
    Malformed,
    /// Local part is longer than 64 characters.
    LocalPartLength,
    /// Local part starts or ends with a dot, or contains "..".
    LocalPartDots,
    /// Domain is longer than 253 characters.
    DomainLength,
    /// Domain has no extension (no '.').
    MissingDomainDot,
    /// Top-level label is shorter than two characters.
    TopLevelDomainTooShort,
    /// Address matches a known placeholder such as test@test.com.
    Placeholder,
}

impl fmt::Display for EmailRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::MissingAt => "missing @",
            Self::MultipleAt => "more than one @",
            Self::Malformed => "malformed address",
            Self::LocalPartLength => "local part must be 1-64 characters",
            Self::LocalPartDots => "local part has a leading, trailing or doubled dot",
            Self::DomainLength => "domain must be 1-253 characters",
            Self::MissingDomainDot => "missing domain extension",
            Self::TopLevelDomainTooShort => "top-level domain shorter than 2 characters",
            Self::Placeholder => "placeholder address",
        };
        f.write_str(reason)
    }
}

/// Why a phone number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneRejection {
    /// Digit count after stripping formatting is not 10.
    WrongLength { digits: usize },
    /// First digit is not 6, 7, 8 or 9.
    WrongLeadingDigit(char),
    /// A known dummy sequence such as 1234567890 or 9999999999.
    DummySequence,
}

impl fmt::Display for PhoneRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { digits } => write!(f, "expected 10 digits, got {}", digits),
            Self::WrongLeadingDigit(d) => write!(f, "leading digit {} is not 6-9", d),
            Self::DummySequence => f.write_str("dummy number"),
        }
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    InvalidEmail {
        value: String,
        reason: EmailRejection,
    },

    /// The provided phone number is invalid.
    InvalidPhone {
        value: String,
        reason: PhoneRejection,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail { value, reason } => {
                write!(f, "Invalid email address {:?}: {}", value, reason)
            }
            Self::InvalidPhone { value, reason } => {
                write!(f, "Invalid phone number {:?}: {}", value, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
