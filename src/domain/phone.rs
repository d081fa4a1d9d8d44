//! PhoneNumber value object and the contact form's phone validator.

use super::errors::{PhoneRejection, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a mobile number.
const MOBILE_DIGITS: usize = 10;

/// Leading digits mobile numbers are allocated from.
const VALID_LEADING_DIGITS: [char; 4] = ['6', '7', '8', '9'];

/// Sequences people enter instead of a real number.
const DUMMY_SEQUENCES: [&str; 13] = [
    "1234567890",
    "0123456789",
    "9876543210",
    "0000000000",
    "1111111111",
    "2222222222",
    "3333333333",
    "4444444444",
    "5555555555",
    "6666666666",
    "7777777777",
    "8888888888",
    "9999999999",
];

/// Strip everything but ASCII digits.
pub fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a raw phone string as typed into the contact form.
///
/// Formatting characters are ignored. The remaining digits must number
/// exactly ten, must not be a dummy sequence, and must start with 6-9.
///
/// # Example
///
/// ```
/// use lotseye_site::domain::{validate_phone, PhoneRejection};
///
/// assert!(validate_phone("+91 63532 92499").is_err());
/// assert!(validate_phone("63532-92499").is_ok());
/// assert_eq!(validate_phone("1234567890"), Err(PhoneRejection::DummySequence));
/// ```
pub fn validate_phone(raw: &str) -> Result<(), PhoneRejection> {
    let digits = digits_of(raw);

    if digits.len() != MOBILE_DIGITS {
        return Err(PhoneRejection::WrongLength {
            digits: digits.len(),
        });
    }

    if DUMMY_SEQUENCES.contains(&digits.as_str()) {
        return Err(PhoneRejection::DummySequence);
    }

    match digits.chars().next() {
        Some(first) if VALID_LEADING_DIGITS.contains(&first) => Ok(()),
        Some(first) => Err(PhoneRejection::WrongLeadingDigit(first)),
        None => Err(PhoneRejection::WrongLength { digits: 0 }),
    }
}

/// Inline message the contact form shows for a phone number it rejected.
///
/// Length is judged first, then the leading digit; only a number that
/// passes both is called a dummy. So `1111111111` is told to start with
/// 6-9 while `9999999999` is told it is a dummy.
pub fn phone_form_message(raw: &str) -> &'static str {
    let digits = digits_of(raw);

    if digits.len() != MOBILE_DIGITS {
        "Please enter a valid 10-digit phone number"
    } else if !digits.starts_with(VALID_LEADING_DIGITS) {
        "Phone number should start with 6, 7, 8, or 9"
    } else {
        "Please enter a valid phone number (dummy numbers like 1234567890 are not allowed)"
    }
}

/// A type-safe wrapper for phone numbers.
///
/// Construction runs [`validate_phone`]; the stored value is the ten
/// cleaned digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` with the rejection reason.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        match validate_phone(&phone) {
            Ok(()) => Ok(Self(digits_of(&phone))),
            Err(reason) => Err(ValidationError::InvalidPhone {
                value: phone,
                reason,
            }),
        }
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Format as an international dialling string, e.g. `+91 6353292499`.
    pub fn international(&self) -> String {
        format!("+91 {}", self.0)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
