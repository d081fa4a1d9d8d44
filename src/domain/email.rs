//! EmailAddress value object and the contact form's email validator.

use super::errors::{EmailRejection, ValidationError};
use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum length of the part before '@'.
const MAX_LOCAL_PART_LEN: usize = 64;

/// Maximum length of the part after '@'.
const MAX_DOMAIN_LEN: usize = 253;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Failed to compile email regex")
});

/// Addresses people type to get past a form. Matched against the lower-cased input.
static PLACEHOLDER_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^test@test\.",
        r"^admin@admin\.",
        r"^user@user\.",
        r"^demo@demo\.",
        r"^sample@sample\.",
        r"^example@example\.",
        r"@test\.",
        r"@example\.",
        r"@sample\.",
        r"@demo\.",
    ])
    .expect("Failed to compile placeholder email patterns")
});

/// Validate a raw email string as typed into the contact form.
///
/// Surrounding whitespace is ignored. Checks run in a fixed order so the
/// first failing rule decides the reason:
///
/// 1. presence and count of '@'
/// 2. the local-part@domain pattern
/// 3. local part length and dots
/// 4. domain length, extension and top-level label
/// 5. the placeholder blocklist (case-insensitive)
///
/// # Example
///
/// ```
/// use lotseye_site::domain::{validate_email, EmailRejection};
///
/// assert!(validate_email("ana@realmail.co").is_ok());
/// assert_eq!(validate_email("ana.realmail.co"), Err(EmailRejection::MissingAt));
/// assert_eq!(validate_email("test@test.com"), Err(EmailRejection::Placeholder));
/// ```
pub fn validate_email(raw: &str) -> Result<(), EmailRejection> {
    let email = raw.trim();

    match email.matches('@').count() {
        0 => return Err(EmailRejection::MissingAt),
        1 => {}
        _ => return Err(EmailRejection::MultipleAt),
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailRejection::Malformed);
    }

    let (local, domain) = email.split_once('@').ok_or(EmailRejection::MissingAt)?;

    if local.is_empty() || local.len() > MAX_LOCAL_PART_LEN {
        return Err(EmailRejection::LocalPartLength);
    }
    if has_stray_dots(local) {
        return Err(EmailRejection::LocalPartDots);
    }

    // The pattern already rules out stray dots in the domain
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return Err(EmailRejection::DomainLength);
    }

    let tld = match domain.rsplit_once('.') {
        Some((_, tld)) => tld,
        None => return Err(EmailRejection::MissingDomainDot),
    };
    if tld.len() < 2 {
        return Err(EmailRejection::TopLevelDomainTooShort);
    }

    if PLACEHOLDER_PATTERNS.is_match(&email.to_lowercase()) {
        return Err(EmailRejection::Placeholder);
    }

    Ok(())
}

fn has_stray_dots(segment: &str) -> bool {
    segment.starts_with('.') || segment.ends_with('.') || segment.contains("..")
}

/// Inline message the contact form shows for an email it rejected.
///
/// The message is read off the trimmed text, not the rejection reason:
/// a missing '@' wins over a missing '.', which wins over stray dots, which
/// win over extra '@'s. Anything else gets the generic message.
///
/// ```
/// use lotseye_site::domain::email_form_message;
///
/// assert_eq!(
///     email_form_message("a@b@c"),
///     "Email must contain a domain with extension (e.g., user@example.com)"
/// );
/// ```
pub fn email_form_message(raw: &str) -> &'static str {
    let email = raw.trim();

    if !email.contains('@') {
        "Email must contain @ symbol (e.g., user@example.com)"
    } else if !email.contains('.') {
        "Email must contain a domain with extension (e.g., user@example.com)"
    } else if has_stray_dots(email) {
        "Email format is invalid - check for extra dots"
    } else if email.matches('@').count() != 1 {
        "Email must contain exactly one @ symbol"
    } else {
        "Please enter a valid email address (e.g., user@example.com)"
    }
}

/// A type-safe wrapper for email addresses.
///
/// Construction runs [`validate_email`], so a value of this type is always an
/// address the contact form would accept. The stored value is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` with the rejection reason.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        match validate_email(&email) {
            Ok(()) => Ok(Self(email.trim().to_string())),
            Err(reason) => Err(ValidationError::InvalidEmail {
                value: email,
                reason,
            }),
        }
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_addresses() {
        assert_eq!(validate_email("ana@realmail.co"), Ok(()));
        assert_eq!(validate_email("  user.name+tag@agency.co.uk  "), Ok(()));
        assert_eq!(validate_email("o'brien@mail-host.io"), Ok(()));
    }

    #[test]
    fn test_strings_without_at_are_missing_at() {
        for input in ["", "   ", "plainaddress", "user.example.com", "a.b.c"] {
            assert_eq!(validate_email(input), Err(EmailRejection::MissingAt), "{input:?}");
        }
    }

    #[test]
    fn test_multiple_at() {
        assert_eq!(
            validate_email("user@@realmail.co"),
            Err(EmailRejection::MultipleAt)
        );
        assert_eq!(validate_email("a@b@c.com"), Err(EmailRejection::MultipleAt));
    }

    #[test]
    fn test_malformed_pattern() {
        assert_eq!(validate_email("@realmail.co"), Err(EmailRejection::Malformed));
        assert_eq!(validate_email("user@"), Err(EmailRejection::Malformed));
        assert_eq!(validate_email("user@.realmail.co"), Err(EmailRejection::Malformed));
        assert_eq!(validate_email("us er@realmail.co"), Err(EmailRejection::Malformed));
        assert_eq!(validate_email("user@-host.com"), Err(EmailRejection::Malformed));
    }

    #[test]
    fn test_local_part_rules() {
        let long_local = format!("{}@realmail.co", "a".repeat(65));
        assert_eq!(validate_email(&long_local), Err(EmailRejection::LocalPartLength));

        let max_local = format!("{}@realmail.co", "a".repeat(64));
        assert_eq!(validate_email(&max_local), Ok(()));

        assert_eq!(validate_email(".ana@realmail.co"), Err(EmailRejection::LocalPartDots));
        assert_eq!(validate_email("ana.@realmail.co"), Err(EmailRejection::LocalPartDots));
        assert_eq!(validate_email("a..na@realmail.co"), Err(EmailRejection::LocalPartDots));
    }

    #[test]
    fn test_domain_rules() {
        assert_eq!(validate_email("ana@localhost"), Err(EmailRejection::MissingDomainDot));
        assert_eq!(
            validate_email("ana@realmail.c"),
            Err(EmailRejection::TopLevelDomainTooShort)
        );

        let label = "a".repeat(60);
        let long_domain = format!("ana@{0}.{0}.{0}.{0}.{0}.com", label);
        assert_eq!(validate_email(&long_domain), Err(EmailRejection::DomainLength));
    }

    #[test]
    fn test_placeholder_addresses_are_rejected() {
        for input in [
            "test@test.com",
            "TEST@Test.org",
            "admin@admin.net",
            "user@user.io",
            "demo@demo.in",
            "sample@sample.co",
            "example@example.com",
            "ana@example.org",
            "ana@demo.company",
            "ana@sample.net",
            "ana@test.dev",
        ] {
            assert_eq!(validate_email(input), Err(EmailRejection::Placeholder), "{input:?}");
        }
    }

    #[test]
    fn test_placeholder_check_only_matches_whole_labels() {
        assert_eq!(validate_email("ana@testing.com"), Ok(()));
        assert_eq!(validate_email("ana@mydemo.com"), Ok(()));
    }

    #[test]
    fn test_form_message_follows_raw_text() {
        assert_eq!(
            email_form_message(" ana.realmail.co "),
            "Email must contain @ symbol (e.g., user@example.com)"
        );
        assert_eq!(
            email_form_message("ana@localhost"),
            "Email must contain a domain with extension (e.g., user@example.com)"
        );
        assert_eq!(
            email_form_message(".ana@realmail.co"),
            "Email format is invalid - check for extra dots"
        );
        assert_eq!(
            email_form_message("ana@real@mail.co"),
            "Email must contain exactly one @ symbol"
        );
        assert_eq!(
            email_form_message("test@test.com"),
            "Please enter a valid email address (e.g., user@example.com)"
        );
    }

    #[test]
    fn test_email_value_object() {
        let email = EmailAddress::new("  ana@realmail.co ").unwrap();
        assert_eq!(email.as_str(), "ana@realmail.co");
        assert_eq!(email.local_part(), "ana");
        assert_eq!(email.domain(), "realmail.co");
        assert_eq!(format!("{}", email), "ana@realmail.co");

        match EmailAddress::new("test@test.com") {
            Err(ValidationError::InvalidEmail { reason, .. }) => {
                assert_eq!(reason, EmailRejection::Placeholder)
            }
            other => panic!("expected placeholder rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_email_serde() {
        let email = EmailAddress::new("ana@realmail.co").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"ana@realmail.co\"");

        let back: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, email);

        let result: Result<EmailAddress, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
