//! Behavioural tests for the email and phone validators.
//!
//! The generated inputs cover each property over a spread of values rather
//! than a handful of hand-picked ones.

use lotseye_site::domain::{
    email_form_message, phone_form_message, validate_email, validate_phone, EmailAddress,
    EmailRejection, PhoneNumber, PhoneRejection,
};

const DUMMIES: [&str; 13] = [
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

/// Deterministic pseudo-random sequence (xorshift) for generated inputs.
fn xorshift(seed: &mut u64) -> u64 {
    *seed ^= *seed << 13;
    *seed ^= *seed >> 7;
    *seed ^= *seed << 17;
    *seed
}

#[test]
fn test_every_string_without_at_reports_missing_at() {
    let alphabet: Vec<char> = "abcXYZ019 .-_+!#~\t".chars().collect();
    let mut seed = 0x2545_f491_4f6c_dd1d;

    for _ in 0..500 {
        let len = (xorshift(&mut seed) % 40) as usize;
        let candidate: String = (0..len)
            .map(|_| alphabet[(xorshift(&mut seed) % alphabet.len() as u64) as usize])
            .collect();

        assert_eq!(
            validate_email(&candidate),
            Err(EmailRejection::MissingAt),
            "input: {:?}",
            candidate
        );
    }

    assert_eq!(validate_email(""), Err(EmailRejection::MissingAt));
    assert_eq!(validate_email("   "), Err(EmailRejection::MissingAt));
}

#[test]
fn test_placeholder_addresses_are_rejected() {
    let placeholders = [
        "test@test.com",
        "TEST@Test.Org",
        "admin@admin.net",
        "user@user.io",
        "demo@demo.co",
        "sample@sample.in",
        "example@example.com",
        "ana@example.org",
        "raj@test.in",
        "priya@sample.co.uk",
        "dev@demo.app",
    ];

    for email in placeholders {
        assert_eq!(
            validate_email(email),
            Err(EmailRejection::Placeholder),
            "input: {}",
            email
        );
    }
}

#[test]
fn test_well_formed_addresses_are_accepted() {
    for email in [
        "ana@realmail.co",
        "first.last@agency.in",
        "x+tag@mail.example-host.com",
        "  padded@domain.org  ",
        "o'neil@irish.ie",
    ] {
        assert_eq!(validate_email(email), Ok(()), "input: {}", email);
    }
}

#[test]
fn test_email_rejection_reasons() {
    assert_eq!(validate_email("a@b@c.com"), Err(EmailRejection::MultipleAt));
    assert_eq!(validate_email("ana@-bad.com"), Err(EmailRejection::Malformed));
    assert_eq!(validate_email("ana@localhost"), Err(EmailRejection::MissingDomainDot));
    assert_eq!(validate_email("ana@mail.c"), Err(EmailRejection::TopLevelDomainTooShort));
    assert_eq!(validate_email(".ana@mail.com"), Err(EmailRejection::LocalPartDots));
    assert_eq!(validate_email("an..a@mail.com"), Err(EmailRejection::LocalPartDots));
    assert_eq!(
        validate_email(&format!("{}@mail.com", "a".repeat(65))),
        Err(EmailRejection::LocalPartLength)
    );
}

#[test]
fn test_every_rejected_email_gets_one_of_five_messages() {
    const MESSAGES: [&str; 5] = [
        "Email must contain @ symbol (e.g., user@example.com)",
        "Email must contain a domain with extension (e.g., user@example.com)",
        "Email format is invalid - check for extra dots",
        "Email must contain exactly one @ symbol",
        "Please enter a valid email address (e.g., user@example.com)",
    ];
    let alphabet: Vec<char> = "ab.@ -".chars().collect();
    let mut seed = 0x2545_f491_4f6c_dd1d;

    for _ in 0..2000 {
        let len = (xorshift(&mut seed) % 12) as usize;
        let input: String = (0..len)
            .map(|_| alphabet[(xorshift(&mut seed) % alphabet.len() as u64) as usize])
            .collect();
        if validate_email(&input).is_err() {
            let message = email_form_message(&input);
            assert!(MESSAGES.contains(&message), "input: {:?}", input);
            if !input.contains('@') {
                assert_eq!(message, MESSAGES[0], "input: {:?}", input);
            }
        }
    }
}

#[test]
fn test_dummy_message_only_for_mobile_leading_digits() {
    for dummy in DUMMIES {
        let message = phone_form_message(dummy);
        if dummy.starts_with(['6', '7', '8', '9']) {
            assert!(message.contains("dummy numbers"), "{}", dummy);
        } else {
            assert_eq!(message, "Phone number should start with 6, 7, 8, or 9", "{}", dummy);
        }
    }
}

#[test]
fn test_ten_digit_mobile_numbers_are_accepted() {
    let mut seed = 0x9e37_79b9_7f4a_7c15;

    for lead in ['6', '7', '8', '9'] {
        for _ in 0..250 {
            let rest = xorshift(&mut seed) % 1_000_000_000;
            let number = format!("{}{:09}", lead, rest);
            if DUMMIES.contains(&number.as_str()) {
                continue;
            }
            assert_eq!(validate_phone(&number), Ok(()), "input: {}", number);
        }
    }

    assert_eq!(validate_phone("6353292499"), Ok(()));
}

#[test]
fn test_phone_rejection_reasons() {
    assert_eq!(validate_phone("1234567890"), Err(PhoneRejection::DummySequence));
    assert_eq!(
        validate_phone("5353292499"),
        Err(PhoneRejection::WrongLeadingDigit('5'))
    );
    assert_eq!(
        validate_phone("635329249"),
        Err(PhoneRejection::WrongLength { digits: 9 })
    );
    assert_eq!(
        validate_phone("+91 63532 92499"),
        Err(PhoneRejection::WrongLength { digits: 12 })
    );
    for dummy in DUMMIES {
        assert_eq!(validate_phone(dummy), Err(PhoneRejection::DummySequence));
    }
}

#[test]
fn test_phone_formatting_is_ignored() {
    for formatted in ["63532 92499", "(635) 329-2499", "635.329.2499", " 6353292499 "] {
        let phone = PhoneNumber::new(formatted).unwrap();
        assert_eq!(phone.as_str(), "6353292499");
        assert_eq!(phone.international(), "+91 6353292499");
    }
}

#[test]
fn test_value_objects_refuse_invalid_input() {
    assert!(EmailAddress::new("test@test.com").is_err());
    assert!(PhoneNumber::new("9999999999").is_err());

    let email = EmailAddress::new(" Ana@RealMail.co ").unwrap();
    assert_eq!(email.as_str(), "Ana@RealMail.co");
    assert_eq!(email.domain(), "RealMail.co");
}
