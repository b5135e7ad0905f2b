//! Address and message validation.
//!
//! Two policies coexist. Per-field accessors on [`EmailMessage`] silently
//! drop invalid addresses, while [`validate_message`] is the explicit
//! precondition gate that turns missing senders or recipients into errors.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::message::EmailMessage;

#[allow(clippy::unwrap_used)]
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9._\-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Trims `address` and returns it if it is syntactically valid.
///
/// Returns an empty string for invalid input. No DNS or IDN handling.
#[must_use]
pub fn validate_address(address: &str) -> String {
    let trimmed = address.trim();
    if ADDRESS_RE.is_match(trimmed) {
        trimmed.to_string()
    } else {
        String::new()
    }
}

/// Validates each address, keeping only the valid ones in their original order.
#[must_use]
pub fn validate_addresses<I, S>(addresses: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    addresses
        .into_iter()
        .map(|a| validate_address(a.as_ref()))
        .filter(|a| !a.is_empty())
        .collect()
}

/// Checks that a message has a valid sender and at least one valid recipient.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredField`] for `from` or `to`.
pub fn validate_message(message: &EmailMessage) -> Result<()> {
    if message.from().is_empty() {
        return Err(Error::missing_field("from"));
    }

    if message.to().is_empty() {
        return Err(Error::missing_field("to"));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_address_cases() {
        let cases = [
            ("user@example.com", "user@example.com"),
            ("  user@example.com\t", "user@example.com"),
            ("first.last+tag@mail.example.co.uk", "first.last+tag@mail.example.co.uk"),
            ("", ""),
            ("   ", ""),
            ("user@host", ""),
            ("userexample.com", ""),
            ("@example.com", ""),
            ("user@example.c", ""),
            ("user name@example.com", ""),
            ("Jerry <jerry@seinfeld.com>", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(validate_address(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_validate_addresses_drops_invalid() {
        assert_eq!(
            validate_addresses(["a@b.com", "not-an-email", "c@d.org"]),
            vec!["a@b.com", "c@d.org"]
        );
    }

    #[test]
    fn test_validate_addresses_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(validate_addresses(&empty).is_empty());
        assert!(validate_addresses(["", "nope"]).is_empty());
    }

    #[test]
    fn test_validate_message() {
        let missing_from = EmailMessage::builder().to(["x@y.com"]).build();
        assert_eq!(
            validate_message(&missing_from).unwrap_err().to_string(),
            "from is required"
        );

        let missing_to = EmailMessage::builder().from("a@b.com").build();
        assert_eq!(
            validate_message(&missing_to).unwrap_err().to_string(),
            "to is required"
        );

        let invalid_to = EmailMessage::builder()
            .from("a@b.com")
            .to(["not-an-email"])
            .build();
        assert!(matches!(
            validate_message(&invalid_to),
            Err(Error::MissingRequiredField { field }) if field == "to"
        ));

        let ok = EmailMessage::builder().from("a@b.com").to(["x@y.com"]).build();
        assert!(validate_message(&ok).is_ok());
    }

    proptest! {
        #[test]
        fn prop_validate_address_idempotent(input in ".{0,40}") {
            let once = validate_address(&input);
            prop_assert_eq!(validate_address(&once), once);
        }

        #[test]
        fn prop_valid_shape_survives(local in "[a-z0-9._%+-]{1,12}", domain in "[a-z0-9-]{1,12}", tld in "[a-z]{2,6}") {
            let address = format!("  {local}@{domain}.{tld} ");
            prop_assert_eq!(validate_address(&address), address.trim());
        }

        #[test]
        fn prop_validate_addresses_preserves_order(inputs in proptest::collection::vec(".{0,20}|[a-z]{1,8}@[a-z]{1,8}\\.com", 0..10)) {
            let validated = validate_addresses(&inputs);
            prop_assert!(validated.len() <= inputs.len());

            let expected: Vec<String> = inputs
                .iter()
                .map(|s| validate_address(s))
                .filter(|s| !s.is_empty())
                .collect();
            prop_assert_eq!(validated, expected);
        }
    }
}
