//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// `local@domain.tld` with no whitespace and a single '@'.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// Input is trimmed and lowercased, so two addresses that differ only in
/// case or surrounding whitespace compare equal.
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// let email = EmailAddress::new(" Ana@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "ana@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly one '@' symbol, with a non-empty local part before it
    /// - A domain after '@' containing at least one '.' with text on both sides
    /// - No whitespace anywhere inside the trimmed value
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = email.as_ref();
        let trimmed = raw.trim();

        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail(raw.to_string()));
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
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
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_is_normalized() {
        let email = EmailAddress::new("A@B.com").unwrap();
        assert_eq!(email.as_str(), "a@b.com");

        let padded = EmailAddress::new("  User@Example.Org\t").unwrap();
        assert_eq!(padded.as_str(), "user@example.org");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("not-an-email").is_err());
        assert!(EmailAddress::new("").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("us er@example.com").is_err());
        assert!(EmailAddress::new("user@example.").is_err());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_error_keeps_raw_input() {
        assert_eq!(
            EmailAddress::new("nope"),
            Err(ValidationError::InvalidEmail("nope".to_string()))
        );
    }
}
