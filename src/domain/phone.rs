//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// Accepted range for the number of digits in a phone number.
const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 11;

/// A type-safe wrapper for phone numbers.
///
/// Only the digit count is validated. Formatting characters are kept as
/// typed; only surrounding whitespace is trimmed.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new(" (11) 98765-4321 ").unwrap();
/// assert_eq!(phone.as_str(), "(11) 98765-4321");
/// assert_eq!(phone.digits_only(), "11987654321");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the digit count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number has fewer than
    /// 10 or more than 11 ASCII digits.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let candidate = Self(raw.trim().to_string());

        if !(MIN_DIGITS..=MAX_DIGITS).contains(&candidate.digits_only().len()) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(candidate)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_digit_count() {
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("1234567890").is_ok());
        assert!(PhoneNumber::new("12345678901").is_ok());
        assert!(PhoneNumber::new("123456789012").is_err());
    }

    #[test]
    fn test_phone_ignores_punctuation() {
        assert!(PhoneNumber::new("(11) 3456-7890").is_ok());
        assert!(PhoneNumber::new("+55 11 9876-5432").is_err());
        assert!(PhoneNumber::new("phone: 11.98765.4321").is_ok());
        assert!(PhoneNumber::new("(11) 345-678").is_err());
    }

    #[test]
    fn test_phone_keeps_formatting() {
        let phone = PhoneNumber::new("  (11) 3456-7890\n").unwrap();
        assert_eq!(phone.as_str(), "(11) 3456-7890");
        assert_eq!(phone.digits_only(), "1134567890");
    }

    #[test]
    fn test_phone_digit_count_matches_digits_only() {
        for raw in ["(11) 3456-789", "11 3456-7890", "+1 (415) 555-0100", "123-456-78901"] {
            let expected = raw.chars().filter(|c| c.is_ascii_digit()).count();
            let accepted = (10..=11).contains(&expected);
            match PhoneNumber::new(raw) {
                Ok(phone) => {
                    assert!(accepted, "{:?} should be rejected", raw);
                    assert_eq!(phone.digits_only().len(), expected);
                }
                Err(_) => assert!(!accepted, "{:?} should be accepted", raw),
            }
        }
    }

    #[test]
    fn test_phone_empty() {
        assert_eq!(
            PhoneNumber::new(""),
            Err(ValidationError::InvalidPhone(String::new()))
        );
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("555-123-4567").unwrap();
        assert_eq!(format!("{}", phone), "555-123-4567");
    }
}
