//! PersonName value object.

use super::errors::ValidationError;
use std::fmt;

/// Minimum number of characters in a trimmed name.
const MIN_NAME_CHARS: usize = 2;

/// A contact's display name, trimmed and at least two characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName from raw form input.
    ///
    /// Surrounding whitespace is removed before the length check.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the trimmed value has fewer
    /// than two characters.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = name.as_ref();
        let trimmed = raw.trim();

        if trimmed.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::InvalidName(raw.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
