//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// These are expected, user-facing rejections. The `Display` text is meant
/// to be shown to the person filling in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided name is blank or shorter than two characters.
    InvalidName(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number does not have 10 or 11 digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidName(_) => write!(f, "Name must have at least 2 characters"),
            Self::InvalidEmail(_) => write!(f, "Email must have a valid format"),
            Self::InvalidPhone(_) => write!(f, "Phone must have 10 or 11 digits"),
        }
    }
}

impl std::error::Error for ValidationError {}
