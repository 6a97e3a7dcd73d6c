//! Error types for the contact book.
//!
//! Validation failures live in [`crate::domain::ValidationError`]. This module
//! defines the store-level and infrastructure errors using `thiserror`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned to the caller by contact store mutations.
///
/// Every variant is an expected rejection of user input; storage failures
/// are never reported through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Another contact already uses this email address
    #[error("A contact with this email already exists: {0}")]
    DuplicateEmail(String),

    /// No contact has the given id
    #[error("Contact not found: {0}")]
    NotFound(String),
}

/// Errors that can occur while reading or writing the storage slot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode the stored JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored record failed validation
    #[error("Invalid stored contact: {0}")]
    InvalidRecord(#[from] ValidationError),

    /// The key cannot be used as a storage slot name
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Generic storage error
    #[error("Storage error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
