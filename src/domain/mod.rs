//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! identifier, person name, email address and phone number. Each value
//! object validates and normalizes its input at construction time, so an
//! invalid field can never be represented in the system.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use person_name::PersonName;
pub use phone::PhoneNumber;
