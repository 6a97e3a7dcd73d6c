//! Contact entity and its persisted record form.

use crate::domain::{ContactId, EmailAddress, PersonName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The plain mapping a contact is stored as.
///
/// Field names follow the external storage schema:
/// `{"id", "nome", "email", "telefone"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Unique identifier for the contact
    pub id: String,

    /// Display name
    #[serde(rename = "nome")]
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number, formatting preserved
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// A field of a contact that can be replaced with [`Contact::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// A validated contact.
///
/// A `Contact` can only be obtained through [`Contact::new`],
/// [`Contact::from_record`] or [`Contact::update`], all of which run the
/// field validators, so every instance satisfies the field rules. The value
/// is immutable afterwards.
///
/// Serializes as a [`ContactRecord`]; deserialization re-validates every
/// field and keeps the stored id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ContactRecord", try_from = "ContactRecord")]
pub struct Contact {
    id: ContactId,
    name: PersonName,
    email: EmailAddress,
    phone: PhoneNumber,
}

impl Contact {
    /// Create a contact with a freshly generated id.
    ///
    /// Fields are validated in the order name, email, phone and the first
    /// failure is returned.
    ///
    /// # Errors
    ///
    /// `InvalidName`, `InvalidEmail` or `InvalidPhone`.
    pub fn new(name: &str, email: &str, phone: &str) -> Result<Self, ValidationError> {
        Self::with_id(ContactId::generate(), name, email, phone)
    }

    /// Rebuild a contact from its stored form.
    ///
    /// The stored id is trusted as long as it is not empty; the other fields
    /// go through the same validation as [`Contact::new`].
    pub fn from_record(record: ContactRecord) -> Result<Self, ValidationError> {
        let id = ContactId::new(record.id)?;
        Self::with_id(id, &record.name, &record.email, &record.phone)
    }

    fn with_id(
        id: ContactId,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Self, ValidationError> {
        let name = PersonName::new(name)?;
        let email = EmailAddress::new(email)?;
        let phone = PhoneNumber::new(phone)?;

        Ok(Self {
            id,
            name,
            email,
            phone,
        })
    }

    /// Produce the plain stored mapping.
    pub fn to_record(&self) -> ContactRecord {
        ContactRecord {
            id: self.id.as_str().to_string(),
            name: self.name.as_str().to_string(),
            email: self.email.as_str().to_string(),
            phone: self.phone.as_str().to_string(),
        }
    }

    /// Return a copy of this contact with one field replaced.
    ///
    /// The new value is validated exactly like at construction; the id is
    /// preserved.
    pub fn update(&self, field: ContactField, value: &str) -> Result<Self, ValidationError> {
        let mut updated = self.clone();
        match field {
            ContactField::Name => updated.name = PersonName::new(value)?,
            ContactField::Email => updated.email = EmailAddress::new(value)?,
            ContactField::Phone => updated.phone = PhoneNumber::new(value)?,
        }
        Ok(updated)
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }
}

impl From<Contact> for ContactRecord {
    fn from(contact: Contact) -> Self {
        ContactRecord {
            id: contact.id.into_inner(),
            name: contact.name.into_inner(),
            email: contact.email.into_inner(),
            phone: contact.phone.into_inner(),
        }
    }
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Contact::from_record(record)
    }
}
