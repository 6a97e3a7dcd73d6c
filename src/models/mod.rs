//! Data models for the contact book.
//!
//! This module contains the contact entity and its persisted record form.

pub mod contact;

pub use contact::{Contact, ContactField, ContactRecord};
