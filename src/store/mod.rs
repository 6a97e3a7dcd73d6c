//! The contact store and its name ordering.

pub mod collation;
pub mod contact_store;

pub use collation::NameCollator;
pub use contact_store::{ContactStore, STORAGE_KEY};
