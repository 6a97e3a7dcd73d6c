//! Contact Book - a validated contact list with local persistence.
//!
//! Contacts (name, email, phone) are validated at construction, kept in an
//! in-memory store with unique emails, and mirrored into a single key-value
//! slot as a JSON array after every change.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (id, name, email, phone)
//! - **models**: The contact entity and its stored record form
//! - **store**: The contact store and name collation
//! - **storage**: Key-value slot backends (memory, filesystem)
//! - **error**: Store, storage and configuration errors
//! - **config**: Environment configuration for the binary
//! - **frontend**: Terminal form driving the store

pub mod config;
pub mod domain;
pub mod error;
pub mod frontend;
pub mod models;
pub mod storage;
pub mod store;

pub use config::Config;
pub use domain::ValidationError;
pub use error::{ConfigError, ContactError, ContactResult, StorageError, StorageResult};
pub use frontend::ContactForm;
pub use models::{Contact, ContactField, ContactRecord};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{ContactStore, STORAGE_KEY};
