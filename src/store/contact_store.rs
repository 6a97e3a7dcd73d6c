//! Contact store.
//!
//! Owns the in-memory list of contacts and mirrors it into a single
//! key-value slot after every mutation. Storage problems never reach the
//! caller: a failed save is logged and the in-memory list stays
//! authoritative, and an unreadable slot is backed up and replaced by an
//! empty list.

use super::collation::NameCollator;
use crate::error::{ContactError, ContactResult, StorageResult};
use crate::models::{Contact, ContactField, ContactRecord};
use crate::storage::KeyValueStorage;
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, error, info, warn};

/// Default slot the contact list is persisted under.
pub const STORAGE_KEY: &str = "contatos";

/// An ordered collection of validated contacts with unique emails.
///
/// The store is constructed once by the application entry point and handed
/// to the front end; there is no global instance.
///
/// # Example
///
/// ```
/// use contact_book::storage::MemoryStorage;
/// use contact_book::ContactStore;
///
/// let mut store = ContactStore::load(MemoryStorage::new());
/// let ana = store.add("Ana", "ana@example.com", "11 98765-4321").unwrap();
///
/// assert_eq!(store.list()[0].id(), ana.id());
/// assert!(store.remove(ana.id().as_str()));
/// assert!(store.is_empty());
/// ```
pub struct ContactStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    contacts: Vec<Contact>,
    backup_key: Option<String>,
}

impl<S: KeyValueStorage> ContactStore<S> {
    /// Load the store from the default [`STORAGE_KEY`] slot.
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, STORAGE_KEY)
    }

    /// Load the store from the given slot.
    ///
    /// - empty slot: starts with no contacts
    /// - unreadable slot: logs and starts with no contacts
    /// - corrupt payload or any invalid record: logs, copies the raw payload
    ///   to a backup slot (see [`ContactStore::backup_key`]) and starts with
    ///   no contacts
    pub fn load_with_key(mut storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut backup_key = None;

        let contacts = match storage.get_item(&key) {
            Ok(Some(raw)) => match Self::decode(&raw) {
                Ok(contacts) => {
                    info!("Loaded {} contacts from storage", contacts.len());
                    contacts
                }
                Err(e) => {
                    error!("Failed to load contacts: {}", e);
                    backup_key = Self::back_up(&mut storage, &key, &raw);
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("No contacts found in storage");
                Vec::new()
            }
            Err(e) => {
                error!("Failed to read contacts slot '{}': {}", key, e);
                Vec::new()
            }
        };

        Self {
            storage,
            key,
            contacts,
            backup_key,
        }
    }

    fn decode(raw: &str) -> StorageResult<Vec<Contact>> {
        let records: Vec<ContactRecord> = serde_json::from_str(raw)?;
        let contacts = records
            .into_iter()
            .map(Contact::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        let duplicates = contacts.iter().filter(|c| !seen.insert(c.email())).count();
        if duplicates > 0 {
            warn!("Stored contacts contain {} duplicate emails", duplicates);
        }

        Ok(contacts)
    }

    /// Copy an unreadable payload aside.
    ///
    /// `<key>.backup-latest` names the newest backup. When that backup
    /// already holds `raw`, no new copy is written, so restarting against
    /// the same corrupt slot does not pile up backups.
    fn back_up(storage: &mut S, key: &str, raw: &str) -> Option<String> {
        let latest_key = format!("{}.backup-latest", key);

        if let Ok(Some(latest)) = storage.get_item(&latest_key) {
            if matches!(storage.get_item(&latest), Ok(Some(saved)) if saved == raw) {
                warn!("Unreadable contacts already preserved under '{}'", latest);
                return Some(latest);
            }
        }

        let backup_key = format!("{}.backup-{}", key, Utc::now().format("%Y%m%d%H%M%S%3f"));
        if let Err(e) = storage.set_item(&backup_key, raw) {
            error!("Failed to back up unreadable contacts: {}", e);
            return None;
        }
        if let Err(e) = storage.set_item(&latest_key, &backup_key) {
            warn!("Failed to record latest backup: {}", e);
        }

        warn!("Unreadable contacts preserved under '{}'", backup_key);
        Some(backup_key)
    }

    /// Validate and add a new contact, then persist.
    ///
    /// # Errors
    ///
    /// - `ContactError::Validation` if a field is invalid
    /// - `ContactError::DuplicateEmail` if the normalized email is taken
    pub fn add(&mut self, name: &str, email: &str, phone: &str) -> ContactResult<Contact> {
        let contact = Contact::new(name, email, phone)?;

        if self.email_in_use(contact.email(), None) {
            return Err(ContactError::DuplicateEmail(contact.email().to_string()));
        }

        debug!("Adding contact {}", contact.id());
        self.contacts.push(contact.clone());
        self.persist();
        Ok(contact)
    }

    /// Remove the contact with `id`, then persist.
    ///
    /// Returns `false` without touching storage if no contact matches.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.contacts.remove(index);
                debug!("Removed contact {}", id);
                self.persist();
                true
            }
            None => {
                debug!("Remove ignored, no contact {}", id);
                false
            }
        }
    }

    /// Replace one field of a stored contact, then persist.
    ///
    /// # Errors
    ///
    /// - `ContactError::NotFound` if no contact has `id`
    /// - `ContactError::Validation` if the new value is invalid
    /// - `ContactError::DuplicateEmail` if the new email belongs to another contact
    pub fn update(&mut self, id: &str, field: ContactField, value: &str) -> ContactResult<Contact> {
        let index = self
            .position(id)
            .ok_or_else(|| ContactError::NotFound(id.to_string()))?;

        let updated = self.contacts[index].update(field, value)?;

        if field == ContactField::Email && self.email_in_use(updated.email(), Some(index)) {
            return Err(ContactError::DuplicateEmail(updated.email().to_string()));
        }

        debug!("Updated {} of contact {}", field, id);
        self.contacts[index] = updated.clone();
        self.persist();
        Ok(updated)
    }

    /// All contacts ordered by name.
    ///
    /// The stored order is left untouched; contacts with equal names keep
    /// their insertion order.
    pub fn list(&self) -> Vec<&Contact> {
        let mut collator = NameCollator::new();
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by(|a, b| collator.compare(a.name(), b.name()));
        sorted
    }

    /// Look up a contact by id.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id().as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Write every contact to the storage slot.
    ///
    /// Returns `false` if the write failed. The failure is logged and the
    /// in-memory list is kept as is.
    pub fn persist(&mut self) -> bool {
        match self.try_persist() {
            Ok(()) => {
                info!("Saved {} contacts to storage", self.contacts.len());
                true
            }
            Err(e) => {
                error!("Failed to save contacts: {}", e);
                false
            }
        }
    }

    fn try_persist(&mut self) -> StorageResult<()> {
        let json = serde_json::to_string(&self.contacts)?;
        self.storage.set_item(&self.key, &json)
    }

    /// Slot holding the raw payload that failed to load, if any.
    pub fn backup_key(&self) -> Option<&str> {
        self.backup_key.as_deref()
    }

    /// Slot the contacts are persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Release the underlying storage, e.g. to reload it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.id().as_str() == id)
    }

    fn email_in_use(&self, email: &str, except: Option<usize>) -> bool {
        self.contacts
            .iter()
            .enumerate()
            .any(|(i, c)| Some(i) != except && c.email() == email)
    }
}
