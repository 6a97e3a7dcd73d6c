use contact_book::error::{StorageError, StorageResult};
use contact_book::storage::KeyValueStorage;
use std::collections::HashMap;

/// Mock key-value storage for testing.
///
/// Keeps values in memory, tracks writes for verification, and can be told
/// to fail reads or writes.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockStorage {
    items: HashMap<String, String>,
    call_counts: HashMap<String, usize>,
    fail_reads: bool,
    fail_writes: bool,
}

#[allow(dead_code)]
impl MockStorage {
    /// Create a new empty MockStorage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockStorage with one slot pre-filled.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every read fail.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw value of a slot.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Keys of all occupied slots.
    pub fn keys(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.get(method).unwrap_or(&0)
    }

    fn track_call(&mut self, method: &str) {
        *self.call_counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl KeyValueStorage for MockStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads {
            return Err(StorageError::Other("read refused".to_string()));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.track_call("set_item");

        if self.fail_writes {
            return Err(StorageError::Other("quota exceeded".to_string()));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
