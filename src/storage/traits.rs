use crate::error::StorageResult;

/// A synchronous string key-value store.
///
/// Values are replaced wholesale on every write; there is no partial
/// update and no deletion. Implementations exist for memory (tests, embedding) and the
/// filesystem.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
