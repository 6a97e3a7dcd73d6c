//! Key-value storage backends for the contact book.
//!
//! The store persists everything into a single string slot. Backends only
//! need to read and overwrite whole values by key; nothing is ever deleted.

mod file;
mod memory;
mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;
