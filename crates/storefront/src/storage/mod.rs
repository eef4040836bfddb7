//! Durable key-value storage.
//!
//! The ordering core persists into named string slots, the way a browser's
//! local storage does. [`KeyValueStore`] is the seam: production uses
//! [`FileStorage`], tests and embedders use [`MemoryStorage`].
//!
//! Writes replace a slot's whole value; there are no partial updates.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing medium holds data that cannot be decoded, or a value
    /// could not be encoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A process-wide string key-value store.
///
/// Methods take `&self`: the store is shared by every component that
/// persists (cart, theme), and access is single-threaded.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read or decoded.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
