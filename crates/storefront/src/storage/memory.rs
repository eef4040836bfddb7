//! In-memory storage backend.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// A [`KeyValueStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot already populated.
    #[must_use]
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Read a slot directly, bypassing the `Result` of the trait.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
