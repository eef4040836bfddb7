//! JSON-file storage backend.
//!
//! All slots live in one JSON object on disk. Every `set` rewrites the whole
//! file through a temporary sibling and a rename, so a reader never sees a
//! half-written file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{KeyValueStore, StorageError};

type Slots = BTreeMap<String, String>;

/// A [`KeyValueStore`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the file at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_slots(&self) -> Result<Slots, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Slots::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Slots::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_slots(&self, slots: &Slots) -> Result<(), StorageError> {
        let encoded = serde_json::to_string_pretty(slots)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut slots = self.read_slots()?;
        Ok(slots.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = match self.read_slots() {
            Ok(slots) => slots,
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Storage file is corrupt, rewriting it"
                );
                Slots::new()
            }
            Err(e) => return Err(e),
        };
        slots.insert(key.to_owned(), value.to_owned());
        self.write_slots(&slots)
    }
}
