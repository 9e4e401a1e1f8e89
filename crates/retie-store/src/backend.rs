//! Storage backend seam and implementations
//!
//! A backend is a flat namespace of string slots, the moral equivalent of a
//! browser origin's key-value store. Slots are overwritten whole; there are
//! no partial writes and no transactions.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from backend infrastructure
///
/// Only writes (and backend setup) can fail loudly. Reads fail soft to
/// `None` so a damaged slot degrades to "no data" instead of an error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure while writing a slot or creating the store root
    #[error("storage io failure: {0}")]
    Io(#[from] io::Error),

    /// Value could not be serialized for storage
    #[error("storage encoding failure: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Flat key-value slot namespace
///
/// # Contract
/// - `get` returns exactly what the last `set` for that key stored, or
///   `None` if the key was never set or the stored value is unreadable
/// - `set` overwrites the whole slot; last writer wins
pub trait StorageBackend {
    /// Read the raw value at `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value at `key`
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] when the backend cannot durably record
    /// the value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and embedders that manage durability
/// themselves
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create empty backend
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-per-key backend rooted at a directory
///
/// Each key maps to one file under the root; the file's entire content is
/// the slot value. Key characters outside `[A-Za-z0-9_-]` are replaced with
/// `_` to keep file names portable.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open a backend at `root`, creating the directory if needed
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory holding the slot files
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(name)
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}
