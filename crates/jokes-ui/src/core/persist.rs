//! Key/value persistence capability.
//!
//! # Design
//! - Components receive storage through context instead of touching `localStorage` directly.
//! - Values are raw strings; nothing is JSON-encoded.
//! - An empty stored value counts as unset and yields the caller's default.

use crate::core::error::StorageError;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Durable string storage keyed by name.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be accessed.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the backing storage refuses the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stored value for `key`, or `default` when missing, empty, or unreadable.
#[must_use]
pub fn read_or(store: &dyn KeyValueStore, key: &str, default: &str) -> String {
    match store.read(key) {
        Ok(Some(value)) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// In-memory store for tests and hosts without browser storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
