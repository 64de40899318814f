// SPDX-License-Identifier: MPL-2.0
//! Preference storage port.
//!
//! A flat string key/value store, the desktop counterpart of a browser's
//! local storage. Values are opaque strings; encoding is the caller's job.
//! The file-backed adapter lives in `infrastructure::storage`.

use std::collections::HashMap;
use std::fmt;

// =============================================================================
// StorageError
// =============================================================================

/// Errors that can occur when writing preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The storage location could not be determined.
    Unavailable,

    /// The backing store rejected the write.
    WriteFailed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Preference storage is unavailable"),
            StorageError::WriteFailed(msg) => write!(f, "Failed to write preference: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

// =============================================================================
// PreferenceStorage
// =============================================================================

/// String key/value storage for user preferences.
///
/// Reads never fail: a missing or unreadable value is reported as `None`.
pub trait PreferenceStorage {
    /// Returns the raw stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory storage, used by tests and as a fallback when no data
/// directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    /// When set, every write fails with this message.
    fail_writes: Option<String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-filled with one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }

    /// Makes every subsequent write fail.
    #[must_use]
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_writes = Some(message.to_string());
        self
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(message) = &self.fail_writes {
            return Err(StorageError::WriteFailed(message.clone()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
