// SPDX-License-Identifier: MPL-2.0
//! File-backed preference storage.
//!
//! All preferences live in one JSON object (`local_storage.json`) in the
//! application data directory, mapping keys to raw string values. The whole
//! object is rewritten on every change.
//!
//! # Path Resolution
//!
//! 1. Use `open_in()` with an explicit base directory
//! 2. Set `ICED_FOLIO_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::app::paths;
use crate::application::port::{PreferenceStorage, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
pub const STORAGE_FILE: &str = "local_storage.json";

#[derive(Debug, Clone, Default)]
pub struct FileStorage {
    /// `None` when no data directory could be determined; writes then fail.
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the storage in the default data directory.
    ///
    /// Returns the storage and an optional i18n warning key. An unreadable
    /// file yields an empty storage and a warning, never an error.
    #[must_use]
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the storage in a custom base directory.
    ///
    /// # Path Resolution
    ///
    /// 1. `base_dir` parameter (if `Some`)
    /// 2. CLI `--data-dir` / `ICED_FOLIO_DATA_DIR`
    /// 3. Platform-specific data directory
    #[must_use]
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STORAGE_FILE);
            dir
        }) else {
            return (Self::default(), Some("notification-storage-path-error".to_string()));
        };

        if !path.exists() {
            return (
                Self {
                    path: Some(path),
                    values: BTreeMap::new(),
                },
                None,
            );
        }

        let (values, warning) = match read_values(&path) {
            Ok(values) => (values, None),
            Err(key) => {
                tracing::warn!(path = %path.display(), "ignoring unreadable preference storage");
                (BTreeMap::new(), Some(key.to_string()))
            }
        };

        (
            Self {
                path: Some(path),
                values,
            },
            warning,
        )
    }

    fn write(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        fs::write(path, content).map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>, &'static str> {
    let content = fs::read_to_string(path).map_err(|_| "notification-storage-read-error")?;
    serde_json::from_str(&content).map_err(|_| "notification-storage-parse-error")
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        let Some(path) = self.path.clone() else {
            return Err(StorageError::Unavailable);
        };
        self.write(&path)
    }
}
