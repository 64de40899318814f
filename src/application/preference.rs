// SPDX-License-Identifier: MPL-2.0
//! Dark/light display preference.
//!
//! The flag is stored as its JSON text (`"true"` / `"false"`) under
//! [`DARK_MODE_KEY`]. Loading never fails: an absent or unreadable value
//! falls back to dark. The in-memory value is authoritative for the session
//! even when persisting it fails.

use super::port::{PreferenceStorage, StorageError};
use std::fmt;

/// Storage key of the display-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Display mode used when nothing valid is stored.
pub const DEFAULT_DARK_MODE: bool = true;

/// Decodes a stored flag, falling back to [`DEFAULT_DARK_MODE`].
#[must_use]
pub fn decode_dark_mode(raw: Option<&str>) -> bool {
    match raw {
        None => DEFAULT_DARK_MODE,
        Some(raw) => match serde_json::from_str::<bool>(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, raw, "unreadable {DARK_MODE_KEY} value, using default");
                DEFAULT_DARK_MODE
            }
        },
    }
}

/// Owns the display-mode flag and the storage it is persisted to.
pub struct ThemePreference {
    dark: bool,
    storage: Box<dyn PreferenceStorage>,
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference")
            .field("dark", &self.dark)
            .finish_non_exhaustive()
    }
}

impl ThemePreference {
    /// Reads the stored flag once.
    #[must_use]
    pub fn load(storage: Box<dyn PreferenceStorage>) -> Self {
        let dark = decode_dark_mode(storage.get(DARK_MODE_KEY).as_deref());
        Self { dark, storage }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Updates the flag and persists it.
    ///
    /// # Errors
    ///
    /// Returns the storage error when persisting fails; the in-memory value
    /// is updated regardless.
    pub fn set(&mut self, dark: bool) -> Result<(), StorageError> {
        self.dark = dark;
        self.persist()
    }

    /// Flips the flag and persists it. Returns the persist result.
    ///
    /// # Errors
    ///
    /// See [`ThemePreference::set`].
    pub fn toggle(&mut self) -> Result<(), StorageError> {
        self.set(!self.dark)
    }

    /// Writes the current value to storage.
    ///
    /// Called once at startup so the loaded (or defaulted) value is saved back.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the write fails.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        // serde_json renders booleans as bare `true` / `false`.
        let encoded = if self.dark { "true" } else { "false" };
        let result = self.storage.set(DARK_MODE_KEY, encoded);
        match &result {
            Ok(()) => tracing::debug!(dark = self.dark, "display preference saved"),
            Err(err) => tracing::warn!(%err, "failed to save display preference"),
        }
        result
    }
}
