// SPDX-License-Identifier: MPL-2.0
//! User settings stored in a sectioned `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[gallery]` - Records per page and the initial view mode
//! - `[modal]` - Delays of the modal open/close transitions
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. CLI `--config-dir` or the `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::{PageSize, ViewMode};
use crate::domain::modal::ModalTimings;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Gallery layout as written in the settings file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryLayout {
    #[default]
    Grid,
    List,
}

impl From<GalleryLayout> for ViewMode {
    fn from(layout: GalleryLayout) -> Self {
        match layout {
            GalleryLayout::Grid => ViewMode::Grid,
            GalleryLayout::List => ViewMode::List,
        }
    }
}

impl From<ViewMode> for GalleryLayout {
    fn from(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Grid => GalleryLayout::Grid,
            ViewMode::List => GalleryLayout::List,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Project cards per page.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Layout used at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<GalleryLayout>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            view_mode: Some(GalleryLayout::default()),
        }
    }
}

impl GalleryConfig {
    /// Effective page size, clamped to the supported range.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::new(
            self.page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        )
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode.unwrap_or_default().into()
    }
}

/// Modal viewer transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalConfig {
    #[serde(
        default = "default_open_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub open_delay_ms: Option<u64>,

    #[serde(
        default = "default_close_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_delay_ms: Option<u64>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            open_delay_ms: default_open_delay_ms(),
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

impl ModalConfig {
    /// Effective transition delays, capped at [`MAX_MODAL_DELAY_MS`].
    #[must_use]
    pub fn timings(&self) -> ModalTimings {
        let open = self
            .open_delay_ms
            .unwrap_or(DEFAULT_MODAL_OPEN_DELAY_MS)
            .min(MAX_MODAL_DELAY_MS);
        let close = self
            .close_delay_ms
            .unwrap_or(DEFAULT_MODAL_CLOSE_DELAY_MS)
            .min(MAX_MODAL_DELAY_MS);
        ModalTimings {
            open_delay: Duration::from_millis(open),
            close_delay: Duration::from_millis(close),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub modal: ModalConfig,
}

fn default_page_size() -> Option<usize> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_open_delay_ms() -> Option<u64> {
    Some(DEFAULT_MODAL_OPEN_DELAY_MS)
}

fn default_close_delay_ms() -> Option<u64> {
    Some(DEFAULT_MODAL_CLOSE_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file is not a
/// warning; an unreadable one yields defaults and
/// `notification-config-load-error`.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "using default settings");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or a config error if it
/// is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".to_string())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            gallery: GalleryConfig {
                page_size: Some(9),
                view_mode: Some(GalleryLayout::List),
            },
            modal: ModalConfig {
                open_delay_ms: Some(20),
                close_delay_ms: Some(300),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[gallery\npage_size = ").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.gallery, GalleryConfig::default());
        assert_eq!(config.modal, ModalConfig::default());
        assert_eq!(config.gallery.page_size().value(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn view_mode_is_kebab_case() {
        let config: Config = toml::from_str("[gallery]\nview_mode = \"list\"\n").expect("parse");
        assert_eq!(config.gallery.view_mode(), ViewMode::List);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let gallery = GalleryConfig {
            page_size: Some(0),
            view_mode: None,
        };
        assert_eq!(gallery.page_size().value(), MIN_PAGE_SIZE);

        let gallery = GalleryConfig {
            page_size: Some(500),
            view_mode: None,
        };
        assert_eq!(gallery.page_size().value(), MAX_PAGE_SIZE);

        let modal = ModalConfig {
            open_delay_ms: Some(u64::MAX),
            close_delay_ms: None,
        };
        let timings = modal.timings();
        assert_eq!(timings.open_delay, Duration::from_millis(MAX_MODAL_DELAY_MS));
        assert_eq!(
            timings.close_delay,
            Duration::from_millis(DEFAULT_MODAL_CLOSE_DELAY_MS)
        );
    }

    #[test]
    fn default_timings_match_modal_defaults() {
        assert_eq!(ModalConfig::default().timings(), ModalTimings::default());
    }

    #[test]
    fn load_with_override_missing_file_has_no_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_broken_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }
}
