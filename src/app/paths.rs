// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** passed to a `_with_override()` function
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) registered with [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_FOLIO_DATA_DIR`, `ICED_FOLIO_CONFIG_DIR`)
//! 4. **Platform default** from the `dirs` crate, with [`APP_NAME`] appended
//!
//! The data directory holds `local_storage.json`; the config directory holds
//! `settings.toml`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name used under the platform data/config directories.
pub const APP_NAME: &str = "IcedFolio";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "ICED_FOLIO_DATA_DIR";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--data-dir` / `--config-dir` values.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("directory overrides were already initialized");
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_key: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Ok(env_path) = std::env::var(env_key) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the data directory (e.g. `~/.local/share/IcedFolio/` on Linux).
///
/// `None` only when the platform has no data directory.
#[must_use]
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

#[must_use]
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the config directory (e.g. `~/.config/IcedFolio/` on Linux).
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching the environment must not run concurrently.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_dirs_end_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);

        for path in [get_app_data_dir(), get_app_config_dir()].into_iter().flatten() {
            assert!(path.is_absolute());
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(APP_NAME));
        }
    }

    #[test]
    fn explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/data");

        let override_path = PathBuf::from("/override/data");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_replaces_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/config");

        assert_eq!(get_app_config_dir(), Some(PathBuf::from("/env/config")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
