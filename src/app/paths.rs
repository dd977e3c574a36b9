// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`, `--assets-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`PODIUM_DATA_DIR`, `PODIUM_CONFIG_DIR`, `PODIUM_ASSETS_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(CliDirs { data_dir, config_dir, assets_dir });
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Podium";

/// Sub-directory of the data directory holding flyers and gallery photos
/// when no explicit assets directory is configured.
const ASSETS_SUBDIR: &str = "assets";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "PODIUM_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PODIUM_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "PODIUM_ASSETS_DIR";

/// Directory overrides given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliDirs {
    pub data_dir: Option<String>,
    pub config_dir: Option<String>,
    pub assets_dir: Option<String>,
}

/// Global CLI overrides (set once at startup).
static CLI_DIRS: OnceLock<CliDirs> = OnceLock::new();

/// Initializes CLI overrides for the data, config and assets directories.
///
/// Returns `false` (and keeps the first value) if called more than once.
pub fn init_cli_overrides(dirs: CliDirs) -> bool {
    CLI_DIRS.set(dirs).is_ok()
}

fn cli_dir(select: fn(&CliDirs) -> &Option<String>) -> Option<PathBuf> {
    CLI_DIRS
        .get()
        .and_then(|dirs| select(dirs).as_ref())
        .map(PathBuf::from)
}

fn env_dir(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the application data directory path (preference storage).
///
/// Platform defaults:
/// - Linux: `~/.local/share/Podium/`
/// - macOS: `~/Library/Application Support/Podium/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Podium\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| cli_dir(|d| &d.data_dir))
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| {
            dirs::data_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the application config directory path (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| cli_dir(|d| &d.config_dir))
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the directory holding flyer and gallery image files.
///
/// Falls back to `<data dir>/assets`.
pub fn get_app_assets_dir() -> Option<PathBuf> {
    get_app_assets_dir_with_override(None)
}

/// Returns the assets directory path with an optional override.
pub fn get_app_assets_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| cli_dir(|d| &d.assets_dir))
        .or_else(|| env_dir(ENV_ASSETS_DIR))
        .or_else(|| {
            get_app_data_dir().map(|mut path| {
                path.push(ASSETS_SUBDIR);
                path
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App data dir should contain app name"
            );
        }
    }

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_for_every_directory() {
        let custom = PathBuf::from("/custom/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(custom.clone())),
            Some(custom.clone())
        );
        assert_eq!(
            get_app_config_dir_with_override(Some(custom.clone())),
            Some(custom.clone())
        );
        assert_eq!(
            get_app_assets_dir_with_override(Some(custom.clone())),
            Some(custom)
        );
    }

    #[test]
    fn env_var_overrides_default_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/test/data/dir")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn assets_dir_defaults_under_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ASSETS_DIR);
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(
            get_app_assets_dir(),
            Some(PathBuf::from("/test/data/dir").join(ASSETS_SUBDIR))
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
