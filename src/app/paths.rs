// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`JOURNAL_WALL_DATA_DIR`, `JOURNAL_WALL_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the application name appended
//!
//! The data directory holds pending submissions; the config directory holds
//! `settings.toml`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "JournalWall";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "JOURNAL_WALL_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "JOURNAL_WALL_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI arguments.
///
/// Must be called once at startup before any path is resolved. Later calls
/// are ignored and logged.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    record_override(&CLI_DATA_DIR, data_dir, "--data-dir");
    record_override(&CLI_CONFIG_DIR, config_dir, "--config-dir");
}

/// Stores one override; each cell is set independently of the others.
fn record_override(cell: &OnceLock<Option<PathBuf>>, value: Option<String>, flag: &str) -> bool {
    let recorded = cell.set(value.map(PathBuf::from)).is_ok();
    if !recorded {
        tracing::warn!(flag, "directory override was already initialized; ignoring");
    }
    recorded
}

/// Shared resolution chain for both directory kinds.
fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_default: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_default().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application data directory (pending submissions live here).
///
/// Platform defaults:
/// - Linux: `~/.local/share/JournalWall/`
/// - macOS: `~/Library/Application Support/JournalWall/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\JournalWall\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory with an optional explicit override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the application config directory (`settings.toml` lives here).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory with an optional explicit override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch process-wide environment variables.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
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
    fn overrides_are_recorded_independently() {
        let data: OnceLock<Option<PathBuf>> = OnceLock::new();
        let config: OnceLock<Option<PathBuf>> = OnceLock::new();
        assert!(record_override(&data, Some("/first".into()), "--data-dir"));

        assert!(!record_override(&data, Some("/second".into()), "--data-dir"));
        assert!(record_override(&config, Some("/conf".into()), "--config-dir"));

        assert_eq!(data.get(), Some(&Some(PathBuf::from("/first"))));
        assert_eq!(config.get(), Some(&Some(PathBuf::from("/conf"))));
    }

    #[test]
    fn override_path_takes_precedence_for_both_dirs() {
        let data = PathBuf::from("/custom/data/path");
        let config = PathBuf::from("/custom/config/path");
        assert_eq!(get_app_data_dir_with_override(Some(data.clone())), Some(data));
        assert_eq!(
            get_app_config_dir_with_override(Some(config.clone())),
            Some(config)
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
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(get_app_config_dir(), Some(PathBuf::from("/test/config/dir")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }
}
