// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[viewer]` - Gesture and transition settings for the image viewer
//! - `[wall]` - Wall the shown entry belongs to
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `JOURNAL_WALL_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use journal_wall::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("language: {:?}", config.general.language);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key shown when the settings file exists but cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Viewer gesture and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Whether two-finger touches zoom the image.
    #[serde(default = "default_pinch_zoom", skip_serializing_if = "Option::is_none")]
    pub pinch_zoom: Option<bool>,

    /// Whether scale and pan changes are eased.
    #[serde(
        default = "default_animate_transitions",
        skip_serializing_if = "Option::is_none"
    )]
    pub animate_transitions: Option<bool>,

    /// Transition duration in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,

    /// Maximum delay between the two presses of a double click.
    #[serde(
        default = "default_double_click_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_click_ms: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            pinch_zoom: default_pinch_zoom(),
            animate_transitions: default_animate_transitions(),
            transition_ms: default_transition_ms(),
            double_click_ms: default_double_click_ms(),
        }
    }
}

impl ViewerConfig {
    /// Resolves the optional fields into runtime viewer settings,
    /// clamping durations to their supported ranges.
    #[must_use]
    pub fn settings(&self) -> ViewerSettings {
        let animate = self
            .animate_transitions
            .unwrap_or(DEFAULT_ANIMATE_TRANSITIONS);
        let transition_ms = self
            .transition_ms
            .unwrap_or(DEFAULT_TRANSITION_MS)
            .min(MAX_TRANSITION_MS);
        let double_click_ms = self
            .double_click_ms
            .unwrap_or(DEFAULT_DOUBLE_CLICK_MS)
            .clamp(MIN_DOUBLE_CLICK_MS, MAX_DOUBLE_CLICK_MS);

        ViewerSettings {
            pinch_zoom: self.pinch_zoom.unwrap_or(DEFAULT_PINCH_ZOOM),
            transition: (animate && transition_ms > 0)
                .then(|| Duration::from_millis(transition_ms)),
            double_click: Duration::from_millis(double_click_ms),
        }
    }
}

/// Wall membership of the displayed entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WallConfig {
    /// Short code of the wall, appended to share links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub wall: WallConfig,
}

/// Resolved viewer settings handed to the viewer component at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerSettings {
    pub pinch_zoom: bool,
    /// `None` disables eased transitions.
    pub transition: Option<Duration>,
    pub double_click: Duration,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        ViewerConfig::default().settings()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_pinch_zoom() -> Option<bool> {
    Some(DEFAULT_PINCH_ZOOM)
}

fn default_animate_transitions() -> Option<bool> {
    Some(DEFAULT_ANIMATE_TRANSITIONS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_double_click_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_CLICK_MS)
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
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "falling back to default settings"
                    );
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
