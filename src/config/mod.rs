// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of the primitives' tunables in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode of the showcase
//! - `[toasts]` - Queue capacity and default auto-dismiss delay
//! - `[motion]` - Transition duration and stagger spacing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set the `HELIX_UI_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use helix_ui::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toasts.max_toasts = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "HelixUI";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "HELIX_UI_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Number of toasts kept before the oldest is evicted.
    #[serde(default = "default_max_toasts", skip_serializing_if = "Option::is_none")]
    pub max_toasts: Option<usize>,

    /// Auto-dismiss delay applied when a toast does not specify one.
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_toasts: default_max_toasts(),
            default_duration_ms: default_toast_duration_ms(),
        }
    }
}

/// Transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Enter/exit duration of transitions.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_duration_ms: Option<u64>,

    /// Delay between consecutive staggered children.
    #[serde(
        default = "default_stagger_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub stagger_delay_ms: Option<u64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: default_transition_ms(),
            stagger_delay_ms: default_stagger_delay_ms(),
        }
    }
}

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toasts: ToastConfig,

    #[serde(default)]
    pub motion: MotionConfig,
}

impl Config {
    /// Queue capacity, clamped to the supported range.
    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.toasts
            .max_toasts
            .unwrap_or(DEFAULT_MAX_TOASTS)
            .clamp(MIN_MAX_TOASTS, MAX_MAX_TOASTS)
    }

    /// Default toast lifetime. Zero keeps toasts until dismissed.
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(
            self.toasts
                .default_duration_ms
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
        )
    }

    /// Transition duration, clamped to the supported range.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(
            self.motion
                .transition_duration_ms
                .unwrap_or(DEFAULT_TRANSITION_MS)
                .clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS),
        )
    }

    #[must_use]
    pub fn stagger_delay(&self) -> Duration {
        Duration::from_millis(
            self.motion
                .stagger_delay_ms
                .unwrap_or(DEFAULT_STAGGER_DELAY_MS),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_toasts() -> Option<usize> {
    Some(DEFAULT_MAX_TOASTS)
}

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_stagger_delay_ms() -> Option<u64> {
    Some(DEFAULT_STAGGER_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then the environment
/// variable, then the platform config directory.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_config_path_with_override(None) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves the configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
