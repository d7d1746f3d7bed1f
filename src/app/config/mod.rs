// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The application never writes the file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[motion]` - Animation playback (reduced motion, speed, scrub smoothing)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `BELMONTS_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use belmonts::app::config;
//!
//! // Never fails: a broken file yields defaults and a warning.
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let settings = config.motion.settings(false);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::animation::Settings;
use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Animation playback settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Skip animations: jump to their end state.
    #[serde(default)]
    pub reduced_motion: Option<bool>,

    /// Speed multiplier for time-based animations.
    #[serde(default = "default_time_scale")]
    pub time_scale: Option<f32>,

    /// Catch-up time of scrubbed animations in milliseconds.
    #[serde(default = "default_scrub_lag_ms")]
    pub scrub_lag_ms: Option<u32>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: Some(false),
            time_scale: default_time_scale(),
            scrub_lag_ms: default_scrub_lag_ms(),
        }
    }
}

impl MotionConfig {
    /// Time scale clamped to its valid range.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        let value = self.time_scale.unwrap_or(DEFAULT_TIME_SCALE);
        if value.is_finite() {
            value.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
        } else {
            DEFAULT_TIME_SCALE
        }
    }

    /// Scrub lag clamped to its valid range.
    #[must_use]
    pub fn scrub_lag(&self) -> Duration {
        let millis = self
            .scrub_lag_ms
            .unwrap_or(DEFAULT_SCRUB_LAG_MS)
            .min(MAX_SCRUB_LAG_MS);
        Duration::from_millis(u64::from(millis))
    }

    /// Animation engine settings. `force_reduced` comes from the command line
    /// and wins over the file.
    #[must_use]
    pub fn settings(&self, force_reduced: bool) -> Settings {
        Settings {
            time_scale: self.time_scale(),
            scrub_lag: self.scrub_lag(),
            reduced_motion: force_reduced || self.reduced_motion.unwrap_or(false),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Animation playback settings.
    #[serde(default)]
    pub motion: MotionConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_time_scale() -> Option<f32> {
    Some(DEFAULT_TIME_SCALE)
}

fn default_scrub_lag_ms() -> Option<u32> {
    Some(DEFAULT_SCRUB_LAG_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        tracing::debug!(path = %path.display(), "configuration file");
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
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
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_settings(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        let mut file = fs::File::create(&path).expect("failed to create settings");
        file.write_all(content.as_bytes())
            .expect("failed to write settings");
        path
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.motion.reduced_motion, Some(false));
        assert_eq!(config.motion.time_scale(), DEFAULT_TIME_SCALE);
        assert_eq!(
            config.motion.scrub_lag(),
            Duration::from_millis(u64::from(DEFAULT_SCRUB_LAG_MS))
        );
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            "[general]\ntheme_mode = \"dark\"\n\n[motion]\nreduced_motion = true\ntime_scale = 2.0\nscrub_lag_ms = 0\n",
        );

        let config = load_from_path(&path).expect("failed to load config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.motion.reduced_motion, Some(true));
        assert_eq!(config.motion.time_scale(), 2.0);
        assert_eq!(config.motion.scrub_lag(), Duration::ZERO);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[motion]\ntime_scale = 0.5\n");

        let config = load_from_path(&path).expect("failed to load config");
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.motion.time_scale(), 0.5);
        assert_eq!(config.motion.scrub_lag_ms, Some(DEFAULT_SCRUB_LAG_MS));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let motion = MotionConfig {
            reduced_motion: None,
            time_scale: Some(40.0),
            scrub_lag_ms: Some(60_000),
        };
        assert_eq!(motion.time_scale(), MAX_TIME_SCALE);
        assert_eq!(
            motion.scrub_lag(),
            Duration::from_millis(u64::from(MAX_SCRUB_LAG_MS))
        );

        let slow = MotionConfig {
            time_scale: Some(0.0),
            ..MotionConfig::default()
        };
        assert_eq!(slow.time_scale(), MIN_TIME_SCALE);

        let broken = MotionConfig {
            time_scale: Some(f32::NAN),
            ..MotionConfig::default()
        };
        assert_eq!(broken.time_scale(), DEFAULT_TIME_SCALE);
    }

    #[test]
    fn cli_reduced_motion_wins_over_file() {
        let motion = MotionConfig::default();
        assert!(!motion.settings(false).reduced_motion);
        assert!(motion.settings(true).reduced_motion);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n")
            .expect("failed to parse config");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "this is not toml = = =");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        match load_from_path(&temp_dir.path().join(CONFIG_FILE)) {
            Err(Error::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_settings(temp_dir.path(), "[motion\nreduced_motion = maybe");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        let warning = warning.expect("expected a warning");
        assert!(warning.contains(CONFIG_FILE));
    }
}
