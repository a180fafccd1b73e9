// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: the settings profile
//! bundled into the binary at `assets/config/settings.toml`.
//!
//! The gallery reads no configuration from disk or the environment; the
//! profile only gathers the presentation defaults in one editable place.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language override and theme mode
//! - `[window]` - Initial and minimum window size
//! - `[logging]` - Log level of the `tracing` subscriber
//!
//! Every field is optional; missing values take the defaults from [`defaults`].
//!
//! # Examples
//!
//! ```
//! use iced_gallery::config;
//!
//! let config = config::parse("[general]\ntheme_mode = \"dark\"").unwrap();
//! assert!(config.general.theme_mode.is_dark());
//! assert_eq!(config.window.width, config::DEFAULT_WINDOW_WIDTH);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

#[derive(RustEmbed)]
#[folder = "assets/config/"]
struct ConfigAsset;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr"). Overrides the OS locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Returns the window size, never smaller than the minimum size.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        let (min_width, min_height) = self.min_size();
        (self.width.max(min_width), self.height.max(min_height))
    }

    /// Returns the minimum size, never smaller than the built-in minimum.
    #[must_use]
    pub fn min_size(&self) -> (f32, f32) {
        (
            self.min_width.max(MIN_WINDOW_WIDTH),
            self.min_height.max(MIN_WINDOW_HEIGHT),
        )
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Deserializers
// =============================================================================

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
// Load
// =============================================================================

/// Parses a settings document.
///
/// # Errors
///
/// Returns [`Error::Config`] if the document is not valid TOML or a field has
/// the wrong type.
pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str::<Config>(content)?)
}

/// Why the defaults were used instead of the bundled profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    /// i18n key of the user-facing warning.
    pub key: &'static str,
    /// Parse failure, when the profile exists but is invalid.
    pub cause: Option<Error>,
}

/// Loads the bundled settings profile.
///
/// Returns the defaults together with a [`ConfigWarning`] when the profile is
/// missing or invalid, so a broken profile never prevents the gallery from starting.
pub fn load() -> (Config, Option<ConfigWarning>) {
    load_from(ConfigAsset::get(CONFIG_FILE).as_ref().map(|file| file.data.as_ref()))
}

fn load_from(content: Option<&[u8]>) -> (Config, Option<ConfigWarning>) {
    let Some(content) = content else {
        let warning = ConfigWarning {
            key: "warning-config-missing",
            cause: None,
        };
        return (Config::default(), Some(warning));
    };

    let parsed = std::str::from_utf8(content)
        .map_err(|err| Error::Config(err.to_string()))
        .and_then(parse);

    match parsed {
        Ok(config) => (config, None),
        Err(err) => {
            let warning = ConfigWarning {
                key: "warning-config-invalid",
                cause: Some(err),
            };
            (Config::default(), Some(warning))
        }
    }
}
