// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[endpoints]` - Gallery and subscription data sources
//! - `[gallery]` - Carousel settings (thumbnail strip size)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()` (`--config-dir`)
//! 3. Set `SHOPFRONT_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use shopfront::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::catalog::ThumbnailLimit;
use crate::error::{Error, Result};
use crate::infrastructure::http::Endpoint;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

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
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Remote data sources. Unset entries fall back to environment variables,
/// then to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EndpointsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_url: Option<String>,
}

/// Carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of thumbnails shown under the main image.
    #[serde(
        default = "default_thumbnail_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_limit: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_limit: default_thumbnail_limit(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Thumbnail strip size, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_limit(&self) -> ThumbnailLimit {
        self.gallery
            .thumbnail_limit
            .map(ThumbnailLimit::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_thumbnail_limit() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_LIMIT)
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
// Endpoint Resolution
// =============================================================================

/// Endpoint values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct EndpointOverrides {
    pub gallery_url: Option<String>,
    pub subscription_url: Option<String>,
}

/// The two data sources of the product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub gallery: Endpoint,
    pub subscription: Endpoint,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gallery: Endpoint::new(DEFAULT_GALLERY_URL),
            subscription: Endpoint::new(DEFAULT_SUBSCRIPTION_URL),
        }
    }
}

/// Resolves endpoints from CLI overrides, the process environment and the config.
#[must_use]
pub fn resolve_endpoints(cli: &EndpointOverrides, config: &Config) -> Endpoints {
    resolve_endpoints_with(cli, config, |name| std::env::var(name).ok())
}

/// Resolves endpoints with an explicit environment lookup.
///
/// Precedence: CLI, environment, `[endpoints]` section, built-in default.
/// Empty values are skipped at every level.
pub fn resolve_endpoints_with<F>(cli: &EndpointOverrides, config: &Config, env: F) -> Endpoints
where
    F: Fn(&str) -> Option<String>,
{
    let pick = |cli_value: &Option<String>,
                env_name: &str,
                config_value: &Option<String>,
                default: &str| {
        let url = cli_value
            .clone()
            .filter(|v| !v.is_empty())
            .or_else(|| env(env_name).filter(|v| !v.is_empty()))
            .or_else(|| config_value.clone().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| default.to_string());
        Endpoint::new(url)
    };

    Endpoints {
        gallery: pick(
            &cli.gallery_url,
            ENV_GALLERY_URL,
            &config.endpoints.gallery_url,
            DEFAULT_GALLERY_URL,
        ),
        subscription: pick(
            &cli.subscription_url,
            ENV_SUBSCRIPTION_URL,
            &config.endpoints.subscription_url,
            DEFAULT_SUBSCRIPTION_URL,
        ),
    }
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
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            endpoints: EndpointsConfig {
                gallery_url: Some("http://shop.test/images".to_string()),
                subscription_url: None,
            },
            gallery: GalleryConfig {
                thumbnail_limit: Some(4),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.endpoints, EndpointsConfig::default());
        assert_eq!(config.thumbnail_limit().value(), DEFAULT_THUMBNAIL_LIMIT);
    }

    #[test]
    fn out_of_range_thumbnail_limit_is_clamped() {
        let mut config = Config::default();
        config.gallery.thumbnail_limit = Some(500);
        assert_eq!(config.thumbnail_limit().value(), MAX_THUMBNAIL_LIMIT);
        config.gallery.thumbnail_limit = Some(0);
        assert_eq!(config.thumbnail_limit().value(), MIN_THUMBNAIL_LIMIT);
    }

    #[test]
    fn sections_may_be_omitted() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.thumbnail_limit().value(), DEFAULT_THUMBNAIL_LIMIT);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let parsed = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(parsed.is_err());
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
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nlanguage=")
            .expect("write corrupted file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("a").join("b");
        save_with_override(&Config::default(), Some(base.clone())).expect("save");
        assert!(base.join(CONFIG_FILE).exists());
    }

    #[test]
    fn endpoints_fall_back_to_defaults() {
        let endpoints =
            resolve_endpoints_with(&EndpointOverrides::default(), &Config::default(), no_env);
        assert_eq!(endpoints, Endpoints::default());
    }

    #[test]
    fn config_endpoints_beat_defaults() {
        let mut config = Config::default();
        config.endpoints.subscription_url = Some("http://shop.test/sub".into());
        let endpoints = resolve_endpoints_with(&EndpointOverrides::default(), &config, no_env);
        assert_eq!(endpoints.subscription.as_str(), "http://shop.test/sub");
        assert_eq!(endpoints.gallery.as_str(), DEFAULT_GALLERY_URL);
    }

    #[test]
    fn environment_beats_config() {
        let mut config = Config::default();
        config.endpoints.gallery_url = Some("http://config/images".into());
        let env = |name: &str| (name == ENV_GALLERY_URL).then(|| "http://env/images".to_string());
        let endpoints = resolve_endpoints_with(&EndpointOverrides::default(), &config, env);
        assert_eq!(endpoints.gallery.as_str(), "http://env/images");
    }

    #[test]
    fn cli_beats_environment_and_empty_values_are_skipped() {
        let cli = EndpointOverrides {
            gallery_url: Some("http://cli/images".into()),
            subscription_url: Some(String::new()),
        };
        let env = |name: &str| match name {
            ENV_GALLERY_URL => Some("http://env/images".to_string()),
            ENV_SUBSCRIPTION_URL => Some("http://env/sub".to_string()),
            _ => None,
        };
        let endpoints = resolve_endpoints_with(&cli, &Config::default(), env);
        assert_eq!(endpoints.gallery.as_str(), "http://cli/images");
        assert_eq!(endpoints.subscription.as_str(), "http://env/sub");
    }
}
