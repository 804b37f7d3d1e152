// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[brochure]` - Title, page count, asset locations, deep-link base
//! - `[display]` - Placeholder service and image cache size
//! - `[notifications]` - Toast lifetime
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `BROCHURE_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use brochure_lens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::brochure::PageCount;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

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

/// What is shown and where its files live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrochureConfig {
    #[serde(default = "default_title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Number of pages; `page1.jpg` through `page<N>.jpg` are expected.
    #[serde(default = "default_total_pages", skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,

    #[serde(default = "default_assets_dir", skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,

    /// PDF offered by the download action.
    #[serde(default = "default_pdf_path", skip_serializing_if = "Option::is_none")]
    pub pdf_path: Option<PathBuf>,

    /// Base of shareable links (`<base_url>#page-<n>`).
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for BrochureConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            total_pages: default_total_pages(),
            assets_dir: default_assets_dir(),
            pdf_path: default_pdf_path(),
            base_url: default_base_url(),
        }
    }
}

/// Image display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Placeholder service used when a page asset is missing.
    #[serde(
        default = "default_placeholder_base",
        skip_serializing_if = "Option::is_none"
    )]
    pub placeholder_base: Option<String>,

    /// Number of off-screen decoded images kept in memory.
    #[serde(
        default = "default_image_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_entries: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder_base: default_placeholder_base(),
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Seconds before a notification dismisses itself.
    #[serde(
        default = "default_notification_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_secs: Option<u32>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_notification_secs(),
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
    pub brochure: BrochureConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    #[must_use]
    pub fn title(&self) -> &str {
        self.brochure.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Page count, clamped to `1..=MAX_TOTAL_PAGES`.
    #[must_use]
    pub fn page_count(&self) -> PageCount {
        let total = self
            .brochure
            .total_pages
            .unwrap_or(DEFAULT_TOTAL_PAGES)
            .clamp(1, MAX_TOTAL_PAGES);
        PageCount::new(total).unwrap_or_default()
    }

    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        self.brochure
            .assets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
    }

    #[must_use]
    pub fn pdf_path(&self) -> PathBuf {
        self.brochure
            .pdf_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_PATH))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.brochure.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    #[must_use]
    pub fn placeholder_base(&self) -> &str {
        self.display
            .placeholder_base
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER_BASE)
    }

    #[must_use]
    pub fn image_cache_entries(&self) -> usize {
        self.display
            .image_cache_entries
            .filter(|entries| *entries > 0)
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
    }

    /// Notification lifetime, clamped to the supported range.
    #[must_use]
    pub fn notification_duration(&self) -> Duration {
        let secs = self
            .notifications
            .duration_secs
            .unwrap_or(DEFAULT_NOTIFICATION_SECS)
            .clamp(MIN_NOTIFICATION_SECS, MAX_NOTIFICATION_SECS);
        Duration::from_secs(u64::from(secs))
    }
}

/// Settings given on the command line. They win over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub language: Option<String>,
    pub total_pages: Option<u32>,
    pub assets_dir: Option<PathBuf>,
}

impl CliOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(language) = &self.language {
            config.general.language = Some(language.clone());
        }
        if let Some(total) = self.total_pages {
            config.brochure.total_pages = Some(total);
        }
        if let Some(dir) = &self.assets_dir {
            config.brochure.assets_dir = Some(dir.clone());
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_title() -> Option<String> {
    Some(DEFAULT_TITLE.to_string())
}

fn default_total_pages() -> Option<u32> {
    Some(DEFAULT_TOTAL_PAGES)
}

fn default_assets_dir() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_ASSETS_DIR))
}

fn default_pdf_path() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_PDF_PATH))
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_placeholder_base() -> Option<String> {
    Some(DEFAULT_PLACEHOLDER_BASE.to_string())
}

fn default_image_cache_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
}

fn default_notification_secs() -> Option<u32> {
    Some(DEFAULT_NOTIFICATION_SECS)
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
#[must_use]
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
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
/// default config with the i18n key of a warning to show.
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
                    tracing::warn!(path = %path.display(), %err, "invalid config, using defaults");
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
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".into())),
    }
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
