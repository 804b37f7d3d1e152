// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`BROCHURE_LENS_CONFIG_DIR`, `BROCHURE_LENS_CACHE_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The cache directory holds downloaded placeholder images and generated
//! print documents. It has no CLI override.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "BrochureLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "BROCHURE_LENS_CONFIG_DIR";

/// Environment variable to override the cache directory.
pub const ENV_CACHE_DIR: &str = "BROCHURE_LENS_CACHE_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// - Linux: `~/.config/BrochureLens/`
/// - macOS: `~/Library/Application Support/BrochureLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\BrochureLens\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_path(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application cache directory path.
///
/// - Linux: `~/.cache/BrochureLens/`
/// - macOS: `~/Library/Caches/BrochureLens/`
/// - Windows: `C:\Users\<User>\AppData\Local\BrochureLens\`
pub fn get_app_cache_dir() -> Option<PathBuf> {
    get_app_cache_dir_with_override(None)
}

/// Returns the application cache directory path with an optional override.
pub fn get_app_cache_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = env_path(ENV_CACHE_DIR) {
        return Some(path);
    }

    dirs::cache_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
