// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[library]` - Default layout of the uploaded image list
//! - `[upload]` - Upload size limit
//! - `[editor]` - Export quality and preview bounds
//!
//! # Examples
//!
//! ```no_run
//! use iced_drop::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.upload.max_file_size_mb = Some(10);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::library::ViewMode;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

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

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LibraryConfig {
    /// Layout shown when the upload screen opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<ViewMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    #[serde(
        default = "default_max_file_size_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_file_size_mb: Option<u32>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
        }
    }
}

impl UploadConfig {
    /// Upload limit in bytes, with the configured value clamped to the supported range.
    pub fn max_file_size_bytes(&self) -> u64 {
        let mb = self
            .max_file_size_mb
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB)
            .clamp(MIN_MAX_FILE_SIZE_MB, MAX_MAX_FILE_SIZE_MB);
        u64::from(mb) * 1024 * 1024
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    #[serde(
        default = "default_export_quality",
        skip_serializing_if = "Option::is_none"
    )]
    pub export_quality: Option<u8>,

    #[serde(
        default = "default_preview_max_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_max_width: Option<u32>,

    #[serde(
        default = "default_preview_max_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_max_height: Option<u32>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            export_quality: default_export_quality(),
            preview_max_width: default_preview_max_width(),
            preview_max_height: default_preview_max_height(),
        }
    }
}

impl EditorConfig {
    pub fn export_quality(&self) -> u8 {
        self.export_quality
            .unwrap_or(DEFAULT_EXPORT_QUALITY)
            .clamp(MIN_EXPORT_QUALITY, MAX_EXPORT_QUALITY)
    }

    /// Preview bounding box as `(width, height)`.
    pub fn preview_bounds(&self) -> (u32, u32) {
        (
            self.preview_max_width
                .unwrap_or(DEFAULT_PREVIEW_MAX_WIDTH)
                .max(MIN_PREVIEW_DIMENSION),
            self.preview_max_height
                .unwrap_or(DEFAULT_PREVIEW_MAX_HEIGHT)
                .max(MIN_PREVIEW_DIMENSION),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_max_file_size_mb() -> Option<u32> {
    Some(DEFAULT_MAX_FILE_SIZE_MB)
}

fn default_export_quality() -> Option<u8> {
    Some(DEFAULT_EXPORT_QUALITY)
}

fn default_preview_max_width() -> Option<u32> {
    Some(DEFAULT_PREVIEW_MAX_WIDTH)
}

fn default_preview_max_height() -> Option<u32> {
    Some(DEFAULT_PREVIEW_MAX_HEIGHT)
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

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns the config and an optional i18n warning key. A missing file is not
/// an error; a malformed one falls back to defaults with a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring settings file {}: {err}", path.display());
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
