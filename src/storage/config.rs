//! Application configuration.
//!
//! Stored as TOML in the platform data directory. A missing file yields the
//! defaults; a malformed one is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Model artifact locations
    #[serde(default)]
    pub model: ModelSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            model: ModelSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

/// Where to find the trained model and its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// JSON model artifact
    pub model_path: PathBuf,
    /// JSON metrics file
    pub metrics_path: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("assets/calories_model.json"),
            metrics_path: PathBuf::from("assets/metrics.json"),
        }
    }
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Theme preference
    pub theme: Theme,
    /// Font scale multiplier
    pub font_scale: f32,
    /// Show the model information side panel
    pub show_sidebar: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_scale: 1.0,
            show_sidebar: true,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "calorieburn", "CalorieBurn")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();
    config.ui.font_scale = sanitize_font_scale(config.ui.font_scale);

    Ok(config)
}

/// Usable zoom range for `ui.font_scale`.
pub const FONT_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=3.0;

/// Map a stored font scale onto something egui can lay out.
///
/// Non-positive and non-finite values fall back to 1.0; anything else is
/// clamped into [`FONT_SCALE_RANGE`].
pub fn sanitize_font_scale(scale: f32) -> f32 {
    let sanitized = if !scale.is_finite() || scale <= 0.0 {
        1.0
    } else {
        scale.clamp(*FONT_SCALE_RANGE.start(), *FONT_SCALE_RANGE.end())
    };
    if sanitized != scale {
        tracing::warn!("font_scale {} is unusable, using {}", scale, sanitized);
    }
    sanitized
}

/// Configuration for one session together with where it is saved.
///
/// A file that exists but cannot be read or parsed is never written back:
/// the session runs on defaults and [`ConfigStore::save`] is a no-op, so the
/// user's file survives until they fix it.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    pub config: AppConfig,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Load from `path`, falling back to read-only defaults on error.
    pub fn open(path: &Path) -> Self {
        match load_config_from(path) {
            Ok(config) => Self {
                config,
                path: Some(path.to_path_buf()),
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {}: {}, using defaults without saving",
                    path.display(),
                    e
                );
                Self {
                    config: AppConfig {
                        data_dir: get_data_dir(),
                        ..Default::default()
                    },
                    path: None,
                }
            }
        }
    }

    /// File changes are written to, if saving is enabled.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Persist the current configuration. Returns `false` when saving is
    /// disabled for this session.
    pub fn save(&self) -> Result<bool, ConfigError> {
        match &self.path {
            Some(path) => save_config_to(&self.config, path).map(|()| true),
            None => Ok(false),
        }
    }
}

/// Save application configuration to a specific file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            version = "0.1.0"

            [ui]
            theme = "dark"
            font_scale = 1.25
            show_sidebar = false
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(config.ui.font_scale, 1.25);
        assert_eq!(config.model, ModelSettings::default());
    }

    #[test]
    fn test_font_scale_sanitized() {
        assert_eq!(sanitize_font_scale(1.25), 1.25);
        assert_eq!(sanitize_font_scale(0.0), 1.0);
        assert_eq!(sanitize_font_scale(-2.0), 1.0);
        assert_eq!(sanitize_font_scale(f32::NAN), 1.0);
        assert_eq!(sanitize_font_scale(0.1), 0.5);
        assert_eq!(sanitize_font_scale(12.0), 3.0);
    }
}
