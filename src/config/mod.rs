// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme
//! - `[viewer]` - Lightbox zoom, drag and layout tuning
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `FOLIO_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("ko".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Which wheel direction zooms in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WheelPolarity {
    /// Scrolling away from the user zooms in.
    #[default]
    Natural,
    /// Scrolling toward the user zooms in.
    Inverted,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ko").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Saved theme. `None` follows the system preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

/// Lightbox tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    #[serde(default = "default_max_zoom", skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f32>,

    #[serde(
        default = "default_drag_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold_px: Option<f32>,

    /// Fraction of the window width the lightbox may use.
    #[serde(default = "default_width_ratio", skip_serializing_if = "Option::is_none")]
    pub width_ratio: Option<f32>,

    #[serde(default)]
    pub wheel_polarity: WheelPolarity,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            max_zoom: default_max_zoom(),
            drag_threshold_px: default_drag_threshold_px(),
            width_ratio: default_width_ratio(),
            wheel_polarity: WheelPolarity::default(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Validated lightbox parameters, derived from [`ViewerConfig`].
///
/// Every field is clamped into its accepted range, so consumers never
/// re-validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_step: f32,
    pub drag_threshold_px: f32,
    pub width_ratio: f32,
    pub wheel_polarity: WheelPolarity,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            width_ratio: DEFAULT_VIEWPORT_WIDTH_RATIO,
            wheel_polarity: WheelPolarity::Natural,
        }
    }
}

impl From<&ViewerConfig> for ViewerSettings {
    fn from(cfg: &ViewerConfig) -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: cfg
                .max_zoom
                .filter(|v| v.is_finite())
                .unwrap_or(MAX_ZOOM)
                .clamp(MIN_ZOOM, MAX_ZOOM_CEILING),
            zoom_step: cfg
                .zoom_step
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_ZOOM_STEP)
                .clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP),
            drag_threshold_px: cfg
                .drag_threshold_px
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_DRAG_THRESHOLD_PX)
                .clamp(0.0, MAX_DRAG_THRESHOLD_PX),
            width_ratio: cfg
                .width_ratio
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_VIEWPORT_WIDTH_RATIO)
                .clamp(MIN_VIEWPORT_WIDTH_RATIO, 1.0),
            wheel_polarity: cfg.wheel_polarity,
        }
    }
}

impl ViewerSettings {
    /// Multiplier applied per wheel notch.
    #[must_use]
    pub fn step_factor(&self) -> f32 {
        1.0 + self.zoom_step
    }
}

impl Config {
    /// Lightbox parameters with out-of-range values clamped and non-finite
    /// values replaced by defaults.
    #[must_use]
    pub fn viewer_settings(&self) -> ViewerSettings {
        ViewerSettings::from(&self.viewer)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

fn default_max_zoom() -> Option<f32> {
    Some(MAX_ZOOM)
}

fn default_drag_threshold_px() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD_PX)
}

fn default_width_ratio() -> Option<f32> {
    Some(DEFAULT_VIEWPORT_WIDTH_RATIO)
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
// Load / Save
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ko".to_string()),
                theme: Some(ThemeMode::Dark),
            },
            viewer: ViewerConfig {
                zoom_step: Some(0.2),
                wheel_polarity: WheelPolarity::Inverted,
                ..ViewerConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_returns_default_when_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn theme_is_written_lowercase() {
        let config = Config {
            general: GeneralConfig {
                language: None,
                theme: Some(ThemeMode::Light),
            },
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).expect("serialize");
        assert!(text.contains("theme = \"light\""));
    }

    #[test]
    fn viewer_settings_clamp_out_of_range_values() {
        let cfg = ViewerConfig {
            zoom_step: Some(5.0),
            max_zoom: Some(0.5),
            drag_threshold_px: Some(-3.0),
            width_ratio: Some(2.0),
            wheel_polarity: WheelPolarity::Natural,
        };
        let settings = ViewerSettings::from(&cfg);

        assert_eq!(settings.zoom_step, MAX_ZOOM_STEP);
        assert_eq!(settings.max_zoom, MIN_ZOOM);
        assert_eq!(settings.drag_threshold_px, 0.0);
        assert_eq!(settings.width_ratio, 1.0);
    }

    #[test]
    fn viewer_settings_replace_non_finite_values_with_defaults() {
        let config: Config = toml::from_str(
            "[viewer]\nzoom_step = nan\nmax_zoom = inf\ndrag_threshold_px = nan\nwidth_ratio = -inf\n",
        )
        .expect("parse non-finite config");
        let settings = config.viewer_settings();

        assert_eq!(settings.zoom_step, DEFAULT_ZOOM_STEP);
        assert_eq!(settings.max_zoom, MAX_ZOOM);
        assert_eq!(settings.drag_threshold_px, DEFAULT_DRAG_THRESHOLD_PX);
        assert_eq!(settings.width_ratio, DEFAULT_VIEWPORT_WIDTH_RATIO);
    }

    #[test]
    fn nan_zoom_step_keeps_wheel_zoom_in_bounds() {
        use crate::ui::state::{WheelDirection, ZoomState};

        let config: Config =
            toml::from_str("[viewer]\nzoom_step = nan\n").expect("parse non-finite config");
        let mut zoom = ZoomState::new(&config.viewer_settings());
        for _ in 0..20 {
            zoom.apply_wheel(WheelDirection::Away);
        }
        assert_eq!(zoom.factor(), MAX_ZOOM);
        for _ in 0..20 {
            zoom.apply_wheel(WheelDirection::Toward);
        }
        assert_eq!(zoom.factor(), MIN_ZOOM);
    }

    #[test]
    fn default_viewer_settings_match_constants() {
        let settings = Config::default().viewer_settings();
        assert_eq!(settings, ViewerSettings::default());
    }

    #[test]
    fn partial_viewer_section_fills_defaults() {
        let config: Config = toml::from_str("[viewer]\nwheel_polarity = \"inverted\"\n")
            .expect("parse partial config");
        assert_eq!(config.viewer.wheel_polarity, WheelPolarity::Inverted);
        assert_eq!(config.viewer.zoom_step, Some(DEFAULT_ZOOM_STEP));
        assert!(config.general.theme.is_none());
    }
}
