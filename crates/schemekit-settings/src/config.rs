//! Configuration and settings management for the scheme editor
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Handle settings (size, hit tolerance, rotation handle placement, gesture floor)
//! - Snap settings (line endpoint angle and axis snapping)
//! - History settings (undo depth)
//! - Clipboard settings (paste offset)
//! - Text defaults (font family and size for new text shapes)

use schemekit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Resize and rotation handle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleSettings {
    /// Side length of a square handle
    pub handle_size: f64,
    /// Extra slack around shapes and handles when hit-testing
    pub hit_tolerance: f64,
    /// Distance of the rotation handle beyond the top edge of the shape
    pub rotation_handle_offset: f64,
    /// Smallest width/height shown while resizing
    pub min_gesture_size: f64,
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            handle_size: constants::HANDLE_SIZE,
            hit_tolerance: constants::HIT_TOLERANCE,
            rotation_handle_offset: constants::ROTATION_HANDLE_OFFSET,
            min_gesture_size: constants::MIN_GESTURE_SIZE,
        }
    }
}

/// Line endpoint snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Enable angle and axis snapping while dragging line endpoints
    pub enabled: bool,
    /// Angular distance (degrees) to a multiple of 45° that triggers a snap
    pub angle_threshold_deg: f64,
    /// Distance to the horizontal/vertical through the fixed point that triggers a snap
    pub axis_threshold: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            angle_threshold_deg: constants::SNAP_ANGLE_THRESHOLD_DEG,
            axis_threshold: constants::AXIS_SNAP_THRESHOLD,
        }
    }
}

/// Undo/redo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of commands kept on the undo stack
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: constants::MAX_UNDO_DEPTH,
        }
    }
}

/// Clipboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// Offset applied on both axes to a pasted shape
    pub paste_offset: f64,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            paste_offset: constants::PASTE_OFFSET,
        }
    }
}

/// Defaults for newly created text shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    pub default_font_family: String,
    pub default_font_size: f64,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            default_font_family: constants::DEFAULT_FONT_FAMILY.to_string(),
            default_font_size: constants::DEFAULT_FONT_SIZE,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub handles: HandleSettings,
    pub snapping: SnapSettings,
    pub history: HistorySettings,
    pub clipboard: ClipboardSettings,
    pub text: TextSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/schemekit/editor.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join("schemekit").join("editor.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Ignoring editor config {}: {}; using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("handles.handle_size", self.handles.handle_size),
            ("handles.rotation_handle_offset", self.handles.rotation_handle_offset),
            ("handles.min_gesture_size", self.handles.min_gesture_size),
            ("snapping.angle_threshold_deg", self.snapping.angle_threshold_deg),
            ("snapping.axis_threshold", self.snapping.axis_threshold),
            ("text.default_font_size", self.text.default_font_size),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::invalid(key, "must be > 0"));
            }
        }

        if !self.handles.hit_tolerance.is_finite() || self.handles.hit_tolerance < 0.0 {
            return Err(SettingsError::invalid(
                "handles.hit_tolerance",
                "must be >= 0",
            ));
        }

        if self.snapping.angle_threshold_deg >= 22.5 {
            return Err(SettingsError::invalid(
                "snapping.angle_threshold_deg",
                "must be below 22.5 so snap zones do not overlap",
            ));
        }

        if self.history.max_depth == 0 {
            return Err(SettingsError::invalid("history.max_depth", "must be > 0"));
        }

        if !self.clipboard.paste_offset.is_finite() {
            return Err(SettingsError::invalid(
                "clipboard.paste_offset",
                "must be finite",
            ));
        }

        if self.text.default_font_family.trim().is_empty() {
            return Err(SettingsError::invalid(
                "text.default_font_family",
                "must not be empty",
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
