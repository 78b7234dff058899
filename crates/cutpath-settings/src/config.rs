//! Configuration and settings management for Cutpath
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, stored by default in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (window, zoom, drawing resolution)
//! - Viewer settings (window, zoom, playback and camera behavior)
//! - Robot profile written into exported instruction files
//! - Recently opened files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use cutpath_core::constants::{
    DEFAULT_BEZIER_STEPS, DEFAULT_CUT_SAMPLES, DEFAULT_EDITOR_SCALE, DEFAULT_LAG_THRESHOLD_SECS,
    DEFAULT_PAN_SPEED, DEFAULT_VIEWER_MAX_SCALE, DEFAULT_VIEWER_MIN_SCALE, DEFAULT_VIEWER_SCALE,
    DEFAULT_ZOOM_RATE, MAX_RECENT_FILES, MAX_SCALE, MIN_SCALE,
};
use cutpath_core::RobotProfile;

use crate::error::{SettingsError, SettingsResult};

/// Path editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub window_width: u32,
    pub window_height: u32,
    /// Zoom in pixels per meter
    pub scale: f64,
    /// Pointer distance in pixels within which a handle is grabbed
    pub pick_radius_px: f64,
    /// Segments per drawn curve
    pub bezier_steps: usize,
    /// Blade circles per move in the cut preview
    pub cut_samples: usize,
    pub show_cut_preview: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 800,
            scale: DEFAULT_EDITOR_SCALE,
            pick_radius_px: (DEFAULT_EDITOR_SCALE / 15.0).round(),
            bezier_steps: DEFAULT_BEZIER_STEPS,
            cut_samples: DEFAULT_CUT_SAMPLES,
            show_cut_preview: true,
        }
    }
}

/// Trace viewer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub window_width: u32,
    pub window_height: u32,
    /// Initial zoom in pixels per meter
    pub scale: f64,
    /// Wall-clock delta in seconds above which a frame is dropped
    pub lag_threshold_secs: f64,
    pub start_paused: bool,
    /// Viewport widths per second
    pub pan_speed: f64,
    /// Zoom factor per second
    pub zoom_rate: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 960,
            scale: DEFAULT_VIEWER_SCALE,
            lag_threshold_secs: DEFAULT_LAG_THRESHOLD_SECS,
            start_paused: true,
            pan_speed: DEFAULT_PAN_SPEED,
            zoom_rate: DEFAULT_ZOOM_RATE,
            min_scale: DEFAULT_VIEWER_MIN_SCALE,
            max_scale: DEFAULT_VIEWER_MAX_SCALE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Where a loaded [`Config`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read and validated from the file.
    File,
    /// No file yet; defaults.
    Missing,
    /// The file exists but could not be used; defaults stand in for it.
    Invalid,
}

impl ConfigSource {
    /// Whether saving over the file keeps the user's settings. An invalid
    /// file is left alone so it can be repaired by hand.
    pub fn can_save(self) -> bool {
        !matches!(self, ConfigSource::Invalid)
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSettings,
    pub viewer: ViewerSettings,
    pub robot: RobotProfile,
    /// Most recent first
    pub recent_files: Vec<PathBuf>,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/cutpath/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("cutpath").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::SaveError(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load a config, falling back to defaults when the file is missing or
    /// invalid. The returned source tells whether the file may be
    /// overwritten.
    pub fn load_or_default(path: &Path) -> (Self, ConfigSource) {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return (Self::default(), ConfigSource::Missing);
        }
        match Self::load_from_file(path) {
            Ok(config) => (config, ConfigSource::File),
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                (Self::default(), ConfigSource::Invalid)
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let editor = &self.editor;
        if editor.window_width == 0 || editor.window_height == 0 {
            return Err(SettingsError::invalid("editor.window", "dimensions must be > 0"));
        }
        if !(MIN_SCALE..=MAX_SCALE).contains(&editor.scale) {
            return Err(SettingsError::invalid(
                "editor.scale",
                &format!("must be within {}..={}", MIN_SCALE, MAX_SCALE),
            ));
        }
        if !(editor.pick_radius_px > 0.0) {
            return Err(SettingsError::invalid("editor.pick_radius_px", "must be > 0"));
        }
        if editor.bezier_steps == 0 {
            return Err(SettingsError::invalid("editor.bezier_steps", "must be >= 1"));
        }
        if editor.cut_samples == 0 {
            return Err(SettingsError::invalid("editor.cut_samples", "must be >= 1"));
        }

        let viewer = &self.viewer;
        if viewer.window_width == 0 || viewer.window_height == 0 {
            return Err(SettingsError::invalid("viewer.window", "dimensions must be > 0"));
        }

        if !(viewer.lag_threshold_secs > 0.0) {
            return Err(SettingsError::invalid("viewer.lag_threshold_secs", "must be > 0"));
        }
        if !(viewer.min_scale >= MIN_SCALE
            && viewer.min_scale < viewer.max_scale
            && viewer.max_scale <= MAX_SCALE)
        {
            return Err(SettingsError::invalid(
                "viewer.min_scale",
                &format!(
                    "limits must satisfy {} <= min_scale < max_scale <= {}",
                    MIN_SCALE, MAX_SCALE
                ),
            ));
        }
        if !(viewer.min_scale..=viewer.max_scale).contains(&viewer.scale) {
            return Err(SettingsError::invalid(
                "viewer.scale",
                "must be within viewer.min_scale..=viewer.max_scale",
            ));
        }
        if !(viewer.zoom_rate > 0.0) {
            return Err(SettingsError::invalid("viewer.zoom_rate", "must be > 0"));
        }

        let robot = &self.robot;
        for (key, value) in [
            ("robot.wheel_distance", robot.wheel_distance),
            ("robot.wheel_radius", robot.wheel_radius),
            ("robot.max_motor_speed", robot.max_motor_speed),
            ("robot.blade_radius", robot.blade_radius),
        ] {
            if !(value > 0.0) {
                return Err(SettingsError::invalid(key, "must be > 0"));
            }
        }
        if robot.delta_time.is_zero() {
            return Err(SettingsError::invalid("robot.delta_time", "must be > 0"));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
