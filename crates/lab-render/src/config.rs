//! Window and camera settings, loaded from TOML or JSON.
//!
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! [window]
//! width = 1280
//! height = 720
//! title = "Lab"
//!
//! [camera]
//! fov = 45.0
//! far = 250.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::{
    DEFAULT_FIELD_OF_VIEW, DEFAULT_LOOK_SENSITIVITY, DEFAULT_MOVE_SPEED, MAX_FIELD_OF_VIEW,
    MIN_FIELD_OF_VIEW,
};

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Parsed values that cannot drive a window or projection
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    pub fullscreen: bool,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            refresh_rate: 60,
            fullscreen: false,
            title: "ECG".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov: f64,
    pub near: f64,
    pub far: f64,
    pub move_speed: f64,
    pub look_sensitivity: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FIELD_OF_VIEW,
            near: 0.1,
            far: 100.0,
            move_speed: DEFAULT_MOVE_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
}

impl Settings {
    /// Load settings from a `.toml` or `.json` file and validate them.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        // Reject the format before touching the filesystem.
        if !matches!(extension, "toml" | "json") {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let settings = match extension {
            "toml" => Self::from_toml_str(&contents)?,
            _ => Self::from_json_str(&contents)?,
        };
        log::info!(
            "loaded settings from {}: {}x{} window, fov {}",
            path.display(),
            settings.window.width,
            settings.window.height,
            settings.camera.fov
        );
        Ok(settings)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let settings: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let settings: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (window, camera) = (&self.window, &self.camera);
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} must be non-zero",
                window.width, window.height
            )));
        }
        let planes_ok = camera.near.is_finite()
            && camera.far.is_finite()
            && 0.0 < camera.near
            && camera.near < camera.far;
        if !planes_ok {
            return Err(ConfigError::Invalid(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                camera.near, camera.far
            )));
        }
        if !(MIN_FIELD_OF_VIEW..=MAX_FIELD_OF_VIEW).contains(&camera.fov) {
            return Err(ConfigError::Invalid(format!(
                "fov must lie in [{MIN_FIELD_OF_VIEW}, {MAX_FIELD_OF_VIEW}], got {}",
                camera.fov
            )));
        }
        if !(camera.move_speed.is_finite() && camera.look_sensitivity.is_finite()) {
            return Err(ConfigError::Invalid(
                "move_speed and look_sensitivity must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Width over height of the configured window.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.window.width) / f64::from(self.window.height)
    }
}
