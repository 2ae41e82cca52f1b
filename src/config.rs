use std::path::Path;

use egui::{Color32, Vec2, vec2};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "STICKER_SKETCH_CONFIG";

/// Settings for a sketch session. Drawings themselves are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // partial files fall back to defaults field by field
pub struct SketchConfig {
    /// Side length of the square canvas, in pixels
    pub canvas_size: u32,
    /// Upscale factor applied when exporting
    pub export_scale: f32,
    pub export_file_name: String,
    pub background: Color32,
    pub default_color: Color32,
    pub thin_width: f32,
    pub thick_width: f32,
    /// Sticker tools available before any custom ones are added
    pub default_stickers: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256,
            export_scale: 4.0,
            export_file_name: "sketchpad.png".to_owned(),
            background: Color32::WHITE,
            default_color: Color32::BLACK,
            thin_width: 1.0,
            thick_width: 5.0,
            default_stickers: vec!["🐸".to_owned(), "🌵".to_owned(), "★".to_owned()],
        }
    }
}

impl SketchConfig {
    pub fn canvas_dimensions(&self) -> Vec2 {
        vec2(self.canvas_size as f32, self.canvas_size as f32)
    }

    /// Replaces stroke widths that are not finite and positive with the defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        for (name, width, fallback) in [
            ("thin_width", &mut self.thin_width, defaults.thin_width),
            ("thick_width", &mut self.thick_width, defaults.thick_width),
        ] {
            if !width.is_finite() || *width <= 0.0 {
                warn!("Invalid {} {}, using {}", name, width, fallback);
                *width = fallback;
            }
        }
        self
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Loads the file named by `STICKER_SKETCH_CONFIG`, falling back to defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SketchConfig =
            serde_json::from_str(r#"{ "canvas_size": 128, "default_stickers": ["x"] }"#).unwrap();
        assert_eq!(config.canvas_size, 128);
        assert_eq!(config.default_stickers, vec!["x".to_owned()]);
        assert_eq!(config.export_scale, 4.0);
        assert_eq!(config.export_file_name, "sketchpad.png");
    }

    #[test]
    fn test_sanitized_replaces_unusable_widths() {
        let config = SketchConfig {
            thin_width: 0.0,
            thick_width: f32::NAN,
            ..SketchConfig::default()
        }
        .sanitized();
        assert_eq!(config.thin_width, 1.0);
        assert_eq!(config.thick_width, 5.0);

        let custom = SketchConfig {
            thin_width: 2.0,
            thick_width: -3.0,
            ..SketchConfig::default()
        }
        .sanitized();
        assert_eq!(custom.thin_width, 2.0);
        assert_eq!(custom.thick_width, 5.0);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = SketchConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
