//! Render configuration
//!
//! Settings for turning a curve into a picture. Values come from the
//! defaults, an optional TOML file, and command-line overrides, in that
//! order.
//!
//! # Example
//!
//! ```rust
//! use picc::RenderConfig;
//!
//! let config = RenderConfig::from_toml("size = 400\npoints = 4000\n")?
//!     .with_stroke("#ff8800");
//! assert_eq!(config.size, 400);
//! assert_eq!(config.stroke, "#ff8800");
//! # Ok::<(), String>(())
//! ```

use serde::Deserialize;
use std::path::Path;

/// Samples drawn when nothing else is configured
pub const DEFAULT_POINTS: usize = 1000;

/// Canvas side length in pixels
pub const DEFAULT_SIZE: u32 = 800;

/// Configuration for rendering a curve
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Width and height of the square canvas, in pixels.
    ///
    /// The unit square `[-1, 1]²` of curve space fills the canvas.
    pub size: u32,

    /// Number of evenly spaced samples over `[0, 1)`
    pub points: usize,

    /// Stroke colour (any SVG colour value)
    pub stroke: String,

    /// Stroke width in pixels
    pub stroke_width: f64,

    /// Background colour (any SVG colour value)
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            size: DEFAULT_SIZE,
            points: DEFAULT_POINTS,
            stroke: "#ffffff".to_string(),
            stroke_width: 1.0,
            background: "#000000".to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        RenderConfig::default()
    }

    /// Parse a configuration from a TOML string; missing keys keep defaults
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: RenderConfig = toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse render config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
        Self::from_toml(&contents)
    }

    /// Check that the settings can produce a picture
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("Render size must be greater than zero".to_string());
        }
        if self.points == 0 {
            return Err("Point count must be greater than zero".to_string());
        }
        if self.stroke_width.is_nan() || self.stroke_width <= 0.0 {
            return Err(format!(
                "Stroke width must be positive, got {}",
                self.stroke_width
            ));
        }
        Ok(())
    }

    /// Set the canvas size (builder pattern)
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the number of samples
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::new();
        assert_eq!(config.size, 800);
        assert_eq!(config.points, 1000);
        assert_eq!(config.stroke, "#ffffff");
        assert_eq!(config.background, "#000000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RenderConfig::from_toml("points = 4000").unwrap();
        assert_eq!(config.points, 4000);
        assert_eq!(config.size, 800);
    }

    #[test]
    fn test_full_toml() {
        let toml = r##"
size = 256
points = 50
stroke = "red"
stroke_width = 2.5
background = "#123456"
"##;
        let config = RenderConfig::from_toml(toml).unwrap();
        assert_eq!(
            config,
            RenderConfig::new()
                .with_size(256)
                .with_points(50)
                .with_stroke("red")
                .with_stroke_width(2.5)
                .with_background("#123456")
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RenderConfig::from_toml("colour = \"blue\"").unwrap_err();
        assert!(err.starts_with("Failed to parse render config"));
    }

    #[test]
    fn test_zero_points_rejected() {
        let err = RenderConfig::from_toml("points = 0").unwrap_err();
        assert!(err.contains("Point count"));
    }

    #[test]
    fn test_negative_stroke_width_rejected() {
        assert!(RenderConfig::from_toml("stroke_width = -1.0").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "size = 100").unwrap();
        let config = RenderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.size, 100);
    }

    #[test]
    fn test_missing_file() {
        let err = RenderConfig::from_file(Path::new("/nonexistent/pic.toml")).unwrap_err();
        assert!(err.starts_with("Failed to read config file"));
    }
}
