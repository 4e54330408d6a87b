//! Field configuration: scene constants, TOML loading, validation

use crate::error::{FieldError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An RGBA color with components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with the alpha multiplied by `factor`
    pub fn with_alpha_scaled(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
    }

    pub fn as_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// Scene accent: sky blue, rgb(14, 165, 233)
const ACCENT_R: f32 = 14.0 / 255.0;
const ACCENT_G: f32 = 165.0 / 255.0;
const ACCENT_B: f32 = 233.0 / 255.0;

/// Tuning parameters for the particle field.
///
/// All fields have defaults matching the built-in scene, so a config file
/// only needs to name what it overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Particle count on viewports at least `mobile_breakpoint` wide
    pub desktop_count: usize,
    /// Particle count on narrower viewports
    pub mobile_count: usize,
    /// Viewport width (logical px) separating the two counts
    pub mobile_breakpoint: f32,
    /// Per-axis speed magnitude bound; components are drawn from [-max, max)
    pub max_speed: f32,
    /// Dot radius range [min, max)
    pub radius_min: f32,
    pub radius_max: f32,
    /// Distance in surface units under which two dots are linked
    pub link_distance: f32,
    /// Accepted-frame rate cap in Hz
    pub max_fps: f32,
    /// Dot fill color
    pub dot_color: Color,
    /// Link stroke color (alpha is further scaled by link weight)
    pub link_color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            desktop_count: 60,
            mobile_count: 30,
            mobile_breakpoint: 768.0,
            max_speed: 0.2,
            radius_min: 1.0,
            radius_max: 3.0,
            link_distance: 100.0,
            max_fps: 60.0,
            dot_color: Color::new(ACCENT_R, ACCENT_G, ACCENT_B, 0.3),
            link_color: Color::new(ACCENT_R, ACCENT_G, ACCENT_B, 0.1),
        }
    }
}

impl FieldConfig {
    /// Load a config from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// The particle count the policy picks for a given viewport width
    pub fn count_for_width(&self, viewport_width: f32) -> usize {
        if viewport_width >= self.mobile_breakpoint {
            self.desktop_count
        } else {
            self.mobile_count
        }
    }

    /// Reject configs that would break simulation invariants
    pub fn validate(&self) -> Result<()> {
        if self.desktop_count == 0 || self.mobile_count == 0 {
            return Err(FieldError::ConfigError(
                "particle counts must be at least 1".into(),
            ));
        }
        if !(self.max_speed > 0.0) {
            return Err(FieldError::ConfigError(format!(
                "max_speed must be positive, got {}",
                self.max_speed
            )));
        }
        if !(self.radius_min > 0.0) || self.radius_max <= self.radius_min {
            return Err(FieldError::ConfigError(format!(
                "radius range [{}, {}) must be positive and non-empty",
                self.radius_min, self.radius_max
            )));
        }
        if !(self.link_distance > 0.0) {
            return Err(FieldError::ConfigError(format!(
                "link_distance must be positive, got {}",
                self.link_distance
            )));
        }
        if !(self.max_fps >= 1.0 && self.max_fps <= 1000.0) {
            return Err(FieldError::ValueOutOfRange {
                field: "max_fps".into(),
                min: 1.0,
                max: 1000.0,
                value: self.max_fps as f64,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.desktop_count, 60);
        assert_eq!(config.mobile_count, 30);
        assert!((config.link_distance - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn count_policy_uses_breakpoint() {
        let config = FieldConfig::default();
        assert_eq!(config.count_for_width(1024.0), 60);
        assert_eq!(config.count_for_width(500.0), 30);
        // Exactly at the breakpoint counts as desktop
        assert_eq!(config.count_for_width(768.0), 60);
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let toml_str = r#"
desktop_count = 80
link_distance = 120.0
dot_color = { r = 1.0, g = 0.5, b = 0.0, a = 0.4 }
"#;
        let config: FieldConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.desktop_count, 80);
        assert!((config.link_distance - 120.0).abs() < f32::EPSILON);
        assert!((config.dot_color.g - 0.5).abs() < f32::EPSILON);
        // Untouched fields keep their defaults
        assert_eq!(config.mobile_count, 30);
        assert!((config.max_speed - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<FieldConfig, _> = toml::from_str("particle_cont = 60");
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        let mut config = FieldConfig::default();
        config.radius_max = 0.5; // below radius_min
        assert!(config.validate().is_err());

        let mut config = FieldConfig::default();
        config.max_fps = 0.0;
        assert!(config.validate().is_err());

        let mut config = FieldConfig::default();
        config.mobile_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn alpha_scaling() {
        let c = Color::new(0.2, 0.4, 0.6, 0.5).with_alpha_scaled(0.5);
        assert!((c.a - 0.25).abs() < f32::EPSILON);
        assert!((c.r - 0.2).abs() < f32::EPSILON);
    }
}
