//! Shared configuration for inkstamp
//!
//! This crate provides the single source of truth for brush defaults and
//! drawing-surface geometry, shared by every host that embeds the painting
//! core.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default stamp spacing, in percent of the stamp diameter
pub const DEFAULT_SPACING: u32 = 10;

/// Default maximum stamp diameter in pixels
pub const DEFAULT_MAX_SIZE: u32 = 20;

/// Default maximum hardness, in percent
pub const DEFAULT_MAX_HARDNESS: u32 = 20;

/// Default share of the host view covered by the drawing surface
pub const DEFAULT_VIEW_FRACTION: f32 = 0.85;

/// Environment variable overriding [`BrushConfig::spacing`]
pub const ENV_SPACING: &str = "INKSTAMP_BRUSH_SPACING";

/// Environment variable overriding [`BrushConfig::max_size`]
pub const ENV_MAX_SIZE: &str = "INKSTAMP_BRUSH_SIZE";

/// Environment variable overriding [`BrushConfig::max_hardness`]
pub const ENV_MAX_HARDNESS: &str = "INKSTAMP_BRUSH_HARDNESS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be an unsigned integer, got {value:?}")]
    NotAnInteger { key: &'static str, value: String },
    #[error("Brush size must be at least 1 pixel")]
    ZeroSize,
    #[error("View fraction must be in (0, 1], got {0}")]
    InvalidViewFraction(f32),
}

/// Brush settings fixed at brush construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Percent of the stamp diameter to advance before re-stamping
    pub spacing: u32,
    /// Maximum stamp diameter in pixels (side of the stamp image)
    pub max_size: u32,
    /// Maximum hardness in percent
    pub max_hardness: u32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            max_size: DEFAULT_MAX_SIZE,
            max_hardness: DEFAULT_MAX_HARDNESS,
        }
    }
}

impl BrushConfig {
    /// Create a brush config from explicit settings
    pub fn new(spacing: u32, max_size: u32, max_hardness: u32) -> Self {
        Self {
            spacing,
            max_size,
            max_hardness,
        }
    }

    /// Read overrides from the process environment
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            spacing: parse_var(&lookup, ENV_SPACING, defaults.spacing)?,
            max_size: parse_var(&lookup, ENV_MAX_SIZE, defaults.max_size)?,
            max_hardness: parse_var(&lookup, ENV_MAX_HARDNESS, defaults.max_hardness)?,
        };
        config.validate()?;
        debug!("BrushConfig loaded: {:?}", config);
        Ok(config)
    }

    /// Check that the settings describe a drawable brush
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        Ok(())
    }

    /// Maximum stamp radius in pixels
    pub fn max_radius(&self) -> f32 {
        self.max_size as f32 / 2.0
    }

    /// Maximum hardness as a fraction
    pub fn max_hardness_fraction(&self) -> f32 {
        self.max_hardness as f32 / 100.0
    }

    /// Spacing as a fraction of the stamp diameter
    pub fn spacing_fraction(&self) -> f32 {
        self.spacing as f32 / 100.0
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u32,
) -> Result<u32, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotAnInteger { key, value }),
    }
}

/// Drawing-surface geometry relative to the host view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Share of each view axis covered by the drawing surface
    pub view_fraction: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            view_fraction: DEFAULT_VIEW_FRACTION,
        }
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.view_fraction > 0.0 && self.view_fraction <= 1.0) {
            return Err(ConfigError::InvalidViewFraction(self.view_fraction));
        }
        Ok(())
    }

    /// Surface dimensions for a view of the given size, at least 1x1
    pub fn surface_size(&self, view_width: u32, view_height: u32) -> (u32, u32) {
        let w = (self.view_fraction * view_width as f32).round() as u32;
        let h = (self.view_fraction * view_height as f32).round() as u32;
        (w.max(1), h.max(1))
    }

    /// Offset of the surface's top-left corner so it sits centered in the view
    pub fn surface_offset(&self, view_width: u32, view_height: u32) -> (f32, f32) {
        let (w, h) = self.surface_size(view_width, view_height);
        (
            ((view_width as i64 - w as i64) / 2) as f32,
            ((view_height as i64 - h as i64) / 2) as f32,
        )
    }
}
