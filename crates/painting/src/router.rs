//! Per-device brush registry
//!
//! Every concurrent input source (each finger, each stylus tool) gets its own
//! [`Brush`], so interleaved events from different devices never join their
//! strokes. Brushes are created on first use and live as long as the router.

use std::collections::HashMap;

use inkstamp_config::{BrushConfig, ConfigError};
use tracing::debug;

use crate::brush::Brush;
use crate::types::DeviceKey;

pub struct DeviceRouter {
    brushes: HashMap<DeviceKey, Brush>,
    /// Settings for lazily created brushes
    default_config: BrushConfig,
}

impl Default for DeviceRouter {
    fn default() -> Self {
        Self::with_config(BrushConfig::default())
    }
}

impl DeviceRouter {
    /// Router whose brushes use `default_config`, rejected if no brush could
    /// be drawn with it
    pub fn new(default_config: BrushConfig) -> Result<Self, ConfigError> {
        default_config.validate()?;
        Ok(Self::with_config(default_config))
    }

    fn with_config(default_config: BrushConfig) -> Self {
        Self {
            brushes: HashMap::new(),
            default_config,
        }
    }

    /// Brush for `key`, creating one on first use
    pub fn resolve_brush(&mut self, key: DeviceKey) -> &mut Brush {
        let config = self.default_config;
        self.brushes.entry(key).or_insert_with(|| {
            debug!("DeviceRouter: new brush for {:?}", key);
            Brush::new(config)
        })
    }

    /// Brush for `key` if the device has been seen
    pub fn brush(&self, key: DeviceKey) -> Option<&Brush> {
        self.brushes.get(&key)
    }

    /// End every stroke in progress, e.g. when the surface is reallocated
    pub fn end_all_strokes(&mut self) {
        for brush in self.brushes.values_mut() {
            brush.end_stroke();
        }
    }

    pub fn default_config(&self) -> &BrushConfig {
        &self.default_config
    }

    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }
}
