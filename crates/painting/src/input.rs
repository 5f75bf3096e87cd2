//! Pointer input model
//!
//! One [`PointerEvent`] carries everything the host observed for a single
//! pointer since the previous event: any coalesced historic points, then the
//! current point. Coordinates are in view space; the canvas maps them into
//! surface space before they reach a brush.

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use crate::types::{DeviceKey, Sample, ToolType};

/// What the pointer did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputAction {
    /// Contact started
    Down,
    /// Contact moved
    Move,
    /// Contact ended
    Up,
    /// Contact aborted by the host (e.g. palm rejection)
    Cancel,
    /// Pointer came into hover range
    HoverEnter,
    /// Pointer moved while hovering
    HoverMove,
    /// Pointer left hover range
    HoverExit,
}

/// Buttons held during the event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buttons {
    pub primary: bool,
    pub secondary: bool,
    pub tertiary: bool,
}

impl Buttons {
    pub const NONE: Self = Self {
        primary: false,
        secondary: false,
        tertiary: false,
    };

    /// Any button other than the primary one is held
    pub fn any_non_primary(&self) -> bool {
        self.secondary || self.tertiary
    }
}

/// One raw observation as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPoint {
    /// Milliseconds on the host's monotonic clock
    pub time: i64,
    /// View-space position
    pub position: Vec2,
    pub pressure: f32,
    pub size: f32,
}

impl PointerPoint {
    pub fn new(time: i64, x: f32, y: f32, pressure: f32) -> Self {
        Self {
            time,
            position: Vec2::new(x, y),
            pressure,
            size: 0.0,
        }
    }

    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}

impl From<PointerPoint> for Sample {
    fn from(point: PointerPoint) -> Self {
        Sample::new(
            point.time,
            point.position.x,
            point.position.y,
            point.pressure,
            point.size,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub device_id: i32,
    pub tool: ToolType,
    pub action: InputAction,
    #[serde(default)]
    pub buttons: Buttons,
    /// Coalesced points older than `current`, oldest first
    #[serde(default)]
    pub history: Vec<PointerPoint>,
    pub current: PointerPoint,
}

impl PointerEvent {
    /// Event without history or buttons
    pub fn new(device_id: i32, tool: ToolType, action: InputAction, current: PointerPoint) -> Self {
        Self {
            device_id,
            tool,
            action,
            buttons: Buttons::NONE,
            history: Vec::new(),
            current,
        }
    }

    pub fn with_history(mut self, history: Vec<PointerPoint>) -> Self {
        self.history = history;
        self
    }

    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn device_key(&self) -> DeviceKey {
        DeviceKey::new(self.device_id, self.tool)
    }

    /// Every point in the event as a sample, historic first, current last
    pub fn samples(&self) -> Vec<Sample> {
        self.history
            .iter()
            .chain(std::iter::once(&self.current))
            .map(|&p| Sample::from(p))
            .collect()
    }

    /// The most recent point only
    pub fn current_sample(&self) -> Sample {
        Sample::from(self.current)
    }
}

/// Map sample positions through `transform`, leaving the other fields alone
pub fn transform_samples(samples: &mut [Sample], transform: &Affine2) {
    for sample in samples {
        *sample = sample.with_position(transform.transform_point2(sample.position()));
    }
}
