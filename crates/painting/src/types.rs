use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tool that produced a pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum ToolType {
    #[default]
    Unknown = 0,
    Finger = 1,
    Stylus = 2,
    Mouse = 3,
    Eraser = 4,
}

/// Identifies one concurrent input source
///
/// A physical device can report several tools (e.g. pen tip and eraser), so
/// the tool type is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceKey {
    pub device_id: i32,
    pub tool: ToolType,
}

impl DeviceKey {
    pub fn new(device_id: i32, tool: ToolType) -> Self {
        Self { device_id, tool }
    }
}

/// Snapshot of one pointer observation
///
/// Samples are built from the current or historic values of a pointer event,
/// or interpolated between two other samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Event timestamp in milliseconds (monotonic clock)
    pub time: i64,
    /// X in drawing-surface coordinates
    pub x: f32,
    /// Y in drawing-surface coordinates
    pub y: f32,
    /// Nominally 0.0-1.0, not clamped at capture
    pub pressure: f32,
    /// Device-reported contact size
    pub size: f32,
}

impl Sample {
    pub fn new(time: i64, x: f32, y: f32, pressure: f32, size: f32) -> Self {
        Self {
            time,
            x,
            y,
            pressure,
            size,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Copy of this sample moved to another position
    #[inline]
    pub fn with_position(self, position: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }

    /// Linear interpolation between `a` (frac = 0) and `b` (frac = 1)
    pub fn interpolate(a: &Sample, b: &Sample, frac: f32) -> Sample {
        let time = (b.time - a.time) as f64 * frac as f64 + a.time as f64;
        Sample {
            time: time as i64,
            x: lerp(a.x, b.x, frac),
            y: lerp(a.y, b.y, frac),
            pressure: lerp(a.pressure, b.pressure, frac),
            size: lerp(a.size, b.size, frac),
        }
    }

    /// Euclidean distance between the positions of two samples
    pub fn distance(a: &Sample, b: &Sample) -> f32 {
        a.position().distance(b.position())
    }
}

#[inline]
fn lerp(a: f32, b: f32, frac: f32) -> f32 {
    (b - a) * frac + a
}
