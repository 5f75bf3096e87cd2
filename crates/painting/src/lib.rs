//! inkstamp painting core - pressure-sensitive stamp brushes
//!
//! This crate turns pointer samples into freehand ink strokes:
//! - [`types::Sample`] - One pointer observation (time, position, pressure, size)
//! - [`input`] - Pointer events with historic and current points
//! - [`resample`] - Spacing-driven stamp positions along a segment
//! - [`stamp`] - Soft round brush tip images (fill and outline)
//! - [`brush`] - Continuous strokes built from the two above
//! - [`router`] - One brush per input device and tool
//! - [`surface`] / [`tiles`] - CPU RGBA surfaces with dirty tracking
//! - [`canvas`] - Event handling for a host view

pub mod brush;
pub mod canvas;
pub mod constants;
pub mod input;
pub mod resample;
pub mod router;
pub mod stamp;
pub mod surface;
pub mod tiles;
pub mod types;
pub mod validation;

pub use brush::*;
pub use canvas::*;
pub use constants::*;
pub use input::*;
pub use resample::*;
pub use router::*;
pub use stamp::*;
pub use surface::*;
pub use tiles::*;
pub use types::*;
pub use validation::*;

pub use inkstamp_config::{BrushConfig, CanvasConfig, ConfigError};
