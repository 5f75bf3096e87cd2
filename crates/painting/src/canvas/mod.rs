//! Drawing canvas
//!
//! This module wires the pieces together for a host view:
//! - Pointer events come in via `handle_event`
//! - The device router picks the brush for the event's device and tool
//! - Samples are mapped from view space into surface space
//! - Brushes stamp committed strokes onto the layer and the hover cursor onto
//!   the overlay
//! - Dirty tiles are tracked so the host only re-uploads what changed
//!
//! The canvas does not own a window or schedule redraws; the host composites
//! `layer` and `overlay` through `surface_to_view` whenever it repaints.

mod events;
mod surface_ops;

use glam::{Affine2, Vec2};
use inkstamp_config::{BrushConfig, CanvasConfig, ConfigError};

use crate::router::DeviceRouter;
use crate::surface::CpuSurface;
use crate::tiles::TiledSurface;
use crate::types::DeviceKey;

pub struct InkCanvas {
    /// Committed strokes
    pub(crate) layer: TiledSurface,
    /// Hover/contact cursor, redrawn on every event and never accumulated
    pub(crate) overlay: CpuSurface,
    pub(crate) overlay_dirty: bool,
    pub(crate) router: DeviceRouter,
    pub(crate) config: CanvasConfig,
    /// Host view size the surfaces were allocated for
    pub(crate) view_size: (u32, u32),
    pub(crate) surface_to_view: Affine2,
    pub(crate) view_to_surface: Affine2,
    /// Last view position of an in-progress viewport drag
    pub(crate) grab: Option<Vec2>,
    /// Device of the most recent event
    pub(crate) active_device: Option<DeviceKey>,
}

impl InkCanvas {
    /// Create a canvas for a view of the given size
    ///
    /// Fails if either config could not produce a drawable surface or brush.
    pub fn new(
        view_width: u32,
        view_height: u32,
        config: CanvasConfig,
        brush: BrushConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut canvas = Self {
            layer: TiledSurface::with_default_tile_size(0, 0),
            overlay: CpuSurface::new(0, 0),
            overlay_dirty: false,
            router: DeviceRouter::new(brush)?,
            config,
            view_size: (view_width, view_height),
            surface_to_view: Affine2::IDENTITY,
            view_to_surface: Affine2::IDENTITY,
            grab: None,
            active_device: None,
        };
        canvas.allocate(view_width, view_height);
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.layer.surface().width
    }

    pub fn height(&self) -> u32 {
        self.layer.surface().height
    }

    /// Committed strokes
    pub fn layer(&self) -> &CpuSurface {
        self.layer.surface()
    }

    /// Cursor preview
    pub fn overlay(&self) -> &CpuSurface {
        &self.overlay
    }

    /// Transform for drawing the surfaces into the view
    pub fn surface_to_view(&self) -> Affine2 {
        self.surface_to_view
    }

    /// Transform applied to incoming pointer positions
    pub fn view_to_surface(&self) -> Affine2 {
        self.view_to_surface
    }

    pub fn router(&self) -> &DeviceRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut DeviceRouter {
        &mut self.router
    }

    /// Device of the most recent event, if any
    pub fn active_device(&self) -> Option<DeviceKey> {
        self.active_device
    }

    /// Set the color of one device's brush
    pub fn set_color(&mut self, key: DeviceKey, color: [f32; 4]) {
        self.router.resolve_brush(key).set_color(color);
    }

    /// Set the color of the brush that handled the most recent event
    ///
    /// Returns false if no event has been seen yet.
    pub fn set_active_color(&mut self, color: [f32; 4]) -> bool {
        match self.active_device {
            Some(key) => {
                self.set_color(key, color);
                true
            }
            None => false,
        }
    }
}
