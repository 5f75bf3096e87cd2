//! Surface lifecycle and change tracking for the canvas

use glam::{Affine2, Vec2};
use tracing::info;

use crate::surface::CpuSurface;
use crate::tiles::{TileCoord, TiledSurface};

use super::InkCanvas;

impl InkCanvas {
    /// Reallocate the surfaces for a new view size
    ///
    /// Drawn content is discarded and every stroke in progress is ended;
    /// brushes and their colors are kept.
    pub fn resize(&mut self, view_width: u32, view_height: u32) {
        self.allocate(view_width, view_height);
    }

    /// Start over with an empty drawing at the current view size
    pub fn reset(&mut self) {
        let (view_width, view_height) = self.view_size;
        self.allocate(view_width, view_height);
    }

    pub(crate) fn allocate(&mut self, view_width: u32, view_height: u32) {
        let (width, height) = self.config.surface_size(view_width, view_height);
        let (offset_x, offset_y) = self.config.surface_offset(view_width, view_height);

        self.layer = TiledSurface::with_default_tile_size(width, height);
        self.layer.mark_all_dirty();
        self.overlay = CpuSurface::new(width, height);
        self.overlay_dirty = true;
        self.view_size = (view_width, view_height);
        self.grab = None;
        self.set_surface_to_view(Affine2::from_translation(Vec2::new(offset_x, offset_y)));
        self.router.end_all_strokes();

        info!(
            "InkCanvas: {}x{} surface for {}x{} view at ({}, {})",
            width, height, view_width, view_height, offset_x, offset_y
        );
    }

    pub(crate) fn set_surface_to_view(&mut self, transform: Affine2) {
        self.surface_to_view = transform;
        self.view_to_surface = transform.inverse();
    }

    /// Take the layer tiles changed since the last call
    pub fn take_dirty_tiles(&mut self) -> Vec<TileCoord> {
        self.layer.take_dirty_tiles()
    }

    pub fn has_dirty_tiles(&self) -> bool {
        self.layer.has_dirty_tiles()
    }

    /// Pixel bounds (x, y, width, height) of a layer tile
    pub fn tile_bounds(&self, coord: TileCoord) -> (u32, u32, u32, u32) {
        self.layer.tile_bounds(coord)
    }

    /// Whether the overlay changed since the last call, clearing the flag
    pub fn take_overlay_dirty(&mut self) -> bool {
        std::mem::take(&mut self.overlay_dirty)
    }

    /// Raw layer pixels for upload or export
    pub fn layer_as_bytes(&self) -> &[u8] {
        self.layer.surface().as_bytes()
    }
}
