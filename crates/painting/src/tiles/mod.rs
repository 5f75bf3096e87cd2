//! Drawing layer with per-tile dirty tracking

mod dirty_tracking;

use std::collections::HashSet;

use crate::constants::DEFAULT_TILE_SIZE;
use crate::surface::{CpuSurface, DrawingSurface};

/// Tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

/// A surface that remembers which tiles stamps have touched since the host
/// last asked, so only those need re-uploading.
pub struct TiledSurface {
    pub(crate) surface: CpuSurface,
    pub(crate) tile_size: u32,
    tiles_x: u32,
    tiles_y: u32,
    pub(crate) dirty_tiles: HashSet<TileCoord>,
}

impl TiledSurface {
    /// Create a new tiled surface with the given dimensions and tile size
    pub fn new(width: u32, height: u32, tile_size: u32) -> Self {
        let tile_size = tile_size.max(1);
        Self {
            surface: CpuSurface::new(width, height),
            tile_size,
            tiles_x: width.div_ceil(tile_size),
            tiles_y: height.div_ceil(tile_size),
            dirty_tiles: HashSet::new(),
        }
    }

    pub fn with_default_tile_size(width: u32, height: u32) -> Self {
        Self::new(width, height, DEFAULT_TILE_SIZE)
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    #[inline]
    pub fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    #[inline]
    pub fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    /// Get the underlying surface for direct pixel access
    #[inline]
    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    /// Pixel bounds (x, y, width, height) of a tile, clipped to the surface
    pub fn tile_bounds(&self, coord: TileCoord) -> (u32, u32, u32, u32) {
        let x = coord.x * self.tile_size;
        let y = coord.y * self.tile_size;
        let w = self.tile_size.min(self.surface.width.saturating_sub(x));
        let h = self.tile_size.min(self.surface.height.saturating_sub(y));
        (x, y, w, h)
    }
}

impl DrawingSurface for TiledSurface {
    fn composite_image(
        &mut self,
        image: &CpuSurface,
        top_left_x: f32,
        top_left_y: f32,
    ) -> Option<(u32, u32, u32, u32)> {
        let region = self.surface.composite_image(image, top_left_x, top_left_y);
        if let Some((x, y, w, h)) = region {
            self.mark_region_dirty(x, y, w, h);
        }
        region
    }

    fn clear_all(&mut self) {
        self.surface.clear_all();
        self.mark_all_dirty();
    }
}
