//! Dirty tile bookkeeping

use tracing::trace;

use super::{TileCoord, TiledSurface};

impl TiledSurface {
    /// Mark a rectangular region as dirty
    pub fn mark_region_dirty(&mut self, x: u32, y: u32, w: u32, h: u32) {
        if w == 0 || h == 0 || x >= self.surface.width || y >= self.surface.height {
            return;
        }

        let x_end = x.saturating_add(w).min(self.surface.width);
        let y_end = y.saturating_add(h).min(self.surface.height);

        let first = TileCoord {
            x: x / self.tile_size,
            y: y / self.tile_size,
        };
        let last = TileCoord {
            x: (x_end - 1) / self.tile_size,
            y: (y_end - 1) / self.tile_size,
        };

        for ty in first.y..=last.y {
            for tx in first.x..=last.x {
                self.dirty_tiles.insert(TileCoord { x: tx, y: ty });
            }
        }

        trace!(
            "mark_region_dirty: ({}, {}) {}x{} -> tiles {:?}..={:?}",
            x, y, w, h, first, last
        );
    }

    /// Mark every tile dirty, e.g. after a clear
    pub fn mark_all_dirty(&mut self) {
        for ty in 0..self.tiles_y() {
            for tx in 0..self.tiles_x() {
                self.dirty_tiles.insert(TileCoord { x: tx, y: ty });
            }
        }
    }

    /// Drain the dirty set, in row-major order
    pub fn take_dirty_tiles(&mut self) -> Vec<TileCoord> {
        let mut tiles: Vec<TileCoord> = self.dirty_tiles.drain().collect();
        tiles.sort_by_key(|t| (t.y, t.x));
        tiles
    }

    #[inline]
    pub fn has_dirty_tiles(&self) -> bool {
        !self.dirty_tiles.is_empty()
    }

    #[inline]
    pub fn dirty_tile_count(&self) -> usize {
        self.dirty_tiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_region_dirty_spans_tiles() {
        let mut surface = TiledSurface::new(256, 256, 128);
        surface.mark_region_dirty(100, 100, 56, 56);
        assert_eq!(surface.dirty_tile_count(), 4);

        let tiles = surface.take_dirty_tiles();
        assert_eq!(tiles.first(), Some(&TileCoord { x: 0, y: 0 }));
        assert_eq!(tiles.last(), Some(&TileCoord { x: 1, y: 1 }));
        assert!(!surface.has_dirty_tiles());
    }

    #[test]
    fn test_mark_region_dirty_ignores_empty_and_outside() {
        let mut surface = TiledSurface::new(256, 256, 128);
        surface.mark_region_dirty(10, 10, 0, 5);
        surface.mark_region_dirty(300, 10, 5, 5);
        assert!(!surface.has_dirty_tiles());
    }
}
