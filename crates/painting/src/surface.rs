//! CPU RGBA surfaces: the drawing layer, the preview overlay and stamp images

use crate::constants::TRANSPARENT;

/// Destination for stamps
///
/// Implemented by the drawing layer and the preview overlay. Hosts may
/// implement it to forward stamps to their own pixel buffers.
pub trait DrawingSurface {
    /// Alpha-blend `image` with its top-left corner at the given position.
    ///
    /// Returns the affected region (x, y, width, height), or None if the image
    /// lies completely outside the surface.
    fn composite_image(
        &mut self,
        image: &CpuSurface,
        top_left_x: f32,
        top_left_y: f32,
    ) -> Option<(u32, u32, u32, u32)>;

    /// Reset the whole surface to transparent
    fn clear_all(&mut self);
}

/// An RGBA CPU surface
/// Stores pixels as straight-alpha [f32; 4]
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a] as f32
    pixels: Vec<[f32; 4]>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; pixel_count],
        }
    }

    /// Clear the surface to a solid color
    pub fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Blend a straight-alpha color onto an existing pixel (source-over)
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        let dst = self.pixels[index];

        let src_alpha = color[3];
        let dst_weight = dst[3] * (1.0 - src_alpha);
        let out_alpha = src_alpha + dst_weight;
        if out_alpha <= 0.0 {
            self.pixels[index] = TRANSPARENT;
            return;
        }

        self.pixels[index] = [
            (color[0] * src_alpha + dst[0] * dst_weight) / out_alpha,
            (color[1] * src_alpha + dst[1] * dst_weight) / out_alpha,
            (color[2] * src_alpha + dst[2] * dst_weight) / out_alpha,
            out_alpha,
        ];
    }

    /// True if every pixel has zero alpha
    pub fn is_transparent(&self) -> bool {
        self.pixels.iter().all(|p| p[3] == 0.0)
    }

    /// Get raw pixel data for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl DrawingSurface for CpuSurface {
    fn composite_image(
        &mut self,
        image: &CpuSurface,
        top_left_x: f32,
        top_left_y: f32,
    ) -> Option<(u32, u32, u32, u32)> {
        // Stamps are placed unfiltered, snapped to the nearest pixel
        let left = top_left_x.round() as i64;
        let top = top_left_y.round() as i64;

        let x_min = left.clamp(0, self.width as i64);
        let y_min = top.clamp(0, self.height as i64);
        let x_max = (left + image.width as i64).clamp(0, self.width as i64);
        let y_max = (top + image.height as i64).clamp(0, self.height as i64);

        if x_min >= x_max || y_min >= y_max {
            return None;
        }

        for py in y_min..y_max {
            for px in x_min..x_max {
                let src = image.pixels[image.index((px - left) as u32, (py - top) as u32)];
                if src[3] > 0.0 {
                    self.blend_pixel(px as u32, py as u32, src);
                }
            }
        }

        Some((
            x_min as u32,
            y_min as u32,
            (x_max - x_min) as u32,
            (y_max - y_min) as u32,
        ))
    }

    fn clear_all(&mut self) {
        self.clear(TRANSPARENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface() {
        let surface = CpuSurface::new(100, 100);
        assert_eq!(surface.width, 100);
        assert_eq!(surface.height, 100);
        assert_eq!(surface.pixel_count(), 10000);
        assert!(surface.is_transparent());
    }

    #[test]
    fn test_get_set_pixel() {
        let mut surface = CpuSurface::new(10, 10);
        let color = [1.0, 0.5, 0.25, 1.0];

        surface.set_pixel(5, 5, color);
        assert_eq!(surface.get_pixel(5, 5), Some(color));

        // Out of bounds should return None
        assert_eq!(surface.get_pixel(100, 100), None);
    }

    #[test]
    fn test_blend_onto_transparent_keeps_color() {
        let mut surface = CpuSurface::new(1, 1);
        surface.blend_pixel(0, 0, [0.2, 0.4, 0.6, 0.5]);

        let result = surface.get_pixel(0, 0).unwrap();
        assert!((result[0] - 0.2).abs() < 0.001);
        assert!((result[1] - 0.4).abs() < 0.001);
        assert!((result[2] - 0.6).abs() < 0.001);
        assert!((result[3] - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_blend_pixel() {
        let mut surface = CpuSurface::new(10, 10);
        surface.clear([1.0, 1.0, 1.0, 1.0]);

        // 50% opaque red over white
        surface.blend_pixel(5, 5, [1.0, 0.0, 0.0, 0.5]);

        let result = surface.get_pixel(5, 5).unwrap();
        assert!((result[0] - 1.0).abs() < 0.01);
        assert!((result[1] - 0.5).abs() < 0.01);
        assert!((result[2] - 0.5).abs() < 0.01);
        assert!((result[3] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_composite_image_position() {
        let mut surface = CpuSurface::new(10, 10);
        let mut image = CpuSurface::new(2, 2);
        image.clear([0.0, 0.0, 1.0, 1.0]);

        let region = surface.composite_image(&image, 3.0, 4.0);
        assert_eq!(region, Some((3, 4, 2, 2)));
        assert_eq!(surface.get_pixel(3, 4), Some([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(surface.get_pixel(4, 5), Some([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(surface.get_pixel(5, 5), Some(TRANSPARENT));
    }

    #[test]
    fn test_composite_image_clipped() {
        let mut surface = CpuSurface::new(4, 4);
        let mut image = CpuSurface::new(3, 3);
        image.clear([1.0, 0.0, 0.0, 1.0]);

        // Hangs off the top-left corner
        let region = surface.composite_image(&image, -2.0, -1.0);
        assert_eq!(region, Some((0, 0, 1, 2)));
        assert_eq!(surface.get_pixel(0, 1), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(surface.get_pixel(1, 0), Some(TRANSPARENT));

        // Entirely outside
        assert_eq!(surface.composite_image(&image, 10.0, 0.0), None);
        assert_eq!(surface.composite_image(&image, -3.0, 0.0), None);
    }

    #[test]
    fn test_clear_all() {
        let mut surface = CpuSurface::new(4, 4);
        surface.clear([1.0, 1.0, 1.0, 1.0]);
        surface.clear_all();
        assert!(surface.is_transparent());
    }

    #[test]
    fn test_as_bytes() {
        let surface = CpuSurface::new(2, 2);
        // 4 pixels * 4 components * 4 bytes per f32 = 64 bytes
        assert_eq!(surface.as_bytes().len(), 64);
    }
}
