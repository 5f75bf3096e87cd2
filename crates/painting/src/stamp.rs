//! Brush tip images
//!
//! A stamp is a pair of square images, `max_size` pixels on a side:
//! - the fill, a soft disc whose opaque core fades linearly to transparent
//! - the outline, a thin ring at the maximum radius used as a hover cursor
//!
//! [`render_stamp`] builds a fresh pair. [`StampRenderer`] keeps one pair and
//! redraws it in place, which is what the brush does once per stamp.

use inkstamp_config::BrushConfig;
use tracing::trace;

use crate::constants::TRANSPARENT;
use crate::surface::CpuSurface;
use crate::validation::{StampError, validate_stamp_params};

/// Fill and outline images for one brush setting
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    pub fill: CpuSurface,
    pub outline: CpuSurface,
    /// Fill radius in pixels, rounded up. Zero means the fill is empty.
    pub radius: u32,
}

impl Stamp {
    fn blank(size: u32) -> Self {
        Self {
            fill: CpuSurface::new(size, size),
            outline: CpuSurface::new(size, size),
            radius: 0,
        }
    }

    /// Side length of both images
    #[inline]
    pub fn size(&self) -> u32 {
        self.fill.width
    }

    fn redraw(&mut self, config: &BrushConfig, color: [f32; 4], radius: f32, hardness: f32) {
        let size = self.size();
        let center = size as f32 / 2.0;
        let radius_px = radius * config.max_radius();
        let hardness = hardness * config.max_hardness_fraction();

        self.radius = radius_px.ceil() as u32;
        self.fill.clear(TRANSPARENT);
        self.outline.clear(TRANSPARENT);

        // Ring sits half a pixel inside the edge so it is never clipped
        let ring = (center - 0.5).max(0.0);

        for py in 0..size {
            for px in 0..size {
                let dx = px as f32 + 0.5 - center;
                let dy = py as f32 + 0.5 - center;
                let d = (dx * dx + dy * dy).sqrt();

                if self.radius > 0 {
                    let falloff = radial_falloff(d / radius_px, hardness);
                    if falloff > 0.0 {
                        self.fill
                            .set_pixel(px, py, [color[0], color[1], color[2], color[3] * falloff]);
                    }
                }

                let coverage = (1.0 - (d - ring).abs()).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.outline
                        .set_pixel(px, py, [color[0], color[1], color[2], color[3] * coverage]);
                }
            }
        }
    }
}

/// Opacity of the fill at normalized distance `t` from the center
///
/// Fully opaque up to `hardness`, then linear down to 0 at `t = 1`, and
/// nothing outside the disc.
#[inline]
pub fn radial_falloff(t: f32, hardness: f32) -> f32 {
    if t > 1.0 {
        0.0
    } else if t <= hardness {
        1.0
    } else {
        (1.0 - t) / (1.0 - hardness)
    }
}

/// Render a new stamp for the given color, radius fraction and hardness fraction
pub fn render_stamp(
    config: &BrushConfig,
    color: [f32; 4],
    radius: f32,
    hardness: f32,
) -> Result<Stamp, StampError> {
    validate_stamp_params(radius, hardness)?;
    let mut stamp = Stamp::blank(config.max_size);
    stamp.redraw(config, color, radius, hardness);
    Ok(stamp)
}

/// Owns the stamp images of one brush and regenerates them on demand
pub struct StampRenderer {
    config: BrushConfig,
    stamp: Stamp,
}

impl StampRenderer {
    pub fn new(config: BrushConfig) -> Self {
        Self {
            stamp: Stamp::blank(config.max_size),
            config,
        }
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    /// Images from the most recent successful render
    pub fn stamp(&self) -> &Stamp {
        &self.stamp
    }

    /// Radius in pixels of the most recent render
    pub fn current_radius(&self) -> u32 {
        self.stamp.radius
    }

    /// Redraw both images in place
    ///
    /// On error the previous images are kept untouched.
    pub fn render(
        &mut self,
        color: [f32; 4],
        radius: f32,
        hardness: f32,
    ) -> Result<&Stamp, StampError> {
        validate_stamp_params(radius, hardness)?;
        self.stamp.redraw(&self.config, color, radius, hardness);
        trace!(
            "StampRenderer::render: radius={:.3} -> {}px, hardness={:.3}",
            radius, self.stamp.radius, hardness
        );
        Ok(&self.stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    fn alpha(surface: &CpuSurface, x: u32, y: u32) -> f32 {
        surface.get_pixel(x, y).unwrap()[3]
    }

    #[test]
    fn test_radial_falloff() {
        assert_eq!(radial_falloff(0.0, 0.0), 1.0);
        assert_eq!(radial_falloff(0.5, 0.0), 0.5);
        assert_eq!(radial_falloff(1.0, 0.0), 0.0);
        assert_eq!(radial_falloff(1.01, 0.0), 0.0);

        // Opaque core up to the hardness stop
        assert_eq!(radial_falloff(0.2, 0.5), 1.0);
        assert_eq!(radial_falloff(0.75, 0.5), 0.5);

        // Hard disc has no fade
        assert_eq!(radial_falloff(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_zero_radius_leaves_fill_empty() {
        let config = BrushConfig::default();
        for hardness in [0.0, 0.5, 1.0] {
            let stamp = render_stamp(&config, RED, 0.0, hardness).unwrap();
            assert_eq!(stamp.radius, 0);
            assert!(stamp.fill.is_transparent());
            assert!(!stamp.outline.is_transparent());
        }
    }

    #[test]
    fn test_full_radius_fill() {
        let config = BrushConfig::new(10, 20, 100);
        let stamp = render_stamp(&config, RED, 1.0, 0.5).unwrap();
        assert_eq!(stamp.size(), 20);
        assert_eq!(stamp.radius, 10);

        // Center is inside the opaque core, with the brush color
        assert_eq!(stamp.fill.get_pixel(10, 10), Some(RED));
        // Corners lie outside the disc
        assert_eq!(alpha(&stamp.fill, 0, 0), 0.0);
        // Fades towards the edge
        let near_edge = alpha(&stamp.fill, 18, 10);
        assert!(near_edge > 0.0 && near_edge < 1.0);
        // Transparent pixels keep the brush color
        let edge = stamp.fill.get_pixel(18, 10).unwrap();
        assert_eq!(&edge[..3], &RED[..3]);
    }

    #[test]
    fn test_hardness_scales_core() {
        let soft = render_stamp(&BrushConfig::new(10, 40, 100), RED, 1.0, 0.0).unwrap();
        let hard = render_stamp(&BrushConfig::new(10, 40, 100), RED, 1.0, 1.0).unwrap();

        // 10px from the center of a 20px radius disc
        assert!(alpha(&soft.fill, 30, 20) < 0.6);
        assert_eq!(alpha(&hard.fill, 30, 20), 1.0);
    }

    #[test]
    fn test_outline_is_thin_ring() {
        let stamp = render_stamp(&BrushConfig::default(), RED, 0.3, 1.0).unwrap();

        // Independent of the fill radius: on the ring at the image edge
        assert!(alpha(&stamp.outline, 0, 10) > 0.5);
        assert_eq!(alpha(&stamp.outline, 10, 10), 0.0);
        assert_eq!(alpha(&stamp.outline, 5, 10), 0.0);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let config = BrushConfig::default();
        assert_eq!(
            render_stamp(&config, RED, 1.2, 1.0).unwrap_err(),
            StampError::InvalidRadius(1.2)
        );
        assert_eq!(
            render_stamp(&config, RED, 0.5, -1.0).unwrap_err(),
            StampError::InvalidHardness(-1.0)
        );
    }

    #[test]
    fn test_renderer_keeps_images_on_error() {
        let mut renderer = StampRenderer::new(BrushConfig::default());
        renderer.render(RED, 1.0, 1.0).unwrap();
        let before = renderer.stamp().clone();

        assert!(renderer.render(RED, -0.5, 1.0).is_err());
        assert_eq!(renderer.stamp(), &before);
        assert_eq!(renderer.current_radius(), 10);
    }

    #[test]
    fn test_renderer_matches_pure_render() {
        let config = BrushConfig::default();
        let mut renderer = StampRenderer::new(config);
        renderer.render(RED, 0.4, 1.0).unwrap();
        renderer.render(RED, 0.7, 0.5).unwrap();

        let fresh = render_stamp(&config, RED, 0.7, 0.5).unwrap();
        assert_eq!(renderer.stamp(), &fresh);
        assert_eq!(renderer.current_radius(), 7);
    }
}
