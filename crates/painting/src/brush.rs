//! Stamp brush
//!
//! A brush stamps its tip image along the path of a stroke. Stamps are spaced
//! by the resampler, and the tip is re-rendered for every stamp so pressure
//! changes show up within a single stroke. The last sample of the stroke is
//! kept between calls so strokes delivered over several events stay
//! connected until [`Brush::end_stroke`] is called.

use inkstamp_config::BrushConfig;
use tracing::{debug, trace, warn};

use crate::constants::{BLACK, STAMP_HARDNESS};
use crate::resample::Resample;
use crate::stamp::StampRenderer;
use crate::surface::DrawingSurface;
use crate::types::Sample;
use crate::validation::{
    StampError, is_unit_fraction, pressure_to_radius_fraction, validate_position,
};

pub struct Brush {
    renderer: StampRenderer,
    /// Foreground color for subsequent stamps
    color: [f32; 4],
    /// Last sample of the stroke in progress (None between strokes)
    last: Option<Sample>,
    /// Pixel radius of the dot stamped for `last` when the stroke began; the
    /// next segment skips that origin and steps away from it at this radius
    origin_stamped: Option<u32>,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(BrushConfig::default())
    }
}

impl Brush {
    pub fn new(config: BrushConfig) -> Self {
        Self {
            renderer: StampRenderer::new(config),
            color: BLACK,
            last: None,
            origin_stamped: None,
        }
    }

    pub fn config(&self) -> &BrushConfig {
        self.renderer.config()
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Change the color of subsequent stamps
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    /// Radius in pixels of the most recently rendered stamp
    pub fn current_radius(&self) -> u32 {
        self.renderer.current_radius()
    }

    /// Last sample of the stroke in progress
    pub fn last_sample(&self) -> Option<&Sample> {
        self.last.as_ref()
    }

    pub fn is_stroking(&self) -> bool {
        self.last.is_some()
    }

    /// Break continuity: the next `extend_stroke` starts a new stroke
    ///
    /// Safe to call at any time, including between strokes.
    pub fn end_stroke(&mut self) {
        if self.last.take().is_some() {
            debug!("Brush::end_stroke");
        }
        self.origin_stamped = None;
    }

    /// Continue the stroke through `samples`, oldest first
    ///
    /// Connects from the previous call's last sample (if a stroke is in
    /// progress), then through each consecutive pair. A new stroke that
    /// starts with a single sample stamps that sample as a dot.
    ///
    /// Every sample is checked before anything is drawn; on error neither the
    /// surface nor the stroke state changes. Returns the number of stamps.
    pub fn extend_stroke<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        samples: &[Sample],
    ) -> Result<usize, StampError> {
        let (Some(first), Some(newest)) = (samples.first(), samples.last()) else {
            return Ok(0);
        };
        for sample in samples {
            check_sample(sample)?;
        }

        let mut stamps = 0;
        match self.last {
            Some(last) => {
                let origin = self.origin_stamped.take();
                stamps += self.stroke_segment(surface, last, *first, origin)?;
            }
            None if samples.len() == 1 => {
                debug!("Brush: stroke begins with dot at ({:.1}, {:.1})", first.x, first.y);
                self.stamp(surface, first)?;
                self.origin_stamped = Some(self.current_radius());
                stamps += 1;
            }
            None => {
                debug!("Brush: stroke begins at ({:.1}, {:.1})", first.x, first.y);
            }
        }

        for pair in samples.windows(2) {
            stamps += self.stroke_segment(surface, pair[0], pair[1], None)?;
        }

        self.last = Some(*newest);
        trace!(
            "Brush::extend_stroke: {} samples -> {} stamps",
            samples.len(),
            stamps
        );
        Ok(stamps)
    }

    /// Stamp a single point without touching the stroke in progress
    pub fn draw_point<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        sample: &Sample,
    ) -> Result<(), StampError> {
        check_sample(sample)?;
        self.stamp(surface, sample)
    }

    /// Composite the outline cursor centered on `sample`
    pub fn draw_outline_preview<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        sample: &Sample,
    ) -> Result<(), StampError> {
        let radius = pressure_to_radius_fraction(sample.pressure);
        let stamp = self.renderer.render(self.color, radius, STAMP_HARDNESS)?;
        let half = stamp.size() as f32 / 2.0;
        surface.composite_image(&stamp.outline, sample.x - half, sample.y - half);
        Ok(())
    }

    fn stroke_segment<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        a: Sample,
        b: Sample,
        stamped_origin: Option<u32>,
    ) -> Result<usize, StampError> {
        let spacing = self.config().spacing_fraction();
        let mut walk = Resample::new(a, b, self.current_radius() as f32, spacing);
        let mut stamps = 0;

        if let Some(radius) = stamped_origin {
            if walk.next().is_some() {
                walk.set_step_radius(radius as f32);
            }
        }

        while let Some(sample) = walk.next() {
            self.stamp(surface, &sample)?;
            stamps += 1;
            // Space the next stamp by the size of the one just placed
            walk.set_step_radius(self.current_radius() as f32);
        }
        Ok(stamps)
    }

    fn stamp<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        sample: &Sample,
    ) -> Result<(), StampError> {
        let radius = pressure_to_radius_fraction(sample.pressure);
        let stamp = self.renderer.render(self.color, radius, STAMP_HARDNESS)?;
        if stamp.radius == 0 {
            return Ok(());
        }
        let half = stamp.size() as f32 / 2.0;
        let region = surface.composite_image(&stamp.fill, sample.x - half, sample.y - half);
        trace!(
            "  stamp: pos=({:.1}, {:.1}), radius={}px -> {:?}",
            sample.x, sample.y, stamp.radius, region
        );
        Ok(())
    }
}

fn check_sample(sample: &Sample) -> Result<(), StampError> {
    if let Err(err) = validate_position(sample.x, sample.y) {
        warn!("Brush: rejecting sample at ({}, {})", sample.x, sample.y);
        return Err(err);
    }
    let radius = pressure_to_radius_fraction(sample.pressure);
    if is_unit_fraction(radius) {
        Ok(())
    } else {
        warn!("Brush: rejecting sample with pressure {}", sample.pressure);
        Err(StampError::InvalidRadius(radius))
    }
}
