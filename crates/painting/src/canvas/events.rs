//! Pointer event handling for the canvas

use glam::Affine2;
use tracing::{debug, trace};

use crate::input::{InputAction, PointerEvent, transform_samples};
use crate::surface::DrawingSurface;
use crate::types::Sample;
use crate::validation::StampError;

use super::InkCanvas;

impl InkCanvas {
    /// Apply one pointer event
    ///
    /// Returns whether the event was consumed. A rejected sample (see
    /// [`StampError`]) leaves the layer untouched; on `Up` the stroke is ended
    /// regardless, since the pointer has been lifted.
    pub fn handle_event(&mut self, event: &PointerEvent) -> Result<bool, StampError> {
        let key = event.device_key();
        self.active_device = Some(key);
        self.router.resolve_brush(key);

        if self.move_viewport(event) {
            return Ok(true);
        }

        match event.action {
            InputAction::Down | InputAction::Move => {
                let samples = self.surface_samples(event);
                let brush = self.router.resolve_brush(key);
                brush.extend_stroke(&mut self.layer, &samples)?;
                let current = self.surface_point(event.current_sample());
                self.redraw_cursor(event, current)?;
            }
            InputAction::Up => {
                let samples = self.surface_samples(event);
                let brush = self.router.resolve_brush(key);
                let result = brush.extend_stroke(&mut self.layer, &samples);
                brush.end_stroke();
                self.clear_overlay();
                debug!("Stroke ended for {:?}", key);
                result?;
            }
            InputAction::Cancel => {
                self.router.resolve_brush(key).end_stroke();
                self.clear_overlay();
                debug!("Stroke cancelled for {:?}", key);
            }
            InputAction::HoverEnter | InputAction::HoverMove => {
                let current = self.surface_point(event.current_sample());
                self.redraw_cursor(event, current)?;
            }
            InputAction::HoverExit => self.clear_overlay(),
        }

        trace!("handled {:?} from {:?}", event.action, key);
        Ok(true)
    }

    /// Drag the view while a non-primary button is held
    fn move_viewport(&mut self, event: &PointerEvent) -> bool {
        if !event.buttons.any_non_primary() {
            self.grab = None;
            return false;
        }

        let position = event.current.position;
        if let Some(grab) = self.grab {
            self.set_surface_to_view(
                Affine2::from_translation(position - grab) * self.surface_to_view,
            );
        }
        self.grab = Some(position);
        true
    }

    fn surface_samples(&self, event: &PointerEvent) -> Vec<Sample> {
        let mut samples = event.samples();
        transform_samples(&mut samples, &self.view_to_surface);
        samples
    }

    fn surface_point(&self, sample: Sample) -> Sample {
        sample.with_position(self.view_to_surface.transform_point2(sample.position()))
    }

    fn redraw_cursor(&mut self, event: &PointerEvent, sample: Sample) -> Result<(), StampError> {
        self.overlay.clear_all();
        self.overlay_dirty = true;
        self.router
            .resolve_brush(event.device_key())
            .draw_outline_preview(&mut self.overlay, &sample)
    }

    fn clear_overlay(&mut self) {
        self.overlay.clear_all();
        self.overlay_dirty = true;
    }
}
