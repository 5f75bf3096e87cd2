//! Stroke resampling
//!
//! Turns a segment between two samples into the positions where stamps are
//! placed. The walk always starts exactly at `a` and advances by
//! `2 * radius * spacing` pixels until it reaches or passes `b`; `b`
//! itself is only produced when it falls on a step boundary. The next segment
//! of the stroke starts at `b`, so consecutive segments still join up.

use crate::types::Sample;

/// Lazy walk along one segment, consumed once
///
/// The step radius can be changed between items with [`Resample::set_step_radius`],
/// which lets the brush space stamps by the radius it just rendered.
#[derive(Debug, Clone)]
pub struct Resample {
    a: Sample,
    b: Sample,
    dist: f32,
    spacing: f32,
    step_radius: f32,
    travelled: f32,
    started: bool,
    done: bool,
}

impl Resample {
    /// `spacing` is a fraction of the stamp diameter
    pub fn new(a: Sample, b: Sample, step_radius: f32, spacing: f32) -> Self {
        Self {
            dist: Sample::distance(&a, &b),
            a,
            b,
            spacing,
            step_radius,
            travelled: 0.0,
            started: false,
            done: false,
        }
    }

    /// Radius used for the next advance
    pub fn set_step_radius(&mut self, step_radius: f32) {
        self.step_radius = step_radius;
    }

    /// Pixels advanced per item at the current radius
    #[inline]
    pub fn step(&self) -> f32 {
        2.0 * self.step_radius * self.spacing
    }

    /// Length of the segment
    #[inline]
    pub fn distance(&self) -> f32 {
        self.dist
    }
}

impl Iterator for Resample {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            // A segment of unbounded length has no reachable end
            self.done = !self.dist.is_finite();
            return Some(self.a);
        }

        let step = self.step();
        // A non-positive (or NaN) step would never reach `b`
        if !(step > 0.0) {
            self.done = true;
            return None;
        }
        self.travelled += step;
        if self.travelled >= self.dist {
            self.done = true;
            return None;
        }

        Some(Sample::interpolate(&self.a, &self.b, self.travelled / self.dist))
    }
}

/// Stamp positions between `a` and `b` at a fixed step radius
pub fn resample(a: Sample, b: Sample, step_radius: f32, spacing: f32) -> Resample {
    Resample::new(a, b, step_radius, spacing)
}
