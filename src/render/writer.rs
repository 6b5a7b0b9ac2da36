use std::sync::{Mutex, MutexGuard};

use crate::curve::points::PointSet;
use crate::curve::spec::CurveSpec;
use crate::foundation::core::ScreenPoint;
use crate::render::surface::DrawSurface;

/// How a rose's [`PointSet`] is turned into primitive draw calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    /// One point per sample.
    #[default]
    Points,
    /// A line from each sample to the next, closing back to the first.
    Contour,
    /// Per sample: origin to the sample, origin to the next sample, then sample to next sample.
    FilledPetals,
}

/// Where point computation and drawing meet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawStrategy {
    /// Compute every point set in parallel, then draw them all on the control thread.
    #[default]
    ComputeThenDraw,
    /// Compute and draw on the workers; each curve's draw batch holds the surface lock.
    LockedPerCurve,
}

/// Serializes draw calls onto one shared surface.
///
/// A curve's whole batch of primitive calls runs under a single lock acquisition, so batches from
/// different curves never interleave and calls within a batch keep sample-index order.
#[derive(Debug)]
pub struct SurfaceWriter<S> {
    surface: Mutex<S>,
}

impl<S: DrawSurface> SurfaceWriter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Mutex::new(surface),
        }
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        // A panic mid-batch leaves at worst a partially drawn frame; keep using the surface.
        match self.surface.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Run `f` with exclusive access to the surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Exclusive access without locking, for the thread that owns the writer.
    pub fn surface_mut(&mut self) -> &mut S {
        match self.surface.get_mut() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn into_inner(self) -> S {
        match self.surface.into_inner() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Draw one rose in the requested mode as a single exclusive batch.
    pub fn draw(&self, mode: DrawMode, spec: &CurveSpec, points: &PointSet) {
        match mode {
            DrawMode::Points => self.draw_points(spec, points),
            DrawMode::Contour => self.draw_contour(spec, points),
            DrawMode::FilledPetals => self.draw_filled_petals(spec, points),
        }
    }

    pub fn draw_points(&self, spec: &CurveSpec, points: &PointSet) {
        let mut s = self.lock();
        s.set_draw_color(spec.color());
        for p in points.points() {
            s.draw_point(p.x, p.y);
        }
    }

    pub fn draw_contour(&self, spec: &CurveSpec, points: &PointSet) {
        let mut s = self.lock();
        s.set_draw_color(spec.color());
        for (a, b) in closed_segments(points.points()) {
            s.draw_line(a.x, a.y, b.x, b.y);
        }
    }

    pub fn draw_filled_petals(&self, spec: &CurveSpec, points: &PointSet) {
        let c = spec.origin();
        let mut s = self.lock();
        s.set_draw_color(spec.color());
        for (a, b) in closed_segments(points.points()) {
            s.draw_line(c.x, c.y, a.x, a.y);
            s.draw_line(c.x, c.y, b.x, b.y);
            s.draw_line(a.x, a.y, b.x, b.y);
        }
    }
}

/// `(p[i], p[i + 1])` for every index, with the last sample paired back to the first.
fn closed_segments(
    points: &[ScreenPoint],
) -> impl Iterator<Item = (ScreenPoint, ScreenPoint)> + '_ {
    let n = if points.len() < 2 { 0 } else { points.len() };
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

#[cfg(test)]
#[path = "../../tests/unit/render/writer.rs"]
mod tests;
