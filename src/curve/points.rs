use rayon::prelude::*;

use crate::curve::spec::CurveSpec;
use crate::foundation::core::ScreenPoint;

/// Per-frame screen-space samples of one rose, in ascending sample-index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<ScreenPoint>,
}

impl PointSet {
    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<ScreenPoint> {
        self.points
    }
}

/// Screen position of sample `i` of `spec` at rotation `phase`.
///
/// Coordinates are truncated toward zero, then offset by the origin.
pub fn sample_point(spec: &CurveSpec, phase: f32, i: usize) -> ScreenPoint {
    let step = std::f32::consts::TAU / spec.total_angular_samples() as f32;
    let theta = (i as f32 + phase) * step;
    let r = spec.scale() * (spec.k() as f32 * theta).sin();
    let origin = spec.origin();
    ScreenPoint::new(
        (r * (theta + phase).cos()) as i32 + origin.x,
        (r * (theta + phase).sin()) as i32 + origin.y,
    )
}

/// Compute the full point set on the calling thread.
pub fn compute_points(spec: &CurveSpec, phase: f32) -> PointSet {
    let points = (0..spec.sample_count())
        .map(|i| sample_point(spec, phase, i))
        .collect();
    PointSet { points }
}

/// Compute the full point set with the sample indices split across the current rayon pool.
///
/// Indexed collection keeps the output in ascending index order regardless of which worker
/// produced each sample.
pub fn compute_points_par(spec: &CurveSpec, phase: f32) -> PointSet {
    let points = (0..spec.sample_count())
        .into_par_iter()
        .map(|i| sample_point(spec, phase, i))
        .collect();
    PointSet { points }
}

/// Compute one point set per curve instance in parallel; `phases[i]` pairs with `specs[i]`.
///
/// Output order matches `specs`. Phases are only read here.
pub fn compute_all(specs: &[CurveSpec], phases: &[f32], parallel_indices: bool) -> Vec<PointSet> {
    debug_assert_eq!(specs.len(), phases.len());
    specs
        .par_iter()
        .zip(phases.par_iter())
        .map(|(spec, &phase)| {
            if parallel_indices {
                compute_points_par(spec, phase)
            } else {
                compute_points(spec, phase)
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/curve/points.rs"]
mod tests;
