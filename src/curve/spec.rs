use crate::foundation::core::{Canvas, Rgba8, ScreenPoint};

/// Petal factors a rose may be generated with.
pub const PETAL_OPTIONS: [u32; 7] = [3, 5, 7, 9, 11, 13, 15];
pub const DEFAULT_K: u32 = 5;

pub const SCALE_MIN: f32 = 25.0;
pub const SCALE_MAX: f32 = 100.0;
pub const DEFAULT_SCALE: f32 = 50.0;

pub const ROTATION_SPEED_MIN: f32 = 0.0001;
pub const ROTATION_SPEED_MAX: f32 = 0.0005;
pub const DEFAULT_ROTATION_SPEED: f32 = 0.0003;

pub const MIN_SAMPLE_COUNT: usize = 50;

/// Number of plotted samples for petal factor `k`: `25 * ((k - 3) / 2) + 50`.
///
/// `k` below 3 saturates to the minimum of 50 samples.
pub fn sample_count_for_k(k: u32) -> usize {
    25 * (k.saturating_sub(3) as usize / 2) + MIN_SAMPLE_COUNT
}

fn max_sample_count() -> usize {
    sample_count_for_k(PETAL_OPTIONS[PETAL_OPTIONS.len() - 1])
}

/// Unvalidated parameters as produced by a random draw (or by a caller).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawCurveParams {
    pub k: i64,
    pub scale: f32,
    pub color: Rgba8,
    pub origin: ScreenPoint,
    pub rotation_speed: f32,
}

/// A field that was out of its declared bound and replaced by its default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldCorrection {
    pub field: &'static str,
    pub value: f64,
    pub default: f64,
}

/// Immutable per-instance rose parameters.
///
/// Every bounded field is inside its declared range; use [`CurveSpec::from_raw`] to build one from
/// arbitrary input.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CurveSpec {
    k: u32,
    scale: f32,
    color: Rgba8,
    origin: ScreenPoint,
    sample_count: usize,
    total_angular_samples: usize,
    rotation_speed: f32,
}

impl CurveSpec {
    /// Validate `raw` against the declared bounds, substituting defaults for any violation.
    ///
    /// Each substitution is logged at warn level and returned so callers can observe it.
    pub fn from_raw(raw: RawCurveParams, canvas: Canvas) -> (Self, Vec<FieldCorrection>) {
        let mut corrections = Vec::new();

        let k = match u32::try_from(raw.k) {
            Ok(k) if PETAL_OPTIONS.contains(&k) => k,
            _ => {
                corrections.push(correct("k", raw.k as f64, f64::from(DEFAULT_K)));
                DEFAULT_K
            }
        };

        let mut sample_count = sample_count_for_k(k);
        if !(MIN_SAMPLE_COUNT..=max_sample_count()).contains(&sample_count) {
            let default = sample_count_for_k(DEFAULT_K);
            corrections.push(correct(
                "sample_count",
                sample_count as f64,
                default as f64,
            ));
            sample_count = default;
        }

        let scale = if raw.scale.is_finite() && (SCALE_MIN..=SCALE_MAX).contains(&raw.scale) {
            raw.scale
        } else {
            corrections.push(correct(
                "scale",
                f64::from(raw.scale),
                f64::from(DEFAULT_SCALE),
            ));
            DEFAULT_SCALE
        };

        let rotation_speed = if raw.rotation_speed.is_finite()
            && (ROTATION_SPEED_MIN..=ROTATION_SPEED_MAX).contains(&raw.rotation_speed)
        {
            raw.rotation_speed
        } else {
            corrections.push(correct(
                "rotation_speed",
                f64::from(raw.rotation_speed),
                f64::from(DEFAULT_ROTATION_SPEED),
            ));
            DEFAULT_ROTATION_SPEED
        };

        let origin = ScreenPoint::new(
            origin_axis("origin.x", raw.origin.x, canvas.width, &mut corrections),
            origin_axis("origin.y", raw.origin.y, canvas.height, &mut corrections),
        );

        let spec = Self {
            k,
            scale,
            color: raw.color,
            origin,
            sample_count,
            total_angular_samples: 2 * sample_count,
            rotation_speed,
        };
        (spec, corrections)
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Rgba8 {
        self.color
    }

    pub fn origin(&self) -> ScreenPoint {
        self.origin
    }

    /// Points materialized per frame.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Angular resolution of the full turn; always `2 * sample_count`.
    pub fn total_angular_samples(&self) -> usize {
        self.total_angular_samples
    }

    /// Phase advance per frame, in radians.
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }
}

/// Keep `value` when it lies in `0..extent`, otherwise move it to the middle of the axis.
fn origin_axis(
    field: &'static str,
    value: i32,
    extent: u32,
    corrections: &mut Vec<FieldCorrection>,
) -> i32 {
    if u32::try_from(value).is_ok_and(|v| v < extent) {
        return value;
    }
    let center = i32::try_from(extent / 2).unwrap_or(i32::MAX);
    corrections.push(correct(field, f64::from(value), f64::from(center)));
    center
}

fn correct(field: &'static str, value: f64, default: f64) -> FieldCorrection {
    tracing::warn!(field, value, default, "curve parameter out of range, using default");
    FieldCorrection {
        field,
        value,
        default,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/spec.rs"]
mod tests;
