use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::curve::spec::{
    CurveSpec, DEFAULT_K, PETAL_OPTIONS, ROTATION_SPEED_MAX, ROTATION_SPEED_MIN, RawCurveParams,
    SCALE_MAX, SCALE_MIN,
};
use crate::foundation::core::{Canvas, Rgba8, ScreenPoint};

/// Options for [`CurveGenerator`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneratorOpts {
    /// Bounds that rose origins are drawn within.
    pub canvas: Canvas,
}

/// Produces randomized, validated [`CurveSpec`]s from an explicitly owned random source.
///
/// Two generators built from the same seed yield the same sequence of specs.
#[derive(Debug)]
pub struct CurveGenerator<R = ChaCha8Rng> {
    rng: R,
    opts: GeneratorOpts,
}

impl CurveGenerator<ChaCha8Rng> {
    /// Generator backed by a ChaCha8 stream seeded from `seed`.
    pub fn seeded(seed: u64, opts: GeneratorOpts) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), opts)
    }
}

impl<R: Rng> CurveGenerator<R> {
    pub fn new(rng: R, opts: GeneratorOpts) -> Self {
        Self { rng, opts }
    }

    /// Draw and validate one spec.
    pub fn generate(&mut self) -> CurveSpec {
        let raw = self.draw_raw();
        let (spec, _corrections) = CurveSpec::from_raw(raw, self.opts.canvas);
        spec
    }

    /// Draw `count` specs in sequence from the shared random source.
    pub fn generate_many(&mut self, count: usize) -> Vec<CurveSpec> {
        (0..count).map(|_| self.generate()).collect()
    }

    fn draw_raw(&mut self) -> RawCurveParams {
        let k = PETAL_OPTIONS.choose(&mut self.rng).copied().unwrap_or(DEFAULT_K);
        let scale = self.rng.gen_range(SCALE_MIN..=SCALE_MAX);
        let color = Rgba8::opaque(self.rng.r#gen(), self.rng.r#gen(), self.rng.r#gen());
        let canvas = self.opts.canvas;
        let origin = ScreenPoint::new(
            self.rng.gen_range(0..canvas.width.max(1)) as i32,
            self.rng.gen_range(0..canvas.height.max(1)) as i32,
        );
        let rotation_speed = self.rng.gen_range(ROTATION_SPEED_MIN..=ROTATION_SPEED_MAX);

        RawCurveParams {
            k: i64::from(k),
            scale,
            color,
            origin,
            rotation_speed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/generator.rs"]
mod tests;
