//! Animated polar roses on a shared surface, driven by a parallel frame pipeline.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: a seeded [`CurveGenerator`] produces validated [`CurveSpec`]s once per session
//! 2. **Compute**: every rose's [`PointSet`] is recomputed each frame on a rayon pool
//! 3. **Draw**: a [`SurfaceWriter`] serializes each rose's draw batch onto one [`DrawSurface`]
//! 4. **Measure**: [`FrameMetrics`] samples FPS once per second and reduces to an [`FpsReport`]
//!
//! [`RoseSession`] runs the loop and owns the rotation phases. Phases are advanced on the driving
//! thread after each frame's parallel work has completed.
#![forbid(unsafe_code)]

mod foundation {
    pub(crate) mod core;
    pub(crate) mod error;
}

mod curve {
    pub(crate) mod generator;
    pub(crate) mod points;
    pub(crate) mod spec;
}

mod metrics {
    pub(crate) mod collector;
    pub(crate) mod report;
}

mod render {
    pub(crate) mod raster;
    pub(crate) mod recording;
    pub(crate) mod surface;
    pub(crate) mod writer;
}

mod session {
    pub(crate) mod driver;
}

pub use curve::generator::{CurveGenerator, GeneratorOpts};
pub use curve::points::{PointSet, compute_all, compute_points, compute_points_par, sample_point};
pub use curve::spec::{
    CurveSpec, DEFAULT_K, DEFAULT_ROTATION_SPEED, DEFAULT_SCALE, FieldCorrection, MIN_SAMPLE_COUNT,
    PETAL_OPTIONS, ROTATION_SPEED_MAX, ROTATION_SPEED_MIN, RawCurveParams, SCALE_MAX, SCALE_MIN,
    sample_count_for_k,
};
pub use foundation::core::{Canvas, Rgba8, ScreenPoint};
pub use foundation::error::{RoseError, RoseResult};
pub use metrics::collector::{FrameMetrics, MetricsOpts, MetricsState};
pub use metrics::report::{FpsReport, REPORT_SEPARATOR, render_report, write_report};
pub use render::raster::RasterSurface;
pub use render::recording::{DrawCall, RecordingSurface};
pub use render::surface::{Clock, DrawSurface, ManualClock, SystemClock};
pub use render::writer::{DrawMode, DrawStrategy, SurfaceWriter};
pub use session::driver::{
    DEFAULT_REPORT_PATH, DEFAULT_TITLE, DriverState, RoseSession, SessionOpts, SessionOutcome,
    StopReason,
};
