use std::path::PathBuf;
use std::time::Duration;

use rayon::prelude::*;

use crate::curve::points::{compute_all, compute_points, compute_points_par};
use crate::curve::spec::CurveSpec;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{RoseError, RoseResult};
use crate::metrics::collector::{FrameMetrics, MetricsOpts};
use crate::metrics::report::{FpsReport, write_report};
use crate::render::surface::{Clock, DrawSurface, SystemClock};
use crate::render::writer::{DrawMode, DrawStrategy, SurfaceWriter};

pub const DEFAULT_TITLE: &str = "Curvas de Rosa Polar Paralelo";
pub const DEFAULT_REPORT_PATH: &str = "reports/par_report.txt";

/// Options controlling a [`RoseSession`].
#[derive(Clone, Debug)]
pub struct SessionOpts {
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Also split each curve's sample indices across workers.
    pub parallel_indices: bool,
    pub strategy: DrawStrategy,
    pub draw_mode: DrawMode,
    /// Surface clear color at the start of every frame.
    pub background: Rgba8,
    /// Stop once this much time has elapsed, checked between frames.
    pub max_duration: Option<Duration>,
    /// Stop after this many frames, checked between frames.
    pub max_frames: Option<u64>,
    /// First report line and window-title prefix.
    pub title: String,
    /// Where the text report goes. `None` disables it.
    pub report_path: Option<PathBuf>,
    pub metrics: MetricsOpts,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            threads: None,
            parallel_indices: true,
            strategy: DrawStrategy::default(),
            draw_mode: DrawMode::default(),
            background: Rgba8::BLACK,
            max_duration: None,
            max_frames: None,
            title: DEFAULT_TITLE.to_owned(),
            report_path: Some(PathBuf::from(DEFAULT_REPORT_PATH)),
            metrics: MetricsOpts::default(),
        }
    }
}

impl SessionOpts {
    pub fn validate(&self) -> RoseResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(RoseError::validation(
                "session 'threads' must be >= 1 when set",
            ));
        }
        self.metrics.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Terminating,
    Done,
}

/// Why a session left the running state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    QuitSignal,
    DurationCap,
    FrameCap,
}

/// Result of a finished session.
#[derive(Clone, Debug)]
pub struct SessionOutcome {
    /// Frames rendered and presented.
    pub frames: u64,
    pub stop_reason: StopReason,
    /// FPS samples in the order they were taken.
    pub samples: Vec<f64>,
    /// `None` when no sampling window closed.
    pub report: Option<FpsReport>,
    /// Set only when the text report was actually written.
    pub report_path: Option<PathBuf>,
}

/// Per-frame animation driver over a set of roses and one shared surface.
///
/// Phases are owned here and advanced on the calling thread only after every point set of the
/// frame has been computed.
pub struct RoseSession<S, C = SystemClock> {
    specs: Vec<CurveSpec>,
    phases: Vec<f32>,
    writer: SurfaceWriter<S>,
    clock: C,
    opts: SessionOpts,
    pool: rayon::ThreadPool,
    state: DriverState,
    frames: u64,
}

impl<S, C> std::fmt::Debug for RoseSession<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoseSession")
            .field("curves", &self.specs.len())
            .field("state", &self.state)
            .field("frames", &self.frames)
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

impl<S: DrawSurface + Send, C: Clock> RoseSession<S, C> {
    pub fn new(
        specs: Vec<CurveSpec>,
        surface: S,
        clock: C,
        opts: SessionOpts,
    ) -> RoseResult<Self> {
        if specs.is_empty() {
            return Err(RoseError::validation("curve count must be > 0"));
        }
        opts.validate()?;
        let pool = build_thread_pool(opts.threads)?;
        tracing::debug!(
            curves = specs.len(),
            threads = pool.current_num_threads(),
            "session created"
        );

        Ok(Self {
            phases: vec![0.0; specs.len()],
            specs,
            writer: SurfaceWriter::new(surface),
            clock,
            opts,
            pool,
            state: DriverState::Running,
            frames: 0,
        })
    }

    pub fn specs(&self) -> &[CurveSpec] {
        &self.specs
    }

    /// Current rotation phase per curve, index-aligned with [`Self::specs`].
    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.writer.surface_mut()
    }

    /// Release the session and hand back the surface.
    pub fn into_surface(self) -> S {
        self.writer.into_inner()
    }

    /// Drive frames until a quit signal or a cap, then finalize metrics and write the report.
    ///
    /// A report write failure is logged and does not fail the session.
    #[tracing::instrument(skip(self), fields(curves = self.specs.len()))]
    pub fn run(&mut self) -> RoseResult<SessionOutcome> {
        if self.state != DriverState::Running {
            return Err(RoseError::validation("session has already run"));
        }

        let start_ms = self.clock.now_millis();
        let mut metrics = FrameMetrics::new(self.opts.metrics, start_ms);
        let stop_reason = loop {
            if let Some(reason) = self.poll_stop(start_ms) {
                break reason;
            }

            self.render_frame()?;
            self.frames += 1;

            if let Some(fps) = metrics.record_frame(self.clock.now_millis()) {
                tracing::info!(fps, frames = self.frames, "fps window closed");
                let title = format!("{} - FPS: {fps:.2}", self.opts.title);
                self.writer.surface_mut().set_title(&title);
            }
        };
        self.state = DriverState::Terminating;

        let report = metrics.finalize();
        let report_path = match (&report, &self.opts.report_path) {
            (Some(r), Some(path)) => {
                match write_report(path, &self.opts.title, self.specs.len(), r) {
                    Ok(()) => {
                        tracing::info!(path = %path.display(), "metrics report written");
                        Some(path.clone())
                    }
                    Err(err) => {
                        tracing::error!(%err, "could not save fps report");
                        None
                    }
                }
            }
            _ => None,
        };

        self.state = DriverState::Done;
        tracing::debug!(frames = self.frames, ?stop_reason, "session finished");

        Ok(SessionOutcome {
            frames: self.frames,
            stop_reason,
            samples: metrics.history().to_vec(),
            report,
            report_path,
        })
    }

    fn poll_stop(&mut self, start_ms: u64) -> Option<StopReason> {
        if self.writer.surface_mut().poll_quit() {
            return Some(StopReason::QuitSignal);
        }
        if let Some(cap) = self.opts.max_duration {
            let elapsed = self.clock.now_millis().saturating_sub(start_ms);
            if u128::from(elapsed) > cap.as_millis() {
                return Some(StopReason::DurationCap);
            }
        }
        if let Some(limit) = self.opts.max_frames
            && self.frames >= limit
        {
            return Some(StopReason::FrameCap);
        }
        None
    }

    /// Clear, compute, draw and present one frame, then advance every phase.
    pub(crate) fn render_frame(&mut self) -> RoseResult<()> {
        let mode = self.opts.draw_mode;
        let parallel_indices = self.opts.parallel_indices;
        self.writer.surface_mut().clear(self.opts.background);

        match self.opts.strategy {
            DrawStrategy::ComputeThenDraw => {
                let sets = self
                    .pool
                    .install(|| compute_all(&self.specs, &self.phases, parallel_indices));
                for (spec, set) in self.specs.iter().zip(&sets) {
                    self.writer.draw(mode, spec, set);
                }
            }
            DrawStrategy::LockedPerCurve => {
                let writer = &self.writer;
                let specs = &self.specs;
                let phases = &self.phases;
                self.pool.install(|| {
                    specs
                        .par_iter()
                        .zip(phases.par_iter())
                        .for_each(|(spec, &phase)| {
                            let set = if parallel_indices {
                                compute_points_par(spec, phase)
                            } else {
                                compute_points(spec, phase)
                            };
                            writer.draw(mode, spec, &set);
                        });
                });
            }
        }

        // Every read of the old phases has completed once `install` returns.
        for (phase, spec) in self.phases.iter_mut().zip(&self.specs) {
            *phase += spec.rotation_speed();
        }

        self.writer.surface_mut().present()
    }
}

fn build_thread_pool(threads: Option<usize>) -> RoseResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("rose-worker-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RoseError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/driver.rs"]
mod tests;
