use crate::foundation::error::{RoseError, RoseResult};
use crate::metrics::report::{FpsReport, round_to_hundredths};

/// Options for [`FrameMetrics`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricsOpts {
    /// Length of one sampling window in milliseconds.
    pub window_ms: u64,
    /// Divides the raw frames-per-second before rounding. Off by default; only useful when a
    /// driver's frame unit is sub-sampled.
    pub calibration_divisor: Option<f64>,
}

impl Default for MetricsOpts {
    fn default() -> Self {
        Self {
            window_ms: 1000,
            calibration_divisor: None,
        }
    }
}

impl MetricsOpts {
    pub fn validate(&self) -> RoseResult<()> {
        if self.window_ms == 0 {
            return Err(RoseError::validation("metrics window_ms must be > 0"));
        }
        if let Some(d) = self.calibration_divisor
            && !(d.is_finite() && d > 0.0)
        {
            return Err(RoseError::validation(
                "metrics calibration_divisor must be finite and > 0 when set",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricsState {
    /// Counting frames in the current window.
    Accumulating,
    /// The last recorded frame closed a window and appended a sample.
    WindowClosed,
    /// History has been reduced; further frames are ignored.
    Finalized,
}

/// Online frame-rate sampler: one FPS sample per elapsed window, reduced at shutdown.
#[derive(Clone, Debug)]
pub struct FrameMetrics {
    opts: MetricsOpts,
    state: MetricsState,
    frame_count: u64,
    window_start_ms: u64,
    history: Vec<f64>,
}

impl FrameMetrics {
    pub fn new(opts: MetricsOpts, start_ms: u64) -> Self {
        Self {
            opts,
            state: MetricsState::Accumulating,
            frame_count: 0,
            window_start_ms: start_ms,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> MetricsState {
        self.state
    }

    /// FPS samples in the order they were taken.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Frames counted in the still-open window.
    pub fn pending_frames(&self) -> u64 {
        self.frame_count
    }

    /// Account one completed frame at `now_ms`. Returns the new sample when this frame closes the
    /// window.
    pub fn record_frame(&mut self, now_ms: u64) -> Option<f64> {
        match self.state {
            MetricsState::Finalized => return None,
            MetricsState::WindowClosed => self.state = MetricsState::Accumulating,
            MetricsState::Accumulating => {}
        }

        self.frame_count += 1;
        let elapsed_ms = now_ms.saturating_sub(self.window_start_ms);
        if elapsed_ms == 0 || elapsed_ms < self.opts.window_ms {
            return None;
        }

        let mut fps = self.frame_count as f64 / (elapsed_ms as f64 / 1000.0);
        if let Some(divisor) = self.opts.calibration_divisor {
            fps /= divisor;
        }
        let fps = round_to_hundredths(fps);

        self.history.push(fps);
        self.frame_count = 0;
        self.window_start_ms = now_ms;
        self.state = MetricsState::WindowClosed;
        Some(fps)
    }

    /// Reduce the history to a report. `None` when no window ever closed.
    ///
    /// Idempotent: once finalized, later calls return the same reduction.
    pub fn finalize(&mut self) -> Option<FpsReport> {
        self.state = MetricsState::Finalized;
        FpsReport::from_samples(&self.history)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/metrics/collector.rs"]
mod tests;
