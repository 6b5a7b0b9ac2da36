use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::foundation::core::Rgba8;
use crate::foundation::error::RoseResult;

/// The single shared 2D drawing target.
///
/// Implementations are not expected to tolerate concurrent callers; the frame pipeline funnels
/// every mutating call through [`crate::SurfaceWriter`].
pub trait DrawSurface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgba8);
    /// Set the color used by subsequent point and line calls.
    fn set_draw_color(&mut self, color: Rgba8);
    fn draw_point(&mut self, x: i32, y: i32);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    /// Publish the completed frame.
    fn present(&mut self) -> RoseResult<()>;

    /// Whether the user asked to quit. Polled once per frame.
    fn poll_quit(&mut self) -> bool {
        false
    }

    /// Update a user-visible title, e.g. a window caption showing the current FPS.
    fn set_title(&mut self, _title: &str) {}
}

/// Millisecond time source used for frame cadence and the session cap.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall clock measuring milliseconds since construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Manually driven clock for tests and offline runs. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
    auto_step: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock that advances by `step_ms` every time it is read.
    pub fn auto_stepping(step_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(0)),
            auto_step: step_ms,
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.fetch_add(self.auto_step, Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
