use crate::foundation::core::Rgba8;
use crate::foundation::error::RoseResult;
use crate::render::surface::DrawSurface;

/// One call received by a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Rgba8),
    SetDrawColor(Rgba8),
    Point { x: i32, y: i32 },
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    Present,
}

/// Surface that records the call sequence instead of drawing. Intended for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    titles: Vec<String>,
    presents: u64,
    quit_after_presents: Option<u64>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a quit request once `presents` frames have been presented.
    pub fn quit_after(presents: u64) -> Self {
        Self {
            quit_after_presents: Some(presents),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }

    /// Calls between the `n`th and `n + 1`th present (0-based frame index).
    pub fn frame_calls(&self, n: usize) -> &[DrawCall] {
        self.calls
            .split(|c| *c == DrawCall::Present)
            .nth(n)
            .unwrap_or(&[])
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Rgba8) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn set_draw_color(&mut self, color: Rgba8) {
        self.calls.push(DrawCall::SetDrawColor(color));
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.calls.push(DrawCall::Point { x, y });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
    }

    fn present(&mut self) -> RoseResult<()> {
        self.calls.push(DrawCall::Present);
        self.presents += 1;
        Ok(())
    }

    fn poll_quit(&mut self) -> bool {
        self.quit_after_presents
            .is_some_and(|limit| self.presents >= limit)
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_owned());
    }
}
