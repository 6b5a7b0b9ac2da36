use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{RoseError, RoseResult};
use crate::render::surface::DrawSurface;

/// Headless software surface backed by an RGBA8 framebuffer.
///
/// Pixels outside the canvas are clipped. Colors overwrite the destination (no blending).
pub struct RasterSurface {
    pixels: image::RgbaImage,
    color: image::Rgba<u8>,
    presents: u64,
    quit_after_presents: Option<u64>,
    title: String,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .field("presents", &self.presents)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> RoseResult<Self> {
        let canvas = Canvas::new(width, height)
            .map_err(|e| RoseError::surface(format!("cannot create raster surface: {e}")))?;
        tracing::debug!(width, height, "raster surface acquired");
        Ok(Self {
            pixels: image::RgbaImage::new(canvas.width, canvas.height),
            color: image::Rgba([255, 255, 255, 255]),
            presents: 0,
            quit_after_presents: None,
            title: String::new(),
        })
    }

    /// Report a quit request after `presents` frames, like a user closing the window.
    pub fn with_quit_after(mut self, presents: Option<u64>) -> Self {
        self.quit_after_presents = presents;
        self
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| Rgba8::new(p[0], p[1], p[2], p[3]))
    }

    /// Write the current framebuffer as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> RoseResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create snapshot dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            self.pixels.as_raw(),
            self.pixels.width(),
            self.pixels.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    fn plot(&mut self, x: i32, y: i32) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < self.pixels.width() && y < self.pixels.height() {
            self.pixels.put_pixel(x, y, self.color);
        }
    }
}

impl DrawSurface for RasterSurface {
    fn clear(&mut self, color: Rgba8) {
        let fill = image::Rgba(color.to_array());
        for p in self.pixels.pixels_mut() {
            *p = fill;
        }
    }

    fn set_draw_color(&mut self, color: Rgba8) {
        self.color = image::Rgba(color.to_array());
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.plot(x, y);
    }

    // Integer Bresenham, endpoints inclusive.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let (mut x, mut y) = (i64::from(x1), i64::from(y1));
        let (x2, y2) = (i64::from(x2), i64::from(y2));
        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x as i32, y as i32);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn present(&mut self) -> RoseResult<()> {
        self.presents += 1;
        Ok(())
    }

    fn poll_quit(&mut self) -> bool {
        self.quit_after_presents
            .is_some_and(|limit| self.presents >= limit)
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }
}

impl Drop for RasterSurface {
    fn drop(&mut self) {
        tracing::debug!(presents = self.presents, "raster surface released");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
