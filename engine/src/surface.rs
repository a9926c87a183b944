use crate::console::{CONSOLE_COLS, CONSOLE_ROWS};
use crate::graphics::{CELL_H, CELL_W};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel size of a console raster with `rows` x `cols` cells.
    pub const fn for_console(rows: u16, cols: u16) -> Self {
        Self {
            width: cols as u32 * CELL_W,
            height: rows as u32 * CELL_H,
        }
    }

    pub const fn default_console() -> Self {
        Self::for_console(CONSOLE_ROWS, CONSOLE_COLS)
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    pub fn scaled(self, factor: u32) -> Self {
        let factor = factor.max(1);
        Self {
            width: self.width.saturating_mul(factor),
            height: self.height.saturating_mul(factor),
        }
    }
}

/// In-memory RGBA target for headless rendering and tests.
#[derive(Debug, Clone)]
pub struct RgbaBuffer {
    size: SurfaceSize,
    buf: Vec<u8>,
}

impl RgbaBuffer {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    pub fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = ((y * self.size.width + x) * 4) as usize;
        let px = self.buf.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
